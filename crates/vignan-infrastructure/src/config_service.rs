//! Backend configuration loader.
//!
//! Reads the `[backend]` table of `config.toml`. Unlike user history,
//! configuration is operator input: an absent file yields the defaults, but
//! a malformed file is reported instead of silently defaulted.

use serde::Deserialize;
use vignan_core::config::BackendConfig;
use vignan_core::error::{AssistantError, Result};

use crate::paths::AssistantPaths;

#[derive(Deserialize, Default)]
struct ConfigRoot {
    #[serde(default)]
    backend: Option<BackendConfig>,
}

/// Loads the backend configuration, falling back to defaults when the file
/// does not exist.
///
/// # Errors
///
/// Returns a `Config` error if the file exists but cannot be read or
/// parsed.
pub fn load_backend_config(paths: &AssistantPaths) -> Result<BackendConfig> {
    let path = paths.config_file();
    if !path.exists() {
        return Ok(BackendConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| AssistantError::config(format!("Failed to read {:?}: {}", path, e)))?;
    let root: ConfigRoot = toml::from_str(&content)
        .map_err(|e| AssistantError::config(format!("Failed to parse {:?}: {}", path, e)))?;

    Ok(root.backend.unwrap_or_default())
}
