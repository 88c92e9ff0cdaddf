//! Unified path management for the assistant's local files.
//!
//! Everything the client persists lives in one per-user directory:
//!
//! ```text
//! ~/.config/vignan-assistant/
//! ├── config.toml          # Backend configuration
//! ├── vignan_user.json     # Identity record
//! └── chat_history.json    # Conversation log
//! ```

use std::path::{Path, PathBuf};

use vignan_core::error::{AssistantError, Result};

const APP_DIR_NAME: &str = "vignan-assistant";

/// Resolves the well-known file locations under the app directory.
#[derive(Debug, Clone)]
pub struct AssistantPaths {
    base_dir: PathBuf,
}

impl AssistantPaths {
    /// Creates a path resolver rooted at the given directory, creating the
    /// directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Creates a path resolver at the platform config directory
    /// (e.g. `~/.config/vignan-assistant/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or
    /// created.
    pub fn default_location() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AssistantError::io("Cannot find config directory"))?;
        Self::new(config_dir.join(APP_DIR_NAME))
    }

    /// The application directory itself.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path to the identity record.
    pub fn identity_file(&self) -> PathBuf {
        self.base_dir.join("vignan_user.json")
    }

    /// Path to the conversation log.
    pub fn history_file(&self) -> PathBuf {
        self.base_dir.join("chat_history.json")
    }

    /// Path to the backend configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("app");
        let paths = AssistantPaths::new(&base).unwrap();
        assert!(paths.base_dir().exists());
    }

    #[test]
    fn test_well_known_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::new(temp_dir.path()).unwrap();
        assert!(paths.identity_file().ends_with("vignan_user.json"));
        assert!(paths.history_file().ends_with("chat_history.json"));
        assert!(paths.config_file().ends_with("config.toml"));
        assert!(paths.identity_file().starts_with(paths.base_dir()));
    }
}
