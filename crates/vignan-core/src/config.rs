use serde::{Deserialize, Serialize};

/// Default backend address (local development server).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default bound on a single request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the assistant backend.
///
/// Loaded from the `[backend]` table of `config.toml`; every field has a
/// default so a missing file yields a usable configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL of the backend, without a trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bound on a single request. `None` disables the timeout entirely.
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout_secs, Some(30));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: BackendConfig = toml::from_str(r#"base_url = "http://backend:9000""#).unwrap();
        assert_eq!(config.base_url, "http://backend:9000");
        assert_eq!(config.request_timeout_secs, Some(30));
    }
}
