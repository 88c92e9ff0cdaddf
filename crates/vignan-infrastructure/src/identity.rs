//! JSON-file-backed identity store.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use vignan_core::error::Result;
use vignan_core::user::{IdentityStore, UserProfile};

use crate::paths::AssistantPaths;

/// Persists the user profile as a single JSON file (`vignan_user.json`).
///
/// Malformed content is treated as absent, not as an error: a corrupt file
/// just sends the user back through login.
pub struct JsonIdentityStore {
    path: PathBuf,
}

impl JsonIdentityStore {
    /// Creates a store writing to the identity file under `paths`.
    pub fn new(paths: &AssistantPaths) -> Self {
        Self {
            path: paths.identity_file(),
        }
    }
}

#[async_trait]
impl IdentityStore for JsonIdentityStore {
    async fn load(&self) -> Result<Option<UserProfile>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&json) {
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                tracing::warn!(
                    "Malformed identity record at {:?}, treating as absent: {}",
                    self.path,
                    err
                );
                Ok(None)
            }
        }
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonIdentityStore {
        let paths = AssistantPaths::new(dir.path()).unwrap();
        JsonIdentityStore::new(&paths)
    }

    #[tokio::test]
    async fn test_save_and_load_profile() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let profile = UserProfile::new("Asha", "21CS01").unwrap();
        store.save(&profile).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, Some(profile));
    }

    #[tokio::test]
    async fn test_missing_file_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_malformed_content_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        std::fs::write(temp_dir.path().join("vignan_user.json"), "{not json").unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_overwrites_prior_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store
            .save(&UserProfile::new("Asha", "21CS01").unwrap())
            .await
            .unwrap();
        store
            .save(&UserProfile::new("Ravi", "21CS02").unwrap())
            .await
            .unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.name, "Ravi");
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store
            .save(&UserProfile::new("Asha", "21CS01").unwrap())
            .await
            .unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert_eq!(store.load().await.unwrap(), None);
    }
}
