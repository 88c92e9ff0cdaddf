//! JSON-file-backed conversation store.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use vignan_core::error::Result;
use vignan_core::session::{ChatEntry, ConversationStore};

use crate::paths::AssistantPaths;

/// Persists the conversation log as a single JSON array file
/// (`chat_history.json`), oldest entry first.
///
/// Each save replaces the whole file, so the persisted log always matches
/// the in-memory log of the last completed mutation. Malformed content
/// loads as an empty log.
pub struct JsonConversationStore {
    path: PathBuf,
}

impl JsonConversationStore {
    /// Creates a store writing to the history file under `paths`.
    pub fn new(paths: &AssistantPaths) -> Self {
        Self {
            path: paths.history_file(),
        }
    }
}

#[async_trait]
impl ConversationStore for JsonConversationStore {
    async fn load(&self) -> Result<Vec<ChatEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&json) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                tracing::warn!(
                    "Malformed conversation log at {:?}, starting empty: {}",
                    self.path,
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, entries: &[ChatEntry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
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
    use vignan_core::session::Sender;

    fn store_in(dir: &TempDir) -> JsonConversationStore {
        let paths = AssistantPaths::new(dir.path()).unwrap();
        JsonConversationStore::new(&paths)
    }

    fn sample_log() -> Vec<ChatEntry> {
        vec![ChatEntry::user("exam fee?"), ChatEntry::reply("₹500.")]
    }

    #[tokio::test]
    async fn test_reload_reproduces_the_log() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let log = sample_log();
        store.save(&log).await.unwrap();

        // Order, text, sender, and timestamp all survive the round trip.
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, log);
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_content_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        std::fs::write(temp_dir.path().join("chat_history.json"), "[{oops").unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_prior_content() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.save(&sample_log()).await.unwrap();
        let shorter = vec![ChatEntry::user("only this")];
        store.save(&shorter).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, shorter);
    }

    #[tokio::test]
    async fn test_clear_removes_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.save(&sample_log()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert!(!temp_dir.path().join("chat_history.json").exists());
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_legacy_log_without_error_tags_loads() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let legacy = r#"[
            {"text":"exam fee?","sender":"user","timestamp":"2024-01-01T00:00:00Z"},
            {"text":"₹500.","sender":"bot","timestamp":"2024-01-01T00:00:01Z"}
        ]"#;
        std::fs::write(temp_dir.path().join("chat_history.json"), legacy).unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].sender, Sender::User);
        assert!(!loaded[1].is_error);
    }
}
