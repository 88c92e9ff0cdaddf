//! Conversation store trait.
//!
//! Defines the interface for conversation log persistence.

use async_trait::async_trait;

use super::message::ChatEntry;
use crate::error::Result;

/// An abstract store for the persisted conversation log.
///
/// The log is the single source of truth for what is rendered; every
/// mutation the session manager performs is followed by a `save` of the
/// resulting full log before the mutation counts as complete, so a restart
/// never loses an entry that was already shown to the user.
///
/// # Implementation Notes
///
/// - `load` must treat absent or malformed content as an empty log, never
///   as an error.
/// - `save` replaces the whole persisted sequence atomically from the
///   caller's point of view.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Returns the persisted log, oldest first, or an empty log.
    async fn load(&self) -> Result<Vec<ChatEntry>>;

    /// Persists the full log, replacing prior content.
    async fn save(&self, entries: &[ChatEntry]) -> Result<()>;

    /// Removes the persisted log. Idempotent.
    async fn clear(&self) -> Result<()>;
}
