use std::sync::Arc;

use super::message::ChatEntry;
use super::mode::ChatMode;
use super::repository::ConversationStore;
use crate::client::InferenceClient;
use crate::error::{AssistantError, Result};
use crate::user::{IdentityStore, UserProfile};

/// State of the one pending exchange a session may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExchangeState {
    Idle,
    Sending,
}

/// What happened to a `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The input was empty, or a request was already in flight. Nothing was
    /// appended or persisted.
    Rejected,
    /// The backend replied; the entry is the appended reply.
    Replied(ChatEntry),
    /// The backend call failed; the entry is the appended synthetic,
    /// error-tagged reply.
    Failed(ChatEntry),
}

/// The conversation session manager.
///
/// `ChatSession` owns the in-memory message log and coordinates the stores
/// and the remote client:
/// - appends the user's entry and persists it before the remote call
/// - appends the reply or a synthetic failure entry and persists again
/// - enforces the single-outstanding-request contract
/// - keeps the persisted log and the in-memory view consistent
///
/// Construction is gated on a stored profile; without one the user is not
/// authorized to chat and the presentation layer must redirect to login.
pub struct ChatSession {
    profile: UserProfile,
    entries: Vec<ChatEntry>,
    mode: ChatMode,
    state: ExchangeState,
    identity: Arc<dyn IdentityStore>,
    history: Arc<dyn ConversationStore>,
    client: Arc<dyn InferenceClient>,
}

impl ChatSession {
    /// Opens a session for the stored profile, restoring persisted history.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::NotAuthorized` if no profile is stored, or
    /// a storage error if history cannot be read.
    pub async fn resume(
        identity: Arc<dyn IdentityStore>,
        history: Arc<dyn ConversationStore>,
        client: Arc<dyn InferenceClient>,
    ) -> Result<Self> {
        let profile = identity
            .load()
            .await?
            .ok_or(AssistantError::NotAuthorized)?;
        let entries = history.load().await?;

        Ok(Self {
            profile,
            entries,
            mode: ChatMode::default(),
            state: ExchangeState::Idle,
            identity,
            history,
            client,
        })
    }

    /// Submits one message through the full send/receive lifecycle.
    ///
    /// Empty input and re-entrant submissions are rejected without touching
    /// state or storage. Otherwise the user entry is appended and persisted
    /// unconditionally, then exactly one remote attempt is made; its outcome
    /// (reply or synthetic failure entry) is appended and persisted too.
    /// The session returns to idle on every path, including persistence
    /// errors.
    ///
    /// Trimming applies only to the emptiness check: the entry stores and
    /// sends `raw_input` exactly as submitted.
    ///
    /// # Errors
    ///
    /// Returns an error only when persisting the log fails; remote failures
    /// resolve into `SubmitOutcome::Failed`.
    pub async fn submit(&mut self, raw_input: &str) -> Result<SubmitOutcome> {
        if raw_input.trim().is_empty() || self.state == ExchangeState::Sending {
            return Ok(SubmitOutcome::Rejected);
        }

        self.state = ExchangeState::Sending;
        let outcome = self.run_exchange(raw_input).await;
        // Idle is re-entered unconditionally; there is no separate
        // error-recovery path.
        self.state = ExchangeState::Idle;
        outcome
    }

    async fn run_exchange(&mut self, text: &str) -> Result<SubmitOutcome> {
        // The user entry is committed regardless of what the remote call
        // does, so a reload never loses a message the user already saw.
        self.entries.push(ChatEntry::user(text));
        self.history.save(&self.entries).await?;

        let entry = match self.client.send(text, self.mode).await {
            Ok(reply) => ChatEntry::reply(reply),
            Err(err) => {
                tracing::warn!("Inference request failed: {}", err);
                ChatEntry::failure()
            }
        };

        self.entries.push(entry.clone());
        self.history.save(&self.entries).await?;

        if entry.is_error {
            Ok(SubmitOutcome::Failed(entry))
        } else {
            Ok(SubmitOutcome::Replied(entry))
        }
    }

    /// Flips the mode between university and general.
    ///
    /// Purely local; stored data is not touched.
    pub fn toggle_mode(&mut self) -> ChatMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Empties the log and clears persisted storage.
    ///
    /// The blocking yes/no prompt lives at the presentation boundary; this
    /// method is a no-op returning `false` unless `confirmed` is true.
    pub async fn clear_history(&mut self, confirmed: bool) -> Result<bool> {
        if !confirmed {
            return Ok(false);
        }

        self.entries.clear();
        self.history.clear().await?;
        Ok(true)
    }

    /// Ends the session, clearing the identity record only.
    ///
    /// Message history is left untouched: it is not scoped to the identity
    /// in the current model.
    pub async fn logout(self) -> Result<()> {
        self.identity.clear().await
    }

    /// The profile this session was opened for.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The current mode selector.
    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    /// The in-memory conversation log, oldest first.
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// True exactly while one send is outstanding.
    pub fn is_pending(&self) -> bool {
        self.state == ExchangeState::Sending
    }
}
