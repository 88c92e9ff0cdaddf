//! Core domain crate for the Vignan Assistant chat client.
//!
//! Owns the conversation session manager (`ChatSession`), the message and
//! profile models, the store traits the manager is injected with, and the
//! remote inference client seam. Storage and HTTP implementations live in
//! the infrastructure and interaction crates.

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod user;

pub use client::{InferenceClient, RemoteError};
pub use config::BackendConfig;
pub use error::{AssistantError, Result};
pub use session::{ChatEntry, ChatMode, ChatSession, ConversationStore, Sender, SubmitOutcome};
pub use user::{IdentityStore, UserProfile};
