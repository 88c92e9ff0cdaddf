//! Session domain module.
//!
//! # Module Structure
//!
//! - `message`: Conversation entry types (`Sender`, `ChatEntry`)
//! - `mode`: Backend mode selector (`ChatMode`)
//! - `repository`: Store trait for conversation log persistence
//! - `manager`: The session state machine (`ChatSession`)

mod manager;
mod message;
mod mode;
mod repository;

// Re-export public API
pub use manager::{ChatSession, SubmitOutcome};
pub use message::{ChatEntry, SERVICE_UNAVAILABLE_REPLY, Sender};
pub use mode::ChatMode;
pub use repository::ConversationStore;
