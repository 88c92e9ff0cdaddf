//! File-backed implementations of the assistant's store traits.
//!
//! Everything here persists to plain JSON/TOML files under one per-user
//! directory; see [`paths::AssistantPaths`] for the layout.

pub mod config_service;
pub mod conversation;
pub mod identity;
pub mod paths;

pub use config_service::load_backend_config;
pub use conversation::JsonConversationStore;
pub use identity::JsonIdentityStore;
pub use paths::AssistantPaths;
