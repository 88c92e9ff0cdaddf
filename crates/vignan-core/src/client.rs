//! Remote inference client seam.
//!
//! The session manager only knows this trait; the HTTP implementation lives
//! in the interaction crate, and tests substitute a stub.

use async_trait::async_trait;
use thiserror::Error;

use crate::session::ChatMode;

/// Any failure of the external inference call.
///
/// Expected failure classes return through this enum; nothing past the
/// client boundary panics for them. The session manager maps every variant
/// uniformly into a synthetic, error-tagged reply entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The request never produced an HTTP response (connect, IO, timeout).
    #[error("Request failed: {message}")]
    Transport { message: String, is_timeout: bool },

    /// The backend answered with a non-success status.
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),
}

impl RemoteError {
    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            is_timeout: false,
        }
    }

    /// Creates a Status error
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }
}

/// A one-shot request/response exchange with the assistant backend.
///
/// Contract: exactly one attempt, one outcome. No retry. A bounded timeout
/// is permitted in implementations and resolves the attempt as a
/// `Transport` failure.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends one message in the given mode and returns the reply text.
    async fn send(&self, message: &str, mode: ChatMode) -> std::result::Result<String, RemoteError>;
}
