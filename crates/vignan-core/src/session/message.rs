//! Conversation entry types.

use serde::{Deserialize, Serialize};

/// Fixed reply text appended when the backend call fails.
///
/// The persisted discriminator for failures is the `is_error` tag, not this
/// text; the text only exists for display.
pub const SERVICE_UNAVAILABLE_REPLY: &str =
    "The assistant service is unreachable right now. Please check that the backend is running and try again.";

/// Which side of the conversation produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The logged-in user.
    User,
    /// The assistant backend (or a synthesized failure reply).
    Bot,
}

/// A single message in the conversation log.
///
/// Entries are immutable after creation; the timestamp is assigned at
/// construction time so consecutive entries are non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// The message text.
    pub text: String,
    /// Who produced the entry.
    pub sender: Sender,
    /// Creation time (ISO 8601 format).
    pub timestamp: String,
    /// True for synthesized failure replies. Logs written before this field
    /// existed load as `false`.
    #[serde(default, rename = "isError")]
    pub is_error: bool,
}

impl ChatEntry {
    /// Creates a user entry stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp: chrono::Utc::now().to_rfc3339(),
            is_error: false,
        }
    }

    /// Creates a successful assistant reply stamped with the current time.
    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            timestamp: chrono::Utc::now().to_rfc3339(),
            is_error: false,
        }
    }

    /// Creates the synthetic bot entry that stands in for a failed call.
    pub fn failure() -> Self {
        Self {
            text: SERVICE_UNAVAILABLE_REPLY.to_string(),
            sender: Sender::Bot,
            timestamp: chrono::Utc::now().to_rfc3339(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_wire_names() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), r#""bot""#);
    }

    #[test]
    fn test_entry_round_trip() {
        let entry = ChatEntry::user("exam fee?");
        let json = serde_json::to_string(&entry).unwrap();
        let loaded: ChatEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, entry);
    }

    #[test]
    fn test_error_tag_serializes_as_is_error() {
        let entry = ChatEntry::failure();
        let value: serde_json::Value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["isError"], serde_json::Value::Bool(true));
        assert_eq!(value["sender"], "bot");
    }

    #[test]
    fn test_legacy_entry_without_error_tag_loads() {
        // Logs persisted before the isError field existed.
        let json = r#"{"text":"hi","sender":"bot","timestamp":"2024-01-01T00:00:00Z"}"#;
        let entry: ChatEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.is_error);
        assert_eq!(entry.sender, Sender::Bot);
    }
}
