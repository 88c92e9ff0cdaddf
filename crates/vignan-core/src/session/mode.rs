//! Backend mode selector.

use serde::{Deserialize, Serialize};

/// Selects which backend behavior a request asks for.
///
/// Ephemeral UI state; never persisted. Defaults to university mode, the
/// assistant's primary purpose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// Answers from the university knowledge base.
    #[default]
    University,
    /// General/web answers.
    General,
}

impl ChatMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::University => Self::General,
            Self::General => Self::University,
        }
    }

    /// Wire name sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::University => "university",
            Self::General => "general",
        }
    }

    /// Human-readable label shown in the chat header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::University => "University Database Mode",
            Self::General => "Global Search Mode",
        }
    }
}

impl std::fmt::Display for ChatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(ChatMode::University.toggled(), ChatMode::General);
        assert_eq!(ChatMode::University.toggled().toggled(), ChatMode::University);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&ChatMode::University).unwrap(),
            r#""university""#
        );
        assert_eq!(
            serde_json::to_string(&ChatMode::General).unwrap(),
            r#""general""#
        );
    }
}
