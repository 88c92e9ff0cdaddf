//! UserProfile domain model.

use serde::{Deserialize, Serialize};

/// A soft local identity label captured at login.
///
/// This is not an authentication primitive: no credential is verified.
/// The session manager only reads it to gate chat access and to render
/// identity chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Student display name.
    pub name: String,
    /// University registration number.
    #[serde(rename = "regNo")]
    pub reg_no: String,
}

impl UserProfile {
    /// Creates a profile, rejecting empty fields.
    pub fn new(name: impl Into<String>, reg_no: impl Into<String>) -> crate::error::Result<Self> {
        let name = name.into();
        let reg_no = reg_no.into();
        if name.trim().is_empty() || reg_no.trim().is_empty() {
            return Err(crate::error::AssistantError::validation(
                "Both name and registration number are required",
            ));
        }
        Ok(Self { name, reg_no })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reg_no_wire_name() {
        let profile = UserProfile::new("Asha", "21CS01").unwrap();
        let value: serde_json::Value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["name"], "Asha");
        assert_eq!(value["regNo"], "21CS01");
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(UserProfile::new("", "21CS01").is_err());
        assert!(UserProfile::new("Asha", "   ").is_err());
    }
}
