//! Identity store trait.

use async_trait::async_trait;

use super::model::UserProfile;
use crate::error::Result;

/// An abstract store for the persisted user profile.
///
/// Written once at login, read when a chat session opens, cleared at
/// logout. Absence of a profile means "not authorized"; the session manager
/// refuses to construct without one.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Returns the persisted profile, or `None` if absent or malformed.
    async fn load(&self) -> Result<Option<UserProfile>>;

    /// Persists the profile, overwriting any prior value.
    async fn save(&self, profile: &UserProfile) -> Result<()>;

    /// Removes the persisted profile. Idempotent.
    async fn clear(&self) -> Result<()>;
}
