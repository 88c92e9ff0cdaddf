//! User identity module.
//!
//! A lightweight, unverified local identity label: the profile captured at
//! login and the store trait that persists it.

mod model;
mod repository;

pub use model::UserProfile;
pub use repository::IdentityStore;
