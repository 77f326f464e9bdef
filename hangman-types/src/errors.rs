use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recoverable, user-facing rejections from the profile store. None of
/// these leave the store in a changed state.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ProfileError {
    #[error("username already taken: {username}")]
    DuplicateUsername { username: String },
    #[error("invalid username or password")]
    AuthFailure,
    #[error("username and password must not be empty")]
    EmptyCredentials,
}
