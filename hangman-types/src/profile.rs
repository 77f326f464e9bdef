use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. Immutable except for `score`, which is replaced
/// wholesale by `ProfileStore::update_score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    /// Hex-encoded SHA-256 digest of the password, never the plaintext.
    pub password: String,
    pub score: u32,
    /// RFC 3339 string for simplicity
    #[serde(rename = "dateJoined")]
    pub date_joined: String,
}
