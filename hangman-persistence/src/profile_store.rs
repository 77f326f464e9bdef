use std::path::Path;

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{info, warn};
use uuid::Uuid;

use hangman_types::{Profile, ProfileError};

use crate::kv::JsonStore;

pub const PROFILES_KEY: &str = "hangman-profiles";
pub const ACTIVE_PROFILE_KEY: &str = "hangman-active-profile";

/// Owns the account catalog and the single active session. Catalog and
/// session are persisted as complete snapshots after every mutation.
/// Construct one per process and pass it by reference; there is no
/// global instance.
#[derive(Debug)]
pub struct ProfileStore {
    store: Option<JsonStore>,
    profiles: Vec<Profile>,
    active: Option<Profile>,
}

impl ProfileStore {
    /// Load whatever was persisted, falling back to the seed catalog and
    /// an anonymous session on anything unreadable. Never fails; the
    /// worst outcome is an in-memory store that cannot persist.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        let store = match JsonStore::open(dir.as_ref()) {
            Ok(store) => Some(store),
            Err(e) => {
                warn!(error = %e, "profile storage unavailable, running without persistence");
                None
            }
        };

        let profiles = match store.as_ref().map(|s| s.get::<Vec<Profile>>(PROFILES_KEY)) {
            Some(Ok(Some(profiles))) => profiles,
            Some(Err(e)) => {
                warn!(error = %e, "stored profile catalog unreadable, using seed catalog");
                seed_profiles()
            }
            Some(Ok(None)) | None => seed_profiles(),
        };

        let active = match store.as_ref().map(|s| s.get::<Profile>(ACTIVE_PROFILE_KEY)) {
            Some(Ok(active)) => active,
            Some(Err(e)) => {
                warn!(error = %e, "stored session unreadable, starting anonymous");
                None
            }
            None => None,
        };

        info!(
            profiles = profiles.len(),
            logged_in = active.is_some(),
            "profile store ready"
        );

        Self {
            store,
            profiles,
            active,
        }
    }

    /// Create an account and make it the active session. Length limits on
    /// username and password are the caller's job at the input boundary;
    /// blank input is still rejected here.
    pub fn register(&mut self, username: &str, password: &str) -> Result<Profile, ProfileError> {
        let username = username.trim();
        if username.is_empty() || password.trim().is_empty() {
            return Err(ProfileError::EmptyCredentials);
        }
        if self.profiles.iter().any(|p| p.username == username) {
            return Err(ProfileError::DuplicateUsername {
                username: username.to_string(),
            });
        }

        let profile = Profile {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password: hash_password(password),
            score: 0,
            date_joined: Utc::now().to_rfc3339(),
        };

        self.profiles.push(profile.clone());
        self.active = Some(profile.clone());
        self.persist_catalog();
        self.persist_session();
        info!(username = %profile.username, "registered new profile");
        Ok(profile)
    }

    /// Exact username plus password-digest match. A miss is a plain
    /// `AuthFailure`, not a system error, and changes nothing.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Profile, ProfileError> {
        let digest = hash_password(password);
        let found = self
            .profiles
            .iter()
            .find(|p| p.username == username && p.password == digest)
            .cloned();

        match found {
            Some(profile) => {
                self.active = Some(profile.clone());
                self.persist_session();
                info!(username = %profile.username, "logged in");
                Ok(profile)
            }
            None => Err(ProfileError::AuthFailure),
        }
    }

    /// Idempotent; safe to call with no active session.
    pub fn logout(&mut self) {
        if self.active.take().is_some() {
            info!("logged out");
        }
        self.persist_session();
    }

    /// Replace the active profile's cumulative score and patch the same
    /// record in the catalog. A no-op during anonymous play.
    pub fn update_score(&mut self, new_score: u32) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.score = new_score;
        let id = active.id;

        if let Some(entry) = self.profiles.iter_mut().find(|p| p.id == id) {
            entry.score = new_score;
        }
        self.persist_catalog();
        self.persist_session();
    }

    pub fn active(&self) -> Option<&Profile> {
        self.active.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.active.is_some()
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    // Persist failures are logged and swallowed: storage is best-effort
    // and the in-memory state stays authoritative for this process.
    fn persist_catalog(&self) {
        let Some(store) = &self.store else { return };
        if let Err(e) = store.put(PROFILES_KEY, &self.profiles) {
            warn!(error = %e, "failed to persist profile catalog");
        }
    }

    fn persist_session(&self) {
        let Some(store) = &self.store else { return };
        let result = match &self.active {
            Some(profile) => store.put(ACTIVE_PROFILE_KEY, profile),
            None => store.remove(ACTIVE_PROFILE_KEY),
        };
        if let Err(e) = result {
            warn!(error = %e, "failed to persist session");
        }
    }
}

pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// Built-in catalog used when nothing has been persisted yet.
fn seed_profiles() -> Vec<Profile> {
    vec![Profile {
        id: Uuid::new_v4(),
        username: "wordsmith".to_string(),
        password: hash_password("letmein"),
        score: 1200,
        date_joined: "2024-11-02T09:30:00+00:00".to_string(),
    }]
}
