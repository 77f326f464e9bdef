pub mod kv;
pub mod profile_store;

pub use kv::{JsonStore, StorageError};
pub use profile_store::{ProfileStore, ACTIVE_PROFILE_KEY, PROFILES_KEY};
