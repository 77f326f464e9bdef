pub mod errors;
pub mod game;
pub mod profile;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use profile::*;
