pub mod catalog;
pub mod game_state;
pub mod scoring;

// Re-export main components
pub use catalog::*;
pub use game_state::*;
pub use scoring::*;
