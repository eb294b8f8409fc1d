//! Flappy: steer a bird through scrolling pipe gaps.
//!
//! The round waits for the first jump. Crashing into a pipe or the ground
//! ends it, and a score above the stored record prompts for a name.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
