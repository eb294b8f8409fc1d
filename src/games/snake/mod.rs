//! Snake on a fixed grid.
//!
//! The snake moves one cell per fixed delay. Eating food grows it by one
//! segment; leaving the grid or running into itself ends the round.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
