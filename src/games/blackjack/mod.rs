//! Blackjack against a dealer who stands on any 17.
//!
//! One deck, reshuffled every round. The persisted best score is the longest
//! run of consecutive wins.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
