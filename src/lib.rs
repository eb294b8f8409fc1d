//! Arcade - Terminal Arcade Games Library
//!
//! Blackjack, Snake and Flappy on a shared timed-tick loop with persisted
//! best scores. Exposed as a library for testing.

pub mod app;
pub mod config;
pub mod core;
pub mod games;
pub mod input;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::{parse_args, CliCommand, Config};
pub use games::{ActiveGame, GameKind};
