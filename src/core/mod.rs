//! Shared loop, records and logging used by every game.

pub mod constants;
pub mod event_log;
pub mod game_loop;
pub mod records;

pub use event_log::{EventLog, LogEntry, LogLevel};
pub use game_loop::{frame_ratio, ArcadeGame, FrameClock, GameSession, TickGate};
pub use records::{HighScore, NamedRecord, RecordStore, ScoreRecord};
