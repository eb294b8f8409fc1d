//! Shared timed-tick loop and best-score session for all three games.
//!
//! Every game implements [`ArcadeGame`]: a pure state-transition surface that
//! consumes normalized inputs and elapsed milliseconds. [`GameSession`] wraps a
//! game with its frame clock, RNG, persisted record and event log so the host
//! loop only has to forward inputs and call [`GameSession::frame`].

use super::constants::{BASELINE_FRAME_MS, MAX_FRAME_DELTA_MS};
use super::event_log::EventLog;
use super::records::{HighScore, RecordStore};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::{Duration, Instant};

/// Converts frame timestamps into elapsed milliseconds.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole milliseconds since the previous call, clamped to
    /// `MAX_FRAME_DELTA_MS`. The first call returns 0.
    ///
    /// The sub-millisecond remainder carries over to the next call, so a run
    /// of short frames still adds up to real time.
    pub fn delta_ms(&mut self, now: Instant) -> u64 {
        let Some(prev) = self.last else {
            self.last = Some(now);
            return 0;
        };
        let dt = now.saturating_duration_since(prev).as_millis() as u64;
        if dt > MAX_FRAME_DELTA_MS {
            self.last = Some(now);
            return MAX_FRAME_DELTA_MS;
        }
        self.last = Some(prev + Duration::from_millis(dt));
        dt
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Fixed-delay stepping: fires once the accumulated time strictly exceeds the
/// delay, then starts over from zero. Any remainder is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickGate {
    delay_ms: u64,
    elapsed_ms: u64,
}

impl TickGate {
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            elapsed_ms: 0,
        }
    }

    pub fn advance(&mut self, dt_ms: u64) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms > self.delay_ms {
            self.elapsed_ms = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }
}

/// Elapsed time expressed in 60-updates-per-second frames.
pub fn frame_ratio(dt_ms: u64) -> f64 {
    dt_ms as f64 / BASELINE_FRAME_MS
}

/// A game whose round advances on timed ticks and whose best score outlives
/// the process.
///
/// Both entry points may hand back a record to persist. The session only
/// writes it when it strictly beats the stored one.
pub trait ArcadeGame {
    type Input: Copy;
    type Record: HighScore;

    /// File name of this game's record inside the data directory.
    const RECORD_FILE: &'static str;

    fn handle_input<R: Rng + ?Sized>(
        &mut self,
        input: Self::Input,
        best: &Self::Record,
        rng: &mut R,
    ) -> Option<Self::Record>;

    fn advance<R: Rng + ?Sized>(
        &mut self,
        dt_ms: u64,
        best: &Self::Record,
        rng: &mut R,
    ) -> Option<Self::Record>;

    fn score(&self) -> u32;

    /// True once the round has reached its terminal state.
    fn is_over(&self) -> bool;

    /// One-line description of how the round ended.
    fn summary(&self) -> String;
}

/// A running game plus everything the host loop needs around it.
#[derive(Debug)]
pub struct GameSession<G: ArcadeGame> {
    game: G,
    records: RecordStore<G::Record>,
    clock: FrameClock,
    rng: StdRng,
    log: EventLog,
}

impl<G: ArcadeGame> GameSession<G> {
    pub fn new(game: G, records: RecordStore<G::Record>, rng: StdRng) -> Self {
        Self {
            game,
            records,
            clock: FrameClock::new(),
            rng,
            log: EventLog::new(),
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn best(&self) -> &G::Record {
        self.records.best()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut EventLog {
        &mut self.log
    }

    /// Forward one normalized input to the game.
    pub fn input(&mut self, input: G::Input) {
        let was_over = self.game.is_over();
        let record = self
            .game
            .handle_input(input, self.records.best(), &mut self.rng);
        self.after_step(was_over, record);
    }

    /// Advance by the time elapsed since the previous frame.
    pub fn frame(&mut self, now: Instant) {
        let dt_ms = self.clock.delta_ms(now);
        self.tick(dt_ms);
    }

    /// Advance by an explicit number of milliseconds.
    pub fn tick(&mut self, dt_ms: u64) {
        let was_over = self.game.is_over();
        let record = self.game.advance(dt_ms, self.records.best(), &mut self.rng);
        self.after_step(was_over, record);
    }

    /// Drop the frame clock so the next frame starts from zero elapsed time.
    pub fn pause_clock(&mut self) {
        self.clock.reset();
    }

    fn after_step(&mut self, was_over: bool, record: Option<G::Record>) {
        match (was_over, self.game.is_over()) {
            (false, true) => self.log.info(self.game.summary()),
            (true, false) => self.log.info("New round"),
            _ => {}
        }

        if let Some(record) = record {
            match self.records.submit(record) {
                Ok(true) => {
                    let best = self.records.best().describe();
                    self.log.info(format!("New best: {}", best));
                }
                Ok(false) => {}
                Err(e) => self.log.warn(format!(
                    "Could not save {}: {}",
                    self.records.path().display(),
                    e
                )),
            }
        }
    }
}
