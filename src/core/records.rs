//! Persisted best-score records.
//!
//! Each game keeps exactly one record file. The record is read once when the
//! store opens and rewritten wholesale only when a strictly higher score
//! arrives.

use crate::utils::persistence::{load_json_or_default, save_json};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};

/// A best-score value that can be stored on disk.
pub trait HighScore: Serialize + DeserializeOwned + Default + Clone + Debug {
    fn score(&self) -> u32;

    /// Human-readable form for the menu and info panels.
    fn describe(&self) -> String;
}

/// Plain `{ "score": n }` record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
}

impl HighScore for ScoreRecord {
    fn score(&self) -> u32 {
        self.score
    }

    fn describe(&self) -> String {
        self.score.to_string()
    }
}

/// `{ "name": s, "score": n }` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedRecord {
    pub name: String,
    pub score: u32,
}

impl Default for NamedRecord {
    fn default() -> Self {
        Self {
            name: "NONE".to_string(),
            score: 0,
        }
    }
}

impl HighScore for NamedRecord {
    fn score(&self) -> u32 {
        self.score
    }

    fn describe(&self) -> String {
        format!("{} - {}", self.name, self.score)
    }
}

/// One game's record file plus its in-memory copy.
#[derive(Debug, Clone)]
pub struct RecordStore<R: HighScore> {
    path: PathBuf,
    best: R,
}

impl<R: HighScore> RecordStore<R> {
    /// Open `<dir>/<file_name>`. Missing or malformed data yields `R::default()`.
    pub fn open(dir: &Path, file_name: &str) -> Self {
        let path = dir.join(file_name);
        let best = load_json_or_default(&path);
        Self { path, best }
    }

    pub fn best(&self) -> &R {
        &self.best
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored record if `record` strictly beats it.
    ///
    /// Returns `Ok(true)` when the file was rewritten. The in-memory record is
    /// updated even if the write fails.
    pub fn submit(&mut self, record: R) -> io::Result<bool> {
        if record.score() <= self.best.score() {
            return Ok(false);
        }
        self.best = record;
        save_json(&self.path, &self.best)?;
        Ok(true)
    }
}
