//! The three arcade games and the glue that launches them.

pub mod blackjack;
pub mod flappy;
pub mod snake;

use crate::core::{ArcadeGame, EventLog, GameSession, HighScore, RecordStore};
use blackjack::BlackjackGame;
use flappy::FlappyGame;
use rand::rngs::StdRng;
use rand::SeedableRng;
use snake::SnakeGame;
use std::path::Path;
use std::time::Instant;

/// Which game to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Blackjack,
    Snake,
    Flappy,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Blackjack, GameKind::Snake, GameKind::Flappy];

    pub fn name(self) -> &'static str {
        match self {
            GameKind::Blackjack => "Blackjack",
            GameKind::Snake => "Snake",
            GameKind::Flappy => "Flappy",
        }
    }

    /// Command-line name.
    pub fn slug(self) -> &'static str {
        match self {
            GameKind::Blackjack => "blackjack",
            GameKind::Snake => "snake",
            GameKind::Flappy => "flappy",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            GameKind::Blackjack => "Beat the dealer to 21",
            GameKind::Snake => "Eat, grow, don't bite yourself",
            GameKind::Flappy => "Thread the bird through the pipes",
        }
    }

    pub fn from_arg(arg: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(arg))
    }

    pub fn record_file(self) -> &'static str {
        match self {
            GameKind::Blackjack => BlackjackGame::RECORD_FILE,
            GameKind::Snake => SnakeGame::RECORD_FILE,
            GameKind::Flappy => FlappyGame::RECORD_FILE,
        }
    }

    /// Stored best score for this game, formatted for the menu.
    pub fn best_description(self, data_dir: &Path) -> String {
        match self {
            GameKind::Blackjack => describe_best::<BlackjackGame>(data_dir),
            GameKind::Snake => describe_best::<SnakeGame>(data_dir),
            GameKind::Flappy => describe_best::<FlappyGame>(data_dir),
        }
    }
}

fn describe_best<G: ArcadeGame>(data_dir: &Path) -> String {
    RecordStore::<G::Record>::open(data_dir, G::RECORD_FILE)
        .best()
        .describe()
}

/// The game currently on screen, with its session.
#[derive(Debug)]
pub enum ActiveGame {
    Blackjack(GameSession<BlackjackGame>),
    Snake(GameSession<SnakeGame>),
    Flappy(GameSession<FlappyGame>),
}

impl ActiveGame {
    /// Start a fresh session. A seed makes every shuffle, food cell and
    /// pipe gap reproducible.
    pub fn launch(kind: GameKind, data_dir: &Path, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        match kind {
            GameKind::Blackjack => {
                ActiveGame::Blackjack(start_session(BlackjackGame::new(), data_dir, rng))
            }
            GameKind::Snake => {
                let game = SnakeGame::new(&mut rng);
                ActiveGame::Snake(start_session(game, data_dir, rng))
            }
            GameKind::Flappy => ActiveGame::Flappy(start_session(FlappyGame::new(), data_dir, rng)),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::Blackjack(_) => GameKind::Blackjack,
            ActiveGame::Snake(_) => GameKind::Snake,
            ActiveGame::Flappy(_) => GameKind::Flappy,
        }
    }

    pub fn frame(&mut self, now: Instant) {
        match self {
            ActiveGame::Blackjack(s) => s.frame(now),
            ActiveGame::Snake(s) => s.frame(now),
            ActiveGame::Flappy(s) => s.frame(now),
        }
    }

    pub fn pause_clock(&mut self) {
        match self {
            ActiveGame::Blackjack(s) => s.pause_clock(),
            ActiveGame::Snake(s) => s.pause_clock(),
            ActiveGame::Flappy(s) => s.pause_clock(),
        }
    }

    pub fn log(&self) -> &EventLog {
        match self {
            ActiveGame::Blackjack(s) => s.log(),
            ActiveGame::Snake(s) => s.log(),
            ActiveGame::Flappy(s) => s.log(),
        }
    }

    /// True while the flappy name prompt owns the keyboard.
    pub fn wants_text(&self) -> bool {
        matches!(self, ActiveGame::Flappy(s) if s.game().is_entering_name())
    }
}

fn start_session<G: ArcadeGame>(game: G, data_dir: &Path, rng: StdRng) -> GameSession<G> {
    let records = RecordStore::open(data_dir, G::RECORD_FILE);
    let mut session = GameSession::new(game, records, rng);
    let best = session.best().describe();
    session.log_mut().info(format!("Best so far: {}", best));
    session
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg() {
        assert_eq!(GameKind::from_arg("snake"), Some(GameKind::Snake));
        assert_eq!(GameKind::from_arg("Flappy"), Some(GameKind::Flappy));
        assert_eq!(GameKind::from_arg("BLACKJACK"), Some(GameKind::Blackjack));
        assert_eq!(GameKind::from_arg("pong"), None);
    }

    #[test]
    fn test_record_files_are_distinct() {
        assert_eq!(GameKind::Blackjack.record_file(), "blackjack_record.json");
        assert_eq!(GameKind::Snake.record_file(), "snake_record.json");
        assert_eq!(GameKind::Flappy.record_file(), "flappy_record.json");
    }

    #[test]
    fn test_launch_logs_best_and_matches_kind() {
        let dir = std::env::temp_dir().join(format!("arcade-launch-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();

        for kind in GameKind::ALL {
            let game = ActiveGame::launch(kind, &dir, Some(3));
            assert_eq!(game.kind(), kind);
            assert!(game.log().latest().unwrap().message.starts_with("Best so far"));
            assert!(!game.wants_text());
        }
        assert_eq!(GameKind::Flappy.best_description(&dir), "NONE - 0");
        std::fs::remove_dir_all(&dir).ok();
    }
}
