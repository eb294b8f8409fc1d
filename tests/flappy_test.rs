//! Integration test: Flappy
//!
//! A full flight through the session: start, score, crash, sign the record,
//! restart.

use arcade::core::constants::{FLAPPY_GROUND_Y, FLAPPY_PIPE_GAP};
use arcade::core::{ArcadeGame, GameSession, NamedRecord, RecordStore};
use arcade::games::flappy::{FlappyGame, FlappyInput, Pipe};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("arcade-flappy-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn session(dir: &Path) -> GameSession<FlappyGame> {
    GameSession::new(
        FlappyGame::new(),
        RecordStore::open(dir, FlappyGame::RECORD_FILE),
        StdRng::seed_from_u64(12),
    )
}

/// Score one pipe, then drop the bird onto the ground.
fn score_and_crash(session: &mut GameSession<FlappyGame>) {
    session.input(FlappyInput::Jump);
    let bird_x = session.game().bird.x;
    let mut pipe = Pipe::new(200.0);
    pipe.x = bird_x - pipe.width - 5.0;
    session.game_mut().pipes.push(pipe);
    session.tick(16);
    assert_eq!(session.game().score, 1);

    let height = session.game().bird.height;
    session.game_mut().bird.y = FLAPPY_GROUND_Y - height;
    session.game_mut().bird.vel = 5.0;
    session.tick(16);
    assert!(session.game().is_over());
}

#[test]
fn test_record_flight_is_signed_and_saved() {
    let dir = scratch_dir();
    let mut session = session(&dir);
    assert_eq!(session.best(), &NamedRecord::default());

    score_and_crash(&mut session);
    assert!(session.game().is_entering_name());

    for c in "ADA".chars() {
        session.input(FlappyInput::Char(c));
    }
    session.input(FlappyInput::Confirm);

    assert!(!session.game().is_entering_name());
    assert_eq!(session.best().name, "ADA");
    assert_eq!(session.best().score, 1);
    assert_eq!(session.log().latest().unwrap().message, "New best: ADA - 1");

    let json = std::fs::read_to_string(dir.join(FlappyGame::RECORD_FILE)).unwrap();
    let stored: NamedRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(stored.name, "ADA");
    assert_eq!(stored.score, 1);

    session.input(FlappyInput::Restart);
    assert!(!session.game().is_over());
    assert!(!session.game().started);
    assert!(session.game().pipes.is_empty());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_equal_score_asks_for_no_name() {
    let dir = scratch_dir();
    std::fs::write(
        dir.join(FlappyGame::RECORD_FILE),
        r#"{ "name": "BOB", "score": 1 }"#,
    )
    .unwrap();

    let mut session = session(&dir);
    score_and_crash(&mut session);
    assert!(!session.game().is_entering_name());
    assert_eq!(session.best().name, "BOB");
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_malformed_record_falls_back() {
    let dir = scratch_dir();
    std::fs::write(dir.join(FlappyGame::RECORD_FILE), "not json").unwrap();
    let session = session(&dir);
    assert_eq!(session.best().name, "NONE");
    assert_eq!(session.best().score, 0);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_autopilot_flight_invariants() {
    let dir = scratch_dir();
    let mut session = session(&dir);
    session.input(FlappyInput::Jump);

    let mut last_score = 0;
    for _ in 0..3000 {
        if session.game().is_over() {
            break;
        }
        // Flap whenever the bird sinks below the next gap's center
        let game = session.game();
        let target = game
            .pipes
            .iter()
            .find(|p| p.right() > game.bird.x)
            .map(|p| p.gap_center())
            .unwrap_or(250.0);
        if game.bird.y + game.bird.height / 2.0 > target + 20.0 && game.bird.vel > 0.0 {
            session.input(FlappyInput::Jump);
        }

        session.tick(16);
        let game = session.game();
        assert!(game.score >= last_score);
        assert!(game.score <= last_score + 1);
        assert!(game.pipes.len() <= 3);
        assert!(game.pipes.iter().all(|p| p.right() > 0.0));
        assert!(game
            .pipes
            .iter()
            .all(|p| (p.gap_size() - FLAPPY_PIPE_GAP).abs() < 1e-9));
        last_score = game.score;
    }
    std::fs::remove_dir_all(&dir).ok();
}
