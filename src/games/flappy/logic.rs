//! Game logic for Flappy: physics, pipe scrolling, collision and name entry.

use super::types::*;
use crate::core::constants::{FLAPPY_GROUND_Y, FLAPPY_NAME_MAX_LEN, FLAPPY_PIPE_SPEED};
use crate::core::game_loop::{frame_ratio, ArcadeGame};
use crate::core::records::NamedRecord;
use rand::Rng;

/// Input actions for Flappy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Space, Up or a click while alive.
    Jump,
    /// Printable character typed during name entry.
    Char(char),
    Backspace,
    /// Enter during name entry.
    Confirm,
    /// Start over from the game-over screen.
    Restart,
}

/// Process player input. Returns a record to persist when a name is confirmed.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) -> Option<NamedRecord> {
    if let Some(name) = game.name_entry.as_mut() {
        match input {
            FlappyInput::Char(c) if !c.is_control() && name.chars().count() < FLAPPY_NAME_MAX_LEN => {
                name.push(c);
            }
            FlappyInput::Backspace => {
                name.pop();
            }
            FlappyInput::Confirm if !name.is_empty() => {
                let record = NamedRecord {
                    name: std::mem::take(name),
                    score: game.score,
                };
                game.name_entry = None;
                return Some(record);
            }
            _ => {}
        }
        return None;
    }

    match input {
        FlappyInput::Jump if !game.started => {
            game.started = true;
            game.pipe_gate.reset();
            game.bird.jump();
        }
        FlappyInput::Jump if !game.game_over => game.bird.jump(),
        FlappyInput::Restart if game.game_over => reset(game),
        _ => {}
    }
    None
}

/// Clear pipes and score and put the bird back in its waiting pose.
pub fn reset(game: &mut FlappyGame) {
    *game = FlappyGame::new();
}

/// Advance one frame of `dt_ms` milliseconds.
///
/// `best_score` decides whether a crash opens the name-entry prompt.
pub fn tick_flappy<R: Rng + ?Sized>(
    game: &mut FlappyGame,
    dt_ms: u64,
    best_score: u32,
    rng: &mut R,
) {
    let delta = frame_ratio(dt_ms);

    if game.started && !game.game_over {
        if game.pipe_gate.advance(dt_ms) {
            game.pipes.push(Pipe::random(rng));
        }
        for pipe in &mut game.pipes {
            pipe.x -= FLAPPY_PIPE_SPEED * delta;
        }
        game.pipes.retain(|p| p.right() > 0.0);
    }

    if !game.game_over {
        if game.started {
            game.bird.fall(delta);
        }
        game.bird.animate(delta);
        check_collisions(game);
    } else {
        settle_on_ground(&mut game.bird, delta);
    }

    if game.game_over && game.name_entry.is_none() && game.score > best_score {
        game.name_entry = Some(String::new());
    }
}

/// Ground first, then pipes. Scores every pipe whose right edge is behind
/// the bird.
pub fn check_collisions(game: &mut FlappyGame) {
    if game.bird.on_ground() {
        game.game_over = true;
        return;
    }

    let hitbox = game.bird.hitbox();
    for pipe in &mut game.pipes {
        if hitbox.overlaps(&pipe.top_rect()) || hitbox.overlaps(&pipe.bottom_rect()) {
            game.game_over = true;
        }
        if !pipe.passed && pipe.right() < game.bird.x {
            pipe.passed = true;
            game.score += 1;
        }
    }
}

/// Keep falling after a crash until the sprite rests on the ground line.
fn settle_on_ground(bird: &mut Bird, delta: f64) {
    if !bird.on_ground() {
        bird.fall(delta);
    }
    if bird.on_ground() {
        bird.y = FLAPPY_GROUND_Y - bird.height;
        bird.vel = 0.0;
    }
}

impl ArcadeGame for FlappyGame {
    type Input = FlappyInput;
    type Record = NamedRecord;
    const RECORD_FILE: &'static str = "flappy_record.json";

    fn handle_input<R: Rng + ?Sized>(
        &mut self,
        input: FlappyInput,
        _best: &NamedRecord,
        _rng: &mut R,
    ) -> Option<NamedRecord> {
        process_input(self, input)
    }

    fn advance<R: Rng + ?Sized>(
        &mut self,
        dt_ms: u64,
        best: &NamedRecord,
        rng: &mut R,
    ) -> Option<NamedRecord> {
        tick_flappy(self, dt_ms, best.score, rng);
        None
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn is_over(&self) -> bool {
        self.game_over
    }

    fn summary(&self) -> String {
        format!("Crashed after {} pipes", self.score)
    }
}
