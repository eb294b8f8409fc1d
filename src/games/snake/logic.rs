//! Snake game logic: movement, input processing, collision detection.

use super::types::*;
use crate::core::game_loop::ArcadeGame;
use crate::core::records::ScoreRecord;
use rand::Rng;

/// UI-agnostic input actions for Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeInput {
    Up,
    Down,
    Left,
    Right,
    /// `p` on the game-over screen: fresh round, moving immediately.
    Restart,
    /// Restart button click: fresh round, back to the start prompt.
    RestartButton,
}

impl SnakeInput {
    fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Restart | Self::RestartButton => None,
        }
    }
}

/// Process player input.
pub fn process_input<R: Rng + ?Sized>(game: &mut SnakeGame, input: SnakeInput, rng: &mut R) {
    if game.game_over {
        match input {
            SnakeInput::Restart => {
                game.reset(rng);
                game.started = true;
            }
            SnakeInput::RestartButton => {
                game.reset(rng);
                game.started = false;
            }
            _ => {}
        }
        return;
    }

    let Some(direction) = input.direction() else {
        return;
    };

    // The first arrow key both starts the round and steers.
    game.started = true;
    if direction != game.direction.opposite() {
        game.next_direction = direction;
    }
}

/// Advance Snake. Moves once `SNAKE_MOVE_DELAY_MS` has strictly elapsed since
/// the previous move. Returns true if the snake moved.
pub fn tick_snake<R: Rng + ?Sized>(game: &mut SnakeGame, dt_ms: u64, rng: &mut R) -> bool {
    if !game.started || game.game_over {
        return false;
    }
    if !game.move_gate.advance(dt_ms) {
        return false;
    }
    step_snake(game, rng);
    true
}

/// Single movement step.
pub fn step_snake<R: Rng + ?Sized>(game: &mut SnakeGame, rng: &mut R) {
    game.tick_count += 1;

    if game.next_direction != game.direction.opposite() {
        game.direction = game.next_direction;
    }

    let new_head = game.head().step(game.direction);
    game.snake.push_front(new_head);

    if new_head == game.food {
        game.score += 1;
        game.food = spawn_food(game.grid_width, game.grid_height, rng);
    } else {
        game.snake.pop_back();
    }

    if !game.in_bounds(new_head) || hits_body(game) {
        game.game_over = true;
    }
}

/// Head coincides with any non-head segment.
fn hits_body(game: &SnakeGame) -> bool {
    let head = game.head();
    game.snake.iter().skip(1).any(|&seg| seg == head)
}

impl ArcadeGame for SnakeGame {
    type Input = SnakeInput;
    type Record = ScoreRecord;
    const RECORD_FILE: &'static str = "snake_record.json";

    fn handle_input<R: Rng + ?Sized>(
        &mut self,
        input: SnakeInput,
        _best: &ScoreRecord,
        rng: &mut R,
    ) -> Option<ScoreRecord> {
        process_input(self, input, rng);
        None
    }

    fn advance<R: Rng + ?Sized>(
        &mut self,
        dt_ms: u64,
        best: &ScoreRecord,
        rng: &mut R,
    ) -> Option<ScoreRecord> {
        let moved = tick_snake(self, dt_ms, rng);
        if moved && self.game_over && self.score > best.score {
            Some(ScoreRecord { score: self.score })
        } else {
            None
        }
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn is_over(&self) -> bool {
        self.game_over
    }

    fn summary(&self) -> String {
        format!("Game over with {} food eaten", self.score)
    }
}
