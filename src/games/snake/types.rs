//! Snake game data structures.
//!
//! A real-time grid game where the player guides a snake to eat food and grow.

use crate::core::constants::{SNAKE_GRID_HEIGHT, SNAKE_GRID_WIDTH, SNAKE_MOVE_DELAY_MS};
use crate::core::game_loop::TickGate;
use rand::Rng;
use std::collections::VecDeque;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Starting body, head first.
pub const START_BODY: [Position; 3] = [
    Position::new(5, 12),
    Position::new(4, 12),
    Position::new(3, 12),
];

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub grid_width: i16,
    pub grid_height: i16,

    /// Body segments, head first.
    pub snake: VecDeque<Position>,
    pub direction: Direction,
    /// Direction queued by input, committed on the next move.
    pub next_direction: Direction,
    pub food: Position,
    pub score: u32,

    /// False until the first arrow key. Movement paused while waiting.
    pub started: bool,
    pub game_over: bool,

    pub move_gate: TickGate,
    /// Total moves made this round.
    pub tick_count: u64,
}

impl SnakeGame {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut game = Self {
            grid_width: SNAKE_GRID_WIDTH,
            grid_height: SNAKE_GRID_HEIGHT,
            snake: VecDeque::new(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: Position::new(0, 0),
            score: 0,
            started: false,
            game_over: false,
            move_gate: TickGate::new(SNAKE_MOVE_DELAY_MS),
            tick_count: 0,
        };
        game.reset(rng);
        game
    }

    /// Put body, heading, food and score back to their starting values.
    /// Leaves `started` alone.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.snake = START_BODY.iter().copied().collect();
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.food = spawn_food(self.grid_width, self.grid_height, rng);
        self.score = 0;
        self.game_over = false;
        self.move_gate.reset();
        self.tick_count = 0;
    }

    pub fn head(&self) -> Position {
        self.snake.front().copied().unwrap_or(START_BODY[0])
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_width && pos.y >= 0 && pos.y < self.grid_height
    }
}

/// Pick a uniformly random cell. The snake's body is not excluded.
pub fn spawn_food<R: Rng + ?Sized>(grid_width: i16, grid_height: i16, rng: &mut R) -> Position {
    Position {
        x: rng.gen_range(0..grid_width),
        y: rng.gen_range(0..grid_height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let game = SnakeGame::new(&mut rng);
        assert!(!game.started);
        assert!(!game.game_over);
        assert_eq!(game.score, 0);
        assert_eq!(game.snake.len(), 3);
        assert_eq!(game.direction, Direction::Right);
        assert_eq!(game.next_direction, Direction::Right);
        assert_eq!(game.grid_width, 30);
        assert_eq!(game.grid_height, 25);
        assert_eq!(game.head(), Position::new(5, 12));
    }

    #[test]
    fn test_start_body_is_contiguous() {
        for pair in START_BODY.windows(2) {
            let dx = (pair[0].x - pair[1].x).abs();
            let dy = (pair[0].y - pair[1].y).abs();
            assert_eq!(dx + dy, 1);
        }
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Position::new(5, 12).step(Direction::Right), Position::new(6, 12));
    }

    #[test]
    fn test_spawn_food_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let game = SnakeGame::new(&mut rng);
        for _ in 0..500 {
            let food = spawn_food(game.grid_width, game.grid_height, &mut rng);
            assert!(game.in_bounds(food));
        }
    }

    #[test]
    fn test_in_bounds_edges() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let game = SnakeGame::new(&mut rng);
        assert!(game.in_bounds(Position::new(0, 0)));
        assert!(game.in_bounds(Position::new(29, 24)));
        assert!(!game.in_bounds(Position::new(-1, 0)));
        assert!(!game.in_bounds(Position::new(30, 0)));
        assert!(!game.in_bounds(Position::new(0, 25)));
    }
}
