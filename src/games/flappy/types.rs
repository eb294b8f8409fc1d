//! Flappy data structures.
//!
//! World coordinates are fixed at 288×512 units with the ground line at
//! y = 400. Velocities are in units per 60 Hz frame.

use crate::core::constants::*;
use crate::core::game_loop::TickGate;
use rand::Rng;

/// Axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap: touching edges do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// The player's bird.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity, positive = downward.
    pub vel: f64,
    pub width: f64,
    pub height: f64,
    /// Wing animation frame, cycles through `FLAPPY_WING_FRAMES`.
    pub frame_index: usize,
    pub frame_counter: f64,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: FLAPPY_BIRD_X,
            y: FLAPPY_HEIGHT / 2.0,
            vel: 0.0,
            width: FLAPPY_BIRD_WIDTH,
            height: FLAPPY_BIRD_HEIGHT,
            frame_index: 0,
            frame_counter: 0.0,
        }
    }

    pub fn jump(&mut self) {
        self.vel = FLAPPY_JUMP_VELOCITY;
    }

    /// Apply one `delta`-scaled step of gravity and integrate position.
    pub fn fall(&mut self, delta: f64) {
        self.vel += FLAPPY_GRAVITY * delta;
        self.y += self.vel * delta;
    }

    /// Advance the wing animation.
    pub fn animate(&mut self, delta: f64) {
        self.frame_counter += delta;
        if self.frame_counter > FLAPPY_WING_FRAME_UNITS {
            self.frame_index = (self.frame_index + 1) % FLAPPY_WING_FRAMES;
            self.frame_counter = 0.0;
        }
    }

    /// Collision box, inset from the sprite bounds on every side.
    pub fn hitbox(&self) -> Rect {
        Rect {
            x: self.x + FLAPPY_HITBOX_INSET,
            y: self.y + FLAPPY_HITBOX_INSET,
            width: self.width - 2.0 * FLAPPY_HITBOX_INSET,
            height: self.height - 2.0 * FLAPPY_HITBOX_INSET,
        }
    }

    pub fn on_ground(&self) -> bool {
        self.y + self.height >= FLAPPY_GROUND_Y
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A pipe pair with a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: f64,
    pub width: f64,
    /// Height of the top obstacle, measured from y = 0.
    pub top_height: f64,
    /// Top edge of the bottom obstacle.
    pub bottom_y: f64,
    /// Set once the bird has cleared this pipe.
    pub passed: bool,
}

impl Pipe {
    /// A new pipe at the right edge with its gap centred on `gap_center`.
    pub fn new(gap_center: f64) -> Self {
        Self {
            x: FLAPPY_WIDTH,
            width: FLAPPY_PIPE_WIDTH,
            top_height: gap_center - FLAPPY_PIPE_GAP / 2.0,
            bottom_y: gap_center + FLAPPY_PIPE_GAP / 2.0,
            passed: false,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let min_gap_y = FLAPPY_GAP_MARGIN;
        let max_gap_y = FLAPPY_GROUND_Y - FLAPPY_GAP_MARGIN;
        Self::new(rng.gen_range(min_gap_y..max_gap_y))
    }

    pub fn gap_center(&self) -> f64 {
        (self.top_height + self.bottom_y) / 2.0
    }

    pub fn gap_size(&self) -> f64 {
        self.bottom_y - self.top_height
    }

    pub fn top_rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: 0.0,
            width: self.width,
            height: self.top_height,
        }
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.bottom_y,
            width: self.width,
            height: FLAPPY_GROUND_Y - self.bottom_y,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: u32,

    /// False until the first jump. The bird hovers while waiting.
    pub started: bool,
    pub game_over: bool,
    /// Name being typed for a new record, if the round earned one.
    pub name_entry: Option<String>,

    pub pipe_gate: TickGate,
}

impl FlappyGame {
    pub fn new() -> Self {
        Self {
            bird: Bird::new(),
            pipes: Vec::new(),
            score: 0,
            started: false,
            game_over: false,
            name_entry: None,
            pipe_gate: TickGate::new(FLAPPY_PIPE_INTERVAL_MS),
        }
    }

    pub fn is_entering_name(&self) -> bool {
        self.name_entry.is_some()
    }

    /// Count of pipes still on screen that have been passed.
    pub fn passed_pipes(&self) -> usize {
        self.pipes.iter().filter(|p| p.passed).count()
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let game = FlappyGame::new();
        assert!(!game.started);
        assert!(!game.game_over);
        assert!(game.pipes.is_empty());
        assert_eq!(game.score, 0);
        assert!(!game.is_entering_name());
        assert!((game.bird.y - 256.0).abs() < f64::EPSILON);
        assert!((game.bird.x - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hitbox_is_inset() {
        let bird = Bird::new();
        let hb = bird.hitbox();
        assert!((hb.x - 85.0).abs() < f64::EPSILON);
        assert!((hb.y - 261.0).abs() < f64::EPSILON);
        assert!((hb.width - 24.0).abs() < f64::EPSILON);
        assert!((hb.height - 14.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        let touching = Rect { x: 10.0, ..a };
        let inside = Rect { x: 5.0, y: 5.0, ..a };
        let apart = Rect { x: 20.0, ..a };
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn test_pipe_geometry() {
        let pipe = Pipe::new(200.0);
        assert!((pipe.x - FLAPPY_WIDTH).abs() < f64::EPSILON);
        assert!((pipe.top_height - 125.0).abs() < f64::EPSILON);
        assert!((pipe.bottom_y - 275.0).abs() < f64::EPSILON);
        assert!((pipe.gap_size() - FLAPPY_PIPE_GAP).abs() < f64::EPSILON);
        assert!((pipe.gap_center() - 200.0).abs() < f64::EPSILON);

        let top = pipe.top_rect();
        let bottom = pipe.bottom_rect();
        assert!((top.bottom() - 125.0).abs() < f64::EPSILON);
        assert!((bottom.bottom() - FLAPPY_GROUND_Y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_random_pipe_gap_within_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let pipe = Pipe::random(&mut rng);
            let center = pipe.gap_center();
            assert!((120.0..280.0).contains(&center));
            assert!((pipe.gap_size() - FLAPPY_PIPE_GAP).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bird_fall_and_jump() {
        let mut bird = Bird::new();
        bird.fall(1.0);
        assert!((bird.vel - 0.5).abs() < f64::EPSILON);
        assert!((bird.y - 256.5).abs() < f64::EPSILON);
        bird.jump();
        assert!((bird.vel - FLAPPY_JUMP_VELOCITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wing_animation_cycles() {
        let mut bird = Bird::new();
        for _ in 0..3 {
            bird.animate(6.0);
        }
        assert_eq!(bird.frame_index, 0);
        bird.animate(6.0);
        assert_eq!(bird.frame_index, 1);
    }
}
