// Frame pacing
pub const FRAME_INTERVAL_MS: u64 = 16;
pub const MAX_FRAME_DELTA_MS: u64 = 250;
pub const BASELINE_FRAME_MS: f64 = 16.67;

// Event log
pub const EVENT_LOG_CAPACITY: usize = 8;

// Persistence
pub const DATA_DIR_NAME: &str = ".arcade";
pub const DATA_DIR_ENV: &str = "ARCADE_DATA_DIR";

// Blackjack
pub const BLACKJACK: u16 = 21;
pub const DEALER_STAND_TOTAL: u16 = 17;
pub const DEALER_DRAW_DELAY_MS: u64 = 600;

// Snake
pub const SNAKE_GRID_WIDTH: i16 = 30;
pub const SNAKE_GRID_HEIGHT: i16 = 25;
pub const SNAKE_MOVE_DELAY_MS: u64 = 100;

// Flappy
pub const FLAPPY_WIDTH: f64 = 288.0;
pub const FLAPPY_HEIGHT: f64 = 512.0;
pub const FLAPPY_GROUND_Y: f64 = 400.0;
pub const FLAPPY_GRAVITY: f64 = 0.5;
pub const FLAPPY_JUMP_VELOCITY: f64 = -8.0;
pub const FLAPPY_PIPE_GAP: f64 = 150.0;
pub const FLAPPY_PIPE_WIDTH: f64 = 60.0;
pub const FLAPPY_PIPE_SPEED: f64 = 3.0;
pub const FLAPPY_PIPE_INTERVAL_MS: u64 = 1500;
pub const FLAPPY_GAP_MARGIN: f64 = 120.0;
pub const FLAPPY_BIRD_X: f64 = 80.0;
pub const FLAPPY_BIRD_WIDTH: f64 = 34.0;
pub const FLAPPY_BIRD_HEIGHT: f64 = 24.0;
pub const FLAPPY_HITBOX_INSET: f64 = 5.0;
pub const FLAPPY_WING_FRAMES: usize = 3;
pub const FLAPPY_WING_FRAME_UNITS: f64 = 5.0;
pub const FLAPPY_NAME_MAX_LEN: usize = 10;
