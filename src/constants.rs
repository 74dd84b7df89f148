// Logical surface (all world coordinates, y grows downward)
pub const SCREEN_WIDTH: f64 = 500.0;
pub const SCREEN_HEIGHT: f64 = 550.0;

// Player
pub const PLAYER_X: f64 = 100.0;
pub const PLAYER_START_Y: f64 = 275.0;
pub const PLAYER_WIDTH: f64 = 70.0;
pub const PLAYER_HEIGHT: f64 = 70.0;
pub const GRAVITY: f64 = 0.5;
pub const FLAP_STRENGTH: f64 = -5.0;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 70.0;
pub const OBSTACLE_HEIGHT: f64 = 500.0;
pub const OBSTACLE_GAP: f64 = 200.0;
pub const GAP_CENTER_MIN: u32 = 100;
pub const GAP_CENTER_MAX: u32 = 400;
pub const OBSTACLE_POOL_SIZE: usize = 3;
pub const SPAWN_INTERVAL: f64 = 300.0;

// Difficulty progression
pub const BASE_OBSTACLE_SPEED: f64 = 5.0;
pub const SPEED_INCREASE_FACTOR: f64 = 1.25;
pub const SPEED_TIER_SCORES: [u32; 2] = [20, 40];

// Frame pacing
pub const FRAME_RATE: u32 = 30;
pub const MIN_FRAME_RATE: u32 = 1;
pub const MAX_FRAME_RATE: u32 = 120;

// Persistence
pub const MAX_HIGH_SCORES: usize = 5;
pub const DATA_DIR_NAME: &str = ".flappy-rocket";
pub const HIGHSCORE_FILENAME: &str = "highscores.txt";
pub const SETTINGS_FILENAME: &str = "settings.json";
pub const LOG_FILENAME: &str = "flappy-rocket.log";
pub const LOG_ENV_VAR: &str = "FLAPPY_ROCKET_LOG";
