//! World data structures and per-entity kinematics.

use crate::constants::*;
use rand::Rng;

/// Axis-aligned bounding box. Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap test. Boxes that merely share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Tuning values read by the step loop.
///
/// Built once per session and owned by the [`World`]; `Default` mirrors the
/// values in [`crate::constants`].
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    pub screen_width: f64,
    /// Also the ground line for the early-fall check.
    pub screen_height: f64,
    pub player_x: f64,
    pub player_start_y: f64,
    pub player_width: f64,
    pub player_height: f64,
    pub gravity: f64,
    pub flap_strength: f64,
    pub obstacle_width: f64,
    pub obstacle_height: f64,
    pub gap_size: f64,
    pub gap_center_min: u32,
    pub gap_center_max: u32,
    pub base_speed: f64,
    pub speed_factor: f64,
    pub speed_tier_scores: Vec<u32>,
    pub spawn_interval: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            player_x: PLAYER_X,
            player_start_y: PLAYER_START_Y,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            gravity: GRAVITY,
            flap_strength: FLAP_STRENGTH,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            gap_size: OBSTACLE_GAP,
            gap_center_min: GAP_CENTER_MIN,
            gap_center_max: GAP_CENTER_MAX,
            base_speed: BASE_OBSTACLE_SPEED,
            speed_factor: SPEED_INCREASE_FACTOR,
            speed_tier_scores: SPEED_TIER_SCORES.to_vec(),
            spawn_interval: SPAWN_INTERVAL,
        }
    }
}

impl WorldConfig {
    /// X position where recycled obstacles re-enter: one spawn interval past
    /// the right edge of the surface.
    pub fn respawn_x(&self) -> f64 {
        self.screen_width + self.spawn_interval
    }

    pub fn is_speed_tier(&self, score: u32) -> bool {
        self.speed_tier_scores.contains(&score)
    }
}

/// The player-controlled rocket.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Fixed for the whole session.
    pub x: f64,
    pub y: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f64,
    pub width: f64,
    pub height: f64,
}

impl Player {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            x: config.player_x,
            y: config.player_start_y,
            velocity: 0.0,
            width: config.player_width,
            height: config.player_height,
        }
    }

    /// Overrides the current velocity; flaps do not stack.
    pub fn flap(&mut self, strength: f64) {
        self.velocity = strength;
    }

    pub fn update(&mut self, gravity: f64) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// A meteor pair: a top and a bottom barrier around one gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Vertical center of the gap, fixed at creation.
    pub gap_center: f64,
    /// Whether the player has already scored this obstacle.
    pub passed: bool,
    /// Horizontal speed in units/tick, kept in sync with the world's speed tier.
    pub speed: f64,
}

impl Obstacle {
    pub fn new(x: f64, gap_center: f64, speed: f64) -> Self {
        Self {
            x,
            gap_center,
            passed: false,
            speed,
        }
    }

    /// Create an obstacle at `x` with a random integer gap center drawn from
    /// the configured inclusive range.
    pub fn spawn<R: Rng>(x: f64, speed: f64, config: &WorldConfig, rng: &mut R) -> Self {
        let max = config.gap_center_max.max(config.gap_center_min);
        let gap_center = rng.gen_range(config.gap_center_min..=max);
        Self::new(x, gap_center as f64, speed)
    }

    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    pub fn top_bounds(&self, config: &WorldConfig) -> Aabb {
        Aabb::new(
            self.x,
            self.gap_center - config.gap_size / 2.0 - config.obstacle_height,
            config.obstacle_width,
            config.obstacle_height,
        )
    }

    pub fn bottom_bounds(&self, config: &WorldConfig) -> Aabb {
        Aabb::new(
            self.x,
            self.gap_center + config.gap_size / 2.0,
            config.obstacle_width,
            config.obstacle_height,
        )
    }

    /// True once the right edge has scrolled past the left edge of the surface.
    pub fn is_offscreen(&self, config: &WorldConfig) -> bool {
        self.x + config.obstacle_width < 0.0
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitCause {
    /// The rocket touched a top or bottom barrier.
    Obstacle,
    /// The rocket fell to the ground before clearing its first obstacle.
    Ground,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldStatus {
    Running,
    Crashed(HitCause),
}

/// Complete state of one game session.
#[derive(Debug, Clone)]
pub struct World {
    pub config: WorldConfig,
    pub player: Player,
    /// Fixed pool; slots are recycled in place, never removed.
    pub obstacles: [Obstacle; OBSTACLE_POOL_SIZE],
    pub score: u32,
    /// Current speed tier, shared by every obstacle.
    pub speed: f64,
    /// Set the first time any obstacle is passed.
    pub cleared_first: bool,
    pub status: WorldStatus,
    pub tick_count: u64,
}

impl World {
    /// Start a session: player at its start height with zero velocity, the
    /// obstacle pool lined up one spawn interval apart from the right edge.
    ///
    /// # Arguments
    /// * `config` - Tuning for the whole session; owned by the world from here on
    /// * `rng` - Source for the initial gap centres, also passed to every
    ///   [`step`](crate::world::step) so a seeded rng replays the same session
    ///
    /// With the default config the slots start at x = 500, 800 and 1100. The
    /// last one sits beyond [`WorldConfig::respawn_x`] until it is recycled.
    pub fn new<R: Rng>(config: WorldConfig, rng: &mut R) -> Self {
        let speed = config.base_speed;
        let obstacles = std::array::from_fn(|i| {
            let x = config.screen_width + i as f64 * config.spawn_interval;
            Obstacle::spawn(x, speed, &config, rng)
        });
        Self {
            player: Player::new(&config),
            obstacles,
            score: 0,
            speed,
            cleared_first: false,
            status: WorldStatus::Running,
            tick_count: 0,
            config,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == WorldStatus::Running
    }

    pub fn hit_cause(&self) -> Option<HitCause> {
        match self.status {
            WorldStatus::Running => None,
            WorldStatus::Crashed(cause) => Some(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersects(&Aabb::new(2.0, 2.0, 1.0, 1.0)));
        assert!(!a.intersects(&Aabb::new(20.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Aabb::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Aabb::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.intersects(&Aabb::new(-10.0, -10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_default_config_matches_constants() {
        let cfg = WorldConfig::default();
        assert_eq!(cfg.screen_width, 500.0);
        assert_eq!(cfg.screen_height, 550.0);
        assert_eq!(cfg.gravity, 0.5);
        assert_eq!(cfg.flap_strength, -5.0);
        assert_eq!(cfg.speed_tier_scores, vec![20, 40]);
        assert_eq!(cfg.respawn_x(), 800.0);
    }

    #[test]
    fn test_speed_tier_scores() {
        let cfg = WorldConfig::default();
        assert!(cfg.is_speed_tier(20));
        assert!(cfg.is_speed_tier(40));
        assert!(!cfg.is_speed_tier(0));
        assert!(!cfg.is_speed_tier(21));
        assert!(!cfg.is_speed_tier(60));
    }

    #[test]
    fn test_gravity_accrues_each_tick() {
        let cfg = WorldConfig::default();
        let mut player = Player::new(&cfg);
        let mut previous = player.velocity;
        for _ in 0..20 {
            player.update(cfg.gravity);
            assert_eq!(player.velocity - previous, 0.5);
            previous = player.velocity;
        }
        assert_eq!(player.velocity, 10.0);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let cfg = WorldConfig::default();
        let mut player = Player::new(&cfg);

        player.velocity = 12.5;
        player.flap(cfg.flap_strength);
        assert_eq!(player.velocity, -5.0);

        // A second flap does not stack
        player.flap(cfg.flap_strength);
        assert_eq!(player.velocity, -5.0);

        player.update(cfg.gravity);
        assert_eq!(player.velocity, -4.5);
        assert_eq!(player.y, 270.5);
    }

    #[test]
    fn test_player_bounds_follow_position() {
        let cfg = WorldConfig::default();
        let mut player = Player::new(&cfg);
        player.y = 300.25;
        assert_eq!(player.bounds(), Aabb::new(100.0, 300.25, 70.0, 70.0));
    }

    #[test]
    fn test_obstacle_bounds_derived_from_gap() {
        let cfg = WorldConfig::default();
        let obstacle = Obstacle::new(320.0, 250.0, 5.0);

        let top = obstacle.top_bounds(&cfg);
        assert_eq!(top, Aabb::new(320.0, -350.0, 70.0, 500.0));
        assert_eq!(top.bottom(), 150.0);

        let bottom = obstacle.bottom_bounds(&cfg);
        assert_eq!(bottom, Aabb::new(320.0, 350.0, 70.0, 500.0));
        assert_eq!(bottom.y - top.bottom(), cfg.gap_size);
    }

    #[test]
    fn test_obstacle_update_moves_left_and_boxes_follow() {
        let cfg = WorldConfig::default();
        let mut obstacle = Obstacle::new(320.0, 250.0, 6.25);
        obstacle.update();
        assert_eq!(obstacle.x, 313.75);
        assert_eq!(obstacle.top_bounds(&cfg).x, 313.75);
        assert_eq!(obstacle.bottom_bounds(&cfg).x, 313.75);
    }

    #[test]
    fn test_obstacle_offscreen_threshold() {
        let cfg = WorldConfig::default();
        assert!(!Obstacle::new(-70.0, 250.0, 5.0).is_offscreen(&cfg));
        assert!(Obstacle::new(-70.5, 250.0, 5.0).is_offscreen(&cfg));
    }

    #[test]
    fn test_spawn_gap_center_in_range() {
        let cfg = WorldConfig::default();
        let mut rng = test_rng();
        for _ in 0..500 {
            let obstacle = Obstacle::spawn(800.0, 5.0, &cfg, &mut rng);
            assert!(obstacle.gap_center >= 100.0 && obstacle.gap_center <= 400.0);
            assert_eq!(obstacle.gap_center.fract(), 0.0);
            assert!(!obstacle.passed);
            assert_eq!(obstacle.x, 800.0);
        }
    }

    #[test]
    fn test_new_world_layout() {
        let mut rng = test_rng();
        let world = World::new(WorldConfig::default(), &mut rng);

        assert_eq!(world.obstacles.len(), OBSTACLE_POOL_SIZE);
        let xs: Vec<f64> = world.obstacles.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![500.0, 800.0, 1100.0]);
        assert!(world.obstacles.iter().all(|o| o.speed == 5.0 && !o.passed));

        assert_eq!(world.player.x, 100.0);
        assert_eq!(world.player.y, 275.0);
        assert_eq!(world.player.velocity, 0.0);
        assert_eq!(world.score, 0);
        assert_eq!(world.speed, 5.0);
        assert!(!world.cleared_first);
        assert!(world.is_running());
        assert_eq!(world.hit_cause(), None);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = World::new(WorldConfig::default(), &mut test_rng());
        let b = World::new(WorldConfig::default(), &mut test_rng());
        assert_eq!(a.obstacles, b.obstacles);
    }
}
