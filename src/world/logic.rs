//! Step loop for the world: kinematics, obstacle recycling, scoring,
//! difficulty tiers and collision.

use super::types::{HitCause, Obstacle, World, WorldStatus};
use rand::Rng;

/// Input actions understood by the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldInput {
    /// Upward impulse.
    Flap,
    /// Any other key.
    Other,
}

/// One-shot notifications produced by a tick, for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldEvent {
    /// An obstacle was passed; `score` is the new total.
    Scored { score: u32 },
    /// The speed tier went up; `speed` is the new shared speed.
    SpeedUp { speed: f64 },
    /// The session is over.
    Hit { cause: HitCause },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Stop,
}

/// Result of a single [`step`].
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub outcome: StepOutcome,
    pub events: Vec<WorldEvent>,
}

impl StepReport {
    fn stopped() -> Self {
        Self {
            outcome: StepOutcome::Stop,
            events: Vec::new(),
        }
    }
}

/// Apply player input. Takes effect immediately, before the next tick.
pub fn process_input(world: &mut World, input: WorldInput) {
    if !world.is_running() {
        return;
    }
    match input {
        WorldInput::Flap => world.player.flap(world.config.flap_strength),
        WorldInput::Other => {}
    }
}

/// Advance the world by one tick.
///
/// Every phase runs over the whole obstacle pool before the next one starts,
/// so a speed change made while scoring applies to all obstacles uniformly
/// from the following tick. Stepping a crashed world does nothing.
pub fn step<R: Rng>(world: &mut World, rng: &mut R) -> StepReport {
    if !world.is_running() {
        return StepReport::stopped();
    }

    world.tick_count += 1;
    let mut events = Vec::new();

    world.player.update(world.config.gravity);
    advance_obstacles(world, rng);
    award_passes(world, &mut events);

    if let Some(cause) = detect_hit(world) {
        world.status = WorldStatus::Crashed(cause);
        events.push(WorldEvent::Hit { cause });
        return StepReport {
            outcome: StepOutcome::Stop,
            events,
        };
    }

    StepReport {
        outcome: StepOutcome::Continue,
        events,
    }
}

/// Scroll every obstacle and recycle the ones that left the surface in place.
fn advance_obstacles<R: Rng>(world: &mut World, rng: &mut R) {
    let respawn_x = world.config.respawn_x();
    for slot in world.obstacles.iter_mut() {
        slot.update();
        if slot.is_offscreen(&world.config) {
            *slot = Obstacle::spawn(respawn_x, world.speed, &world.config, rng);
        }
    }
}

/// Score each obstacle the player has just moved past, once per obstacle.
fn award_passes(world: &mut World, events: &mut Vec<WorldEvent>) {
    let player_x = world.player.x;
    for i in 0..world.obstacles.len() {
        let obstacle = &mut world.obstacles[i];
        if obstacle.passed || obstacle.x >= player_x {
            continue;
        }
        obstacle.passed = true;
        world.score += 1;
        world.cleared_first = true;
        events.push(WorldEvent::Scored { score: world.score });

        if world.config.is_speed_tier(world.score) {
            raise_speed_tier(world);
            events.push(WorldEvent::SpeedUp { speed: world.speed });
        }
    }
}

fn raise_speed_tier(world: &mut World) {
    world.speed *= world.config.speed_factor;
    for obstacle in world.obstacles.iter_mut() {
        obstacle.speed = world.speed;
    }
}

/// Barrier contact, or an early fall to the ground before any obstacle was
/// cleared. Once an obstacle has been passed, the ground no longer ends the
/// session.
fn detect_hit(world: &World) -> Option<HitCause> {
    let player = world.player.bounds();
    let touched = world.obstacles.iter().any(|o| {
        player.intersects(&o.top_bounds(&world.config))
            || player.intersects(&o.bottom_bounds(&world.config))
    });
    if touched {
        return Some(HitCause::Obstacle);
    }

    if world.player.y >= world.config.screen_height && !world.cleared_first {
        return Some(HitCause::Ground);
    }

    None
}
