//! Maps [`WorldEvent`]s to sound cues and log lines.
//!
//! Binary-only: it bridges pure world events to the audio backend.

use crate::audio::{Sound, SoundPlayer};
use flappy_rocket::WorldEvent;

pub fn apply_world_events(events: &[WorldEvent], sound: &mut dyn SoundPlayer) {
    for event in events {
        match event {
            WorldEvent::Scored { .. } => sound.play(Sound::Score),
            WorldEvent::SpeedUp { speed } => {
                log::info!("Speed tier raised to {:.4}", speed);
            }
            WorldEvent::Hit { cause } => {
                log::info!("Rocket down: {:?}", cause);
                sound.play(Sound::Hit);
            }
        }
    }
}
