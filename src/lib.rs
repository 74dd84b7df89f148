//! Flappy Rocket - Terminal Side-Scroller Library
//!
//! Game rules, persistence and settings, kept free of terminal I/O so they can
//! be driven and tested without a screen or audio device.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod highscores;
pub mod utils;
pub mod world;

pub use config::{CliAction, CliArgs, Settings};
pub use constants::*;
pub use world::{
    process_input, step, HitCause, Obstacle, Player, StepOutcome, StepReport, World,
    WorldConfig, WorldEvent, WorldInput, WorldStatus,
};
