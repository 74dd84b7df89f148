//! User settings (~/.flappy-rocket/settings.json) and command-line overrides.

use crate::constants::{FRAME_RATE, HIGHSCORE_FILENAME, MAX_FRAME_RATE, MIN_FRAME_RATE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Persisted user preferences. Unknown or missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ticks (and frames) per second.
    pub frame_rate: u32,
    /// Play score/hit sounds.
    pub sound: bool,
    /// Score file location; `None` keeps it in the data directory.
    pub scores_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            sound: true,
            scores_file: None,
        }
    }
}

impl Settings {
    pub fn frame_duration(&self) -> Duration {
        let fps = self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE);
        Duration::from_millis(1000 / fps as u64)
    }

    /// Where high scores are read and written.
    pub fn scores_path(&self, data_dir: &Path) -> PathBuf {
        self.scores_file
            .clone()
            .unwrap_or_else(|| data_dir.join(HIGHSCORE_FILENAME))
    }

    /// Fold command-line overrides into the loaded settings.
    pub fn apply(&mut self, args: &CliArgs) {
        if let Some(path) = &args.scores_file {
            self.scores_file = Some(path.clone());
        }
        if let Some(fps) = args.frame_rate {
            self.frame_rate = fps;
        }
        if args.mute {
            self.sound = false;
        }
    }
}

/// Options accepted when starting a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub scores_file: Option<PathBuf>,
    pub frame_rate: Option<u32>,
    /// Fixed RNG seed for reproducible obstacle layouts.
    pub seed: Option<u64>,
    pub mute: bool,
}

/// What the binary should do after parsing its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Play(CliArgs),
    Version,
    Help,
}

pub const USAGE: &str = "\
Flappy Rocket - steer a rocket through a meteor field

Usage: flappy-rocket [options]

Options:
  --scores <PATH>  Read and write high scores at PATH
  --seed <N>       Use a fixed seed for obstacle placement
  --fps <N>        Frames per second (1-120, default 30)
  --mute           Disable sound effects
  --version, -v    Show version information
  --help, -h       Show this help message

Controls: SPACE/ENTER/UP flap and confirm, ESC/Q quit";

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<CliAction, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--version" | "-v" => return Ok(CliAction::Version),
                "--help" | "-h" => return Ok(CliAction::Help),
                "--mute" => parsed.mute = true,
                "--scores" => {
                    let value = next_value(&mut args, "--scores")?;
                    parsed.scores_file = Some(PathBuf::from(value));
                }
                "--seed" => {
                    let value = next_value(&mut args, "--seed")?;
                    let seed = value
                        .parse()
                        .map_err(|_| format!("Invalid seed: {}", value))?;
                    parsed.seed = Some(seed);
                }
                "--fps" => {
                    let value = next_value(&mut args, "--fps")?;
                    let fps: u32 = value
                        .parse()
                        .map_err(|_| format!("Invalid frame rate: {}", value))?;
                    if !(MIN_FRAME_RATE..=MAX_FRAME_RATE).contains(&fps) {
                        return Err(format!(
                            "Frame rate must be between {} and {}",
                            MIN_FRAME_RATE, MAX_FRAME_RATE
                        ));
                    }
                    parsed.frame_rate = Some(fps);
                }
                other => return Err(format!("Unknown option: {}", other)),
            }
        }

        Ok(CliAction::Play(parsed))
    }
}

fn next_value<I, S>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    args.next()
        .map(|v| v.as_ref().to_string())
        .ok_or_else(|| format!("{} requires a value", flag))
}
