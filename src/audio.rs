//! Sound effects.
//!
//! The world never plays sounds itself; `tick_events` turns its events into
//! [`Sound`] cues for whichever [`SoundPlayer`] is active.

use flappy_rocket::Settings;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// An obstacle was cleared.
    Score,
    /// The rocket crashed.
    Hit,
}

pub trait SoundPlayer {
    /// Fire and forget: must not block the frame loop.
    fn play(&mut self, sound: Sound);

    fn name(&self) -> &'static str;
}

/// Plays nothing.
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&mut self, _sound: Sound) {}

    fn name(&self) -> &'static str {
        "silent"
    }
}

/// Rings the terminal bell on a crash. Score cues are skipped; a bell per
/// obstacle is more noise than feedback.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SoundPlayer for TerminalBell<W> {
    fn play(&mut self, sound: Sound) {
        if sound == Sound::Hit {
            let result = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
            if let Err(e) = result {
                log::debug!("Terminal bell failed: {}", e);
            }
        }
    }

    fn name(&self) -> &'static str {
        "terminal bell"
    }
}

#[cfg(feature = "sound")]
mod synth {
    use super::{Sound, SoundPlayer};
    use rodio::source::{SineWave, Source};
    use rodio::{OutputStream, OutputStreamHandle, Sink};
    use std::time::Duration;

    /// Short sine-wave cues through the default audio device.
    pub struct SynthPlayer {
        // Dropping the stream stops all playback
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl SynthPlayer {
        pub fn open() -> Result<Self, rodio::StreamError> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                handle,
            })
        }

        fn tone(freq: f32, millis: u64, gain: f32) -> impl Source<Item = f32> + Send {
            SineWave::new(freq)
                .take_duration(Duration::from_millis(millis))
                .amplify(gain)
        }
    }

    impl SoundPlayer for SynthPlayer {
        fn play(&mut self, sound: Sound) {
            let sink = match Sink::try_new(&self.handle) {
                Ok(sink) => sink,
                Err(e) => {
                    log::warn!("Could not play {:?}: {}", sound, e);
                    return;
                }
            };
            match sound {
                // Rising two-note chirp
                Sound::Score => {
                    sink.append(Self::tone(660.0, 60, 0.15));
                    sink.append(Self::tone(990.0, 90, 0.15));
                }
                // Falling thud
                Sound::Hit => {
                    sink.append(Self::tone(220.0, 120, 0.25));
                    sink.append(Self::tone(110.0, 260, 0.25));
                }
            }
            sink.detach();
        }

        fn name(&self) -> &'static str {
            "synth"
        }
    }
}

/// Pick the best available backend for the current settings.
pub fn open_player(settings: &Settings) -> Box<dyn SoundPlayer> {
    if !settings.sound {
        return Box::new(Silent);
    }

    #[cfg(feature = "sound")]
    {
        match synth::SynthPlayer::open() {
            Ok(player) => return Box::new(player),
            Err(e) => log::warn!("Audio device unavailable, using terminal bell: {}", e),
        }
    }

    Box::new(TerminalBell::new(io::stdout()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_rings_only_on_hit() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(Sound::Score);
        assert!(bell.out.is_empty());
        bell.play(Sound::Hit);
        assert_eq!(bell.out, b"\x07");
    }

    #[test]
    fn test_muted_settings_give_silent_player() {
        let settings = Settings {
            sound: false,
            ..Settings::default()
        };
        assert_eq!(open_player(&settings).name(), "silent");
    }
}
