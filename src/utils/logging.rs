//! File-backed logging.
//!
//! The terminal belongs to the full-screen UI, so log records go to a file in
//! the data directory instead of stderr.

use crate::constants::LOG_ENV_VAR;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Install the global logger, appending to `path`.
///
/// The filter comes from `FLAPPY_ROCKET_LOG` (env_logger syntax), `info` by
/// default.
pub fn init_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::new().filter_or(LOG_ENV_VAR, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
