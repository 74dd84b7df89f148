//! Utility modules: data directory persistence, logging.

pub mod logging;
pub mod persistence;

pub use logging::init_logging;
pub use persistence::{data_dir, load_json_or_default, save_json};
