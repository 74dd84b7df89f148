//! Terminal rendering. Nothing here changes game state.

pub mod game_common;
pub mod menu_scene;
pub mod play_scene;
pub mod scores_scene;

/// Window title shown on every screen.
pub const TITLE: &str = " Flappy Rocket ";
