//! The game world: a rocket falling under gravity through a scrolling stream
//! of gapped meteor barriers.
//!
//! `types` holds the entities and their kinematics, `logic` advances the
//! whole world one tick and reports what happened as [`WorldEvent`]s.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
