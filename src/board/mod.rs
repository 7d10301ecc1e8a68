//! The track players race along.
//!
//! - `Space` / `SpaceKind`: one position and its effect
//! - `Board`: the validated, immutable sequence of spaces
//!
//! Boards are normally read from the store once at game start. The
//! standard 46-space track is available for seeding a store.

mod space;
mod track;

pub use space::{Space, SpaceKind};
pub use track::{Board, STANDARD_FINISH};
