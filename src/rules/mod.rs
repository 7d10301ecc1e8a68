//! Progression rules.
//!
//! Pure functions the engine sequences:
//! - `destination` / `classify_landing`: movement and what a landing triggers
//! - `advance_turn`: next active seat, or the end of the game
//! - `GameResult`: how a game ended
//!
//! Nothing here touches the store.

mod movement;
mod result;
mod turn_order;

pub use movement::{classify_landing, destination, Landing};
pub use result::{GameResult, WinReason};
pub use turn_order::{advance_turn, TurnAdvance};
