//! Card effects.
//!
//! - `PendingCardEffect`: the card raised by a landing, blocking the turn
//! - `resolve_card_effect`: applies an acknowledged card to its player
//! - `CollaborationWindow`: stress-card sharing while a collaboration is open

mod effect;
mod resolver;
mod collaboration;

pub use effect::{CardKind, PendingCardEffect};
pub use resolver::{resolve_card_effect, Resolution};
pub use collaboration::{transfer_stress, CollaborationWindow, StressTransfer};
