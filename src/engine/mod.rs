//! Turn engine.
//!
//! - `TurnEngine`: owns session and roster, sequences the rules, writes to
//!   the store
//! - `validate_setups`: setup-screen checks run before a game starts
//! - `Observers`: snapshot subscribers
//! - `RollOutcome` / `AckOutcome` / `Outcome`: what each intent did

mod observer;
mod outcome;
mod setup;
mod turn;

pub use observer::{ObserverId, Observers};
pub use outcome::{AckOutcome, Outcome, RollOutcome};
pub use setup::validate_setups;
pub use turn::TurnEngine;
