//! Core types: identifiers, players, configuration, dice, session state.
//!
//! Everything here is plain data with small helpers. Progression rules
//! live in [`crate::rules`]; the engine that sequences them lives in
//! [`crate::engine`].

pub mod entity;
pub mod player;
pub mod rng;
pub mod dice;
pub mod config;
pub mod action;
pub mod state;

pub use entity::RecordId;
pub use player::{default_setups, Player, PlayerColor, PlayerId, PlayerSetup, Roster};
pub use rng::{GameRng, GameRngState};
pub use dice::{Dice, DieValue, RollAnimation};
pub use config::TrailConfig;
pub use action::Intent;
pub use state::{GameSession, GameStatus, Snapshot, TurnPhase};
