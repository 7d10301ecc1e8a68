//! # trilha
//!
//! Turn engine for "Trilha do Equilíbrio", a 2-6 player race along a
//! 46-space track. Players roll a die, move forward, and resolve the card
//! raised by the space they land on (activity, stress, collaboration,
//! reward). A player with no stress cards left is eliminated. The game
//! ends when someone lands on the finish or at most one player is still
//! active.
//!
//! ## Design Principles
//!
//! 1. **Exclusive Ownership**: The engine owns the session and roster.
//!    Presentation sends `Intent`s and renders `Snapshot`s.
//!
//! 2. **Pure Rules**: Movement, card resolution, sharing and turn order are
//!    pure functions over plain data. The engine only sequences them.
//!
//! 3. **Optimistic Persistence**: Every change is written to a `Store`
//!    without transactions. A failed write during play is logged and the
//!    game continues from local state.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Roster and board use `im-rs`, so a
//!   snapshot per transition is O(1).
//!
//! - **Deterministic Dice**: ChaCha8-backed RNG with checkpointable state.
//!
//! ## Modules
//!
//! - `core`: Record ids, players, configuration, dice, session state
//! - `board`: Spaces and the validated track
//! - `effects`: Pending cards, card resolution, collaboration sharing
//! - `rules`: Movement, turn order, game results
//! - `store`: Persistence contract and in-memory store
//! - `engine`: The turn engine
//! - `error`: Error types

pub mod core;
pub mod board;
pub mod effects;
pub mod rules;
pub mod store;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    RecordId, PlayerId, PlayerColor, PlayerSetup, Player, Roster,
    GameRng, GameRngState, Dice, DieValue, RollAnimation,
    TrailConfig, Intent,
    GameSession, GameStatus, Snapshot, TurnPhase,
};

pub use crate::board::{Board, Space, SpaceKind, STANDARD_FINISH};

pub use crate::effects::{
    CardKind, PendingCardEffect, Resolution, CollaborationWindow, StressTransfer,
};

pub use crate::rules::{GameResult, WinReason, TurnAdvance, Landing};

pub use crate::store::{Store, StoreError, StoreResult, MemoryStore};

pub use crate::engine::{TurnEngine, Outcome, RollOutcome, AckOutcome};

pub use crate::error::{SetupError, BoardError, ConfigError, EngineError};
