//! Error types.
//!
//! Setup, board and config errors are raised before a game starts and are
//! recoverable by fixing the input. `EngineError` covers intents the
//! engine refuses in the current state. Store failures during play are not
//! errors here: the engine logs them and keeps its local state.

use thiserror::Error;

use crate::core::{GameStatus, PlayerColor, PlayerId};
use crate::store::StoreError;

/// Invalid player setup. Blocks the game from starting.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("a game needs between {min} and {max} players, got {count}")]
    PlayerCount { count: usize, min: usize, max: usize },

    #[error("player {seat} has an empty name")]
    EmptyName { seat: usize },

    #[error("color {color} was chosen by more than one player")]
    DuplicateColor { color: PlayerColor },
}

/// Board that violates the track invariants.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has no spaces")]
    Empty,

    #[error("board has no start space")]
    MissingStart,

    #[error("board has more than one start space")]
    MultipleStarts,

    #[error("start space must be at position 0, found at {0}")]
    StartNotFirst(u8),

    #[error("board has no finish space")]
    MissingFinish,

    #[error("board has more than one finish space")]
    MultipleFinishes,

    #[error("finish space must be the last position ({last}), found at {found}")]
    FinishNotLast { found: u8, last: u8 },

    #[error("board positions must be contiguous: expected {expected}, found {found}")]
    Gap { expected: u8, found: u8 },
}

/// Configuration that could not be loaded or is inconsistent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Intents the engine refuses, plus failures while starting or resuming.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("game is {0}, not playing")]
    NotPlaying(GameStatus),

    #[error("it is {current}'s turn, not {requested}'s")]
    NotYourTurn { current: PlayerId, requested: PlayerId },

    #[error("a card effect must be resolved before rolling")]
    CardPending,

    #[error("no card effect is waiting to be resolved")]
    NoPendingEffect,

    #[error("stress cards can only be shared during a collaboration")]
    NoCollaboration,

    #[error("{0} cannot share a stress card with themselves")]
    SelfShare(PlayerId),

    #[error("{0} has no stress cards to share")]
    NoStressToShare(PlayerId),

    #[error("{0} already shared a stress card in this collaboration")]
    AlreadyShared(PlayerId),

    #[error("{requested} is not the player being helped ({recipient})")]
    NotRecipient { recipient: PlayerId, requested: PlayerId },

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("die value {0} outside 1..=6")]
    InvalidDie(u8),

    #[error("corrupt game record: {0}")]
    CorruptRecord(String),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
