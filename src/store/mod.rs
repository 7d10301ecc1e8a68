//! Persistence contract.
//!
//! The store keeps three record kinds (Game, Player, BoardSpace) keyed by
//! [`RecordId`]. It offers plain get / insert / targeted-update calls and
//! no transactions: two writes issued back to back may land one without
//! the other.
//!
//! The engine reads the board and roster through this trait and writes
//! after every state change. [`MemoryStore`] is the in-process
//! implementation.

mod error;
mod memory;
mod records;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use records::{
    BoardSpaceRecord, GameRecord, GameUpdate, NewBoardSpace, NewGame, NewPlayer, PlayerRecord,
    PlayerUpdate,
};

use crate::core::RecordId;

/// Record store consumed by the engine.
pub trait Store {
    // === Games ===

    /// Insert a game and return it with its assigned id.
    fn insert_game(&mut self, game: NewGame) -> StoreResult<GameRecord>;

    /// Load a game by id.
    fn game(&self, id: RecordId) -> StoreResult<Option<GameRecord>>;

    /// Write only the fields set in `update`.
    fn update_game(&mut self, id: RecordId, update: &GameUpdate) -> StoreResult<()>;

    // === Players ===

    /// Insert a player and return it with its assigned id.
    fn insert_player(&mut self, player: NewPlayer) -> StoreResult<PlayerRecord>;

    /// Load a player by id.
    fn player(&self, id: RecordId) -> StoreResult<Option<PlayerRecord>>;

    /// All players of a game, ordered by `player_order`.
    fn players_in_game(&self, game_id: RecordId) -> StoreResult<Vec<PlayerRecord>>;

    /// Write only the fields set in `update`.
    fn update_player(&mut self, id: RecordId, update: &PlayerUpdate) -> StoreResult<()>;

    // === Board ===

    /// Insert a board space and return it with its assigned id.
    fn insert_board_space(&mut self, space: NewBoardSpace) -> StoreResult<BoardSpaceRecord>;

    /// Every board space, ordered by position.
    fn board_spaces(&self) -> StoreResult<Vec<BoardSpaceRecord>>;
}
