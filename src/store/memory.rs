//! In-memory store.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{StoreError, StoreResult};
use super::records::{
    BoardSpaceRecord, GameRecord, GameUpdate, NewBoardSpace, NewGame, NewPlayer, PlayerRecord,
    PlayerUpdate,
};
use super::Store;
use crate::board::Board;
use crate::core::RecordId;

/// In-memory implementation of [`Store`].
///
/// Ids are allocated sequentially across all record kinds. The whole store
/// can be checkpointed to bytes with [`to_bytes`](Self::to_bytes).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    games: FxHashMap<RecordId, GameRecord>,
    players: FxHashMap<RecordId, PlayerRecord>,
    board: Vec<BoardSpaceRecord>,
    last_id: RecordId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `board` and nothing else.
    pub fn with_board(board: &Board) -> Self {
        let mut store = Self::new();
        // A validated board has one space per position.
        for space in board.iter() {
            let id = store.alloc_id();
            store.board.push(BoardSpaceRecord::new(id, NewBoardSpace::from(space)));
        }
        store
    }

    /// Insert every space of `board`. Fails on the first position that is
    /// already stored.
    pub fn seed_board(&mut self, board: &Board) -> StoreResult<()> {
        for space in board.iter() {
            self.insert_board_space(NewBoardSpace::from(space))?;
        }
        Ok(())
    }

    /// Number of stored games.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Serialize the whole store.
    pub fn to_bytes(&self) -> StoreResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a store from [`to_bytes`](Self::to_bytes) output.
    pub fn from_bytes(bytes: &[u8]) -> StoreResult<Self> {
        let store: Self = bincode::deserialize(bytes)?;
        if store.board.windows(2).any(|w| w[0].position >= w[1].position) {
            return Err(StoreError::CorruptedData("board spaces out of order".to_string()));
        }
        Ok(store)
    }

    fn alloc_id(&mut self) -> RecordId {
        self.last_id = self.last_id.next();
        self.last_id
    }
}

impl Store for MemoryStore {
    fn insert_game(&mut self, game: NewGame) -> StoreResult<GameRecord> {
        let record = GameRecord {
            id: self.alloc_id(),
            status: game.status,
            current_player_index: game.current_player_index,
        };
        self.games.insert(record.id, record.clone());
        Ok(record)
    }

    fn game(&self, id: RecordId) -> StoreResult<Option<GameRecord>> {
        Ok(self.games.get(&id).cloned())
    }

    fn update_game(&mut self, id: RecordId, update: &GameUpdate) -> StoreResult<()> {
        let record = self
            .games
            .get_mut(&id)
            .ok_or(StoreError::NotFound { kind: "game", id })?;
        update.apply(record);
        Ok(())
    }

    fn insert_player(&mut self, player: NewPlayer) -> StoreResult<PlayerRecord> {
        if !self.games.contains_key(&player.game_id) {
            return Err(StoreError::NotFound {
                kind: "game",
                id: player.game_id,
            });
        }
        let record = PlayerRecord {
            id: self.alloc_id(),
            game_id: player.game_id,
            name: player.name,
            color: player.color,
            position: player.position,
            activity_cards: player.activity_cards,
            stress_cards: player.stress_cards,
            player_order: player.player_order,
        };
        self.players.insert(record.id, record.clone());
        Ok(record)
    }

    fn player(&self, id: RecordId) -> StoreResult<Option<PlayerRecord>> {
        Ok(self.players.get(&id).cloned())
    }

    fn players_in_game(&self, game_id: RecordId) -> StoreResult<Vec<PlayerRecord>> {
        let mut players: Vec<_> = self
            .players
            .values()
            .filter(|p| p.game_id == game_id)
            .cloned()
            .collect();
        players.sort_by_key(|p| (p.player_order, p.id));
        Ok(players)
    }

    fn update_player(&mut self, id: RecordId, update: &PlayerUpdate) -> StoreResult<()> {
        let record = self
            .players
            .get_mut(&id)
            .ok_or(StoreError::NotFound { kind: "player", id })?;
        update.apply(record);
        Ok(())
    }

    fn insert_board_space(&mut self, space: NewBoardSpace) -> StoreResult<BoardSpaceRecord> {
        let at = self.board.partition_point(|s| s.position < space.position);
        if self.board.get(at).is_some_and(|s| s.position == space.position) {
            return Err(StoreError::DuplicatePosition(space.position));
        }
        let record = BoardSpaceRecord::new(self.alloc_id(), space);
        self.board.insert(at, record.clone());
        Ok(record)
    }

    fn board_spaces(&self) -> StoreResult<Vec<BoardSpaceRecord>> {
        Ok(self.board.clone())
    }
}
