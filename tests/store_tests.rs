//! Engine behaviour against the store contract.
//!
//! `FlakyStore` wraps a `MemoryStore` and fails every update once its
//! switch is flipped, standing in for a remote backend that drops writes.

use std::cell::Cell;
use std::rc::Rc;

use trilha::board::{Board, SpaceKind};
use trilha::core::{DieValue, GameStatus, PlayerColor, PlayerId, PlayerSetup, RecordId, TrailConfig};
use trilha::error::EngineError;
use trilha::store::{
    BoardSpaceRecord, GameRecord, GameUpdate, MemoryStore, NewBoardSpace, NewGame, NewPlayer,
    PlayerRecord, PlayerUpdate, Store, StoreError, StoreResult,
};
use trilha::TurnEngine;

// ============================================================================
// Helpers
// ============================================================================

struct FlakyStore {
    inner: MemoryStore,
    failing: Rc<Cell<bool>>,
}

impl FlakyStore {
    fn new(failing: Rc<Cell<bool>>) -> Self {
        Self {
            inner: MemoryStore::with_board(&Board::standard()),
            failing,
        }
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.get() {
            Err(StoreError::Backend("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Store for FlakyStore {
    fn insert_game(&mut self, game: NewGame) -> StoreResult<GameRecord> {
        self.inner.insert_game(game)
    }

    fn game(&self, id: RecordId) -> StoreResult<Option<GameRecord>> {
        self.inner.game(id)
    }

    fn update_game(&mut self, id: RecordId, update: &GameUpdate) -> StoreResult<()> {
        self.check()?;
        self.inner.update_game(id, update)
    }

    fn insert_player(&mut self, player: NewPlayer) -> StoreResult<PlayerRecord> {
        self.inner.insert_player(player)
    }

    fn player(&self, id: RecordId) -> StoreResult<Option<PlayerRecord>> {
        self.inner.player(id)
    }

    fn players_in_game(&self, game_id: RecordId) -> StoreResult<Vec<PlayerRecord>> {
        self.inner.players_in_game(game_id)
    }

    fn update_player(&mut self, id: RecordId, update: &PlayerUpdate) -> StoreResult<()> {
        self.check()?;
        self.inner.update_player(id, update)
    }

    fn insert_board_space(&mut self, space: NewBoardSpace) -> StoreResult<BoardSpaceRecord> {
        self.inner.insert_board_space(space)
    }

    fn board_spaces(&self) -> StoreResult<Vec<BoardSpaceRecord>> {
        self.inner.board_spaces()
    }
}

fn setups() -> Vec<PlayerSetup> {
    vec![
        PlayerSetup::new("Ana", PlayerColor::Rosa),
        PlayerSetup::new("Bruno", PlayerColor::Azul),
    ]
}

fn die(value: u8) -> DieValue {
    DieValue::new(value).unwrap()
}

// ============================================================================
// Optimistic writes
// ============================================================================

/// Failed writes during play leave local state ahead of the store.
#[test]
fn test_failed_writes_do_not_stop_play() {
    let failing = Rc::new(Cell::new(false));
    let mut engine = TurnEngine::start(TrailConfig::default(), &setups(), FlakyStore::new(Rc::clone(&failing))).unwrap();
    let record = engine.roster()[PlayerId(0)].record;

    failing.set(true);
    let outcome = engine.roll(PlayerId(0), die(3)).unwrap();
    if outcome.is_blocked() {
        engine.acknowledge().unwrap();
    }

    assert_eq!(engine.roster()[PlayerId(0)].position, 3);
    assert_eq!(engine.current_player(), PlayerId(1));

    let stored = engine.store().player(record).unwrap().unwrap();
    assert_eq!(stored.position, 0);
    let game = engine.store().game(engine.game_id()).unwrap().unwrap();
    assert_eq!(game.current_player_index, 0);
}

/// Writes issued while starting a game are not optional.
#[test]
fn test_failed_start_is_an_error() {
    let failing = Rc::new(Cell::new(true));
    let result = TurnEngine::start(TrailConfig::default(), &setups(), FlakyStore::new(failing));

    assert!(matches!(result, Err(EngineError::Store(StoreError::Backend(_)))));
}

// ============================================================================
// Records
// ============================================================================

/// Players are stored trimmed, in seat order, with hex colors.
#[test]
fn test_player_records_written_at_start() {
    let setups = vec![
        PlayerSetup::new("  Ana ", PlayerColor::Verde),
        PlayerSetup::new("Bruno", PlayerColor::Laranja),
        PlayerSetup::new("Carla", PlayerColor::Rosa),
    ];
    let engine = TurnEngine::start(TrailConfig::default(), &setups, MemoryStore::with_board(&Board::standard())).unwrap();

    let records = engine.store().players_in_game(engine.game_id()).unwrap();
    let rows: Vec<_> = records
        .iter()
        .map(|r| (r.name.as_str(), r.color.as_str(), r.player_order))
        .collect();

    assert_eq!(
        rows,
        vec![("Ana", "#4CAF50", 0), ("Bruno", "#FF9800", 1), ("Carla", "#E91E63", 2)]
    );
    assert!(records.iter().all(|r| r.activity_cards == 0 && r.stress_cards == 10));
}

/// Starting values come from the configuration.
#[test]
fn test_configured_starting_cards() {
    let config = TrailConfig::default().with_starting_cards(2, 5);
    let engine = TurnEngine::start(config, &setups(), MemoryStore::with_board(&Board::standard())).unwrap();

    let records = engine.store().players_in_game(engine.game_id()).unwrap();
    assert!(records.iter().all(|r| r.activity_cards == 2 && r.stress_cards == 5));
}

/// A checkpointed store resumes the same game.
#[test]
fn test_resume_from_checkpoint() {
    let store = MemoryStore::with_board(&Board::standard());
    let mut engine = TurnEngine::start(TrailConfig::default(), &setups(), store).unwrap();
    engine.roll(PlayerId(0), die(2)).unwrap();
    engine.acknowledge().unwrap();
    let game_id = engine.game_id();

    let bytes = engine.into_store().to_bytes().unwrap();
    let restored = MemoryStore::from_bytes(&bytes).unwrap();
    let resumed = TurnEngine::resume(TrailConfig::default(), restored, game_id).unwrap();

    assert_eq!(resumed.current_player(), PlayerId(1));
    assert_eq!(resumed.roster()[PlayerId(0)].position, 2);
    assert_eq!(resumed.session().status, GameStatus::Playing);
}

/// Corrupt stored counts are rejected on resume.
#[test]
fn test_resume_rejects_corrupt_player() {
    let engine = TurnEngine::start(TrailConfig::default(), &setups(), MemoryStore::with_board(&Board::standard())).unwrap();
    let game_id = engine.game_id();
    let record = engine.roster()[PlayerId(1)].record;

    let mut store = engine.into_store();
    store.update_player(record, &PlayerUpdate::stress_cards(11)).unwrap();

    let result = TurnEngine::resume(TrailConfig::default(), store, game_id);
    assert!(matches!(result, Err(EngineError::CorruptRecord(_))));
}

/// Two stored players sharing a color cannot be resumed.
#[test]
fn test_resume_rejects_duplicate_colors() {
    let engine = TurnEngine::start(TrailConfig::default(), &setups(), MemoryStore::with_board(&Board::standard())).unwrap();
    let game_id = engine.game_id();

    let mut store = engine.into_store();
    store
        .insert_player(NewPlayer {
            game_id,
            name: "Carla".to_string(),
            color: PlayerColor::Rosa.hex().to_string(),
            position: 0,
            activity_cards: 0,
            stress_cards: 10,
            player_order: 2,
        })
        .unwrap();

    let result = TurnEngine::resume(TrailConfig::default(), store, game_id);
    assert!(matches!(result, Err(EngineError::CorruptRecord(_))));
}

/// The stored player count must fit the configured range.
#[test]
fn test_resume_rejects_player_count() {
    let engine = TurnEngine::start(TrailConfig::default(), &setups(), MemoryStore::with_board(&Board::standard())).unwrap();
    let game_id = engine.game_id();

    let config = TrailConfig::default().with_players(3, 6);
    let result = TurnEngine::resume(config, engine.into_store(), game_id);
    assert!(matches!(result, Err(EngineError::CorruptRecord(_))));
}

/// A rejected duplicate board space leaves the board usable.
#[test]
fn test_duplicate_board_space_keeps_board() {
    let mut store = MemoryStore::with_board(&Board::standard());
    let err = store
        .insert_board_space(NewBoardSpace {
            position: 10,
            kind: SpaceKind::Stress,
            activity_text: None,
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicatePosition(10)));

    let engine = TurnEngine::start(TrailConfig::default(), &setups(), store).unwrap();
    assert_eq!(engine.board().finish_position(), 45);
}

/// A game interrupted before leaving setup resumes as playing.
#[test]
fn test_resume_completes_setup() {
    let engine = TurnEngine::start(TrailConfig::default(), &setups(), MemoryStore::with_board(&Board::standard())).unwrap();
    let game_id = engine.game_id();

    let mut store = engine.into_store();
    store.update_game(game_id, &GameUpdate::status(GameStatus::Setup)).unwrap();

    let resumed = TurnEngine::resume(TrailConfig::default(), store, game_id).unwrap();
    assert!(resumed.session().is_playing());
    assert_eq!(
        resumed.store().game(game_id).unwrap().unwrap().status,
        GameStatus::Playing
    );
}
