//! The turn engine.
//!
//! `TurnEngine` owns the session and the roster exclusively. Presentation
//! code reads [`Snapshot`]s and sends intents; it never touches a player
//! record directly.
//!
//! ## Turn cycle
//!
//! ```text
//! AwaitingRoll --roll--> AwaitingCardResolution --acknowledge--> AwaitingRoll (next seat)
//!       |                        |
//!       +--start space-----------+---------------------------> AwaitingRoll (next seat)
//!       +--finish space / <=1 active--------------------------> Finished
//! ```
//!
//! While a collaboration card is pending, other players may call
//! [`share_stress_card`](TurnEngine::share_stress_card) any number of times
//! before the current player acknowledges.
//!
//! ## Persistence
//!
//! Every change is written to the [`Store`] as a targeted update right
//! after it is applied locally. Writes during play are optimistic: a
//! failed write is logged and play continues from local state. Writes while
//! starting or resuming a game are propagated.

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use super::observer::{ObserverId, Observers};
use super::outcome::{AckOutcome, Outcome, RollOutcome};
use super::setup::validate_setups;
use crate::board::Board;
use crate::core::{
    Dice, DieValue, GameRng, GameRngState, GameSession, GameStatus, Intent, Player, PlayerColor, PlayerId,
    PlayerSetup, RecordId, RollAnimation, Roster, Snapshot, TrailConfig, TurnPhase,
};
use crate::effects::{
    resolve_card_effect, CardKind, CollaborationWindow, PendingCardEffect, Resolution,
    StressTransfer,
};
use crate::error::EngineError;
use crate::rules::{advance_turn, classify_landing, destination, GameResult, Landing, TurnAdvance, WinReason};
use crate::store::{
    BoardSpaceRecord, GameUpdate, NewGame, NewPlayer, PlayerRecord, PlayerUpdate, Store, StoreError,
};

/// Progression state machine for one game.
#[derive(Debug)]
pub struct TurnEngine<S: Store> {
    config: TrailConfig,
    board: Board,
    store: S,
    game_id: RecordId,
    session: GameSession,
    roster: Roster,
    phase: TurnPhase,
    pending: Option<PendingCardEffect>,
    collaboration: Option<CollaborationWindow>,
    dice: Dice,
    last_roll: Option<DieValue>,
    version: u64,
    observers: Observers,
}

impl<S: Store> TurnEngine<S> {
    /// Create a game from validated setups.
    ///
    /// Reads the board from `store`, inserts the game (`setup`) and one
    /// player per seat, then moves the game to `playing` with seat 0 to
    /// roll first.
    pub fn start(config: TrailConfig, setups: &[PlayerSetup], mut store: S) -> Result<Self, EngineError> {
        config.validate()?;
        let setups = validate_setups(setups, &config)?;
        let board = load_board(&store)?;

        let game = store.insert_game(NewGame {
            status: GameStatus::Setup,
            current_player_index: 0,
        })?;

        let mut players = Vec::with_capacity(setups.len());
        for (seat, setup) in setups.into_iter().enumerate() {
            let record = store.insert_player(NewPlayer {
                game_id: game.id,
                name: setup.name.clone(),
                color: setup.color.hex().to_string(),
                position: 0,
                activity_cards: config.starting_activity,
                stress_cards: config.starting_stress,
                player_order: seat as u8,
            })?;
            players.push(Player {
                id: PlayerId(seat as u8),
                record: record.id,
                name: setup.name,
                color: setup.color,
                position: 0,
                activity_cards: config.starting_activity,
                stress_cards: config.starting_stress,
            });
        }

        store.update_game(game.id, &GameUpdate::status(GameStatus::Playing))?;

        let mut session = GameSession::new(players.len());
        session.status = GameStatus::Playing;

        info!(game = %game.id, players = players.len(), "game started");

        Ok(Self::assemble(config, board, store, game.id, session, Roster::new(players)))
    }

    /// Rebuild an engine from persisted records.
    ///
    /// Pending cards are never persisted, so a resumed game always waits
    /// for a roll. If the stored current player is eliminated the turn is
    /// advanced first.
    pub fn resume(config: TrailConfig, mut store: S, game_id: RecordId) -> Result<Self, EngineError> {
        config.validate()?;
        let board = load_board(&store)?;

        let game = store.game(game_id)?.ok_or(StoreError::NotFound {
            kind: "game",
            id: game_id,
        })?;
        let records = store.players_in_game(game_id)?;
        let roster = roster_from_records(&records, &config, &board)?;

        let index = game.current_player_index as usize;
        if index >= roster.len() {
            return Err(EngineError::CorruptRecord(format!(
                "current player index {} out of range for {} players",
                index,
                roster.len()
            )));
        }

        if game.status == GameStatus::Setup {
            // Start was interrupted after the players were written.
            store.update_game(game_id, &GameUpdate::status(GameStatus::Playing))?;
        }

        let mut session = GameSession::new(roster.len());
        session.current_player = PlayerId(index as u8);
        session.status = match game.status {
            GameStatus::Finished => GameStatus::Finished,
            GameStatus::Setup | GameStatus::Playing => GameStatus::Playing,
        };

        let mut engine = Self::assemble(config, board, store, game_id, session, roster);

        if engine.session.is_finished() {
            engine.session.result = Some(finished_result(&engine.roster, &engine.board));
            engine.phase = TurnPhase::Finished;
        } else if engine.roster.active_count() < 2 || engine.current().is_eliminated() {
            engine.end_turn();
        }

        info!(game = %game_id, status = %engine.session.status, "game resumed");
        Ok(engine)
    }

    fn assemble(
        config: TrailConfig,
        board: Board,
        store: S,
        game_id: RecordId,
        session: GameSession,
        roster: Roster,
    ) -> Self {
        let dice = match config.seed {
            Some(seed) => Dice::seeded(seed),
            None => Dice::new(GameRng::from_entropy()),
        };
        Self {
            config,
            board,
            store,
            game_id,
            session,
            roster,
            phase: TurnPhase::AwaitingRoll,
            pending: None,
            collaboration: None,
            dice,
            last_roll: None,
            version: 0,
            observers: Observers::new(),
        }
    }

    // === Intents ===

    /// Move the current player by a committed die value.
    ///
    /// Landing on the finish ends the game with the mover as winner.
    /// Landing on the start ends the turn. Any other space raises a card
    /// that blocks the turn until [`acknowledge`](Self::acknowledge).
    pub fn roll(&mut self, player: PlayerId, die: DieValue) -> Result<RollOutcome, EngineError> {
        self.check_can_roll(player)?;

        let finish = self.board.finish_position();
        let mover = self
            .roster
            .get_mut(player)
            .ok_or(EngineError::UnknownPlayer(player))?;
        let from = mover.position;
        let to = destination(from, die, finish);
        mover.position = to;
        self.last_roll = Some(die);

        debug!(player = %player, die = die.get(), from, to, "moved");
        self.persist_player(player, PlayerUpdate::position(to));

        let (effect, turn) = match classify_landing(&self.board, to) {
            Landing::Finish => {
                let result = GameResult::Winner {
                    player,
                    reason: WinReason::ReachedFinish,
                };
                self.finish(result.clone());
                (None, Some(TurnAdvance::GameOver(result)))
            }
            Landing::Start => (None, Some(self.end_turn())),
            Landing::Card(effect) => {
                debug!(player = %player, card = ?effect.kind, position = to, "card drawn");
                if effect.kind == CardKind::Collaboration {
                    self.collaboration = Some(CollaborationWindow::new(player));
                }
                self.pending = Some(effect.clone());
                self.phase = TurnPhase::AwaitingCardResolution;
                (Some(effect), None)
            }
        };

        self.publish();
        Ok(RollOutcome {
            player,
            die,
            from,
            to,
            effect,
            turn,
        })
    }

    /// Submit a raw face value, as received from a presentation layer.
    pub fn roll_face(&mut self, player: PlayerId, face: u8) -> Result<RollOutcome, EngineError> {
        let die = DieValue::new(face).ok_or(EngineError::InvalidDie(face))?;
        self.roll(player, die)
    }

    /// Roll the engine's dice for `player`.
    ///
    /// Returns the cosmetic tumble alongside the outcome. Only the
    /// committed face is applied.
    pub fn roll_dice(&mut self, player: PlayerId) -> Result<(RollAnimation, RollOutcome), EngineError> {
        self.check_can_roll(player)?;
        let animation = self.dice.tumble(self.config.tumble_frames);
        let outcome = self.roll(player, animation.committed)?;
        Ok((animation, outcome))
    }

    /// Resolve the pending card and end the turn.
    pub fn acknowledge(&mut self) -> Result<AckOutcome, EngineError> {
        self.ensure_playing()?;
        let effect = self.pending.clone().ok_or(EngineError::NoPendingEffect)?;
        let player = self.session.current_player;

        let current = self
            .roster
            .get_mut(player)
            .ok_or(EngineError::UnknownPlayer(player))?;
        let resolution = resolve_card_effect(&effect, current, self.config.max_cards);
        self.pending = None;
        self.collaboration = None;

        debug!(player = %player, ?resolution, "card resolved");
        if resolution.changed_player() {
            let update = match resolution {
                Resolution::ActivityGained { after, .. } => PlayerUpdate::activity_cards(after),
                Resolution::StressLost { after, .. } => PlayerUpdate::stress_cards(after),
                Resolution::CollaborationClosed | Resolution::RewardAcknowledged => PlayerUpdate::default(),
            };
            self.persist_player(player, update);
        }
        if resolution.eliminated() {
            info!(player = %player, "player eliminated");
        }

        let turn = self.end_turn();
        self.publish();
        Ok(AckOutcome {
            player,
            effect,
            resolution,
            turn,
        })
    }

    /// Give one stress card from `from` to the player who drew the open
    /// collaboration card.
    pub fn share_stress_card(&mut self, from: PlayerId, to: PlayerId) -> Result<StressTransfer, EngineError> {
        self.ensure_playing()?;
        let window = self.collaboration.as_mut().ok_or(EngineError::NoCollaboration)?;
        let transfer = window.share(&mut self.roster, from, to, self.config.max_cards)?;

        debug!(
            from = %from,
            to = %to,
            donor = transfer.donor_after,
            recipient = transfer.recipient_after,
            overflowed = transfer.overflowed,
            "stress card shared"
        );
        self.persist_player(from, PlayerUpdate::stress_cards(transfer.donor_after));
        if !transfer.overflowed {
            self.persist_player(to, PlayerUpdate::stress_cards(transfer.recipient_after));
        }
        if transfer.donor_eliminated() {
            info!(player = %from, "player eliminated");
        }

        self.publish();
        Ok(transfer)
    }

    /// Forward a presentation intent.
    pub fn apply(&mut self, intent: Intent) -> Result<Outcome, EngineError> {
        match intent {
            Intent::Roll { player, die } => self.roll(player, die).map(Outcome::Rolled),
            Intent::Acknowledge => self.acknowledge().map(Outcome::Acknowledged),
            Intent::ShareStressCard { from, to } => {
                self.share_stress_card(from, to).map(Outcome::Shared)
            }
        }
    }

    // === Observation ===

    /// Current immutable view.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: self.version,
            session: self.session.clone(),
            phase: self.phase,
            roster: self.roster.clone(),
            pending: self.pending.clone(),
            last_roll: self.last_roll,
        }
    }

    /// Call `callback` with a fresh snapshot after every transition.
    pub fn subscribe(&mut self, callback: impl FnMut(&Snapshot) + 'static) -> ObserverId {
        self.observers.subscribe(callback)
    }

    /// Stop calling a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn pending_effect(&self) -> Option<&PendingCardEffect> {
        self.pending.as_ref()
    }

    /// Open collaboration, if the pending card is one.
    #[must_use]
    pub fn collaboration(&self) -> Option<&CollaborationWindow> {
        self.collaboration.as_ref()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.session.current_player
    }

    #[must_use]
    pub fn game_id(&self) -> RecordId {
        self.game_id
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    /// Dice state, for checkpointing alongside the store.
    #[must_use]
    pub fn dice_state(&self) -> GameRngState {
        self.dice.state()
    }

    /// Continue rolling from a checkpointed dice state.
    pub fn restore_dice(&mut self, state: &GameRngState) {
        self.dice = Dice::from_state(state);
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Discard all in-memory state and hand the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    // === Internals ===

    fn current(&self) -> &Player {
        &self.roster[self.session.current_player]
    }

    fn ensure_playing(&self) -> Result<(), EngineError> {
        if self.session.is_playing() {
            Ok(())
        } else {
            Err(EngineError::NotPlaying(self.session.status))
        }
    }

    fn check_can_roll(&self, player: PlayerId) -> Result<(), EngineError> {
        self.ensure_playing()?;
        if self.phase == TurnPhase::AwaitingCardResolution {
            return Err(EngineError::CardPending);
        }
        let current = self.session.current_player;
        if player != current {
            return Err(EngineError::NotYourTurn {
                current,
                requested: player,
            });
        }
        Ok(())
    }

    /// Pass the turn, or end the game when at most one player is active.
    fn end_turn(&mut self) -> TurnAdvance {
        let advance = advance_turn(self.session.current_player, &self.roster);
        match &advance {
            TurnAdvance::Next(next) => {
                self.session.current_player = *next;
                self.phase = TurnPhase::AwaitingRoll;
                self.persist_game(GameUpdate::current_player_index(next.index() as u32));
            }
            TurnAdvance::GameOver(result) => self.finish(result.clone()),
        }
        advance
    }

    fn finish(&mut self, result: GameResult) {
        match &result {
            GameResult::Winner { player, reason } => {
                info!(game = %self.game_id, winner = %player, ?reason, "game finished");
            }
            GameResult::NoWinner => info!(game = %self.game_id, "game finished without a winner"),
        }
        self.session.status = GameStatus::Finished;
        self.session.result = Some(result);
        self.phase = TurnPhase::Finished;
        self.pending = None;
        self.collaboration = None;
        self.persist_game(GameUpdate::status(GameStatus::Finished));
    }

    fn publish(&mut self) {
        self.version += 1;
        if !self.observers.is_empty() {
            let snapshot = self.snapshot();
            self.observers.notify(&snapshot);
        }
    }

    fn persist_player(&mut self, player: PlayerId, update: PlayerUpdate) {
        let record = self.roster[player].record;
        if let Err(err) = self.store.update_player(record, &update) {
            warn!(player = %player, %record, error = %err, "player write failed, keeping local state");
        }
    }

    fn persist_game(&mut self, update: GameUpdate) {
        if let Err(err) = self.store.update_game(self.game_id, &update) {
            warn!(game = %self.game_id, error = %err, "game write failed, keeping local state");
        }
    }
}

fn load_board<S: Store>(store: &S) -> Result<Board, EngineError> {
    let spaces = store.board_spaces()?;
    Ok(Board::from_spaces(spaces.iter().map(BoardSpaceRecord::to_space))?)
}

fn roster_from_records(
    records: &[PlayerRecord],
    config: &TrailConfig,
    board: &Board,
) -> Result<Roster, EngineError> {
    if records.len() < config.min_players || records.len() > config.max_players {
        return Err(EngineError::CorruptRecord(format!(
            "game has {} players, expected {} to {}",
            records.len(),
            config.min_players,
            config.max_players
        )));
    }
    let corrupt = |record: &PlayerRecord, what: &str| {
        EngineError::CorruptRecord(format!("player {}: {}", record.id, what))
    };

    let mut colors = FxHashSet::default();
    let mut players = Vec::with_capacity(records.len());
    for (id, record) in PlayerId::all(records.len()).zip(records) {
        if usize::from(record.player_order) != id.index() {
            return Err(corrupt(record, "player order is not contiguous"));
        }
        let color = PlayerColor::parse(&record.color).ok_or_else(|| corrupt(record, "unknown color"))?;
        if !colors.insert(color) {
            return Err(corrupt(record, "color already taken"));
        }
        if record.activity_cards > config.max_cards || record.stress_cards > config.max_cards {
            return Err(corrupt(record, "card count above the cap"));
        }
        if record.position > board.finish_position() {
            return Err(corrupt(record, "position past the finish"));
        }
        players.push(Player {
            id,
            record: record.id,
            name: record.name.clone(),
            color,
            position: record.position,
            activity_cards: record.activity_cards,
            stress_cards: record.stress_cards,
        });
    }
    Ok(Roster::new(players))
}

/// Rebuild the result of a finished game from the roster.
fn finished_result(roster: &Roster, board: &Board) -> GameResult {
    let finish = board.finish_position();
    if let Some(player) = roster.iter().find(|p| p.position == finish) {
        return GameResult::Winner {
            player: player.id,
            reason: WinReason::ReachedFinish,
        };
    }

    let mut active = roster.active();
    match (active.next(), active.next()) {
        (Some(player), None) => GameResult::Winner {
            player: player.id,
            reason: WinReason::LastActive,
        },
        _ => GameResult::NoWinner,
    }
}
