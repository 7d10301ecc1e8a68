//! Session state and snapshots.
//!
//! ## GameSession
//!
//! Durable progression state: status, whose turn it is, and how the game
//! ended. Mirrors the persisted Game record plus the winner.
//!
//! ## Snapshot
//!
//! Immutable view of everything a presentation layer renders. The engine
//! emits a new snapshot after every transition; roster and board are `im`
//! structures so taking one is O(1).

use serde::{Deserialize, Serialize};

use super::dice::DieValue;
use super::player::{Player, PlayerId, Roster};
use crate::effects::PendingCardEffect;
use crate::rules::GameResult;

/// Lifecycle of a game. `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Setup,
    Playing,
    Finished,
}

impl GameStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Setup => "setup",
            GameStatus::Playing => "playing",
            GameStatus::Finished => "finished",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-state of the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Current player may roll.
    AwaitingRoll,
    /// A card effect blocks the turn until acknowledged.
    AwaitingCardResolution,
    /// Game over.
    Finished,
}

/// Durable progression state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub status: GameStatus,

    /// Whose turn it is. Always an active player while playing, unless
    /// fewer than two players remain active.
    pub current_player: PlayerId,

    pub player_count: usize,

    /// Set exactly once, when the game finishes.
    pub result: Option<GameResult>,
}

impl GameSession {
    /// A session in `Setup` with seat 0 to play first.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            status: GameStatus::Setup,
            current_player: PlayerId(0),
            player_count,
            result: None,
        }
    }

    /// `currentPlayerIndex` as persisted.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player.index()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Winner, if the game ended with one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.as_ref().and_then(GameResult::winner)
    }
}

/// Immutable view of a game after a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Increments with every transition.
    pub version: u64,
    pub session: GameSession,
    pub phase: TurnPhase,
    pub roster: Roster,
    pub pending: Option<PendingCardEffect>,
    pub last_roll: Option<DieValue>,
}

impl Snapshot {
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.roster[self.session.current_player]
    }

    /// Whether the roll action should be enabled.
    #[must_use]
    pub fn can_roll(&self) -> bool {
        self.phase == TurnPhase::AwaitingRoll && self.current_player().is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::test_utils::roster_with;
    use crate::rules::WinReason;

    #[test]
    fn test_session_new() {
        let session = GameSession::new(4);

        assert_eq!(session.status, GameStatus::Setup);
        assert_eq!(session.current_player_index(), 0);
        assert_eq!(session.player_count, 4);
        assert!(session.winner().is_none());
    }

    #[test]
    fn test_session_winner() {
        let mut session = GameSession::new(2);
        session.status = GameStatus::Finished;
        session.result = Some(GameResult::Winner {
            player: PlayerId(1),
            reason: WinReason::ReachedFinish,
        });

        assert!(session.is_finished());
        assert_eq!(session.winner(), Some(PlayerId(1)));
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&GameStatus::Playing).unwrap();
        assert_eq!(json, "\"playing\"");
        assert_eq!(GameStatus::Finished.to_string(), "finished");
    }

    #[test]
    fn test_snapshot_can_roll() {
        let mut session = GameSession::new(2);
        session.status = GameStatus::Playing;

        let snapshot = Snapshot {
            version: 1,
            session,
            phase: TurnPhase::AwaitingRoll,
            roster: roster_with(&[(0, 10), (0, 10)]),
            pending: None,
            last_roll: None,
        };
        assert!(snapshot.can_roll());

        let blocked = Snapshot {
            phase: TurnPhase::AwaitingCardResolution,
            ..snapshot
        };
        assert!(!blocked.can_roll());
    }
}
