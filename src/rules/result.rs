//! How a game ended.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Why the winner won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// Landed on the finish space.
    ReachedFinish,
    /// Everyone else ran out of stress cards.
    LastActive,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner { player: PlayerId, reason: WinReason },
    /// Every player was eliminated.
    NoWinner,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner { player, .. } => Some(*player),
            GameResult::NoWinner => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner {
            player: PlayerId::new(1),
            reason: WinReason::LastActive,
        };
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let none = GameResult::NoWinner;
        assert!(!none.is_winner(PlayerId::new(0)));
        assert_eq!(none.winner(), None);
    }
}
