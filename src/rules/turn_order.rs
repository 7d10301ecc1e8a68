//! Turn advancement and elimination.
//!
//! Turns rotate by seat. Eliminated players keep their seat but are
//! skipped. Once one or no players hold stress cards the game is over.

use serde::{Deserialize, Serialize};

use super::result::{GameResult, WinReason};
use crate::core::{PlayerId, Roster};

/// Outcome of ending a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAdvance {
    /// Next active player to roll.
    Next(PlayerId),
    /// The game ended.
    GameOver(GameResult),
}

/// Pick who plays after `current`.
///
/// With two or more active players, returns the next active seat after
/// `current`, wrapping around. Otherwise the game is over: the sole active
/// player wins, or nobody does.
#[must_use]
pub fn advance_turn(current: PlayerId, roster: &Roster) -> TurnAdvance {
    let mut active = roster.active();
    let first = active.next();
    if active.next().is_none() {
        return TurnAdvance::GameOver(match first {
            Some(player) => GameResult::Winner {
                player: player.id,
                reason: WinReason::LastActive,
            },
            None => GameResult::NoWinner,
        });
    }

    // At least two active seats exist, so the scan terminates.
    let len = roster.len();
    let mut next = (current.index() + 1) % len;
    while roster[PlayerId(next as u8)].is_eliminated() {
        next = (next + 1) % len;
    }
    TurnAdvance::Next(PlayerId(next as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::test_utils::roster_with;

    #[test]
    fn test_simple_rotation() {
        let roster = roster_with(&[(0, 10), (0, 10), (0, 10)]);

        assert_eq!(advance_turn(PlayerId(0), &roster), TurnAdvance::Next(PlayerId(1)));
        assert_eq!(advance_turn(PlayerId(1), &roster), TurnAdvance::Next(PlayerId(2)));
        assert_eq!(advance_turn(PlayerId(2), &roster), TurnAdvance::Next(PlayerId(0)));
    }

    #[test]
    fn test_skips_eliminated() {
        let roster = roster_with(&[(0, 10), (0, 0), (0, 0), (0, 4)]);

        assert_eq!(advance_turn(PlayerId(0), &roster), TurnAdvance::Next(PlayerId(3)));
        assert_eq!(advance_turn(PlayerId(3), &roster), TurnAdvance::Next(PlayerId(0)));
    }

    #[test]
    fn test_current_eliminated_moves_on() {
        let roster = roster_with(&[(0, 10), (0, 0), (0, 5)]);
        assert_eq!(advance_turn(PlayerId(1), &roster), TurnAdvance::Next(PlayerId(2)));
    }

    #[test]
    fn test_last_active_wins() {
        let roster = roster_with(&[(0, 0), (0, 2), (0, 0)]);

        assert_eq!(
            advance_turn(PlayerId(0), &roster),
            TurnAdvance::GameOver(GameResult::Winner {
                player: PlayerId(1),
                reason: WinReason::LastActive,
            })
        );
    }

    #[test]
    fn test_nobody_active() {
        let roster = roster_with(&[(0, 0), (0, 0)]);
        assert_eq!(
            advance_turn(PlayerId(0), &roster),
            TurnAdvance::GameOver(GameResult::NoWinner)
        );
    }

    #[test]
    fn test_two_players_alternate() {
        let roster = roster_with(&[(0, 10), (0, 10)]);
        let mut current = PlayerId(0);

        for turn in 1..=10 {
            match advance_turn(current, &roster) {
                TurnAdvance::Next(next) => current = next,
                other => panic!("unexpected {:?}", other),
            }
            assert_eq!(current, PlayerId((turn % 2) as u8));
        }
    }
}
