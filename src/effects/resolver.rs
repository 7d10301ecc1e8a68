//! Card resolution - applying an acknowledged card to the player.
//!
//! Resolution is a pure function of the card and the player's counts;
//! persisting the result and advancing the turn is the engine's job.

use serde::{Deserialize, Serialize};

use super::{CardKind, PendingCardEffect};
use crate::core::Player;

/// What resolving a card did to the current player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Activity cards went from `before` to `after` (capped).
    ActivityGained { before: u8, after: u8 },

    /// Stress cards went from `before` to `after` (floored at 0).
    StressLost { before: u8, after: u8, eliminated: bool },

    /// Collaboration window closed; no automatic change.
    CollaborationClosed,

    /// Reward acknowledged; no mechanical effect.
    RewardAcknowledged,
}

impl Resolution {
    /// Whether the player record changed and must be written.
    #[must_use]
    pub fn changed_player(&self) -> bool {
        match self {
            Resolution::ActivityGained { before, after } => before != after,
            Resolution::StressLost { before, after, .. } => before != after,
            Resolution::CollaborationClosed | Resolution::RewardAcknowledged => false,
        }
    }

    #[must_use]
    pub fn eliminated(&self) -> bool {
        matches!(self, Resolution::StressLost { eliminated: true, .. })
    }
}

/// Apply an acknowledged card to the player who drew it.
///
/// - activity: `+1`, capped at `max_cards`
/// - stress: `-1`, floored at 0 (0 eliminates)
/// - collaboration, reward: no change
pub fn resolve_card_effect(effect: &PendingCardEffect, player: &mut Player, max_cards: u8) -> Resolution {
    match effect.kind {
        CardKind::Activity => {
            let before = player.activity_cards;
            player.activity_cards = before.saturating_add(1).min(max_cards);
            Resolution::ActivityGained {
                before,
                after: player.activity_cards,
            }
        }
        CardKind::Stress => {
            let before = player.stress_cards;
            player.stress_cards = before.saturating_sub(1);
            Resolution::StressLost {
                before,
                after: player.stress_cards,
                eliminated: before > 0 && player.stress_cards == 0,
            }
        }
        CardKind::Collaboration => Resolution::CollaborationClosed,
        CardKind::Reward => Resolution::RewardAcknowledged,
    }
}
