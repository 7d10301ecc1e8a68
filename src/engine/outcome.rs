//! What each engine operation reports back.

use serde::{Deserialize, Serialize};

use crate::core::{DieValue, PlayerId};
use crate::effects::{PendingCardEffect, Resolution, StressTransfer};
use crate::rules::TurnAdvance;

/// Result of a roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub player: PlayerId,
    pub die: DieValue,
    pub from: u8,
    pub to: u8,

    /// Card that now blocks the turn.
    pub effect: Option<PendingCardEffect>,

    /// Set when the roll ended the turn by itself (start or finish space).
    pub turn: Option<TurnAdvance>,
}

impl RollOutcome {
    /// Whether a card must be acknowledged before play continues.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.effect.is_some()
    }
}

/// Result of acknowledging a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckOutcome {
    pub player: PlayerId,
    pub effect: PendingCardEffect,
    pub resolution: Resolution,
    pub turn: TurnAdvance,
}

/// Result of [`TurnEngine::apply`](super::TurnEngine::apply).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Rolled(RollOutcome),
    Acknowledged(AckOutcome),
    Shared(StressTransfer),
}
