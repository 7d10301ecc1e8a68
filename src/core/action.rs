//! User intents forwarded by the presentation layer.
//!
//! The presentation never mutates players directly. It turns clicks into
//! `Intent`s and hands them to [`TurnEngine::apply`](crate::engine::TurnEngine::apply).

use serde::{Deserialize, Serialize};

use super::dice::DieValue;
use super::player::PlayerId;

/// Something a player asked to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Current player submits a committed die value.
    Roll { player: PlayerId, die: DieValue },

    /// Dismiss the pending card and end the turn.
    Acknowledge,

    /// Another player gives one stress card during a collaboration.
    ShareStressCard { from: PlayerId, to: PlayerId },
}

impl Intent {
    /// Player who initiated the intent, when one is named.
    #[must_use]
    pub fn actor(&self) -> Option<PlayerId> {
        match self {
            Intent::Roll { player, .. } => Some(*player),
            Intent::ShareStressCard { from, .. } => Some(*from),
            Intent::Acknowledge => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_actor() {
        let die = DieValue::new(3).unwrap();
        assert_eq!(Intent::Roll { player: PlayerId(1), die }.actor(), Some(PlayerId(1)));
        assert_eq!(
            Intent::ShareStressCard { from: PlayerId(2), to: PlayerId(0) }.actor(),
            Some(PlayerId(2))
        );
        assert_eq!(Intent::Acknowledge.actor(), None);
    }

    #[test]
    fn test_intent_serialization() {
        let intent = Intent::ShareStressCard { from: PlayerId(2), to: PlayerId(0) };
        let json = serde_json::to_string(&intent).unwrap();
        let deserialized: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(intent, deserialized);
    }
}
