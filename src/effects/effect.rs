//! Card effects raised by landing on a space.

use serde::{Deserialize, Serialize};

use crate::board::{Space, SpaceKind};

/// Spaces that raise a card. Start and finish never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Activity,
    Stress,
    Collaboration,
    Reward,
}

impl CardKind {
    /// Card kind for a space kind, if that space raises a card.
    #[must_use]
    pub const fn from_space(kind: SpaceKind) -> Option<Self> {
        match kind {
            SpaceKind::Activity => Some(CardKind::Activity),
            SpaceKind::Stress => Some(CardKind::Stress),
            SpaceKind::Collaboration => Some(CardKind::Collaboration),
            SpaceKind::Reward => Some(CardKind::Reward),
            SpaceKind::Start | SpaceKind::Finish => None,
        }
    }

    /// Card heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            CardKind::Activity => "Carta de Atividade",
            CardKind::Stress => "Carta de Estresse",
            CardKind::Collaboration => "Colaboração",
            CardKind::Reward => "Recompensa",
        }
    }

    /// What the card does, as told to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            CardKind::Activity => "Complete esta atividade e ganhe +1 carta de atividade!",
            CardKind::Stress => "Você perdeu 1 carta de estresse (vida)!",
            CardKind::Collaboration => "Outro jogador pode compartilhar uma carta de estresse com você!",
            CardKind::Reward => "Parabéns! Você recebeu uma bonificação!",
        }
    }
}

/// A card waiting to be acknowledged. Blocks the turn; never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCardEffect {
    pub kind: CardKind,
    pub text: Option<String>,
    pub position: u8,
}

impl PendingCardEffect {
    /// Card raised by a space, if any.
    #[must_use]
    pub fn from_space(space: &Space) -> Option<Self> {
        CardKind::from_space(space.kind).map(|kind| Self {
            kind,
            text: space.text.clone(),
            position: space.position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_finish_raise_nothing() {
        assert_eq!(CardKind::from_space(SpaceKind::Start), None);
        assert_eq!(CardKind::from_space(SpaceKind::Finish), None);
    }

    #[test]
    fn test_from_space_copies_text() {
        let space = Space::new(12, SpaceKind::Stress).with_text("Noite mal dormida");
        let effect = PendingCardEffect::from_space(&space).unwrap();

        assert_eq!(effect.kind, CardKind::Stress);
        assert_eq!(effect.position, 12);
        assert_eq!(effect.text.as_deref(), Some("Noite mal dormida"));
    }

    #[test]
    fn test_titles() {
        assert_eq!(CardKind::Reward.title(), "Recompensa");
        assert!(CardKind::Collaboration.message().contains("compartilhar"));
    }
}
