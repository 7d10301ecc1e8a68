//! Stress-card sharing during a collaboration.
//!
//! While a collaboration card is pending, any other player who still holds
//! stress cards may give one to the player who drew it. Each donor gives at
//! most once per window. The recipient is capped at `max_cards`; a card
//! given to a full recipient is lost.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, Roster};
use crate::error::EngineError;

/// Open collaboration: who is being helped and who already helped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationWindow {
    recipient: PlayerId,
    donors: SmallVec<[PlayerId; 6]>,
}

impl CollaborationWindow {
    #[must_use]
    pub fn new(recipient: PlayerId) -> Self {
        Self {
            recipient,
            donors: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn recipient(&self) -> PlayerId {
        self.recipient
    }

    #[must_use]
    pub fn donors(&self) -> &[PlayerId] {
        &self.donors
    }

    #[must_use]
    pub fn has_shared(&self, player: PlayerId) -> bool {
        self.donors.contains(&player)
    }

    /// Players who may still share right now.
    pub fn eligible_donors<'a>(&'a self, roster: &'a Roster) -> impl Iterator<Item = PlayerId> + 'a {
        roster
            .active()
            .map(|p| p.id)
            .filter(move |&id| id != self.recipient && !self.has_shared(id))
    }

    /// Check a share, move the card, and remember the donor.
    pub fn share(
        &mut self,
        roster: &mut Roster,
        from: PlayerId,
        to: PlayerId,
        max_cards: u8,
    ) -> Result<StressTransfer, EngineError> {
        if from == to {
            return Err(EngineError::SelfShare(from));
        }
        if to != self.recipient {
            return Err(EngineError::NotRecipient {
                recipient: self.recipient,
                requested: to,
            });
        }
        if self.has_shared(from) {
            return Err(EngineError::AlreadyShared(from));
        }

        let donor = roster.get(from).ok_or(EngineError::UnknownPlayer(from))?.stress_cards;
        let recipient = roster.get(to).ok_or(EngineError::UnknownPlayer(to))?.stress_cards;

        let transfer = transfer_stress(from, donor, to, recipient, max_cards)
            .ok_or(EngineError::NoStressToShare(from))?;

        if let Some(p) = roster.get_mut(from) {
            p.stress_cards = transfer.donor_after;
        }
        if let Some(p) = roster.get_mut(to) {
            p.stress_cards = transfer.recipient_after;
        }
        self.donors.push(from);

        Ok(transfer)
    }
}

/// Result of moving one stress card between players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressTransfer {
    pub from: PlayerId,
    pub to: PlayerId,
    pub donor_after: u8,
    pub recipient_after: u8,
    /// The recipient was already full, so the card was lost.
    pub overflowed: bool,
}

impl StressTransfer {
    /// The donor gave away their last card.
    #[must_use]
    pub fn donor_eliminated(&self) -> bool {
        self.donor_after == 0
    }
}

/// Move one stress card. `None` if the donor has none.
#[must_use]
pub fn transfer_stress(
    from: PlayerId,
    donor: u8,
    to: PlayerId,
    recipient: u8,
    max_cards: u8,
) -> Option<StressTransfer> {
    if donor == 0 {
        return None;
    }
    let recipient_after = recipient.saturating_add(1).min(max_cards);
    Some(StressTransfer {
        from,
        to,
        donor_after: donor - 1,
        recipient_after,
        overflowed: recipient_after == recipient,
    })
}
