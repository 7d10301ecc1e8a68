//! Movement along the track.
//!
//! Movement is always forward and clamps at the finish; it never wraps.

use crate::board::{Board, SpaceKind};
use crate::core::DieValue;
use crate::effects::PendingCardEffect;

/// Where a roll of `die` from `position` ends up.
///
/// ```
/// use trilha::core::DieValue;
/// use trilha::rules::destination;
///
/// let five = DieValue::new(5).unwrap();
/// assert_eq!(destination(10, five, 45), 15);
/// assert_eq!(destination(43, five, 45), 45);
/// ```
#[must_use]
pub fn destination(position: u8, die: DieValue, finish: u8) -> u8 {
    position.saturating_add(die.get()).min(finish)
}

/// What a landing position triggers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Landing {
    /// Finish space: the mover wins.
    Finish,
    /// Start space: nothing happens.
    Start,
    /// A card that must be acknowledged before the turn ends.
    Card(PendingCardEffect),
}

/// Classify the space at `position`.
///
/// Positions past the board are treated as the finish; validated boards
/// plus [`destination`] never produce one.
#[must_use]
pub fn classify_landing(board: &Board, position: u8) -> Landing {
    match board.space(position) {
        None => Landing::Finish,
        Some(space) => match space.kind {
            SpaceKind::Finish => Landing::Finish,
            SpaceKind::Start => Landing::Start,
            _ => PendingCardEffect::from_space(space).map_or(Landing::Start, Landing::Card),
        },
    }
}
