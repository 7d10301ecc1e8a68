//! The six-sided die.
//!
//! The engine only ever accepts a single committed [`DieValue`]. The
//! tumbling faces shown while a die "rolls" are produced here too, but
//! they are presentation data and never reach game state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::{GameRng, GameRngState};

/// A committed die face in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieValue(u8);

impl DieValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Validate a raw face value.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DieValue {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DieValue::new(value).ok_or_else(|| format!("die value {} outside 1..=6", value))
    }
}

impl From<DieValue> for u8 {
    fn from(value: DieValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for DieValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interim faces shown while rolling, plus the value actually submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollAnimation {
    pub frames: SmallVec<[DieValue; 16]>,
    pub committed: DieValue,
}

/// A die backed by the deterministic game RNG.
#[derive(Clone, Debug)]
pub struct Dice {
    rng: GameRng,
}

impl Dice {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Roll one face.
    pub fn roll(&mut self) -> DieValue {
        DieValue(self.rng.gen_range(DieValue::MIN..DieValue::MAX + 1))
    }

    /// Roll `frames` cosmetic faces, then the committed one.
    pub fn tumble(&mut self, frames: usize) -> RollAnimation {
        let frames = (0..frames).map(|_| self.roll()).collect();
        RollAnimation {
            frames,
            committed: self.roll(),
        }
    }

    /// RNG state, for checkpointing the dice.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self::new(GameRng::from_state(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_value_bounds() {
        assert!(DieValue::new(0).is_none());
        assert_eq!(DieValue::new(1).map(DieValue::get), Some(1));
        assert_eq!(DieValue::new(6).map(DieValue::get), Some(6));
        assert!(DieValue::new(7).is_none());
    }

    #[test]
    fn test_rolls_stay_in_range() {
        let mut dice = Dice::seeded(7);
        for _ in 0..500 {
            let face = dice.roll().get();
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_every_face_appears() {
        let mut dice = Dice::seeded(99);
        let mut seen = [false; 6];
        for _ in 0..500 {
            seen[dice.roll().get() as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_restored_dice_continue() {
        let mut dice = Dice::seeded(5);
        dice.roll();
        let mut restored = Dice::from_state(&dice.state());

        for _ in 0..20 {
            assert_eq!(dice.roll(), restored.roll());
        }
    }

    #[test]
    fn test_tumble_frame_count() {
        let mut dice = Dice::seeded(1);
        let animation = dice.tumble(15);
        assert_eq!(animation.frames.len(), 15);
    }

    #[test]
    fn test_tumble_is_deterministic() {
        let a = Dice::seeded(5).tumble(15);
        let b = Dice::seeded(5).tumble(15);
        assert_eq!(a, b);
    }

    #[test]
    fn test_die_value_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<DieValue>("7").is_err());
        assert_eq!(serde_json::from_str::<DieValue>("3").unwrap().get(), 3);
    }
}
