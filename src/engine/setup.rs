//! Setup-screen validation.

use rustc_hash::FxHashSet;

use crate::core::{PlayerSetup, TrailConfig};
use crate::error::SetupError;

/// Check the seats collected before a game starts and return them with
/// trimmed names.
///
/// Rejects a player count outside the configured range, a name that is
/// blank after trimming, and a color picked twice.
pub fn validate_setups(
    setups: &[PlayerSetup],
    config: &TrailConfig,
) -> Result<Vec<PlayerSetup>, SetupError> {
    let count = setups.len();
    if count < config.min_players || count > config.max_players {
        return Err(SetupError::PlayerCount {
            count,
            min: config.min_players,
            max: config.max_players,
        });
    }

    let mut colors = FxHashSet::default();
    setups
        .iter()
        .enumerate()
        .map(|(seat, setup)| {
            let name = setup.name.trim();
            if name.is_empty() {
                return Err(SetupError::EmptyName { seat });
            }
            if !colors.insert(setup.color) {
                return Err(SetupError::DuplicateColor { color: setup.color });
            }
            Ok(PlayerSetup::new(name, setup.color))
        })
        .collect()
}
