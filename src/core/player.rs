//! Players, colors and the roster.
//!
//! ## PlayerId
//!
//! Seat identifier. Seats are 0-based and double as the turn order, so
//! `PlayerId(2)` is the third player to roll.
//!
//! ## Roster
//!
//! Every player of a game, indexed by `PlayerId`. Eliminated players stay
//! in the roster; they are skipped in turn order, never removed. Backed by
//! an `im::Vector` so snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::entity::RecordId;

/// Seat identifier (0-based, equals turn order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use trilha::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(u8::MAX as usize) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Jogador {}", self.0 + 1)
    }
}

/// The six pawn colors offered at setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Rosa,
    Amarelo,
    Azul,
    Vermelho,
    Laranja,
    Verde,
}

impl PlayerColor {
    /// Palette in setup-screen order.
    pub const ALL: [PlayerColor; 6] = [
        PlayerColor::Rosa,
        PlayerColor::Amarelo,
        PlayerColor::Azul,
        PlayerColor::Vermelho,
        PlayerColor::Laranja,
        PlayerColor::Verde,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::Rosa => "Rosa",
            PlayerColor::Amarelo => "Amarelo",
            PlayerColor::Azul => "Azul",
            PlayerColor::Vermelho => "Vermelho",
            PlayerColor::Laranja => "Laranja",
            PlayerColor::Verde => "Verde",
        }
    }

    /// Hex value, which is also the persisted form.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            PlayerColor::Rosa => "#E91E63",
            PlayerColor::Amarelo => "#FFC107",
            PlayerColor::Azul => "#2196F3",
            PlayerColor::Vermelho => "#F44336",
            PlayerColor::Laranja => "#FF9800",
            PlayerColor::Verde => "#4CAF50",
        }
    }

    /// Default color for a seat (wraps around the palette).
    #[must_use]
    pub const fn for_seat(seat: usize) -> Self {
        Self::ALL[seat % Self::ALL.len()]
    }

    /// Parse either a palette name (case-insensitive) or a hex value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|c| {
            c.name().eq_ignore_ascii_case(value) || c.hex().eq_ignore_ascii_case(value)
        })
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Name and color collected for one seat before the game starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub color: PlayerColor,
}

impl PlayerSetup {
    pub fn new(name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Seat setups with empty names and the default palette assignment.
///
/// Mirrors what the setup screen shows before anyone types a name.
#[must_use]
pub fn default_setups(player_count: usize) -> Vec<PlayerSetup> {
    (0..player_count)
        .map(|seat| PlayerSetup::new("", PlayerColor::for_seat(seat)))
        .collect()
}

/// A player in play.
///
/// `stress_cards == 0` marks the player as eliminated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat (turn order).
    pub id: PlayerId,

    /// Store key for targeted updates.
    pub record: RecordId,

    pub name: String,
    pub color: PlayerColor,

    /// Track position, never decreases.
    pub position: u8,

    pub activity_cards: u8,
    pub stress_cards: u8,
}

impl Player {
    /// Active players still take turns.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.stress_cards > 0
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        !self.is_active()
    }
}

/// All players of a game, indexed by seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vector<Player>,
}

impl Roster {
    /// Build a roster. Players must already be in seat order.
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        let players: Vector<Player> = players.into_iter().collect();
        debug_assert!(
            players.iter().enumerate().all(|(i, p)| p.id.index() == i),
            "Roster players must be in seat order"
        );
        Self { players }
    }

    /// Number of seats, eliminated players included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(player.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Players with at least one stress card.
    pub fn active(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.players[player.index()]
    }
}


#[cfg(test)]
mod tests {
    use super::test_utils::roster_with;
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.index(), 0);
        assert_eq!(format!("{}", p0), "Jogador 1");
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(PlayerColor::parse("azul"), Some(PlayerColor::Azul));
        assert_eq!(PlayerColor::parse("#4caf50"), Some(PlayerColor::Verde));
        assert_eq!(PlayerColor::parse(" Rosa "), Some(PlayerColor::Rosa));
        assert_eq!(PlayerColor::parse("roxo"), None);
    }

    #[test]
    fn test_color_for_seat_wraps() {
        assert_eq!(PlayerColor::for_seat(0), PlayerColor::Rosa);
        assert_eq!(PlayerColor::for_seat(5), PlayerColor::Verde);
        assert_eq!(PlayerColor::for_seat(6), PlayerColor::Rosa);
    }

    #[test]
    fn test_default_setups() {
        let setups = default_setups(3);
        assert_eq!(setups.len(), 3);
        assert!(setups.iter().all(|s| s.name.is_empty()));
        assert_eq!(setups[1].color, PlayerColor::Amarelo);
    }

    #[test]
    fn test_roster_active() {
        let roster = roster_with(&[(0, 10), (0, 0), (0, 3)]);

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.active_count(), 2);
        assert!(roster[PlayerId(1)].is_eliminated());
        assert!(roster.get(PlayerId(3)).is_none());
    }

    #[test]
    fn test_roster_clone_is_independent() {
        let mut roster = roster_with(&[(0, 10), (0, 10)]);
        let before = roster.clone();

        roster.get_mut(PlayerId(0)).unwrap().position = 5;

        assert_eq!(before[PlayerId(0)].position, 0);
        assert_eq!(roster[PlayerId(0)].position, 5);
    }
}
