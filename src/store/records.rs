//! Persisted record shapes and partial updates.
//!
//! Field names follow the persisted schema (`current_player_index`,
//! `player_order`, `type`, `activity_text`), not the engine's names.

use serde::{Deserialize, Serialize};

use crate::board::{Space, SpaceKind};
use crate::core::{GameStatus, RecordId};

/// A stored game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: RecordId,
    pub status: GameStatus,
    pub current_player_index: u32,
}

/// Fields for inserting a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub status: GameStatus,
    pub current_player_index: u32,
}

/// Targeted game update. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameUpdate {
    pub status: Option<GameStatus>,
    pub current_player_index: Option<u32>,
}

impl GameUpdate {
    #[must_use]
    pub fn status(status: GameStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn current_player_index(index: u32) -> Self {
        Self {
            current_player_index: Some(index),
            ..Self::default()
        }
    }

    pub fn apply(&self, record: &mut GameRecord) {
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(index) = self.current_player_index {
            record.current_player_index = index;
        }
    }
}

/// A stored player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: RecordId,
    pub game_id: RecordId,
    pub name: String,
    /// Hex color value.
    pub color: String,
    pub position: u8,
    pub activity_cards: u8,
    pub stress_cards: u8,
    pub player_order: u8,
}

/// Fields for inserting a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub game_id: RecordId,
    pub name: String,
    pub color: String,
    pub position: u8,
    pub activity_cards: u8,
    pub stress_cards: u8,
    pub player_order: u8,
}

/// Targeted player update. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerUpdate {
    pub position: Option<u8>,
    pub activity_cards: Option<u8>,
    pub stress_cards: Option<u8>,
}

impl PlayerUpdate {
    #[must_use]
    pub fn position(position: u8) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn activity_cards(count: u8) -> Self {
        Self {
            activity_cards: Some(count),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn stress_cards(count: u8) -> Self {
        Self {
            stress_cards: Some(count),
            ..Self::default()
        }
    }

    pub fn apply(&self, record: &mut PlayerRecord) {
        if let Some(position) = self.position {
            record.position = position;
        }
        if let Some(count) = self.activity_cards {
            record.activity_cards = count;
        }
        if let Some(count) = self.stress_cards {
            record.stress_cards = count;
        }
    }
}

/// A stored board space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSpaceRecord {
    pub id: RecordId,
    pub position: u8,
    #[serde(rename = "type")]
    pub kind: SpaceKind,
    pub activity_text: Option<String>,
}

impl BoardSpaceRecord {
    /// Record for `space` under an id the store assigned.
    #[must_use]
    pub fn new(id: RecordId, space: NewBoardSpace) -> Self {
        Self {
            id,
            position: space.position,
            kind: space.kind,
            activity_text: space.activity_text,
        }
    }

    #[must_use]
    pub fn to_space(&self) -> Space {
        Space {
            position: self.position,
            kind: self.kind,
            text: self.activity_text.clone(),
        }
    }
}

/// Fields for inserting a board space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBoardSpace {
    pub position: u8,
    #[serde(rename = "type")]
    pub kind: SpaceKind,
    pub activity_text: Option<String>,
}

impl From<&Space> for NewBoardSpace {
    fn from(space: &Space) -> Self {
        Self {
            position: space.position,
            kind: space.kind,
            activity_text: space.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_record() -> PlayerRecord {
        PlayerRecord {
            id: RecordId(2),
            game_id: RecordId(1),
            name: "Ana".to_string(),
            color: "#E91E63".to_string(),
            position: 0,
            activity_cards: 0,
            stress_cards: 10,
            player_order: 0,
        }
    }

    #[test]
    fn test_player_update_touches_only_set_fields() {
        let mut record = player_record();
        PlayerUpdate::position(7).apply(&mut record);

        assert_eq!(record.position, 7);
        assert_eq!(record.stress_cards, 10);
        assert_eq!(record.activity_cards, 0);
    }

    #[test]
    fn test_game_update() {
        let mut record = GameRecord {
            id: RecordId(1),
            status: GameStatus::Setup,
            current_player_index: 0,
        };

        GameUpdate::status(GameStatus::Playing).apply(&mut record);
        GameUpdate::current_player_index(2).apply(&mut record);

        assert_eq!(record.status, GameStatus::Playing);
        assert_eq!(record.current_player_index, 2);
    }

    #[test]
    fn test_board_space_uses_type_field() {
        let record = BoardSpaceRecord {
            id: RecordId(9),
            position: 4,
            kind: SpaceKind::Reward,
            activity_text: None,
        };
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["type"], "reward");
        assert_eq!(record.to_space(), Space::new(4, SpaceKind::Reward));
    }
}
