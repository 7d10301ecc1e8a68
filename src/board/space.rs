//! Track spaces.

use serde::{Deserialize, Serialize};

/// What landing on a space does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceKind {
    Start,
    Activity,
    Stress,
    Collaboration,
    Reward,
    Finish,
}

impl SpaceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SpaceKind::Start => "start",
            SpaceKind::Activity => "activity",
            SpaceKind::Stress => "stress",
            SpaceKind::Collaboration => "collaboration",
            SpaceKind::Reward => "reward",
            SpaceKind::Finish => "finish",
        }
    }
}

impl std::fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One position on the track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub position: u8,
    pub kind: SpaceKind,
    /// Card text shown when the space triggers.
    pub text: Option<String>,
}

impl Space {
    pub fn new(position: u8, kind: SpaceKind) -> Self {
        Self {
            position,
            kind,
            text: None,
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}
