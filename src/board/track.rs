//! The validated board.
//!
//! A `Board` is an ordered, gap-free run of spaces from the start (position
//! 0) to the finish (last position). Once built it never changes for the
//! lifetime of a game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::space::{Space, SpaceKind};
use crate::error::BoardError;

/// Position of the finish space on the standard track.
pub const STANDARD_FINISH: u8 = 45;

const ACTIVITY_TEXTS: [&str; 8] = [
    "Faça cinco respirações profundas",
    "Alongue os braços e o pescoço por um minuto",
    "Beba um copo de água",
    "Escreva três coisas pelas quais você é grato",
    "Levante-se e caminhe pela sala",
    "Organize sua mesa por dois minutos",
    "Conte uma boa notícia da sua semana",
    "Feche os olhos e relaxe os ombros",
];

const STRESS_TEXTS: [&str; 4] = [
    "Prazo apertado: entrega antecipada",
    "Reunião inesperada no fim do dia",
    "Caixa de e-mails lotada",
    "Noite mal dormida",
];

const COLLABORATION_TEXT: &str = "Um colega pode dividir o peso com você";
const REWARD_TEXT: &str = "Pausa merecida: aproveite o momento";

/// Kinds of the interior spaces, repeated four times between start and finish.
const PATTERN: [SpaceKind; 11] = [
    SpaceKind::Activity,
    SpaceKind::Stress,
    SpaceKind::Activity,
    SpaceKind::Collaboration,
    SpaceKind::Activity,
    SpaceKind::Reward,
    SpaceKind::Stress,
    SpaceKind::Activity,
    SpaceKind::Collaboration,
    SpaceKind::Activity,
    SpaceKind::Stress,
];

/// Ordered, validated track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spaces: Vector<Space>,
}

impl Board {
    /// Sort and validate a set of spaces.
    ///
    /// Requires exactly one start at 0, exactly one finish at the highest
    /// position, and no gaps in between.
    pub fn from_spaces(spaces: impl IntoIterator<Item = Space>) -> Result<Self, BoardError> {
        let mut spaces: Vec<Space> = spaces.into_iter().collect();
        spaces.sort_by_key(|s| s.position);

        let last = spaces.last().ok_or(BoardError::Empty)?.position;

        let mut start = None;
        let mut finish = None;
        for (expected, space) in spaces.iter().enumerate() {
            if usize::from(space.position) != expected {
                return Err(BoardError::Gap {
                    expected: expected as u8,
                    found: space.position,
                });
            }
            match space.kind {
                SpaceKind::Start if start.is_some() => return Err(BoardError::MultipleStarts),
                SpaceKind::Start => start = Some(space.position),
                SpaceKind::Finish if finish.is_some() => return Err(BoardError::MultipleFinishes),
                SpaceKind::Finish => finish = Some(space.position),
                _ => {}
            }
        }

        match start {
            None => return Err(BoardError::MissingStart),
            Some(0) => {}
            Some(other) => return Err(BoardError::StartNotFirst(other)),
        }
        match finish {
            None => return Err(BoardError::MissingFinish),
            Some(found) if found != last => return Err(BoardError::FinishNotLast { found, last }),
            Some(_) => {}
        }

        Ok(Self {
            spaces: spaces.into_iter().collect(),
        })
    }

    /// The default 46-space track.
    #[must_use]
    pub fn standard() -> Self {
        let mut activity = ACTIVITY_TEXTS.iter().cycle();
        let mut stress = STRESS_TEXTS.iter().cycle();

        let interior = PATTERN
            .iter()
            .cycle()
            .take(usize::from(STANDARD_FINISH) - 1)
            .enumerate()
            .map(|(i, &kind)| {
                let text = match kind {
                    SpaceKind::Activity => activity.next().copied(),
                    SpaceKind::Stress => stress.next().copied(),
                    SpaceKind::Collaboration => Some(COLLABORATION_TEXT),
                    SpaceKind::Reward => Some(REWARD_TEXT),
                    SpaceKind::Start | SpaceKind::Finish => None,
                };
                Space {
                    position: i as u8 + 1,
                    kind,
                    text: text.map(str::to_string),
                }
            });

        let spaces = std::iter::once(Space::new(0, SpaceKind::Start))
            .chain(interior)
            .chain(std::iter::once(Space::new(STANDARD_FINISH, SpaceKind::Finish)))
            .collect();

        Self { spaces }
    }

    /// Space at a position.
    #[must_use]
    pub fn space(&self, position: u8) -> Option<&Space> {
        self.spaces.get(usize::from(position))
    }

    /// Position of the finish space.
    #[must_use]
    pub fn finish_position(&self) -> u8 {
        // Validated boards are never empty.
        self.spaces.last().map_or(0, |s| s.position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }

    /// Count spaces of one kind.
    #[must_use]
    pub fn count(&self, kind: SpaceKind) -> usize {
        self.spaces.iter().filter(|s| s.kind == kind).count()
    }
}
