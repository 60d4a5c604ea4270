use super::catalog::{Dimension, Letter};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Four-letter personality code, one letter per dichotomy in `EI, SN, TF, JP` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonalityType([Letter; 4]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonalityTypeError {
    #[error("personality codes have exactly four letters, got {0}")]
    Length(usize),
    #[error("'{found}' is not a valid {dimension} letter")]
    Letter { dimension: Dimension, found: char },
}

impl PersonalityType {
    pub fn new(letters: [Letter; 4]) -> Result<Self, PersonalityTypeError> {
        for (letter, dimension) in letters.iter().zip(Dimension::ordered()) {
            if letter.dimension() != dimension {
                return Err(PersonalityTypeError::Letter {
                    dimension,
                    found: letter.as_char(),
                });
            }
        }
        Ok(Self(letters))
    }

    /// Letters produced by resolving each dimension in order.
    pub(crate) fn from_resolved(letters: [Letter; 4]) -> Self {
        debug_assert!(Self::new(letters).is_ok());
        Self(letters)
    }

    /// Every one of the sixteen codes, `E` before `I`, `S` before `N`, and so on.
    pub fn all() -> Vec<Self> {
        let mut types = Vec::with_capacity(16);
        for bits in 0u8..16 {
            let letters = Dimension::ordered().map(|dimension| {
                let (first, second) = dimension.sides();
                if bits & (0b1000 >> dimension.index()) == 0 {
                    first
                } else {
                    second
                }
            });
            types.push(Self(letters));
        }
        types
    }

    pub fn letter(&self, dimension: Dimension) -> Letter {
        self.0[dimension.index()]
    }

    pub fn temperament(&self) -> Temperament {
        match (
            self.letter(Dimension::Perception),
            self.letter(Dimension::Judgement),
            self.letter(Dimension::Lifestyle),
        ) {
            (Letter::N, Letter::T, _) => Temperament::Analyst,
            (Letter::N, _, _) => Temperament::Diplomat,
            (_, _, Letter::J) => Temperament::Sentinel,
            _ => Temperament::Explorer,
        }
    }

    /// Nickname used by the personalized greetings.
    pub fn archetype(&self) -> &'static str {
        let [extravert, sensing, thinking, judging] =
            Dimension::ordered().map(|dimension| self.letter(dimension) == dimension.sides().0);
        match (extravert, sensing, thinking, judging) {
            (false, false, true, true) => "Architect",
            (false, false, true, false) => "Thinker",
            (true, false, true, true) => "Commander",
            (true, false, true, false) => "Debater",
            (false, false, false, true) => "Advocate",
            (false, false, false, false) => "Mediator",
            (true, false, false, true) => "Protagonist",
            (true, false, false, false) => "Campaigner",
            (false, true, true, true) => "Logistician",
            (false, true, false, true) => "Protector",
            (true, true, true, true) => "Executive",
            (true, true, false, true) => "Consul",
            (false, true, true, false) => "Virtuoso",
            (false, true, false, false) => "Adventurer",
            (true, true, true, false) => "Entrepreneur",
            (true, true, false, false) => "Entertainer",
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromStr for PersonalityType {
    type Err = PersonalityTypeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = raw.trim().chars().collect();
        if chars.len() != 4 {
            return Err(PersonalityTypeError::Length(chars.len()));
        }

        let mut letters = Dimension::ordered().map(|dimension| dimension.sides().0);
        for ((slot, dimension), found) in letters
            .iter_mut()
            .zip(Dimension::ordered())
            .zip(chars)
        {
            *slot = Letter::from_char(found)
                .filter(|letter| letter.dimension() == dimension)
                .ok_or(PersonalityTypeError::Letter { dimension, found })?;
        }
        Ok(Self(letters))
    }
}

impl Serialize for PersonalityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PersonalityType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Coarse grouping of the sixteen types used for copy and theming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperament {
    Analyst,
    Diplomat,
    Sentinel,
    Explorer,
}

impl Temperament {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Analyst => "Analysts",
            Self::Diplomat => "Diplomats",
            Self::Sentinel => "Sentinels",
            Self::Explorer => "Explorers",
        }
    }

    pub const fn motto(self) -> &'static str {
        match self {
            Self::Analyst => "Think deeper, achieve more",
            Self::Diplomat => "Find meaning in every moment",
            Self::Sentinel => "Build lasting productive habits",
            Self::Explorer => "Live fully, focus freely",
        }
    }
}

/// Display-ready summary of a personality code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeProfile {
    pub code: PersonalityType,
    pub archetype: &'static str,
    pub temperament: Temperament,
    pub temperament_label: &'static str,
    pub motto: &'static str,
}

impl From<PersonalityType> for TypeProfile {
    fn from(code: PersonalityType) -> Self {
        let temperament = code.temperament();
        Self {
            code,
            archetype: code.archetype(),
            temperament,
            temperament_label: temperament.label(),
            motto: temperament.motto(),
        }
    }
}
