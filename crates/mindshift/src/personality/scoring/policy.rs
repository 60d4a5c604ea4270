use super::super::catalog::Letter;
use super::tally::DimensionTally;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a dichotomy with equal tallies is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Pick either side with equal probability. Re-scoring identical input can
    /// yield a different code whenever a dichotomy is balanced.
    #[default]
    Random,
    /// Always pick the second letter of the pair (`I`, `N`, `F`, `P`).
    #[serde(rename = "second", alias = "second_side")]
    SecondSide,
}

impl TieBreak {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::SecondSide => "second",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "second" | "second_side" | "second-side" => Ok(Self::SecondSide),
            other => Err(format!("unknown tie-break policy '{other}'")),
        }
    }
}

pub(crate) struct Resolution {
    pub letter: Letter,
    pub tie_broken: bool,
}

pub(crate) fn resolve_letter<R: Rng + ?Sized>(
    tally: &DimensionTally,
    tie_break: TieBreak,
    rng: &mut R,
) -> Resolution {
    if let Some(letter) = tally.leader() {
        return Resolution {
            letter,
            tie_broken: false,
        };
    }

    let (first, second) = tally.dimension().sides();
    let letter = match tie_break {
        TieBreak::Random => {
            if rng.gen_bool(0.5) {
                first
            } else {
                second
            }
        }
        TieBreak::SecondSide => second,
    };

    Resolution {
        letter,
        tie_broken: true,
    }
}
