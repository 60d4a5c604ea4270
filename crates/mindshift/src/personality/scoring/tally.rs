use super::super::catalog::{Dimension, Letter};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Points accumulated by each side of one dichotomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionTally {
    dimension: Dimension,
    first: u32,
    second: u32,
}

impl DimensionTally {
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            first: 0,
            second: 0,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Points held by `letter`. Letters from another dichotomy hold none.
    pub fn get(&self, letter: Letter) -> u32 {
        let (first, second) = self.dimension.sides();
        if letter == first {
            self.first
        } else if letter == second {
            self.second
        } else {
            0
        }
    }

    pub(crate) fn credit(&mut self, letter: Letter, points: u32) {
        let (first, second) = self.dimension.sides();
        if letter == first {
            self.first += points;
        } else if letter == second {
            self.second += points;
        }
    }

    /// The strictly leading side, if any.
    pub fn leader(&self) -> Option<Letter> {
        let (first, second) = self.dimension.sides();
        match self.first.cmp(&self.second) {
            std::cmp::Ordering::Greater => Some(first),
            std::cmp::Ordering::Less => Some(second),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn is_tied(&self) -> bool {
        self.first == self.second
    }
}

impl Serialize for DimensionTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (first, second) = self.dimension.sides();
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(&first, &self.first)?;
        map.serialize_entry(&second, &self.second)?;
        map.end()
    }
}

/// The four tallies of one scoring pass, keyed by dichotomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionScores {
    tallies: [DimensionTally; 4],
}

impl DimensionScores {
    pub(crate) fn empty() -> Self {
        Self {
            tallies: Dimension::ordered().map(DimensionTally::new),
        }
    }

    pub fn get(&self, dimension: Dimension) -> &DimensionTally {
        &self.tallies[dimension.index()]
    }

    pub(crate) fn credit(&mut self, letter: Letter, points: u32) {
        self.tallies[letter.dimension().index()].credit(letter, points);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionTally> {
        self.tallies.iter()
    }

    pub fn is_all_zero(&self) -> bool {
        self.iter().all(|tally| tally.first == 0 && tally.second == 0)
    }
}

impl Serialize for DimensionScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tallies.len()))?;
        for tally in self.iter() {
            map.serialize_entry(&tally.dimension, tally)?;
        }
        map.end()
    }
}
