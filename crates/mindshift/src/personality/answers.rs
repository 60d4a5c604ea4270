use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// A single recorded response to a Likert item.
///
/// Numeric responses are kept as given; clamping into `1..=5` happens at scoring
/// time so that out-of-range values still count toward the nearest bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerValue {
    Likert(i64),
    /// Present but not numeric. Scores as if the question was skipped.
    Unreadable,
}

impl AnswerValue {
    /// Decodes a loosely typed JSON value. `null` counts as no answer at all.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(number) => Some(
                number
                    .as_i64()
                    .map(Self::Likert)
                    .or_else(|| number.as_f64().map(Self::from_float))
                    .unwrap_or(Self::Unreadable),
            ),
            Value::String(raw) => Some(Self::parse(raw)),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => Some(Self::Unreadable),
        }
    }

    /// Parses a textual response such as `"4"` or `" 2.0 "`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Likert(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Self::from_float(value),
            Err(_) => Self::Unreadable,
        }
    }

    /// Tallies are whole points, so fractional responses snap to the nearest
    /// step with halves rounding away from zero. `2.5` lands on neutral and
    /// credits nothing; it is not split into half a point for either side.
    fn from_float(value: f64) -> Self {
        if value.is_finite() {
            Self::Likert(value.round() as i64)
        } else {
            Self::Unreadable
        }
    }

    pub fn likert(self) -> Option<i64> {
        match self {
            Self::Likert(value) => Some(value),
            Self::Unreadable => None,
        }
    }
}

/// Responses keyed by presentation slot (`q1`..`q24`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: HashMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key used for the 1-based presentation position.
    pub fn slot_key(position: usize) -> String {
        format!("q{position}")
    }

    pub fn insert(&mut self, key: impl Into<String>, value: i64) {
        self.entries.insert(key.into(), AnswerValue::Likert(value));
    }

    pub fn insert_value(&mut self, key: impl Into<String>, value: AnswerValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<AnswerValue> {
        self.entries.get(key).copied()
    }

    pub fn at_position(&self, position: usize) -> Option<AnswerValue> {
        self.get(&Self::slot_key(position))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, i64)>>(iter: T) -> Self {
        let mut answers = Self::new();
        for (key, value) in iter {
            answers.insert(key, value);
        }
        answers
    }
}

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, Value>::deserialize(deserializer)?;
        let entries = raw
            .into_iter()
            .filter_map(|(key, value)| AnswerValue::from_json(&value).map(|answer| (key, answer)))
            .collect();
        Ok(Self { entries })
    }
}
