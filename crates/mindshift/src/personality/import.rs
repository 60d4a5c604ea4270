use super::answers::{AnswerSet, AnswerValue};
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnswerImportError {
    #[error("failed to read answer export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads a `question,answer` CSV export into an [`AnswerSet`].
///
/// Question cells may be written `q7` or `7`. Blank answers are left out and
/// anything non-numeric is kept as an unreadable response.
pub fn import_answers_csv<R: Read>(reader: R) -> Result<AnswerSet, AnswerImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut answers = AnswerSet::new();

    for record in csv_reader.deserialize::<AnswerRow>() {
        let row = record?;
        let Some(raw) = row.answer else {
            continue;
        };
        answers.insert_value(normalize_key(&row.question), AnswerValue::parse(&raw));
    }

    Ok(answers)
}

pub fn import_answers_path(path: impl AsRef<Path>) -> Result<AnswerSet, AnswerImportError> {
    let file = File::open(path)?;
    import_answers_csv(file)
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    answer: Option<String>,
}

fn normalize_key(raw: &str) -> String {
    let key = raw.trim().to_ascii_lowercase();
    if !key.is_empty() && key.chars().all(|c| c.is_ascii_digit()) {
        AnswerSet::slot_key(key.parse().unwrap_or_default())
    } else {
        key
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
