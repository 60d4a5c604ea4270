//! Personality quiz: the 24-item question bank, answer decoding, and the
//! Likert scoring engine that resolves a four-letter type.

pub mod answers;
pub mod catalog;
pub mod import;
pub mod router;
pub mod scoring;
pub mod types;

#[cfg(test)]
mod tests;

pub use answers::{AnswerSet, AnswerValue};
pub use catalog::{Dimension, Letter, Question, QuestionBank, QuestionId, QUESTION_COUNT};
pub use import::{import_answers_csv, import_answers_path, AnswerImportError};
pub use router::{personality_router, ScoreRequest, ScoreResponse};
pub use scoring::{
    score, DimensionScores, DimensionTally, ItemContribution, PersonalityScorer, ScoreResult,
    TieBreak,
};
pub use types::{PersonalityType, PersonalityTypeError, Temperament, TypeProfile};
