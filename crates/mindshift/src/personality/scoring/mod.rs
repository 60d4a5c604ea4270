mod policy;
mod rules;
mod tally;

pub use policy::TieBreak;
pub use tally::{DimensionScores, DimensionTally};

use super::answers::AnswerSet;
use super::catalog::{Dimension, Letter, QuestionBank, QuestionId};
use super::types::PersonalityType;
use policy::resolve_letter;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Stateless scorer joining presented prompts to the standard question bank.
///
/// Scoring never fails: uncatalogued prompts, missing answers, and unreadable
/// values all contribute nothing.
#[derive(Debug, Clone, Copy)]
pub struct PersonalityScorer {
    bank: &'static QuestionBank,
    tie_break: TieBreak,
}

impl Default for PersonalityScorer {
    fn default() -> Self {
        Self::new(TieBreak::default())
    }
}

impl PersonalityScorer {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            bank: QuestionBank::standard(),
            tie_break,
        }
    }

    pub fn bank(&self) -> &'static QuestionBank {
        self.bank
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Scores answers keyed `q1..q24` against the prompts in the order they were shown.
    pub fn score<S: AsRef<str>>(&self, answers: &AnswerSet, displayed: &[S]) -> ScoreResult {
        self.score_with_rng(answers, displayed, &mut rand::thread_rng())
    }

    pub fn score_with_rng<S, R>(
        &self,
        answers: &AnswerSet,
        displayed: &[S],
        rng: &mut R,
    ) -> ScoreResult
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let placements = displayed
            .iter()
            .map(|text| self.bank.lookup_text(text.as_ref()));
        let (scores, contributions) = rules::accumulate(answers, placements);
        self.finish(scores, contributions, rng)
    }

    /// Same as [`score`](Self::score) but joins on stable question ids instead of prompt text.
    pub fn score_by_ids(&self, answers: &AnswerSet, displayed: &[QuestionId]) -> ScoreResult {
        self.score_by_ids_with_rng(answers, displayed, &mut rand::thread_rng())
    }

    pub fn score_by_ids_with_rng<R: Rng + ?Sized>(
        &self,
        answers: &AnswerSet,
        displayed: &[QuestionId],
        rng: &mut R,
    ) -> ScoreResult {
        let placements = displayed.iter().map(|&id| self.bank.get(id));
        let (scores, contributions) = rules::accumulate(answers, placements);
        self.finish(scores, contributions, rng)
    }

    fn finish<R: Rng + ?Sized>(
        &self,
        scores: DimensionScores,
        contributions: Vec<ItemContribution>,
        rng: &mut R,
    ) -> ScoreResult {
        let mut tie_broken = Vec::new();
        let letters = Dimension::ordered().map(|dimension| {
            let resolution = resolve_letter(scores.get(dimension), self.tie_break, &mut *rng);
            if resolution.tie_broken {
                tie_broken.push(dimension);
            }
            resolution.letter
        });

        let personality_type = PersonalityType::from_resolved(letters);

        debug!(
            %personality_type,
            ties = tie_broken.len(),
            contributions = contributions.len(),
            "scored personality quiz"
        );

        ScoreResult {
            personality_type,
            scores,
            tie_broken,
            contributions,
        }
    }
}

/// Scores with the default (random tie-break) scorer.
pub fn score<S: AsRef<str>>(answers: &AnswerSet, displayed: &[S]) -> ScoreResult {
    PersonalityScorer::default().score(answers, displayed)
}

/// Audit entry for one answered slot that moved a tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemContribution {
    pub position: usize,
    pub question_id: QuestionId,
    pub dimension: Dimension,
    pub value: i64,
    pub weight: i8,
    pub credited: Letter,
}

/// Outcome of a scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    #[serde(rename = "type")]
    pub personality_type: PersonalityType,
    pub scores: DimensionScores,
    /// Dichotomies whose letter came from the tie-break policy.
    pub tie_broken: Vec<Dimension>,
    pub contributions: Vec<ItemContribution>,
}

impl ScoreResult {
    pub fn tally(&self, dimension: Dimension) -> &DimensionTally {
        self.scores.get(dimension)
    }

    /// True when at least one letter depends on the tie-break policy.
    pub fn is_tie_broken(&self) -> bool {
        !self.tie_broken.is_empty()
    }
}
