use super::super::answers::AnswerSet;
use super::super::catalog::{Question, QUESTION_COUNT};
use super::tally::DimensionScores;
use super::ItemContribution;
use tracing::trace;

/// Maps a Likert response to a signed agreement weight in `-2..=2`.
pub(crate) fn likert_weight(value: i64) -> i8 {
    // clamp keeps the cast lossless
    (value.clamp(1, 5) - 3) as i8
}

/// Walks the presentation slots `q1..q24` and accumulates weights per side.
///
/// `placements` yields the catalog question shown at each slot, or `None` when
/// the slot could not be joined back to the catalog.
pub(crate) fn accumulate<'q, I>(
    answers: &AnswerSet,
    placements: I,
) -> (DimensionScores, Vec<ItemContribution>)
where
    I: IntoIterator<Item = Option<&'q Question>>,
{
    let mut scores = DimensionScores::empty();
    let mut contributions = Vec::new();

    for (position, placement) in (1..=QUESTION_COUNT).zip(placements) {
        let Some(question) = placement else {
            trace!(position, "presented prompt is not catalogued, skipping");
            continue;
        };

        let Some(value) = answers.at_position(position).and_then(|answer| answer.likert()) else {
            trace!(position, "no readable answer, skipping");
            continue;
        };

        let weight = likert_weight(value);
        if weight == 0 {
            continue;
        }

        let credited = if weight > 0 {
            question.side
        } else {
            question.side.opposite()
        };
        scores.credit(credited, u32::from(weight.unsigned_abs()));

        contributions.push(ItemContribution {
            position,
            question_id: question.id,
            dimension: question.dimension,
            value,
            weight,
            credited,
        });
    }

    (scores, contributions)
}
