use super::common::*;
use crate::personality::{
    AnswerSet, AnswerValue, Dimension, Letter, PersonalityScorer, TieBreak,
};

#[test]
fn extravert_scenario_credits_e_from_both_polarities() {
    let scorer = PersonalityScorer::default();
    let mut rng = seeded_rng(3);

    let result = scorer.score_with_rng(&extravert_answers(), &canonical_texts(), &mut rng);

    let tally = result.tally(Dimension::EnergySource);
    assert_eq!(tally.get(Letter::E), 6);
    assert_eq!(tally.get(Letter::I), 0);
    assert_eq!(result.personality_type.letter(Dimension::EnergySource), Letter::E);
    assert_eq!(result.contributions.len(), 6);
    assert!(result
        .contributions
        .iter()
        .all(|contribution| contribution.credited == Letter::E));
}

#[test]
fn neutral_answers_leave_every_tally_empty() {
    let scorer = PersonalityScorer::default();
    let mut rng = seeded_rng(11);

    let result = scorer.score_with_rng(&uniform_answers(3), &canonical_texts(), &mut rng);

    assert!(result.scores.is_all_zero());
    assert!(result.contributions.is_empty());
    // Every dichotomy is balanced, so the whole code comes from the random tie-break.
    assert_eq!(result.tie_broken, Dimension::ordered().to_vec());
}

#[test]
fn second_side_policy_pins_balanced_results() {
    let scorer = PersonalityScorer::new(TieBreak::SecondSide);

    let result = scorer.score(&AnswerSet::new(), &canonical_texts());

    assert_eq!(result.personality_type.to_string(), "INFP");
    assert!(result.is_tie_broken());
}

#[test]
fn agreement_and_disagreement_are_symmetric() {
    let scorer = PersonalityScorer::new(TieBreak::SecondSide);
    let texts = canonical_texts();

    let agree_with_e: AnswerSet = [("q1", 5)].into_iter().collect();
    let reject_i: AnswerSet = [("q4", 1)].into_iter().collect();

    let first = scorer.score(&agree_with_e, &texts);
    let second = scorer.score(&reject_i, &texts);

    assert_eq!(first.scores, second.scores);
    assert_eq!(first.tally(Dimension::EnergySource).get(Letter::E), 2);
}

#[test]
fn out_of_range_values_clamp_but_unreadable_values_skip() {
    let scorer = PersonalityScorer::new(TieBreak::SecondSide);
    let texts = canonical_texts();

    let mut answers = AnswerSet::new();
    answers.insert("q7", 0);
    answers.insert("q13", 6);
    answers.insert_value("q19", AnswerValue::Unreadable);

    let result = scorer.score(&answers, &texts);

    // q7 favours S; 0 clamps to 1, a strong disagreement.
    assert_eq!(result.tally(Dimension::Perception).get(Letter::N), 2);
    // q13 favours T; 6 clamps to 5.
    assert_eq!(result.tally(Dimension::Judgement).get(Letter::T), 2);
    let lifestyle = result.tally(Dimension::Lifestyle);
    assert_eq!(lifestyle.get(Letter::J) + lifestyle.get(Letter::P), 0);
}

#[test]
fn uncatalogued_prompts_are_skipped() {
    let scorer = PersonalityScorer::new(TieBreak::SecondSide);
    let mut texts: Vec<String> = canonical_texts().into_iter().map(String::from).collect();
    texts[0] = "You enjoy long walks on the beach.".to_string();

    let result = scorer.score(&uniform_answers(5), &texts);

    let energy = result.tally(Dimension::EnergySource);
    // Two remaining E items agree (+4) and three I items agree (+6).
    assert_eq!(energy.get(Letter::E), 4);
    assert_eq!(energy.get(Letter::I), 6);
    assert!(result
        .contributions
        .iter()
        .all(|contribution| contribution.position != 1));
}

#[test]
fn short_presentations_only_score_listed_slots() {
    let scorer = PersonalityScorer::new(TieBreak::SecondSide);
    let all = canonical_texts();

    let result = scorer.score(&uniform_answers(5), &all[..2]);

    assert_eq!(result.tally(Dimension::EnergySource).get(Letter::E), 4);
    assert_eq!(result.contributions.len(), 2);
}

#[test]
fn half_step_answers_score_as_whole_steps() {
    let scorer = PersonalityScorer::new(TieBreak::SecondSide);
    let mut answers = AnswerSet::new();
    answers.insert_value("q1", AnswerValue::parse("2.5"));
    answers.insert_value("q2", AnswerValue::parse("3.4"));
    answers.insert_value("q3", AnswerValue::parse("4.5"));

    let result = scorer.score(&answers, &canonical_texts());

    let tally = result.tally(Dimension::EnergySource);
    assert_eq!(tally.get(Letter::E), 2);
    assert_eq!(tally.get(Letter::I), 0);
    assert_eq!(result.contributions.len(), 1);
    assert_eq!(result.contributions[0].position, 3);
}
