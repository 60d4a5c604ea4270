use mindshift::personality::{
    score, AnswerSet, Dimension, Letter, PersonalityScorer, QuestionBank, QuestionId, TieBreak,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;

fn canonical_texts() -> Vec<&'static str> {
    QuestionBank::standard().texts()
}

/// A respondent that leans clearly on every dichotomy: ENTJ.
fn decisive_answers() -> AnswerSet {
    let values = [
        5, 4, 5, 2, 1, 2, // EI
        2, 1, 2, 5, 4, 4, // SN
        5, 5, 4, 2, 2, 1, // TF
        5, 4, 4, 1, 2, 2, // JP
    ];
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| (AnswerSet::slot_key(index + 1), value))
        .collect()
}

#[test]
fn extravert_scenario_resolves_to_e() {
    let answers: AnswerSet = serde_json::from_value(json!({
        "q1": 5, "q2": 5, "q3": 5, "q4": 1, "q5": 1, "q6": 1,
        "q7": 3, "q8": 3, "q9": 3, "q10": 3, "q11": 3, "q12": 3,
        "q13": 3, "q14": 3, "q15": 3, "q16": 3, "q17": 3, "q18": 3,
        "q19": 3, "q20": 3, "q21": 3, "q22": 3, "q23": 3, "q24": 3,
    }))
    .expect("answers decode");

    let result = score(&answers, &canonical_texts());

    let energy = result.tally(Dimension::EnergySource);
    assert_eq!(energy.get(Letter::E), 6);
    assert_eq!(energy.get(Letter::I), 0);
    assert!(result.personality_type.to_string().starts_with('E'));
    assert!(!result.tie_broken.contains(&Dimension::EnergySource));
}

#[test]
fn fully_neutral_quiz_has_empty_tallies() {
    let answers: AnswerSet = (1..=24).map(|slot| (AnswerSet::slot_key(slot), 3)).collect();

    let result = score(&answers, &canonical_texts());

    // Letters are drawn by the random tie-break here, so only the tallies are stable.
    for dimension in Dimension::ordered() {
        let (first, second) = dimension.sides();
        let tally = result.tally(dimension);
        assert_eq!(tally.get(first), 0, "{dimension}");
        assert_eq!(tally.get(second), 0, "{dimension}");
    }
    assert_eq!(result.tie_broken.len(), 4);
}

#[test]
fn decisive_answers_are_deterministic() {
    let answers = decisive_answers();
    let texts = canonical_texts();

    let first = score(&answers, &texts);
    let second = score(&answers, &texts);

    assert_eq!(first.personality_type.to_string(), "ENTJ");
    assert_eq!(first, second);
    assert!(!first.is_tie_broken());
}

#[test]
fn display_shuffling_does_not_change_the_result() {
    let bank = QuestionBank::standard();
    let canonical = decisive_answers();
    let expected = score(&canonical, &bank.texts());

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..5 {
        let mut order: Vec<usize> = (0..24).collect();
        order.shuffle(&mut rng);

        let displayed: Vec<&str> = order.iter().map(|&index| bank.texts()[index]).collect();
        let mut reindexed = AnswerSet::new();
        for (slot, &index) in order.iter().enumerate() {
            let answer = canonical
                .at_position(index + 1)
                .expect("every canonical slot answered");
            reindexed.insert_value(AnswerSet::slot_key(slot + 1), answer);
        }

        let result = score(&reindexed, &displayed);
        assert_eq!(result.personality_type, expected.personality_type);
        assert_eq!(result.scores, expected.scores);
    }
}

#[test]
fn unknown_prompt_text_is_treated_as_unanswered() {
    let mut texts: Vec<String> = canonical_texts().into_iter().map(String::from).collect();
    texts[12] = "This prompt was edited after launch.".to_string();
    let scorer = PersonalityScorer::new(TieBreak::SecondSide);

    let mut answers = AnswerSet::new();
    answers.insert("q13", 5);

    let result = scorer.score(&answers, &texts);

    assert!(result.scores.is_all_zero());
    assert_eq!(result.personality_type.to_string(), "INFP");
}

#[test]
fn straight_apostrophes_do_not_match_the_bank() {
    let mut texts: Vec<String> = canonical_texts().into_iter().map(String::from).collect();
    texts[9] = texts[9].replace('\u{2019}', "'");
    let scorer = PersonalityScorer::new(TieBreak::SecondSide);

    let mut answers = AnswerSet::new();
    answers.insert("q10", 5);

    let result = scorer.score(&answers, &texts);
    assert!(result.scores.is_all_zero());
}

#[test]
fn absent_and_garbage_answers_match_omission() {
    let scorer = PersonalityScorer::new(TieBreak::SecondSide);
    let texts = canonical_texts();

    let baseline: AnswerSet = serde_json::from_value(json!({ "q1": 5 })).expect("decodes");
    let noisy: AnswerSet = serde_json::from_value(json!({
        "q1": 5,
        "q2": "strongly agree",
        "q3": null,
        "q4": { "value": 5 },
        "q99": 5,
    }))
    .expect("decodes");

    assert_eq!(
        scorer.score(&baseline, &texts),
        scorer.score(&noisy, &texts)
    );
}

#[test]
fn zero_is_clamped_rather_than_ignored() {
    let scorer = PersonalityScorer::new(TieBreak::SecondSide);
    let answers: AnswerSet = [("q1", 0)].into_iter().collect();

    let result = scorer.score(&answers, &canonical_texts());

    assert_eq!(result.tally(Dimension::EnergySource).get(Letter::I), 2);
    assert_eq!(result.contributions[0].weight, -2);
}

#[test]
fn id_join_matches_text_join() {
    let bank = QuestionBank::standard();
    let scorer = PersonalityScorer::new(TieBreak::SecondSide);
    let mut rng = StdRng::seed_from_u64(9);

    let presented = bank.shuffled(&mut rng);
    let texts: Vec<&str> = presented.iter().map(|question| question.text).collect();
    let ids: Vec<QuestionId> = presented.iter().map(|question| question.id).collect();
    let answers = decisive_answers();

    assert_eq!(
        scorer.score(&answers, &texts),
        scorer.score_by_ids(&answers, &ids)
    );
}

#[test]
fn result_serializes_with_type_and_scores() {
    let result = PersonalityScorer::new(TieBreak::SecondSide)
        .score(&decisive_answers(), &canonical_texts());

    let value = serde_json::to_value(&result).expect("serializes");
    assert_eq!(value["type"], "ENTJ");
    assert_eq!(value["scores"]["EI"]["E"], 9);
    assert_eq!(value["scores"]["EI"]["I"], 0);
    assert_eq!(value["tie_broken"], json!([]));
}
