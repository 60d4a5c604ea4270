use crate::infra::{load_answers, load_question_order};
use clap::{Args, ValueEnum};
use mindshift::config::AppConfig;
use mindshift::error::AppError;
use mindshift::personality::{
    AnswerSet, Dimension, PersonalityScorer, QuestionBank, ScoreResult, TieBreak, TypeProfile,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Shuffle the presentation order as the quiz runner does
    #[arg(long)]
    pub(crate) shuffle: bool,
    /// Seed for a reproducible shuffle
    #[arg(long, requires = "shuffle")]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answers keyed q1..q24, as a JSON object or a question,answer CSV
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// JSON array of prompt texts in the order they were shown (defaults to the bank order)
    #[arg(long)]
    pub(crate) order: Option<PathBuf>,
    /// Resolve balanced dichotomies with this policy [default: MINDSHIFT_TIE_BREAK, else random]
    #[arg(long, value_parser = parse_tie_break)]
    pub(crate) tie_break: Option<TieBreak>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

fn parse_tie_break(raw: &str) -> Result<TieBreak, String> {
    raw.parse()
}

/// An explicit flag wins; otherwise the configured policy applies.
fn resolve_tie_break(flag: Option<TieBreak>) -> Result<TieBreak, AppError> {
    match flag {
        Some(policy) => Ok(policy),
        None => Ok(AppConfig::load()?.scoring.tie_break),
    }
}

fn score_answers(
    answers: &Path,
    order: Option<&Path>,
    tie_break: TieBreak,
) -> Result<ScoreResult, AppError> {
    let answers = load_answers(answers)?;
    let scorer = PersonalityScorer::new(tie_break);
    let result = match order {
        Some(path) => scorer.score(&answers, &load_question_order(path)?),
        None => scorer.score(&answers, &scorer.bank().texts()),
    };
    Ok(result)
}

pub(crate) fn run_questions(args: QuestionsArgs) {
    let bank = QuestionBank::standard();
    let presented = if args.shuffle {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        bank.shuffled(&mut rng)
    } else {
        bank.questions().iter().collect()
    };

    println!("MindShift personality quiz ({} questions)", presented.len());
    println!("Scale: 1 strongly disagree .. 5 strongly agree\n");
    for (slot, question) in presented.iter().enumerate() {
        println!(
            "{:>4}  [{} -> {}]  {}",
            AnswerSet::slot_key(slot + 1),
            question.dimension,
            question.side,
            question.text
        );
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        order,
        tie_break,
        format,
    } = args;

    let tie_break = resolve_tie_break(tie_break)?;
    let result = score_answers(&answers, order.as_deref(), tie_break)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => render_score_result(&result, tie_break),
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let scorer = PersonalityScorer::new(AppConfig::load()?.scoring.tie_break);
    let texts = scorer.bank().texts();

    println!("Personality scoring demo");

    println!("\nRespondent A: energized by people, neutral elsewhere");
    let result = scorer.score(&extravert_respondent(), &texts);
    render_score_result(&result, scorer.tie_break());

    println!("\nRespondent B: neutral on every item");
    let neutral: AnswerSet = (1..=texts.len())
        .map(|slot| (AnswerSet::slot_key(slot), 3))
        .collect();
    let result = scorer.score(&neutral, &texts);
    render_score_result(&result, scorer.tie_break());

    println!("\nRespondent B again, resolving ties toward the second letter");
    let pinned = PersonalityScorer::new(TieBreak::SecondSide);
    let result = pinned.score(&neutral, &texts);
    render_score_result(&result, pinned.tie_break());

    println!("\nJSON payload for respondent A:");
    let result = scorer.score(&extravert_respondent(), &texts);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn extravert_respondent() -> AnswerSet {
    (1..=24)
        .map(|slot| {
            let value = match slot {
                1..=3 => 5,
                4..=6 => 1,
                _ => 3,
            };
            (AnswerSet::slot_key(slot), value)
        })
        .collect()
}

pub(crate) fn render_score_result(result: &ScoreResult, tie_break: TieBreak) {
    let profile = TypeProfile::from(result.personality_type);
    println!(
        "Type: {} ({}, {})",
        profile.code, profile.archetype, profile.temperament_label
    );
    println!("Motto: {}", profile.motto);

    println!("Dichotomies");
    for dimension in Dimension::ordered() {
        let (first, second) = dimension.sides();
        let tally = result.tally(dimension);
        let note = if result.tie_broken.contains(&dimension) {
            format!(" (tied, resolved by {tie_break} tie-break)")
        } else {
            String::new()
        };
        println!(
            "- {}: {}={} {}={} -> {}{}",
            dimension,
            first,
            tally.get(first),
            second,
            tally.get(second),
            result.personality_type.letter(dimension),
            note
        );
    }

    if result.contributions.is_empty() {
        println!("Contributing answers: none");
    } else {
        println!("Contributing answers");
        for contribution in &result.contributions {
            println!(
                "- {} (question {}): answered {} -> {:+} toward {}",
                AnswerSet::slot_key(contribution.position),
                contribution.question_id,
                contribution.value,
                contribution.weight,
                contribution.credited
            );
        }
    }
}
