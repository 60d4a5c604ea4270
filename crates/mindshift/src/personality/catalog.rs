use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Number of items in the standard question bank.
pub const QUESTION_COUNT: usize = 24;

/// One of the four personality dichotomies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "EI")]
    EnergySource,
    #[serde(rename = "SN")]
    Perception,
    #[serde(rename = "TF")]
    Judgement,
    #[serde(rename = "JP")]
    Lifestyle,
}

impl Dimension {
    /// Resolution order of the dichotomies within a type code.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::EnergySource,
            Self::Perception,
            Self::Judgement,
            Self::Lifestyle,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::EnergySource => "EI",
            Self::Perception => "SN",
            Self::Judgement => "TF",
            Self::Lifestyle => "JP",
        }
    }

    pub const fn sides(self) -> (Letter, Letter) {
        match self {
            Self::EnergySource => (Letter::E, Letter::I),
            Self::Perception => (Letter::S, Letter::N),
            Self::Judgement => (Letter::T, Letter::F),
            Self::Lifestyle => (Letter::J, Letter::P),
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::EnergySource => 0,
            Self::Perception => 1,
            Self::Judgement => 2,
            Self::Lifestyle => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single side of a dichotomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Letter {
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::E | Self::I => Dimension::EnergySource,
            Self::S | Self::N => Dimension::Perception,
            Self::T | Self::F => Dimension::Judgement,
            Self::J | Self::P => Dimension::Lifestyle,
        }
    }

    /// The other side of the same dichotomy.
    pub const fn opposite(self) -> Self {
        match self {
            Self::E => Self::I,
            Self::I => Self::E,
            Self::S => Self::N,
            Self::N => Self::S,
            Self::T => Self::F,
            Self::F => Self::T,
            Self::J => Self::P,
            Self::P => Self::J,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::E => 'E',
            Self::I => 'I',
            Self::S => 'S',
            Self::N => 'N',
            Self::T => 'T',
            Self::F => 'F',
            Self::J => 'J',
            Self::P => 'P',
        }
    }

    pub fn from_char(value: char) -> Option<Self> {
        match value.to_ascii_uppercase() {
            'E' => Some(Self::E),
            'I' => Some(Self::I),
            'S' => Some(Self::S),
            'N' => Some(Self::N),
            'T' => Some(Self::T),
            'F' => Some(Self::F),
            'J' => Some(Self::J),
            'P' => Some(Self::P),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Stable identifier assigned to each question at catalog definition time.
///
/// Identifiers follow the canonical order of the bank (1-based) and never
/// change when the quiz runner shuffles the presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u8);

impl QuestionId {
    pub fn new(value: u8) -> Option<Self> {
        (1..=QUESTION_COUNT as u8)
            .contains(&value)
            .then_some(Self(value))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    fn index(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable catalog entry: the literal prompt and the side it favors on agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    pub dimension: Dimension,
    pub side: Letter,
}

// Six items per dichotomy, three phrased toward each side.
const STANDARD_QUESTIONS: [(&str, Letter); QUESTION_COUNT] = [
    (
        "You gain energy from being around people and external activity.",
        Letter::E,
    ),
    (
        "You prefer discussing ideas out loud rather than reflecting silently.",
        Letter::E,
    ),
    (
        "You are quick to engage and speak up in group settings.",
        Letter::E,
    ),
    (
        "You feel refreshed after spending time alone with your thoughts.",
        Letter::I,
    ),
    (
        "You often think through an idea fully before sharing it.",
        Letter::I,
    ),
    (
        "You prefer a few close friends over a wide circle of acquaintances.",
        Letter::I,
    ),
    (
        "You rely on concrete facts and past experience when solving problems.",
        Letter::S,
    ),
    (
        "You are attentive to practical details in day-to-day tasks.",
        Letter::S,
    ),
    (
        "You prefer step-by-step instructions over open-ended exploration.",
        Letter::S,
    ),
    (
        "You\u{2019}re drawn to patterns, possibilities, and big-picture connections.",
        Letter::N,
    ),
    (
        "You enjoy brainstorming novel ideas and future scenarios.",
        Letter::N,
    ),
    (
        "You often interpret information beyond what is explicitly stated.",
        Letter::N,
    ),
    (
        "You prioritize objective criteria over personal values when deciding.",
        Letter::T,
    ),
    (
        "You feel comfortable giving candid, critical feedback when needed.",
        Letter::T,
    ),
    (
        "In debates, you value accuracy more than maintaining harmony.",
        Letter::T,
    ),
    (
        "You consider the impact on people as much as the logic of a decision.",
        Letter::F,
    ),
    (
        "You strive to create consensus and preserve relationships.",
        Letter::F,
    ),
    (
        "You tend to empathize and see multiple personal perspectives.",
        Letter::F,
    ),
    (
        "You like to plan ahead and close decisions rather than keep options open.",
        Letter::J,
    ),
    (
        "You feel satisfied when tasks are completed well before deadlines.",
        Letter::J,
    ),
    (
        "You prefer clear structure, schedules, and defined expectations.",
        Letter::J,
    ),
    (
        "You enjoy keeping options open and adapting plans as things change.",
        Letter::P,
    ),
    (
        "You\u{2019}re productive in flexible, spontaneous bursts rather than steady routines.",
        Letter::P,
    ),
    (
        "You\u{2019}re comfortable starting before everything is fully defined.",
        Letter::P,
    ),
];

/// Read-only question bank with a text index used to join displayed prompts
/// back to their scoring metadata.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
    by_text: HashMap<&'static str, usize>,
}

impl QuestionBank {
    /// The 24-item bank shared by every scorer in the process.
    pub fn standard() -> &'static QuestionBank {
        static BANK: OnceLock<QuestionBank> = OnceLock::new();
        BANK.get_or_init(|| Self::from_entries(&STANDARD_QUESTIONS))
    }

    fn from_entries(entries: &[(&'static str, Letter)]) -> Self {
        let questions: Vec<Question> = entries
            .iter()
            .zip(1u8..)
            .map(|(&(text, side), id)| Question {
                id: QuestionId(id),
                text,
                dimension: side.dimension(),
                side,
            })
            .collect();

        let by_text = questions
            .iter()
            .enumerate()
            .map(|(index, question)| (question.text, index))
            .collect();

        Self { questions, by_text }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn texts(&self) -> Vec<&'static str> {
        self.questions.iter().map(|question| question.text).collect()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id.index())
    }

    /// Exact, case-sensitive match against the canonical prompt text.
    pub fn lookup_text(&self, text: &str) -> Option<&Question> {
        self.by_text
            .get(text)
            .and_then(|&index| self.questions.get(index))
    }

    /// Randomized presentation order for a quiz session.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&Question> {
        let mut order: Vec<&Question> = self.questions.iter().collect();
        order.shuffle(rng);
        order
    }
}
