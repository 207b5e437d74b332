use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::Grade;

/// Marker appended to a topic id when the advanced variant was resolved.
pub const ADVANCED_SUFFIX: &str = "_adv";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseKindError {
    #[error("unknown topic id: {0}")]
    UnknownTopic(String),
}

//
// ─── TOPIC ID ──────────────────────────────────────────────────────────────────
//

/// Closed set of curriculum topics, three per grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicId {
    M1Integer,
    M1Equation,
    M1Function,
    M2Rational,
    M2Inequality,
    M2LinearFunction,
    M3Root,
    M3Factorization,
    M3Quadratic,
    H1Polynomial,
    H1Complex,
    H1Inequality,
    H2Exponent,
    H2Trigonometry,
    H2Sequence,
    H3Limit,
    H3Differentiation,
    H3Integration,
}

impl TopicId {
    pub const ALL: [TopicId; 18] = [
        TopicId::M1Integer,
        TopicId::M1Equation,
        TopicId::M1Function,
        TopicId::M2Rational,
        TopicId::M2Inequality,
        TopicId::M2LinearFunction,
        TopicId::M3Root,
        TopicId::M3Factorization,
        TopicId::M3Quadratic,
        TopicId::H1Polynomial,
        TopicId::H1Complex,
        TopicId::H1Inequality,
        TopicId::H2Exponent,
        TopicId::H2Trigonometry,
        TopicId::H2Sequence,
        TopicId::H3Limit,
        TopicId::H3Differentiation,
        TopicId::H3Integration,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TopicId::M1Integer => "m1_integer",
            TopicId::M1Equation => "m1_equation",
            TopicId::M1Function => "m1_function",
            TopicId::M2Rational => "m2_rational",
            TopicId::M2Inequality => "m2_inequality",
            TopicId::M2LinearFunction => "m2_linear_function",
            TopicId::M3Root => "m3_root",
            TopicId::M3Factorization => "m3_factorization",
            TopicId::M3Quadratic => "m3_quadratic",
            TopicId::H1Polynomial => "h1_polynomial",
            TopicId::H1Complex => "h1_complex",
            TopicId::H1Inequality => "h1_inequality",
            TopicId::H2Exponent => "h2_exponent",
            TopicId::H2Trigonometry => "h2_trigonometry",
            TopicId::H2Sequence => "h2_sequence",
            TopicId::H3Limit => "h3_limit",
            TopicId::H3Differentiation => "h3_differentiation",
            TopicId::H3Integration => "h3_integration",
        }
    }

    /// Grade whose curriculum introduces this topic.
    #[must_use]
    pub fn grade(self) -> Grade {
        match self {
            TopicId::M1Integer | TopicId::M1Equation | TopicId::M1Function => Grade::Middle1,
            TopicId::M2Rational | TopicId::M2Inequality | TopicId::M2LinearFunction => {
                Grade::Middle2
            }
            TopicId::M3Root | TopicId::M3Factorization | TopicId::M3Quadratic => Grade::Middle3,
            TopicId::H1Polynomial | TopicId::H1Complex | TopicId::H1Inequality => Grade::High1,
            TopicId::H2Exponent | TopicId::H2Trigonometry | TopicId::H2Sequence => Grade::High2,
            TopicId::H3Limit | TopicId::H3Differentiation | TopicId::H3Integration => Grade::High3,
        }
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicId {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopicId::ALL
            .into_iter()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| ParseKindError::UnknownTopic(s.to_string()))
    }
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty tier of a generated problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Basic,
    Advanced,
}

//
// ─── PROBLEM KIND ──────────────────────────────────────────────────────────────
//

/// Resolved problem type: the topic plus the tier that was actually generated.
///
/// Renders as the topic id, with [`ADVANCED_SUFFIX`] for the advanced tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProblemKind {
    pub topic: TopicId,
    pub difficulty: Difficulty,
}

impl ProblemKind {
    #[must_use]
    pub fn basic(topic: TopicId) -> Self {
        Self {
            topic,
            difficulty: Difficulty::Basic,
        }
    }

    #[must_use]
    pub fn advanced(topic: TopicId) -> Self {
        Self {
            topic,
            difficulty: Difficulty::Advanced,
        }
    }

    #[must_use]
    pub fn is_advanced(self) -> bool {
        self.difficulty == Difficulty::Advanced
    }

    /// The same topic at the basic tier.
    #[must_use]
    pub fn to_basic(self) -> Self {
        Self::basic(self.topic)
    }
}

impl From<TopicId> for ProblemKind {
    fn from(topic: TopicId) -> Self {
        Self::basic(topic)
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.difficulty {
            Difficulty::Basic => write!(f, "{}", self.topic),
            Difficulty::Advanced => write!(f, "{}{ADVANCED_SUFFIX}", self.topic),
        }
    }
}

impl FromStr for ProblemKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_suffix(ADVANCED_SUFFIX) {
            Some(topic) => topic
                .parse()
                .map(ProblemKind::advanced)
                .map_err(|_| ParseKindError::UnknownTopic(s.to_string())),
            None => s.parse().map(ProblemKind::basic),
        }
    }
}
