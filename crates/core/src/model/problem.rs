use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, Grade, ProblemId, ProblemKind};

/// Number of answer choices presented for every problem.
pub const OPTION_COUNT: usize = 4;

//
// ─── GENERATED CONTENT ─────────────────────────────────────────────────────────
//

/// Content synthesized by a generator, before identity is stamped on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub question: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer: usize,
    pub explanation: String,
}

//
// ─── PROBLEM ───────────────────────────────────────────────────────────────────
//

/// A multiple-choice problem instance presented in one session slot.
///
/// Immutable once created. `options[correct_answer]` is the true answer and the
/// other three entries are distinct distractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    id: ProblemId,
    kind: ProblemKind,
    grade: Grade,
    question: String,
    options: [String; OPTION_COUNT],
    correct_answer: usize,
    explanation: String,
}

impl Problem {
    /// Stamps generated content with its identity and resolved kind.
    #[must_use]
    pub fn from_generated(
        id: ProblemId,
        kind: ProblemKind,
        grade: Grade,
        generated: Generated,
    ) -> Self {
        Self {
            id,
            kind,
            grade,
            question: generated.question,
            options: generated.options,
            correct_answer: generated.correct_answer,
            explanation: generated.explanation,
        }
    }

    /// Stand-in problem used when no generator can serve a request.
    #[must_use]
    pub fn placeholder(id: ProblemId, kind: ProblemKind, grade: Grade) -> Self {
        Self {
            id,
            kind: kind.to_basic(),
            grade,
            question: "문제 생성 오류".to_string(),
            options: ["1", "2", "3", "4"].map(String::from),
            correct_answer: 0,
            explanation: "해당 유형의 문제 생성기가 없습니다.".to_string(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ProblemId {
        self.id
    }

    /// Resolved kind, including the advanced tier when it was rolled.
    #[must_use]
    pub fn kind(&self) -> ProblemKind {
        self.kind
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        self.grade
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.kind.difficulty
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer]
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}
