use chrono::{DateTime, Utc};
use serde::Serialize;

use quiz_core::model::{Grade, Problem};

//
// ─── ATTEMPT ───────────────────────────────────────────────────────────────────
//

/// Outcome of the latest submission on a slot's current problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Attempt {
    #[default]
    Unanswered,
    Answered {
        option: usize,
        correct: bool,
        /// Milliseconds between presenting the problem and this submission.
        solve_ms: i64,
    },
}

impl Attempt {
    #[must_use]
    pub fn is_answered(&self) -> bool {
        matches!(self, Attempt::Answered { .. })
    }

    #[must_use]
    pub fn option(&self) -> Option<usize> {
        match self {
            Attempt::Answered { option, .. } => Some(*option),
            Attempt::Unanswered => None,
        }
    }

    #[must_use]
    pub fn correct(&self) -> Option<bool> {
        match self {
            Attempt::Answered { correct, .. } => Some(*correct),
            Attempt::Unanswered => None,
        }
    }

    #[must_use]
    pub fn solve_ms(&self) -> Option<i64> {
        match self {
            Attempt::Answered { solve_ms, .. } => Some(*solve_ms),
            Attempt::Unanswered => None,
        }
    }
}

//
// ─── SLOT ──────────────────────────────────────────────────────────────────────
//

/// One of the fixed stage positions in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotRecord {
    problem: Problem,
    started_at: DateTime<Utc>,
    attempt: Attempt,
}

impl SlotRecord {
    pub(crate) fn new(problem: Problem, started_at: DateTime<Utc>) -> Self {
        Self {
            problem,
            started_at,
            attempt: Attempt::Unanswered,
        }
    }

    /// Swaps in a retry problem and clears the previous attempt.
    pub(crate) fn replace(&mut self, problem: Problem, started_at: DateTime<Utc>) {
        self.problem = problem;
        self.started_at = started_at;
        self.attempt = Attempt::Unanswered;
    }

    pub(crate) fn record(&mut self, attempt: Attempt) {
        self.attempt = attempt;
    }

    #[must_use]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// When the slot's current problem was presented.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn attempt(&self) -> Attempt {
        self.attempt
    }
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Lifecycle phase derived from the session fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    NoSession,
    Active,
    Finished,
}

/// Read-only snapshot of a quiz session.
///
/// `slots.len() == current_index + 1` whenever a session is active; slots are
/// never generated ahead of the learner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub(crate) grade: Option<Grade>,
    pub(crate) slots: Vec<SlotRecord>,
    pub(crate) current_index: usize,
    pub(crate) retry_count: u8,
    pub(crate) is_finished: bool,
    pub(crate) score: u32,
    pub(crate) started_at: Option<DateTime<Utc>>,
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (self.grade, self.is_finished) {
            (None, _) => SessionPhase::NoSession,
            (Some(_), false) => SessionPhase::Active,
            (Some(_), true) => SessionPhase::Finished,
        }
    }

    #[must_use]
    pub fn current_grade(&self) -> Option<Grade> {
        self.grade
    }

    #[must_use]
    pub fn slots(&self) -> &[SlotRecord] {
        &self.slots
    }

    pub fn problems(&self) -> impl Iterator<Item = &Problem> {
        self.slots.iter().map(SlotRecord::problem)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_slot(&self) -> Option<&SlotRecord> {
        self.slots.get(self.current_index)
    }

    #[must_use]
    pub fn current_problem(&self) -> Option<&Problem> {
        self.current_slot().map(SlotRecord::problem)
    }

    /// Option index last submitted per slot.
    #[must_use]
    pub fn answers(&self) -> Vec<Option<usize>> {
        self.slots.iter().map(|slot| slot.attempt.option()).collect()
    }

    /// Correctness of the last submission per slot.
    #[must_use]
    pub fn results(&self) -> Vec<Option<bool>> {
        self.slots.iter().map(|slot| slot.attempt.correct()).collect()
    }

    #[must_use]
    pub fn solve_times_ms(&self) -> Vec<Option<i64>> {
        self.slots.iter().map(|slot| slot.attempt.solve_ms()).collect()
    }

    #[must_use]
    pub fn retry_count(&self) -> u8 {
        self.retry_count
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }
}
