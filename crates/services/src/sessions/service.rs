use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use quiz_core::model::{Grade, OPTION_COUNT, ProblemKind, QuizSettings, TopicId};
use quiz_core::time::elapsed_between;
use quiz_core::{Clock, Curriculum, Dispatcher, GeneratorRegistry, StandardCurriculum};

use super::progress::SessionProgress;
use super::report::QuizReport;
use super::state::{Attempt, SessionPhase, SessionState, SlotRecord};
use crate::error::SessionError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Why a transition was refused. The session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IgnoreReason {
    NoActiveSession,
    SessionActive,
    SessionFinished,
    AlreadyCorrect,
    AlreadyAnswered,
    OptionOutOfRange,
    NotAnswered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StartOutcome {
    Started { grade: Grade, kind: ProblemKind },
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubmitOutcome {
    Recorded { correct: bool, solve_ms: i64 },
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdvanceOutcome {
    /// The slot's problem was replaced by a same-kind problem.
    Retried { retry_count: u8 },
    /// A new slot was appended at `index`.
    NextSlot { index: usize, passed: bool },
    /// The final slot was resolved.
    Finished { passed: bool },
    Ignored(IgnoreReason),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Owns one learner's quiz session and every mutation applied to it.
///
/// A session walks a fixed number of slots. Each slot allows up to
/// `max_attempts` problems of the same kind; a correct answer or running out
/// of attempts moves on to a fresh slot on a randomly chosen topic.
pub struct QuizSession {
    settings: QuizSettings,
    curriculum: Arc<dyn Curriculum + Send + Sync>,
    dispatcher: Dispatcher,
    clock: Clock,
    rng: StdRng,
    state: SessionState,
}

impl QuizSession {
    /// Creates an idle session over the given curriculum and generators.
    ///
    /// The random source is seeded from OS entropy; see [`Self::with_seed`].
    #[must_use]
    pub fn new(
        settings: QuizSettings,
        curriculum: Arc<dyn Curriculum + Send + Sync>,
        registry: GeneratorRegistry,
    ) -> Self {
        Self {
            settings,
            curriculum,
            dispatcher: Dispatcher::new(registry, &settings),
            clock: Clock::default_clock(),
            rng: StdRng::from_os_rng(),
            state: SessionState::default(),
        }
    }

    /// Standard curriculum and generators with default settings.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_settings(QuizSettings::default())
    }

    /// Standard curriculum and generators with custom settings.
    #[must_use]
    pub fn with_settings(settings: QuizSettings) -> Self {
        Self::new(
            settings,
            Arc::new(StandardCurriculum),
            GeneratorRegistry::standard(),
        )
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the random source with a seeded one for reproducible sessions.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Mutable access to the clock, so tests can advance a fixed one.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let state = &self.state;
        let total = self.settings.slot_count();
        let resolved = match state.phase() {
            SessionPhase::NoSession => 0,
            SessionPhase::Active => state.current_index,
            SessionPhase::Finished => total,
        };

        SessionProgress {
            total,
            resolved,
            remaining: total - resolved,
            score: state.score,
            retry_count: state.retry_count,
            is_complete: state.is_finished,
        }
    }

    /// Builds the result report for a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` while the session is idle or active.
    pub fn report(&self) -> Result<QuizReport, SessionError> {
        QuizReport::build(&self.state, &*self.curriculum, self.clock.now())
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Begins a session on the first topic listed for `grade`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyCurriculum` if the curriculum lists no
    /// topics for `grade`.
    pub fn start(&mut self, grade: Grade) -> Result<StartOutcome, SessionError> {
        if self.state.phase() != SessionPhase::NoSession {
            warn!(%grade, "start ignored, a session already exists");
            return Ok(StartOutcome::Ignored(IgnoreReason::SessionActive));
        }

        let Some(first) = self.curriculum.topics(grade).first().map(|d| d.id) else {
            return Err(SessionError::EmptyCurriculum(grade));
        };

        let now = self.clock.now();
        let problem = self.dispatcher.generate(grade, first, &mut self.rng);
        let kind = problem.kind();

        self.state = SessionState {
            grade: Some(grade),
            slots: vec![SlotRecord::new(problem, now)],
            current_index: 0,
            retry_count: 0,
            is_finished: false,
            score: 0,
            started_at: Some(now),
        };

        debug!(%grade, %kind, "session started");
        Ok(StartOutcome::Started { grade, kind })
    }

    /// Parses a grade id such as `"Middle1"` and starts on it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Core` for an unknown grade id, or anything
    /// [`Self::start`] returns.
    pub fn start_with_id(&mut self, grade_id: &str) -> Result<StartOutcome, SessionError> {
        let grade: Grade = grade_id.parse()?;
        self.start(grade)
    }

    /// Records the learner's choice for the current slot.
    ///
    /// Only the first submission on a presented problem counts; later ones are
    /// ignored until [`Self::advance`] resolves the slot.
    pub fn submit_answer(&mut self, option: usize) -> SubmitOutcome {
        if let Some(reason) = self.inactive_reason() {
            return SubmitOutcome::Ignored(reason);
        }

        let now = self.clock.now();
        let index = self.state.current_index;
        let Some(slot) = self.state.slots.get_mut(index) else {
            return SubmitOutcome::Ignored(IgnoreReason::NoActiveSession);
        };

        match slot.attempt() {
            Attempt::Answered { correct: true, .. } => {
                return SubmitOutcome::Ignored(IgnoreReason::AlreadyCorrect);
            }
            Attempt::Answered { .. } => {
                return SubmitOutcome::Ignored(IgnoreReason::AlreadyAnswered);
            }
            Attempt::Unanswered => {}
        }

        if option >= OPTION_COUNT {
            warn!(option, "submitted option out of range");
            return SubmitOutcome::Ignored(IgnoreReason::OptionOutOfRange);
        }

        let correct = slot.problem().is_correct(option);
        let solve_ms = elapsed_between(slot.started_at(), now).num_milliseconds();
        slot.record(Attempt::Answered {
            option,
            correct,
            solve_ms,
        });

        debug!(slot = index, option, correct, solve_ms, "answer recorded");
        SubmitOutcome::Recorded { correct, solve_ms }
    }

    /// Resolves the answered current slot: retry it, move on, or finish.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if let Some(reason) = self.inactive_reason() {
            return AdvanceOutcome::Ignored(reason);
        }
        let Some(grade) = self.state.grade else {
            return AdvanceOutcome::Ignored(IgnoreReason::NoActiveSession);
        };
        let Some(slot) = self.state.current_slot() else {
            return AdvanceOutcome::Ignored(IgnoreReason::NoActiveSession);
        };
        let Some(correct) = slot.attempt().correct() else {
            return AdvanceOutcome::Ignored(IgnoreReason::NotAnswered);
        };
        let kind = slot.problem().kind();

        if correct {
            self.state.score += 1;
            return self.next_slot(grade, kind.topic, true);
        }

        if self.state.retry_count < self.settings.max_retries() {
            return self.retry(grade, kind);
        }

        self.next_slot(grade, kind.topic, false)
    }

    /// Discards any session and returns to the idle defaults.
    pub fn reset(&mut self) -> &SessionState {
        self.state = SessionState::default();
        debug!("session reset");
        &self.state
    }

    //
    // ─── HELPERS ───────────────────────────────────────────────────────────────
    //

    fn inactive_reason(&self) -> Option<IgnoreReason> {
        match self.state.phase() {
            SessionPhase::NoSession => Some(IgnoreReason::NoActiveSession),
            SessionPhase::Finished => Some(IgnoreReason::SessionFinished),
            SessionPhase::Active => None,
        }
    }

    fn retry(&mut self, grade: Grade, kind: ProblemKind) -> AdvanceOutcome {
        let now = self.clock.now();
        let problem = self.dispatcher.generate_exact(grade, kind, &mut self.rng);
        let index = self.state.current_index;
        let Some(slot) = self.state.slots.get_mut(index) else {
            return AdvanceOutcome::Ignored(IgnoreReason::NoActiveSession);
        };

        slot.replace(problem, now);
        self.state.retry_count += 1;

        let retry_count = self.state.retry_count;
        debug!(slot = index, %kind, retry_count, "slot retried");
        AdvanceOutcome::Retried { retry_count }
    }

    fn next_slot(&mut self, grade: Grade, current: TopicId, passed: bool) -> AdvanceOutcome {
        self.state.retry_count = 0;

        if self.state.current_index + 1 >= self.settings.slot_count() {
            self.state.is_finished = true;
            debug!(score = self.state.score, passed, "session finished");
            return AdvanceOutcome::Finished { passed };
        }

        let topic = self
            .curriculum
            .topics(grade)
            .choose(&mut self.rng)
            .map_or(current, |descriptor| descriptor.id);
        let now = self.clock.now();
        let problem = self.dispatcher.generate(grade, topic, &mut self.rng);
        let kind = problem.kind();

        self.state.slots.push(SlotRecord::new(problem, now));
        self.state.current_index += 1;

        let index = self.state.current_index;
        debug!(slot = index, %kind, passed, "moved to next slot");
        AdvanceOutcome::NextSlot { index, passed }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("settings", &self.settings)
            .field("dispatcher", &self.dispatcher)
            .field("clock", &self.clock)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::catalog::TopicDescriptor;
    use quiz_core::time::fixed_clock;

    fn new_session(max_attempts: u8) -> QuizSession {
        let settings = QuizSettings::new(20, max_attempts, 0.0).unwrap();
        QuizSession::with_settings(settings)
            .with_clock(fixed_clock())
            .with_seed(42)
    }

    fn started(grade: Grade) -> QuizSession {
        let mut session = new_session(3);
        session.start(grade).unwrap();
        session
    }

    fn correct_option(session: &QuizSession) -> usize {
        session.state().current_problem().unwrap().correct_answer()
    }

    fn wrong_option(session: &QuizSession) -> usize {
        (correct_option(session) + 1) % OPTION_COUNT
    }

    struct EmptyCurriculum;

    impl Curriculum for EmptyCurriculum {
        fn topics(&self, _grade: Grade) -> &[TopicDescriptor] {
            &[]
        }
    }

    #[test]
    fn start_uses_the_first_topic_of_the_grade() {
        let mut session = new_session(3);
        let outcome = session.start(Grade::Middle1).unwrap();

        assert_eq!(
            outcome,
            StartOutcome::Started {
                grade: Grade::Middle1,
                kind: ProblemKind::basic(TopicId::M1Integer),
            }
        );
        let state = session.state();
        assert_eq!(state.phase(), SessionPhase::Active);
        assert_eq!(state.slots().len(), 1);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.started_at(), Some(quiz_core::time::fixed_now()));
    }

    #[test]
    fn start_twice_is_ignored() {
        let mut session = started(Grade::High1);
        let before = session.state().clone();

        let outcome = session.start(Grade::Middle2).unwrap();
        assert_eq!(outcome, StartOutcome::Ignored(IgnoreReason::SessionActive));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn start_rejects_an_empty_curriculum() {
        let mut session = QuizSession::new(
            QuizSettings::default(),
            Arc::new(EmptyCurriculum),
            GeneratorRegistry::standard(),
        );
        let err = session.start(Grade::High3).unwrap_err();
        assert!(matches!(err, SessionError::EmptyCurriculum(Grade::High3)));
        assert_eq!(session.state().phase(), SessionPhase::NoSession);
    }

    #[test]
    fn start_with_id_parses_grade() {
        let mut session = new_session(3);
        assert!(session.start_with_id("High2").is_ok());
        assert_eq!(session.state().current_grade(), Some(Grade::High2));

        let mut other = new_session(3);
        assert!(matches!(
            other.start_with_id("college"),
            Err(SessionError::Core(_))
        ));
    }

    #[test]
    fn transitions_without_session_are_ignored() {
        let mut session = new_session(3);
        assert_eq!(
            session.submit_answer(0),
            SubmitOutcome::Ignored(IgnoreReason::NoActiveSession)
        );
        assert_eq!(
            session.advance(),
            AdvanceOutcome::Ignored(IgnoreReason::NoActiveSession)
        );
    }

    #[test]
    fn advance_before_submit_is_ignored() {
        let mut session = started(Grade::Middle3);
        assert_eq!(
            session.advance(),
            AdvanceOutcome::Ignored(IgnoreReason::NotAnswered)
        );
        assert_eq!(session.state().current_index(), 0);
    }

    #[test]
    fn submission_records_duration_from_the_clock() {
        let mut session = started(Grade::Middle2);
        session.clock_mut().advance(Duration::milliseconds(4_500));

        let option = correct_option(&session);
        assert_eq!(
            session.submit_answer(option),
            SubmitOutcome::Recorded {
                correct: true,
                solve_ms: 4_500
            }
        );
        assert_eq!(session.state().solve_times_ms(), vec![Some(4_500)]);
        assert_eq!(session.state().answers(), vec![Some(option)]);
    }

    #[test]
    fn second_submission_is_ignored() {
        let mut session = started(Grade::Middle1);
        let correct = correct_option(&session);
        session.submit_answer(correct);
        assert_eq!(
            session.submit_answer(correct),
            SubmitOutcome::Ignored(IgnoreReason::AlreadyCorrect)
        );

        let mut session = started(Grade::Middle1);
        let wrong = wrong_option(&session);
        session.submit_answer(wrong);
        assert_eq!(
            session.submit_answer(correct_option(&session)),
            SubmitOutcome::Ignored(IgnoreReason::AlreadyAnswered)
        );
        assert_eq!(session.state().results(), vec![Some(false)]);
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut session = started(Grade::High2);
        assert_eq!(
            session.submit_answer(OPTION_COUNT),
            SubmitOutcome::Ignored(IgnoreReason::OptionOutOfRange)
        );
        assert_eq!(session.state().answers(), vec![None]);
    }

    #[test]
    fn retry_replaces_the_slot_in_place() {
        let mut session = started(Grade::High3);
        let first_id = session.state().current_problem().unwrap().id();
        let first_kind = session.state().current_problem().unwrap().kind();

        session.submit_answer(wrong_option(&session));
        assert_eq!(session.advance(), AdvanceOutcome::Retried { retry_count: 1 });

        let state = session.state();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.slots().len(), 1);
        assert_eq!(state.retry_count(), 1);
        assert_eq!(state.answers(), vec![None]);
        assert_eq!(state.solve_times_ms(), vec![None]);
        let replaced = state.current_problem().unwrap();
        assert_ne!(replaced.id(), first_id);
        assert_eq!(replaced.kind(), first_kind);
    }

    #[test]
    fn single_attempt_setting_moves_on_immediately() {
        let mut session = new_session(1);
        session.start(Grade::Middle1).unwrap();
        session.submit_answer(wrong_option(&session));

        assert_eq!(
            session.advance(),
            AdvanceOutcome::NextSlot {
                index: 1,
                passed: false
            }
        );
        assert_eq!(session.state().score(), 0);
    }

    #[test]
    fn finished_session_ignores_further_input() {
        let settings = QuizSettings::new(1, 3, 0.0).unwrap();
        let mut session = QuizSession::with_settings(settings)
            .with_clock(fixed_clock())
            .with_seed(7);
        session.start(Grade::High1).unwrap();
        session.submit_answer(correct_option(&session));

        assert_eq!(session.advance(), AdvanceOutcome::Finished { passed: true });
        assert_eq!(session.state().slots().len(), 1);
        assert_eq!(
            session.submit_answer(0),
            SubmitOutcome::Ignored(IgnoreReason::SessionFinished)
        );
        assert_eq!(
            session.advance(),
            AdvanceOutcome::Ignored(IgnoreReason::SessionFinished)
        );
        assert_eq!(
            session.start(Grade::High1).unwrap(),
            StartOutcome::Ignored(IgnoreReason::SessionActive)
        );
    }

    #[test]
    fn progress_tracks_resolved_slots() {
        let mut session = new_session(3);
        assert_eq!(session.progress().resolved, 0);

        session.start(Grade::Middle2).unwrap();
        session.submit_answer(correct_option(&session));
        session.advance();

        let progress = session.progress();
        assert_eq!(progress.total, 20);
        assert_eq!(progress.resolved, 1);
        assert_eq!(progress.remaining, 19);
        assert_eq!(progress.score, 1);
        assert!(!progress.is_complete);
    }

    #[test]
    fn report_requires_a_finished_session() {
        let session = started(Grade::Middle1);
        assert!(matches!(session.report(), Err(SessionError::NotFinished)));
    }
}
