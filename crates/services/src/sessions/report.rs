//! Result screen aggregation for a finished session.

use chrono::{DateTime, Utc};
use serde::Serialize;

use quiz_core::Curriculum;
use quiz_core::model::{Grade, ProblemKind, TopicId};
use quiz_core::time::elapsed_between;

use super::state::{SessionState, SlotRecord};
use crate::error::SessionError;

//
// ─── MESSAGE BAND ──────────────────────────────────────────────────────────────
//

/// Encouragement tier picked from the percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageBand {
    Excellent,
    Good,
    Fair,
    KeepGoing,
}

impl MessageBand {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Excellent,
            70..=89 => Self::Good,
            50..=69 => Self::Fair,
            _ => Self::KeepGoing,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "대단해요! 완벽에 가깝습니다.",
            Self::Good => "잘했어요! 조금만 더 노력하면 되겠어요.",
            Self::Fair => "수고했어요. 기초를 조금 더 다져볼까요?",
            Self::KeepGoing => "힘내세요! 꾸준히 하면 실력이 늘 거예요.",
        }
    }
}

//
// ─── REPORT PARTS ──────────────────────────────────────────────────────────────
//

/// Per-topic tally; basic and advanced variants share one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicStats {
    pub topic: TopicId,
    pub title: &'static str,
    pub attempts: u32,
    pub correct: u32,
}

impl TopicStats {
    /// Rounded percentage of slots on this topic answered correctly.
    #[must_use]
    pub fn accuracy(&self) -> u32 {
        rounded_percentage(self.correct, self.attempts)
    }
}

/// One row of the answer review list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotReview {
    /// 1-based slot number.
    pub number: usize,
    pub kind: ProblemKind,
    pub question: String,
    pub chosen: Option<String>,
    pub correct_option: String,
    pub correct: bool,
    pub explanation: String,
    pub solve_ms: Option<i64>,
}

impl SlotReview {
    fn from_slot(number: usize, slot: &SlotRecord) -> Self {
        let problem = slot.problem();
        let attempt = slot.attempt();
        Self {
            number,
            kind: problem.kind(),
            question: problem.question().to_string(),
            chosen: attempt
                .option()
                .and_then(|option| problem.option(option))
                .map(str::to_string),
            correct_option: problem.correct_option().to_string(),
            correct: attempt.correct().unwrap_or(false),
            explanation: problem.explanation().to_string(),
            solve_ms: attempt.solve_ms(),
        }
    }
}

//
// ─── REPORT ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub grade: Grade,
    pub score: u32,
    pub total_slots: usize,
    pub percentage: u32,
    pub total_time_secs: i64,
    pub average_time_per_slot_secs: i64,
    pub topics: Vec<TopicStats>,
    pub slots: Vec<SlotReview>,
    pub band: MessageBand,
}

impl QuizReport {
    /// Summarizes a finished session as of `now`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` unless the session has finished.
    pub fn build(
        state: &SessionState,
        curriculum: &dyn Curriculum,
        now: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let (Some(grade), Some(started_at), true) =
            (state.current_grade(), state.started_at(), state.is_finished())
        else {
            return Err(SessionError::NotFinished);
        };

        let slots = state.slots();
        let total_slots = slots.len();
        let total = u32::try_from(total_slots).unwrap_or(u32::MAX);
        let percentage = rounded_percentage(state.score(), total);

        let total_time_secs = elapsed_between(started_at, now).num_seconds();
        let average_time_per_slot_secs = if total_slots == 0 {
            0
        } else {
            total_time_secs / i64::try_from(total_slots).unwrap_or(i64::MAX)
        };

        Ok(Self {
            grade,
            score: state.score(),
            total_slots,
            percentage,
            total_time_secs,
            average_time_per_slot_secs,
            topics: topic_stats(slots, grade, curriculum),
            slots: slots
                .iter()
                .enumerate()
                .map(|(i, slot)| SlotReview::from_slot(i + 1, slot))
                .collect(),
            band: MessageBand::from_percentage(percentage),
        })
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.band.message()
    }

    #[must_use]
    pub fn total_time_label(&self) -> String {
        format_duration(self.total_time_secs)
    }
}

fn topic_stats(slots: &[SlotRecord], grade: Grade, curriculum: &dyn Curriculum) -> Vec<TopicStats> {
    let mut stats: Vec<TopicStats> = Vec::new();
    for slot in slots {
        let topic = slot.problem().kind().topic;
        let index = match stats.iter().position(|entry| entry.topic == topic) {
            Some(index) => index,
            None => {
                stats.push(TopicStats {
                    topic,
                    title: curriculum
                        .title(grade, topic)
                        .unwrap_or_else(|| topic.as_str()),
                    attempts: 0,
                    correct: 0,
                });
                stats.len() - 1
            }
        };

        let entry = &mut stats[index];
        entry.attempts += 1;
        if slot.attempt().correct() == Some(true) {
            entry.correct += 1;
        }
    }
    stats
}

/// `round(100 * part / whole)`, halves rounding up; zero when `whole` is zero.
fn rounded_percentage(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (u64::from(part), u64::from(whole));
    let rounded = (200 * part + whole) / (2 * whole);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Formats whole seconds as `"{m}분 {s}초"`.
#[must_use]
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{}분 {}초", secs / 60, secs % 60)
}
