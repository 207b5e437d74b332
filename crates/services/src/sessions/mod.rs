mod progress;
mod report;
mod service;
mod state;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use report::{MessageBand, QuizReport, SlotReview, TopicStats, format_duration};
pub use service::{AdvanceOutcome, IgnoreReason, QuizSession, StartOutcome, SubmitOutcome};
pub use state::{Attempt, SessionPhase, SessionState, SlotRecord};
