#![forbid(unsafe_code)]

pub mod error;
pub mod logging;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::SessionError;
pub use logging::init_tracing;

pub use sessions::{
    AdvanceOutcome, Attempt, IgnoreReason, MessageBand, QuizReport, QuizSession, SessionPhase,
    SessionProgress, SessionState, SlotReview, StartOutcome, SubmitOutcome, TopicStats,
};
