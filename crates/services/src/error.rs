//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::Grade;

/// Errors emitted by quiz sessions and their reports.
///
/// Invalid transitions are not errors; they come back as `Ignored` outcomes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("curriculum lists no topics for {0}")]
    EmptyCurriculum(Grade),
    #[error("session has not finished yet")]
    NotFinished,
    #[error(transparent)]
    Core(#[from] quiz_core::Error),
}

impl From<quiz_core::model::ParseGradeError> for SessionError {
    fn from(err: quiz_core::model::ParseGradeError) -> Self {
        Self::Core(err.into())
    }
}
