use thiserror::Error;

use crate::generator::GenerateError;
use crate::model::{ParseGradeError, ParseKindError, QuizSettingsError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
    #[error(transparent)]
    ParseGrade(#[from] ParseGradeError),
    #[error(transparent)]
    ParseKind(#[from] ParseKindError),
}
