mod grade;
mod ids;
mod problem;
mod quiz_settings;
mod topic;

pub use grade::{Grade, ParseGradeError};
pub use ids::{ParseIdError, ProblemId};
pub use problem::{Generated, OPTION_COUNT, Problem};
pub use quiz_settings::{QuizSettings, QuizSettingsError};
pub use topic::{ADVANCED_SUFFIX, Difficulty, ParseKindError, ProblemKind, TopicId};
