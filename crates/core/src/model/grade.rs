use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown grade: {0}")]
pub struct ParseGradeError(pub String);

/// School year a session is pitched at.
///
/// Ordered middle school first, then high school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    Middle1,
    Middle2,
    Middle3,
    High1,
    High2,
    High3,
}

impl Grade {
    /// All grades in curriculum order.
    pub const ALL: [Grade; 6] = [
        Grade::Middle1,
        Grade::Middle2,
        Grade::Middle3,
        Grade::High1,
        Grade::High2,
        Grade::High3,
    ];

    /// Stable identifier, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::Middle1 => "Middle1",
            Grade::Middle2 => "Middle2",
            Grade::Middle3 => "Middle3",
            Grade::High1 => "High1",
            Grade::High2 => "High2",
            Grade::High3 => "High3",
        }
    }

    /// Display label shown on the grade picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Grade::Middle1 => "중학교 1학년",
            Grade::Middle2 => "중학교 2학년",
            Grade::Middle3 => "중학교 3학년",
            Grade::High1 => "고등학교 1학년",
            Grade::High2 => "고등학교 2학년",
            Grade::High3 => "고등학교 3학년",
        }
    }

    #[must_use]
    pub fn is_high_school(self) -> bool {
        matches!(self, Grade::High1 | Grade::High2 | Grade::High3)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|grade| grade.as_str() == s)
            .ok_or_else(|| ParseGradeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_are_ordered_middle_then_high() {
        let mut sorted = Grade::ALL;
        sorted.sort();
        assert_eq!(sorted, Grade::ALL);
        assert!(!Grade::Middle3.is_high_school());
        assert!(Grade::High1.is_high_school());
    }

    #[test]
    fn grade_parses_from_its_id() {
        for grade in Grade::ALL {
            assert_eq!(grade.to_string().parse::<Grade>().unwrap(), grade);
        }
        assert!("Middle4".parse::<Grade>().is_err());
    }
}
