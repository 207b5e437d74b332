//! Curriculum catalog: the ordered topic list taught at each grade.

use serde::Serialize;

use crate::model::{Grade, TopicId};

/// A topic as listed in the curriculum, with its display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicDescriptor {
    pub id: TopicId,
    pub title: &'static str,
    pub grade: Grade,
}

impl TopicDescriptor {
    const fn new(id: TopicId, title: &'static str, grade: Grade) -> Self {
        Self { id, title, grade }
    }
}

/// Read-only lookup from grade to its ordered topics.
pub trait Curriculum {
    /// Topics for `grade`, in curriculum order.
    fn topics(&self, grade: Grade) -> &[TopicDescriptor];

    /// Display title for `topic` within `grade`, if the grade lists it.
    fn title(&self, grade: Grade, topic: TopicId) -> Option<&'static str> {
        self.topics(grade)
            .iter()
            .find(|descriptor| descriptor.id == topic)
            .map(|descriptor| descriptor.title)
    }
}

const MIDDLE1: [TopicDescriptor; 3] = [
    TopicDescriptor::new(TopicId::M1Integer, "정수와 유리수", Grade::Middle1),
    TopicDescriptor::new(TopicId::M1Equation, "일차방정식", Grade::Middle1),
    TopicDescriptor::new(TopicId::M1Function, "좌표평면과 그래프", Grade::Middle1),
];

const MIDDLE2: [TopicDescriptor; 3] = [
    TopicDescriptor::new(TopicId::M2Rational, "유리수와 순환소수", Grade::Middle2),
    TopicDescriptor::new(TopicId::M2Inequality, "일차부등식", Grade::Middle2),
    TopicDescriptor::new(TopicId::M2LinearFunction, "일차함수", Grade::Middle2),
];

const MIDDLE3: [TopicDescriptor; 3] = [
    TopicDescriptor::new(TopicId::M3Root, "제곱근과 실수", Grade::Middle3),
    TopicDescriptor::new(TopicId::M3Factorization, "인수분해", Grade::Middle3),
    TopicDescriptor::new(TopicId::M3Quadratic, "이차방정식", Grade::Middle3),
];

const HIGH1: [TopicDescriptor; 3] = [
    TopicDescriptor::new(TopicId::H1Polynomial, "다항식의 연산", Grade::High1),
    TopicDescriptor::new(TopicId::H1Complex, "복소수", Grade::High1),
    TopicDescriptor::new(TopicId::H1Inequality, "여러 가지 부등식", Grade::High1),
];

const HIGH2: [TopicDescriptor; 3] = [
    TopicDescriptor::new(TopicId::H2Exponent, "지수함수와 로그함수", Grade::High2),
    TopicDescriptor::new(TopicId::H2Trigonometry, "삼각함수", Grade::High2),
    TopicDescriptor::new(TopicId::H2Sequence, "수열", Grade::High2),
];

const HIGH3: [TopicDescriptor; 3] = [
    TopicDescriptor::new(TopicId::H3Limit, "수열의 극한", Grade::High3),
    TopicDescriptor::new(TopicId::H3Differentiation, "미분법", Grade::High3),
    TopicDescriptor::new(TopicId::H3Integration, "적분법", Grade::High3),
];

/// The built-in six-grade curriculum table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCurriculum;

impl Curriculum for StandardCurriculum {
    fn topics(&self, grade: Grade) -> &[TopicDescriptor] {
        match grade {
            Grade::Middle1 => &MIDDLE1,
            Grade::Middle2 => &MIDDLE2,
            Grade::Middle3 => &MIDDLE3,
            Grade::High1 => &HIGH1,
            Grade::High2 => &HIGH2,
            Grade::High3 => &HIGH3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_grade_has_topics_for_that_grade() {
        let catalog = StandardCurriculum;
        for grade in Grade::ALL {
            let topics = catalog.topics(grade);
            assert!(!topics.is_empty());
            for topic in topics {
                assert_eq!(topic.grade, grade);
                assert_eq!(topic.id.grade(), grade);
            }
        }
    }

    #[test]
    fn first_topic_is_stable() {
        let catalog = StandardCurriculum;
        assert_eq!(catalog.topics(Grade::Middle1)[0].id, TopicId::M1Integer);
        assert_eq!(catalog.topics(Grade::High3)[0].id, TopicId::H3Limit);
    }

    #[test]
    fn title_lookup_is_scoped_to_grade() {
        let catalog = StandardCurriculum;
        assert_eq!(
            catalog.title(Grade::High1, TopicId::H1Complex),
            Some("복소수")
        );
        assert_eq!(catalog.title(Grade::Middle1, TopicId::H1Complex), None);
    }
}
