use rand::RngCore;
use rand::seq::SliceRandom;

use super::GenerateError;
use crate::model::{Generated, OPTION_COUNT};

/// Assembles a shuffled four-way multiple choice from the true answer and three
/// distractors.
///
/// Rejects drafts whose options collide so the caller can resample.
pub(crate) fn multiple_choice(
    rng: &mut dyn RngCore,
    question: String,
    answer: String,
    distractors: [String; OPTION_COUNT - 1],
    explanation: String,
) -> Result<Generated, GenerateError> {
    let [d1, d2, d3] = distractors;
    let mut options = [answer.clone(), d1, d2, d3];
    if !all_distinct(&options) {
        return Err(GenerateError::DuplicateOptions);
    }

    options.shuffle(rng);
    let correct_answer = options
        .iter()
        .position(|option| *option == answer)
        .ok_or(GenerateError::DuplicateOptions)?;

    Ok(Generated {
        question,
        options,
        correct_answer,
        explanation,
    })
}

/// Multiple choice over a fixed answer set where exactly one entry is true.
pub(crate) fn from_answer_set(
    rng: &mut dyn RngCore,
    question: String,
    set: [&str; OPTION_COUNT],
    answer: &str,
    explanation: String,
) -> Result<Generated, GenerateError> {
    let mut others = set.iter().filter(|option| **option != answer).map(|s| s.to_string());
    let distractors = [
        others.next().ok_or(GenerateError::DuplicateOptions)?,
        others.next().ok_or(GenerateError::DuplicateOptions)?,
        others.next().ok_or(GenerateError::DuplicateOptions)?,
    ];
    multiple_choice(rng, question, answer.to_string(), distractors, explanation)
}

/// Integer answer with integer distractors.
pub(crate) fn numeric(
    rng: &mut dyn RngCore,
    question: String,
    answer: i64,
    distractors: [i64; OPTION_COUNT - 1],
    explanation: String,
) -> Result<Generated, GenerateError> {
    multiple_choice(
        rng,
        question,
        answer.to_string(),
        distractors.map(|d| d.to_string()),
        explanation,
    )
}

fn all_distinct(options: &[String]) -> bool {
    options
        .iter()
        .enumerate()
        .all(|(i, a)| options[i + 1..].iter().all(|b| a != b))
}

/// Renders `value` as a trailing term: `+ 3`, `- 3`.
pub(crate) fn signed_term(value: i64) -> String {
    if value < 0 {
        format!("- {}", value.unsigned_abs())
    } else {
        format!("+ {value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn correct_index_tracks_answer_after_shuffle() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let generated =
                numeric(&mut rng, "q".into(), 7, [8, 6, 9], "e".into()).unwrap();
            assert_eq!(generated.options[generated.correct_answer], "7");
        }
    }

    #[test]
    fn duplicate_options_are_rejected() {
        let mut rng = StdRng::seed_from_u64(11);
        let err = numeric(&mut rng, "q".into(), 0, [1, -1, 0], "e".into()).unwrap_err();
        assert!(matches!(err, GenerateError::DuplicateOptions));
    }

    #[test]
    fn answer_set_excludes_answer_from_distractors() {
        let mut rng = StdRng::seed_from_u64(5);
        let generated =
            from_answer_set(&mut rng, "q".into(), ["1", "-1", "i", "-i"], "i", "e".into())
                .unwrap();
        assert_eq!(generated.options[generated.correct_answer], "i");
        let mut sorted = generated.options.clone();
        sorted.sort();
        assert_eq!(sorted, ["-1", "-i", "1", "i"].map(String::from));
    }

    #[test]
    fn shuffle_moves_the_answer_around() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = [false; OPTION_COUNT];
        for _ in 0..200 {
            let generated = numeric(&mut rng, "q".into(), 1, [2, 3, 4], "e".into()).unwrap();
            seen[generated.correct_answer] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn signed_terms_render_with_spacing() {
        assert_eq!(signed_term(3), "+ 3");
        assert_eq!(signed_term(0), "+ 0");
        assert_eq!(signed_term(-4), "- 4");
    }
}
