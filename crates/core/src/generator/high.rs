//! High-school generators (grades 1–3).

use rand::{Rng, RngCore};

use super::GenerateError;
use super::choices::{from_answer_set, multiple_choice, numeric};
use crate::model::Generated;

type GenResult = Result<Generated, GenerateError>;

//
// ─── HIGH 1 ────────────────────────────────────────────────────────────────────
//

/// Remainder theorem: `P(x) = x³ + ax + b` divided by `x - 1`.
pub fn h1_polynomial(rng: &mut dyn RngCore) -> GenResult {
    let a: i64 = rng.random_range(1..=5);
    let b: i64 = rng.random_range(1..=5);
    let remainder = 1 + a + b;

    numeric(
        rng,
        format!("다항식 P(x) = x³ + {a}x + {b} 를 x-1로 나눈 나머지는?"),
        remainder,
        [remainder + 1, remainder - 1, remainder + 2],
        format!("나머지 정리에 의해 P(1) = 1 + {a} + {b} = {remainder}"),
    )
}

/// Remainder on division by a product of two linear factors.
pub fn h1_polynomial_adv(rng: &mut dyn RngCore) -> GenResult {
    multiple_choice(
        rng,
        "다항식 P(x)를 x-1로 나누면 나머지가 3이고, x-2로 나누면 나머지가 5이다. \
         P(x)를 (x-1)(x-2)로 나누었을 때의 나머지는?"
            .to_string(),
        "2x + 1".to_string(),
        ["x + 2", "2x - 1", "3x"].map(String::from),
        "나머지를 ax+b라 하면, a+b=3, 2a+b=5. 연립하면 a=2, b=1.".to_string(),
    )
}

const UNIT_POWERS: [&str; 4] = ["1", "-1", "i", "-i"];

/// `iⁿ` via the period-4 cycle of powers of the imaginary unit.
pub fn h1_complex(rng: &mut dyn RngCore) -> GenResult {
    let n: u32 = rng.random_range(10..=100);
    let rem = n % 4;
    let ans = match rem {
        0 => "1",
        1 => "i",
        2 => "-1",
        _ => "-i",
    };

    from_answer_set(
        rng,
        format!("i^{n} 의 값은? (단, i = √-1)"),
        UNIT_POWERS,
        ans,
        format!("i의 거듭제곱은 i, -1, -i, 1 이 반복된다. {n} = 4k + {rem} 이므로 답은 {ans}"),
    )
}

/// `|x| < a`.
pub fn h1_inequality(rng: &mut dyn RngCore) -> GenResult {
    let a: i64 = rng.random_range(2..=9);

    multiple_choice(
        rng,
        format!("부등식 |x| < {a} 의 해는?"),
        format!("-{a} < x < {a}"),
        [
            format!("x < -{a} 또는 x > {a}"),
            format!("x < {a}"),
            format!("x > -{a}"),
        ],
        format!("절댓값의 성질에 의해 -{a} < x < {a} 이다."),
    )
}

//
// ─── HIGH 2 ────────────────────────────────────────────────────────────────────
//

/// `log₂(2ᵉ)`.
pub fn h2_exponent(rng: &mut dyn RngCore) -> GenResult {
    let exp: u32 = rng.random_range(2..=5);
    let value = 2_i64.pow(exp);
    let exp = i64::from(exp);

    numeric(
        rng,
        format!("log₂{value} 의 값은?"),
        exp,
        [exp + 1, exp - 1, exp * 2],
        format!("2^{exp} = {value} 이므로 log₂{value} = {exp}"),
    )
}

const SPECIAL_VALUES: [&str; 4] = ["1/2", "√2/2", "√3/2", "1"];

/// sin/cos of a special angle.
pub fn h2_trigonometry(rng: &mut dyn RngCore) -> GenResult {
    const ANGLES: [u32; 3] = [30, 45, 60];
    let angle = ANGLES[rng.random_range(0..ANGLES.len())];
    let (function, ans) = if rng.random_bool(0.5) {
        let value = match angle {
            30 => "1/2",
            45 => "√2/2",
            _ => "√3/2",
        };
        ("sin", value)
    } else {
        let value = match angle {
            30 => "√3/2",
            45 => "√2/2",
            _ => "1/2",
        };
        ("cos", value)
    };

    from_answer_set(
        rng,
        format!("{function}({angle}°) 의 값은?"),
        SPECIAL_VALUES,
        ans,
        "특수각의 삼각비 값을 암기해야 한다.".to_string(),
    )
}

/// n-th term of an arithmetic sequence.
pub fn h2_sequence(rng: &mut dyn RngCore) -> GenResult {
    let first: i64 = rng.random_range(1..=5);
    let diff: i64 = rng.random_range(2..=5);
    let n: i64 = rng.random_range(5..=10);
    let term = first + (n - 1) * diff;

    numeric(
        rng,
        format!("첫째항이 {first}, 공차가 {diff}인 등차수열의 제{n}항은?"),
        term,
        [term + diff, term - diff, term + 1],
        format!("a{n} = {first} + ({n}-1)×{diff} = {term}"),
    )
}

/// Partial sum of an arithmetic sequence.
pub fn h2_sequence_adv(rng: &mut dyn RngCore) -> GenResult {
    numeric(
        rng,
        "첫째항이 1이고 제10항이 19인 등차수열의 첫째항부터 제10항까지의 합은?".to_string(),
        100,
        [90, 110, 95],
        "S10 = 10(1 + 19) / 2 = 100".to_string(),
    )
}

//
// ─── HIGH 3 ────────────────────────────────────────────────────────────────────
//

/// Limit of a ratio of linear terms in `n`.
pub fn h3_limit(rng: &mut dyn RngCore) -> GenResult {
    let a: i64 = rng.random_range(2..=5);
    let b: i64 = rng.random_range(1..=5);
    let c: i64 = rng.random_range(1..=5);

    numeric(
        rng,
        format!("lim(n→∞) ({a}n + {b}) / (n + {c}) 의 값은?"),
        a,
        [a + 1, 0, 1],
        format!("최고차항의 계수비 {a}/1 = {a}"),
    )
}

/// Power rule for `xⁿ`.
pub fn h3_differentiation(rng: &mut dyn RngCore) -> GenResult {
    let n: i64 = rng.random_range(2..=5);

    multiple_choice(
        rng,
        format!("f(x) = x^{n} 일 때, f'(x)는?"),
        format!("{n}x^{}", n - 1),
        [
            format!("x^{}", n - 1),
            format!("{n}x^{n}"),
            format!("{}x^{n}", n - 1),
        ],
        "(x^n)' = nx^(n-1)".to_string(),
    )
}

/// Tangent slope of `y = x² + 3x` at `x = 1`.
pub fn h3_differentiation_adv(rng: &mut dyn RngCore) -> GenResult {
    numeric(
        rng,
        "곡선 y = x² + 3x 위의 점 (1, 4)에서의 접선의 기울기는?".to_string(),
        5,
        [4, 3, 2],
        "y' = 2x + 3 이므로 x=1 대입하면 2(1) + 3 = 5".to_string(),
    )
}

/// Antiderivative of `xⁿ`.
pub fn h3_integration(rng: &mut dyn RngCore) -> GenResult {
    let n: i64 = rng.random_range(1..=4);

    multiple_choice(
        rng,
        format!("∫ x^{n} dx = ? (단, C는 적분상수)"),
        format!("(1/{})x^{} + C", n + 1, n + 1),
        [
            format!("x^{} + C", n + 1),
            format!("{n}x^{} + C", n - 1),
            format!("(1/{n})x^{} + C", n + 1),
        ],
        "∫ x^n dx = (1/(n+1))x^(n+1) + C".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn answer(generated: &Generated) -> &str {
        &generated.options[generated.correct_answer]
    }

    #[test]
    fn complex_power_follows_cycle() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let generated = h1_complex(&mut rng).unwrap();
            let n: u32 = generated
                .question
                .trim_start_matches("i^")
                .split(' ')
                .next()
                .unwrap()
                .parse()
                .unwrap();
            let expected = ["1", "i", "-1", "-i"][(n % 4) as usize];
            assert_eq!(answer(&generated), expected);
        }
    }

    #[test]
    fn trig_answer_matches_special_angle() {
        let mut rng = StdRng::seed_from_u64(22);
        for _ in 0..50 {
            let generated = h2_trigonometry(&mut rng).unwrap();
            let expected = match generated.question.split(" 의").next().unwrap() {
                "sin(30°)" | "cos(60°)" => "1/2",
                "sin(45°)" | "cos(45°)" => "√2/2",
                "sin(60°)" | "cos(30°)" => "√3/2",
                other => panic!("unexpected question {other}"),
            };
            assert_eq!(answer(&generated), expected);
        }
    }

    #[test]
    fn exponent_answer_is_log_base_two() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..30 {
            let generated = h2_exponent(&mut rng).unwrap();
            let exp: u32 = answer(&generated).parse().unwrap();
            assert!(generated.question.starts_with(&format!("log₂{} ", 2_i64.pow(exp))));
        }
    }

    #[test]
    fn sequence_term_is_in_closed_form() {
        let mut rng = StdRng::seed_from_u64(24);
        for _ in 0..30 {
            let generated = h2_sequence(&mut rng).unwrap();
            assert!(generated.explanation.ends_with(&format!("= {}", answer(&generated))));
        }
    }

    #[test]
    fn calculus_answers_apply_power_rules() {
        let mut rng = StdRng::seed_from_u64(25);
        for _ in 0..20 {
            let derivative = h3_differentiation(&mut rng).unwrap();
            let n: i64 = derivative
                .question
                .trim_start_matches("f(x) = x^")
                .split(' ')
                .next()
                .unwrap()
                .parse()
                .unwrap();
            assert_eq!(answer(&derivative), format!("{n}x^{}", n - 1));

            let integral = h3_integration(&mut rng).unwrap();
            assert!(answer(&integral).starts_with("(1/"));
            assert!(answer(&integral).ends_with(" + C"));
        }
    }

    #[test]
    fn fixed_advanced_problems_keep_their_answers() {
        let mut rng = StdRng::seed_from_u64(26);
        assert_eq!(answer(&h1_polynomial_adv(&mut rng).unwrap()), "2x + 1");
        assert_eq!(answer(&h2_sequence_adv(&mut rng).unwrap()), "100");
        assert_eq!(answer(&h3_differentiation_adv(&mut rng).unwrap()), "5");
    }
}
