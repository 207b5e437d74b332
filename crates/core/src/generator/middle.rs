//! Middle-school generators (grades 1–3).

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::GenerateError;
use super::choices::{from_answer_set, multiple_choice, numeric, signed_term};
use crate::model::Generated;

type GenResult = Result<Generated, GenerateError>;

fn random_sign(rng: &mut dyn RngCore) -> i64 {
    if rng.random_bool(0.5) { 1 } else { -1 }
}

//
// ─── MIDDLE 1 ──────────────────────────────────────────────────────────────────
//

/// `a ± (b)` over small signed integers.
pub fn m1_integer(rng: &mut dyn RngCore) -> GenResult {
    let a: i64 = rng.random_range(-10..=10);
    let b: i64 = rng.random_range(-10..=10);
    let (op, ans) = if rng.random_bool(0.5) {
        ('+', a + b)
    } else {
        ('-', a - b)
    };

    numeric(
        rng,
        format!("다음 식을 계산하시오: {a} {op} ({b})"),
        ans,
        [ans + 1, ans - 1, ans + 2],
        format!("{a} {op} ({b}) = {ans}"),
    )
}

/// Order of operations with a negated square: `-a² + (-b) × c - (-d)`.
pub fn m1_integer_adv(rng: &mut dyn RngCore) -> GenResult {
    let a: i64 = rng.random_range(2..=5);
    let b: i64 = rng.random_range(2..=5);
    let c: i64 = rng.random_range(2..=5);
    let d: i64 = rng.random_range(2..=5);

    let square = -(a * a);
    let product = -b * c;
    let ans = square + product + d;

    numeric(
        rng,
        format!("다음 식을 계산하시오: -{a}² + (-{b}) × {c} - (-{d})"),
        ans,
        [ans + 10, ans - 10, -ans],
        format!(
            "-{a}² = {square}, (-{b})×{c} = {product}, -(-{d}) = +{d} 이므로 \
             {square} + ({product}) + {d} = {ans}"
        ),
    )
}

/// Solve `ax + b = c` for an integer `x`.
pub fn m1_equation(rng: &mut dyn RngCore) -> GenResult {
    let x: i64 = rng.random_range(-5..=5);
    let a: i64 = rng.random_range(2..=5_i64) * random_sign(rng);
    let b: i64 = rng.random_range(-10..=10);
    let c = a * x + b;

    numeric(
        rng,
        format!("다음 일차방정식의 해를 구하시오: {a}x {} = {c}", signed_term(b)),
        x,
        [x + 1, x - 1, -x],
        format!("{a}x = {} 이므로 x = {x}", c - b),
    )
}

/// Pick the equation modelling a walk-then-run distance word problem.
pub fn m1_equation_adv(rng: &mut dyn RngCore) -> GenResult {
    let walk: i64 = rng.random_range(3..=5);
    let run = walk + 2;
    let total = walk * 2 + run;

    multiple_choice(
        rng,
        format!(
            "어떤 학생이 시속 {walk}km로 2시간 걷고, 시속 ({walk}+2)km로 1시간 뛰었더니 \
             총 {total}km를 이동했다. 이때 걷는 속력(x)을 구하는 방정식으로 옳은 것은? \
             (단, x={walk})"
        ),
        format!("2x + 1(x+2) = {total}"),
        [
            format!("2(x+2) + 1x = {total}"),
            format!("x/2 + (x+2)/1 = {total}"),
            format!("2x - 1(x+2) = {total}"),
        ],
        format!("거리 = 속력 × 시간이므로, 걷는 거리(2x) + 뛰는 거리(1(x+2)) = {total}이다."),
    )
}

const QUADRANTS: [&str; 4] = ["제1사분면", "제2사분면", "제3사분면", "제4사분면"];

/// Name the quadrant containing a point off both axes.
pub fn m1_function(rng: &mut dyn RngCore) -> GenResult {
    let x: i64 = rng.random_range(1..=10_i64) * random_sign(rng);
    let y: i64 = rng.random_range(1..=10_i64) * random_sign(rng);

    let quadrant = match (x > 0, y > 0) {
        (true, true) => QUADRANTS[0],
        (false, true) => QUADRANTS[1],
        (false, false) => QUADRANTS[2],
        (true, false) => QUADRANTS[3],
    };
    let sign = |v: i64| if v > 0 { "양수" } else { "음수" };

    from_answer_set(
        rng,
        format!("점 ({x}, {y})는 어느 사분면 위의 점인가?"),
        QUADRANTS,
        quadrant,
        format!(
            "x좌표가 {}이고 y좌표가 {}이므로 {quadrant}이다.",
            sign(x),
            sign(y)
        ),
    )
}

//
// ─── MIDDLE 2 ──────────────────────────────────────────────────────────────────
//

const FINITE_DECIMALS: [&str; 5] = ["1/2", "1/4", "1/5", "1/8", "1/10"];
const REPEATING_DECIMALS: [&str; 6] = ["1/3", "1/6", "1/7", "1/9", "1/11", "1/12"];

/// Spot the fraction with a terminating decimal expansion.
pub fn m2_rational(rng: &mut dyn RngCore) -> GenResult {
    let ans = FINITE_DECIMALS[rng.random_range(0..FINITE_DECIMALS.len())];
    let mut pool = REPEATING_DECIMALS;
    pool.shuffle(rng);

    multiple_choice(
        rng,
        "다음 중 유한소수로 나타낼 수 있는 분수는?".to_string(),
        ans.to_string(),
        [pool[0].to_string(), pool[1].to_string(), pool[2].to_string()],
        format!("{ans}는 분모의 소인수가 2나 5뿐이므로 유한소수이다."),
    )
}

/// `-2x < rhs`, where dividing by the negative coefficient flips the sign.
pub fn m2_inequality(rng: &mut dyn RngCore) -> GenResult {
    const COEFF: i64 = -2;
    let target: i64 = rng.random_range(-5..=5);
    let rhs = COEFF * target;

    let ans = format!("x > {target}");
    multiple_choice(
        rng,
        format!("부등식 {COEFF}x < {rhs} 의 해는?"),
        ans.clone(),
        [
            format!("x < {target}"),
            format!("x > {}", -target),
            format!("x < {}", -target),
        ],
        format!("양변을 {COEFF}로 나누면 부등호 방향이 바뀌어 {ans}가 된다."),
    )
}

/// Inequality with decimal and fractional coefficients.
pub fn m2_inequality_adv(rng: &mut dyn RngCore) -> GenResult {
    multiple_choice(
        rng,
        "일차부등식 0.5x - 1/3 > 1/6 x + 1 의 해는?".to_string(),
        "x > 4".to_string(),
        ["x < 4", "x > -4", "x < -4"].map(String::from),
        "양변에 6을 곱하면 3x - 2 > x + 6 이 되고, 정리하면 2x > 8 이므로 x > 4 이다."
            .to_string(),
    )
}

/// Read slope and y-intercept off `y = ax + b`.
pub fn m2_linear_function(rng: &mut dyn RngCore) -> GenResult {
    let a: i64 = rng.random_range(1..=5_i64) * random_sign(rng);
    let b: i64 = rng.random_range(-5..=5);

    multiple_choice(
        rng,
        format!("일차함수 y = {a}x {} 의 기울기와 y절편은?", signed_term(b)),
        format!("기울기: {a}, y절편: {b}"),
        [
            format!("기울기: {b}, y절편: {a}"),
            format!("기울기: {}, y절편: {b}", -a),
            format!("기울기: {a}, y절편: {}", -b),
        ],
        "y = ax + b 에서 기울기는 a, y절편은 b이다.".to_string(),
    )
}

/// Area of the triangle a line cuts from the axes.
pub fn m2_linear_function_adv(rng: &mut dyn RngCore) -> GenResult {
    numeric(
        rng,
        "일차함수 y = -2x + 4 의 그래프와 x축, y축으로 둘러싸인 삼각형의 넓이는?".to_string(),
        4,
        [2, 8, 6],
        "x절편은 2, y절편은 4이므로 넓이는 1/2 × 2 × 4 = 4 이다.".to_string(),
    )
}

//
// ─── MIDDLE 3 ──────────────────────────────────────────────────────────────────
//

/// `√(k²)` for a small natural `k`.
pub fn m3_root(rng: &mut dyn RngCore) -> GenResult {
    let base: i64 = rng.random_range(2..=9);
    let square = base * base;

    numeric(
        rng,
        format!("√{square} 의 값은?"),
        base,
        [-base, square, base * 2],
        format!("√{square} = {base}"),
    )
}

/// Factor `x² + (a+b)x + ab`.
pub fn m3_factorization(rng: &mut dyn RngCore) -> GenResult {
    let a: i64 = rng.random_range(1..=5);
    let b: i64 = rng.random_range(1..=5);
    let sum = a + b;
    let product = a * b;

    multiple_choice(
        rng,
        format!("x² + {sum}x + {product} 을 인수분해하면?"),
        format!("(x+{a})(x+{b})"),
        [
            format!("(x-{a})(x-{b})"),
            format!("(x+{a})(x-{b})"),
            format!("(x-{a})(x+{b})"),
        ],
        format!("합이 {sum}, 곱이 {product}인 두 수는 {a}, {b}이다."),
    )
}

/// Roots of `x² - a² = 0`.
pub fn m3_quadratic(rng: &mut dyn RngCore) -> GenResult {
    let a: i64 = rng.random_range(2..=9);
    let square = a * a;

    multiple_choice(
        rng,
        format!("이차방정식 x² - {square} = 0 의 해는?"),
        format!("x = ±{a}"),
        [
            format!("x = {a}"),
            format!("x = -{a}"),
            format!("x = ±{square}"),
        ],
        format!("x² = {square} 이므로 x = ±{a}"),
    )
}

/// Quadratic formula on `2x² - 5x + 1 = 0`.
pub fn m3_quadratic_adv(rng: &mut dyn RngCore) -> GenResult {
    multiple_choice(
        rng,
        "이차방정식 2x² - 5x + 1 = 0 의 해는?".to_string(),
        "(5 ± √17) / 4".to_string(),
        ["(5 ± √13) / 4", "(-5 ± √17) / 4", "(5 ± √21) / 4"].map(String::from),
        "근의 공식에 대입하면 x = (5 ± √(25 - 8)) / 4 = (5 ± √17) / 4".to_string(),
    )
}
