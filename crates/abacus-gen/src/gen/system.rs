//! 2×2 linear system generator with a guaranteed integer solution.
//!
//! Draw the target `(x, y)` first and derive both right-hand sides. The
//! second equation's coefficients go through the bounded sampler, rejecting
//! any draw with `a1·b2 == a2·b1` — the determinant-zero case where the
//! lines are parallel or coincident and the target is not the unique
//! solution.

use std::collections::BTreeMap;

use abacus_num::Rational;
use rand::Rng;

use super::{coeff, GenError};
use crate::sample::{sample_until, MAX_ATTEMPTS};
use crate::topic::{Difficulty, Problem, Solution, Topic};

pub fn generate(difficulty: Difficulty, rng: &mut impl Rng) -> Result<Problem, GenError> {
    let span: i64 = match difficulty {
        Difficulty::Intro => 4,
        Difficulty::Standard => 6,
        Difficulty::Challenge => 9,
    };

    let x = rng.gen_range(-span..=span);
    let y = rng.gen_range(-span..=span);

    let a1 = rng.gen_range(-5..=5);
    // b1 = 0 would make the first equation single-variable.
    let b1 = sample_until(rng, |r| r.gen_range(-5..=5), |b| *b != 0, MAX_ATTEMPTS)?;
    let c1 = a1 * x + b1 * y;

    let (a2, b2) = sample_until(
        rng,
        |r| (r.gen_range(-5..=5), r.gen_range(-5..=5)),
        |(a2, b2)| a1 * b2 != a2 * b1,
        MAX_ATTEMPTS,
    )?;
    let c2 = a2 * x + b2 * y;

    let mut parameters = BTreeMap::new();
    parameters.insert("a1".into(), a1 as f64);
    parameters.insert("b1".into(), b1 as f64);
    parameters.insert("c1".into(), c1 as f64);
    parameters.insert("a2".into(), a2 as f64);
    parameters.insert("b2".into(), b2 as f64);
    parameters.insert("c2".into(), c2 as f64);

    let display = format!(
        "Solve the system:  {}  ;  {}",
        equation_line(a1, b1, c1),
        equation_line(a2, b2, c2)
    );

    Ok(Problem {
        topic: Topic::System,
        display,
        parameters,
        solution: Solution::Pair {
            x: Rational::from_integer(x),
            y: Rational::from_integer(y),
        },
        hint: "Eliminate one variable by combining the equations, then \
               substitute back. Give x first, then y."
            .to_string(),
        tolerance: 0.0,
    })
}

/// Render `a·x + b·y = c` with conventional sign handling.
fn equation_line(a: i64, b: i64, c: i64) -> String {
    match (a, b) {
        (0, b) => format!("{} = {}", coeff(b, "y"), c),
        (a, 0) => format!("{} = {}", coeff(a, "x"), c),
        (a, b) if b > 0 => format!("{} + {} = {}", coeff(a, "x"), coeff(b, "y"), c),
        (a, b) => format!("{} - {} = {}", coeff(a, "x"), coeff(-b, "y"), c),
    }
}
