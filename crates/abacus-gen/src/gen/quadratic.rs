//! Quadratic generator: integer roots by construction.
//!
//! Draw the roots, expand `a(x - r1)(x - r2)` to get the coefficients:
//! `b = -a(r1 + r2)`, `c = a·r1·r2`. The equation is never solved, so the
//! roots are exact by construction.

use std::collections::BTreeMap;

use rand::Rng;

use super::{coeff, signed_term, GenError};
use crate::topic::{Difficulty, Problem, Solution, Topic};

pub fn generate(difficulty: Difficulty, rng: &mut impl Rng) -> Result<Problem, GenError> {
    let mut r1 = rng.gen_range(-6..=5);
    // A zero root would degrade the factored variant to a linear case;
    // clamp to 1 (explicitly a clamp, not a rejection).
    if r1 == 0 {
        r1 = 1;
    }
    let r2 = rng.gen_range(-6..=5);

    // Leading coefficient: mostly 1, occasionally 2 or -1. Intro sticks
    // to monic equations.
    let a: i64 = if difficulty == Difficulty::Intro {
        1
    } else {
        match rng.gen_range(0..10) {
            8 => 2,
            9 => -1,
            _ => 1,
        }
    };

    let b = -a * (r1 + r2);
    let c = a * r1 * r2;

    let mut parameters = BTreeMap::new();
    parameters.insert("a".into(), a as f64);
    parameters.insert("b".into(), b as f64);
    parameters.insert("c".into(), c as f64);

    let mut display = format!("Solve: {}", coeff(a, "x²"));
    if b != 0 {
        display.push_str(if b > 0 { " + " } else { " - " });
        display.push_str(&coeff(b.abs(), "x"));
    }
    display.push_str(&signed_term(c));
    display.push_str(" = 0");

    Ok(Problem {
        topic: Topic::Quadratic,
        display,
        parameters,
        solution: Solution::Roots { r1, r2 },
        hint: "Factor the left side, or use the quadratic formula. \
               Either root may be given first."
            .to_string(),
        tolerance: 0.0,
    })
}
