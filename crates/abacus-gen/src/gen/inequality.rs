//! Inequality generator: `ax + b ◯ c`.
//!
//! The canonical solution is the half-line `x ◯' (c - b)/a`, where `◯'` is
//! `◯` flipped exactly when `a < 0`. The sign-flip-on-negative-divisor rule
//! is the invariant this whole family exists to drill, so the draw is
//! biased toward negative `a`.

use std::collections::BTreeMap;

use abacus_num::Rational;
use rand::Rng;

use super::{coeff, signed_term, GenError};
use crate::topic::{Difficulty, Problem, Relation, Solution, Topic};

/// Probability that the leading coefficient is negative.
const NEGATIVE_BIAS: f64 = 0.6;

pub fn generate(difficulty: Difficulty, rng: &mut impl Rng) -> Result<Problem, GenError> {
    let magnitude: i64 = match difficulty {
        Difficulty::Intro => rng.gen_range(2..=5),
        _ => rng.gen_range(2..=9),
    };
    let a = if rng.gen_bool(NEGATIVE_BIAS) {
        -magnitude
    } else {
        magnitude
    };
    let b = rng.gen_range(-9..=9);
    let c = rng.gen_range(-9..=9);
    let relation = Relation::ALL[rng.gen_range(0..Relation::ALL.len())];

    // a != 0 by construction, so the bound is always defined.
    let bound = Rational::new(c - b, a)?;
    let effective = if a < 0 { relation.flip() } else { relation };

    let mut parameters = BTreeMap::new();
    parameters.insert("a".into(), a as f64);
    parameters.insert("b".into(), b as f64);
    parameters.insert("c".into(), c as f64);

    Ok(Problem {
        topic: Topic::Inequality,
        display: format!(
            "Solve: {}{} {} {}",
            coeff(a, "x"),
            signed_term(b),
            relation,
            c
        ),
        parameters,
        solution: Solution::Bound {
            relation: effective,
            value: bound,
        },
        hint: "Isolate x. Dividing both sides by a negative number flips \
               the inequality sign."
            .to_string(),
        tolerance: 0.0,
    })
}
