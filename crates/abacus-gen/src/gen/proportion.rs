//! Proportionality / Thales generator.
//!
//! Two variants: find the fourth proportional segment (exact, the draw is
//! rejected unless the derived segment is a positive integer), or find the
//! scale factor between two similar figures (decimal, graded within the
//! shared tolerance; factors come from a curated set so the decimal is
//! short).

use std::collections::BTreeMap;

use abacus_num::Rational;
use rand::Rng;

use super::GenError;
use crate::sample::{sample_until, MAX_ATTEMPTS};
use crate::topic::{Difficulty, Problem, Solution, Topic, TOLERANCE};

/// Curated scale factors for the find-the-ratio variant. All terminate
/// within two decimals.
const SCALE_FACTORS: [(i64, i64); 6] = [(2, 1), (3, 1), (4, 1), (1, 2), (3, 2), (5, 2)];

pub fn generate(difficulty: Difficulty, rng: &mut impl Rng) -> Result<Problem, GenError> {
    if difficulty != Difficulty::Intro && rng.gen_bool(0.5) {
        find_ratio(rng)
    } else {
        find_segment(rng)
    }
}

/// `a / b = c / d`, solve for `d`. Rejects any draw where `b·c` is not a
/// positive multiple of `a`, so the missing segment is always a positive
/// integer.
fn find_segment(rng: &mut impl Rng) -> Result<Problem, GenError> {
    let (a, b, c) = sample_until(
        rng,
        |r| {
            (
                r.gen_range(2..=9),
                r.gen_range(2..=12),
                r.gen_range(2..=12),
            )
        },
        |(a, b, c)| (b * c) % a == 0 && b * c / a > 0 && b != a,
        MAX_ATTEMPTS,
    )?;
    let d = b * c / a;

    let mut parameters = BTreeMap::new();
    parameters.insert("a".into(), a as f64);
    parameters.insert("b".into(), b as f64);
    parameters.insert("c".into(), c as f64);

    Ok(Problem {
        topic: Topic::Proportion,
        display: format!("The segments are proportional: {a}/{b} = {c}/x. Find x."),
        parameters,
        solution: Solution::Exact {
            value: Rational::from_integer(d),
        },
        hint: "Cross-multiply: a·x = b·c.".to_string(),
        tolerance: 0.0,
    })
}

/// Two similar figures with sides `s` and `s·k`; ask for `k` as a decimal.
fn find_ratio(rng: &mut impl Rng) -> Result<Problem, GenError> {
    let (kn, kd) = SCALE_FACTORS[rng.gen_range(0..SCALE_FACTORS.len())];
    // Side drawn as a multiple of the factor denominator so the scaled
    // side is an integer.
    let s = rng.gen_range(1..=6) * kd;
    let scaled = s * kn / kd;
    let k = kn as f64 / kd as f64;

    let mut parameters = BTreeMap::new();
    parameters.insert("side".into(), s as f64);
    parameters.insert("scaled".into(), scaled as f64);

    Ok(Problem {
        topic: Topic::Proportion,
        display: format!(
            "Two similar figures have corresponding sides {s} and {scaled}. \
             What is the scale factor?"
        ),
        parameters,
        solution: Solution::Number { value: k },
        hint: "Divide the second side by the first.".to_string(),
        tolerance: TOLERANCE,
    })
}
