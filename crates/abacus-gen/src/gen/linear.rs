//! Linear equation generator: `ax + b = c` and its variants.
//!
//! Inverse construction: the root `x` is drawn first and `c` (or `b2`) is
//! derived from it, so the equation always has the intended integer
//! solution.

use std::collections::BTreeMap;

use abacus_num::Rational;
use rand::Rng;

use super::{coeff, signed_term, GenError};
use crate::topic::{Difficulty, Problem, Solution, Topic};

enum Form {
    /// `ax + b = c`
    Simple,
    /// `a1·x + b1 = a2·x + b2`
    BothSides,
    /// `a(x + b) = c`
    Parentheses,
}

pub fn generate(difficulty: Difficulty, rng: &mut impl Rng) -> Result<Problem, GenError> {
    let form = match difficulty {
        Difficulty::Intro => Form::Simple,
        _ => match rng.gen_range(0..3) {
            0 => Form::Simple,
            1 => Form::BothSides,
            _ => Form::Parentheses,
        },
    };

    let x = rng.gen_range(-8..=8);
    let mut parameters = BTreeMap::new();

    let display = match form {
        Form::Simple => {
            let a = rng.gen_range(2..=9);
            let b = rng.gen_range(-9..=9);
            let c = a * x + b;
            parameters.insert("a".into(), a as f64);
            parameters.insert("b".into(), b as f64);
            parameters.insert("c".into(), c as f64);
            format!("Solve for x: {}{} = {}", coeff(a, "x"), signed_term(b), c)
        }
        Form::BothSides => {
            let a1 = rng.gen_range(2..=9);
            let mut a2 = rng.gen_range(1..=9);
            // A tie (or larger draw) would cancel the unknown; clamp to 1.
            if a2 >= a1 {
                a2 = 1;
            }
            let b1 = rng.gen_range(-9..=9);
            let b2 = (a1 - a2) * x + b1;
            parameters.insert("a1".into(), a1 as f64);
            parameters.insert("b1".into(), b1 as f64);
            parameters.insert("a2".into(), a2 as f64);
            parameters.insert("b2".into(), b2 as f64);
            format!(
                "Solve for x: {}{} = {}{}",
                coeff(a1, "x"),
                signed_term(b1),
                coeff(a2, "x"),
                signed_term(b2)
            )
        }
        Form::Parentheses => {
            let a = rng.gen_range(2..=9);
            let b = rng.gen_range(-9..=9);
            let c = a * (x + b);
            parameters.insert("a".into(), a as f64);
            parameters.insert("b".into(), b as f64);
            parameters.insert("c".into(), c as f64);
            format!("Solve for x: {}(x{}) = {}", a, signed_term(b), c)
        }
    };

    Ok(Problem {
        topic: Topic::Linear,
        display,
        parameters,
        solution: Solution::Exact {
            value: Rational::from_integer(x),
        },
        hint: "Collect the x terms on one side and the constants on the other, \
               then divide by the coefficient of x."
            .to_string(),
        tolerance: 0.0,
    })
}
