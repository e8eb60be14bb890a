//! Fraction arithmetic generator, three difficulty tiers.
//!
//! Tier shapes:
//! - `Intro`: equal denominators, addition and subtraction only.
//! - `Standard`: all four operations, distinct denominators, proper
//!   fractions.
//! - `Challenge`: wider ranges, improper fractions allowed.
//!
//! The canonical solution is computed with the same `abacus-num` operations
//! the verifier reduces against, so the two can never disagree.

use std::collections::BTreeMap;

use abacus_num::Rational;
use rand::Rng;

use super::GenError;
use crate::sample::{sample_until, MAX_ATTEMPTS};
use crate::topic::{Difficulty, Problem, Solution, Topic};

/// Operation codes stored in the parameter map (`"op"` key):
/// 0 add, 1 sub, 2 mul, 3 div.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn code(&self) -> f64 {
        match self {
            Op::Add => 0.0,
            Op::Sub => 1.0,
            Op::Mul => 2.0,
            Op::Div => 3.0,
        }
    }

    pub fn from_code(code: f64) -> Option<Op> {
        match code as i64 {
            0 => Some(Op::Add),
            1 => Some(Op::Sub),
            2 => Some(Op::Mul),
            3 => Some(Op::Div),
            _ => None,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "−",
            Op::Mul => "×",
            Op::Div => "÷",
        }
    }
}

pub fn generate(difficulty: Difficulty, rng: &mut impl Rng) -> Result<Problem, GenError> {
    let op = match difficulty {
        Difficulty::Intro => {
            if rng.gen_bool(0.5) {
                Op::Add
            } else {
                Op::Sub
            }
        }
        _ => match rng.gen_range(0..4) {
            0 => Op::Add,
            1 => Op::Sub,
            2 => Op::Mul,
            _ => Op::Div,
        },
    };

    let (n1, d1, n2, d2) = draw_operands(difficulty, op, rng)?;

    let p = Rational::new(n1, d1)?;
    let q = Rational::new(n2, d2)?;
    let value = match op {
        Op::Add => p.add(&q),
        Op::Sub => p.sub(&q),
        Op::Mul => p.mul(&q),
        Op::Div => p.div(&q)?,
    };

    let mut parameters = BTreeMap::new();
    parameters.insert("n1".into(), n1 as f64);
    parameters.insert("d1".into(), d1 as f64);
    parameters.insert("n2".into(), n2 as f64);
    parameters.insert("d2".into(), d2 as f64);
    parameters.insert("op".into(), op.code());

    Ok(Problem {
        topic: Topic::Fraction,
        display: format!(
            "Compute and reduce: {n1}/{d1} {} {n2}/{d2}",
            op.symbol()
        ),
        parameters,
        solution: Solution::Exact { value },
        hint: "Give the result in lowest terms; any equivalent fraction is \
               accepted."
            .to_string(),
        tolerance: 0.0,
    })
}

/// Draw `(n1, d1, n2, d2)` for the tier. Division re-draws a zero second
/// numerator rather than clamping it.
fn draw_operands<R: Rng>(
    difficulty: Difficulty,
    op: Op,
    rng: &mut R,
) -> Result<(i64, i64, i64, i64), GenError> {
    let draw = |r: &mut R| -> (i64, i64, i64, i64) {
        match difficulty {
            Difficulty::Intro => {
                let d = r.gen_range(2..=10);
                (r.gen_range(1..d), d, r.gen_range(1..d), d)
            }
            Difficulty::Standard => {
                let d1 = r.gen_range(2..=10);
                let d2 = r.gen_range(2..=10);
                (r.gen_range(1..d1), d1, r.gen_range(1..d2), d2)
            }
            Difficulty::Challenge => {
                let d1 = r.gen_range(2..=15);
                let d2 = r.gen_range(2..=15);
                (r.gen_range(1..=20), d1, r.gen_range(1..=20), d2)
            }
        }
    };

    let operands = sample_until(
        rng,
        draw,
        |(_, _, n2, _)| op != Op::Div || *n2 != 0,
        MAX_ATTEMPTS,
    )?;
    Ok(operands)
}
