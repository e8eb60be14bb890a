//! Boolean truth-table generator.
//!
//! Draw an operator and uniform operands; the solution is the table-defined
//! result. `NOT` takes a single operand, the rest take two.

use std::collections::BTreeMap;

use rand::Rng;

use super::GenError;
use crate::topic::{Difficulty, Problem, Solution, Topic};

/// Operator codes stored in the parameter map (`"op"` key):
/// 0 AND, 1 OR, 2 NOT, 3 XOR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoolOp {
    And,
    Or,
    Not,
    Xor,
}

impl BoolOp {
    pub fn code(&self) -> f64 {
        match self {
            BoolOp::And => 0.0,
            BoolOp::Or => 1.0,
            BoolOp::Not => 2.0,
            BoolOp::Xor => 3.0,
        }
    }

    pub fn from_code(code: f64) -> Option<BoolOp> {
        match code as i64 {
            0 => Some(BoolOp::And),
            1 => Some(BoolOp::Or),
            2 => Some(BoolOp::Not),
            3 => Some(BoolOp::Xor),
            _ => None,
        }
    }

    pub fn apply(&self, p: bool, q: bool) -> bool {
        match self {
            BoolOp::And => p && q,
            BoolOp::Or => p || q,
            BoolOp::Not => !p,
            BoolOp::Xor => p != q,
        }
    }
}

pub fn generate(_difficulty: Difficulty, rng: &mut impl Rng) -> Result<Problem, GenError> {
    let op = match rng.gen_range(0..4) {
        0 => BoolOp::And,
        1 => BoolOp::Or,
        2 => BoolOp::Not,
        _ => BoolOp::Xor,
    };
    let p = rng.gen_bool(0.5);
    let q = rng.gen_bool(0.5);
    let value = op.apply(p, q);

    let mut parameters = BTreeMap::new();
    parameters.insert("op".into(), op.code());
    parameters.insert("p".into(), p as i64 as f64);
    if op != BoolOp::Not {
        parameters.insert("q".into(), q as i64 as f64);
    }

    let display = match op {
        BoolOp::And => format!("{p} AND {q} = ?"),
        BoolOp::Or => format!("{p} OR {q} = ?"),
        BoolOp::Not => format!("NOT {p} = ?"),
        BoolOp::Xor => format!("{p} XOR {q} = ?"),
    };

    Ok(Problem {
        topic: Topic::Boolean,
        display,
        parameters,
        solution: Solution::Truth { value },
        hint: "Evaluate with the operator's truth table.".to_string(),
        tolerance: 0.0,
    })
}
