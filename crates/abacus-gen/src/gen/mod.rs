//! Per-topic exercise generators.
//!
//! All generators share one principle: pick the intended answer first, then
//! derive the coefficients from it (inverse construction). Nothing is
//! solved after the fact, so a clean solution is guaranteed by
//! construction. Degenerate draws are rejected through the bounded sampler,
//! never patched by clamping, except where a module notes the clamp
//! explicitly.

pub mod boolean;
pub mod fraction;
pub mod inequality;
pub mod linear;
pub mod proportion;
pub mod quadratic;
pub mod system;
pub mod trig;

use abacus_num::RationalError;
use rand::Rng;

use crate::sample::GenerationExhausted;
use crate::topic::{Difficulty, Problem, Topic};

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("generation budget exhausted: {0}")]
    Exhausted(#[from] GenerationExhausted),

    /// Rational arithmetic failed during coefficient derivation. Generators
    /// re-draw around division hazards, so an escape here is a range bug.
    #[error("arithmetic error during generation: {0}")]
    Arithmetic(#[from] RationalError),
}

/// Generate one exercise for the given topic and difficulty.
///
/// Pure aside from the RNG: no hidden state is carried between calls.
pub fn generate(
    topic: Topic,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> Result<Problem, GenError> {
    match topic {
        Topic::Linear => linear::generate(difficulty, rng),
        Topic::Quadratic => quadratic::generate(difficulty, rng),
        Topic::System => system::generate(difficulty, rng),
        Topic::Proportion => proportion::generate(difficulty, rng),
        Topic::Fraction => fraction::generate(difficulty, rng),
        Topic::Inequality => inequality::generate(difficulty, rng),
        Topic::Boolean => boolean::generate(difficulty, rng),
        Topic::Trig => trig::generate(difficulty, rng),
    }
}

/// Format `n` as a trailing term: `" + 5"`, `" - 5"`, or `""` for zero.
pub(crate) fn signed_term(n: i64) -> String {
    match n {
        0 => String::new(),
        n if n > 0 => format!(" + {n}"),
        n => format!(" - {}", -n),
    }
}

/// Format a coefficient in front of a symbol: `x`, `-x`, `3x`.
pub(crate) fn coeff(a: i64, symbol: &str) -> String {
    match a {
        1 => symbol.to_string(),
        -1 => format!("-{symbol}"),
        a => format!("{a}{symbol}"),
    }
}
