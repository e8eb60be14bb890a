//! Bounded rejection sampling.
//!
//! Every generator rejects degenerate draws (parallel system lines, zero
//! leading coefficients, non-integer derived segments) through this one
//! helper. The attempt budget is a hard safety net: acceptance probability
//! for every predicate in this crate is at least 1/2, so exhaustion means
//! a misconfigured range, never bad luck worth retrying unboundedly.

use rand::Rng;

/// Default attempt budget, comfortably above what any predicate needs.
pub const MAX_ATTEMPTS: usize = 32;

/// No acceptable draw was found within the attempt budget.
#[derive(Debug, Clone, thiserror::Error)]
#[error("no acceptable draw within {attempts} attempts")]
pub struct GenerationExhausted {
    pub attempts: usize,
}

/// Draw until `accept` holds, giving up after `max_attempts` draws.
pub fn sample_until<R: Rng, T>(
    rng: &mut R,
    mut draw: impl FnMut(&mut R) -> T,
    accept: impl Fn(&T) -> bool,
    max_attempts: usize,
) -> Result<T, GenerationExhausted> {
    for _ in 0..max_attempts {
        let candidate = draw(rng);
        if accept(&candidate) {
            return Ok(candidate);
        }
    }
    Err(GenerationExhausted {
        attempts: max_attempts,
    })
}
