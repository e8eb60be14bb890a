//! Raw learner input and its numeric parsing.
//!
//! Parsing is deliberately forgiving about spelling and strict about
//! value: `"2/4"`, `"1/2"` and `"0.5"` all parse to the same exact
//! rational. Failures are reported as `None` and surface to the learner as
//! `InvalidInput`, never as an error.

use abacus_num::Rational;
use serde::{Deserialize, Serialize};

use abacus_gen::Relation;

/// What the UI submits for one "check answer" action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawAnswer {
    /// A single free-form field.
    Text { value: String },
    /// Two fields: the two roots of a quadratic, an `(x, y)` pair, or a
    /// relation symbol plus a bound.
    Pair { first: String, second: String },
    /// A boolean toggle.
    Truth { value: bool },
}

impl RawAnswer {
    pub fn text(s: impl Into<String>) -> Self {
        RawAnswer::Text { value: s.into() }
    }

    pub fn pair(first: impl Into<String>, second: impl Into<String>) -> Self {
        RawAnswer::Pair {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Parse a field as an exact rational: integer, `n/d`, or a finite
/// decimal. Decimals are converted losslessly (`"0.5"` -> `1/2`), so exact
/// comparison downstream stays exact.
pub fn parse_exact(s: &str) -> Option<Rational> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(r) = trimmed.parse::<Rational>() {
        return Some(r);
    }
    parse_decimal(trimmed)
}

/// Parse a field as a decimal number for tolerance-graded topics. Fraction
/// spellings are accepted here too.
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(v) = trimmed.parse::<f64>() {
        return v.is_finite().then_some(v);
    }
    trimmed.parse::<Rational>().ok().map(|r| r.to_f64())
}

/// Finite decimal -> exact rational. More than 9 digits on either side of
/// the point is rejected rather than rounded, and the scaled numerator is
/// built with checked arithmetic so oversized input parses to `None`
/// instead of wrapping.
fn parse_decimal(s: &str) -> Option<Rational> {
    let (int_part, frac_part) = s.split_once('.')?;
    let int_part = int_part.trim_start();
    let negative = int_part.starts_with('-');
    let int_digits = int_part.strip_prefix('-').unwrap_or(int_part);
    if frac_part.is_empty() || frac_part.len() > 9 || int_digits.len() > 9 {
        return None;
    }
    let int: i64 = match int_digits {
        "" => 0,
        digits => digits.parse().ok()?,
    };
    if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let frac: i64 = frac_part.parse().ok()?;
    let denom = 10i64.pow(frac_part.len() as u32);
    let numer = int.checked_mul(denom)?.checked_add(frac)?;
    let numer = if negative { -numer } else { numer };
    Rational::new(numer, denom).ok()
}

/// Parse a relation symbol. ASCII digraphs and the typographic symbols are
/// both accepted.
pub fn parse_relation(s: &str) -> Option<Relation> {
    match s.trim() {
        "<" => Some(Relation::Less),
        "<=" | "≤" => Some(Relation::LessEq),
        ">" => Some(Relation::Greater),
        ">=" | "≥" => Some(Relation::GreaterEq),
        _ => None,
    }
}

/// Parse a full inequality answer: `"x ≥ -2"`, `">= -2"`, or just the
/// relation-and-bound pieces of either spelling.
pub fn parse_bound(s: &str) -> Option<(Relation, Rational)> {
    let trimmed = s.trim();
    let rest = trimmed
        .strip_prefix('x')
        .or_else(|| trimmed.strip_prefix('X'))
        .unwrap_or(trimmed)
        .trim_start();
    for (prefix, relation) in [
        ("<=", Relation::LessEq),
        ("≤", Relation::LessEq),
        (">=", Relation::GreaterEq),
        ("≥", Relation::GreaterEq),
        ("<", Relation::Less),
        (">", Relation::Greater),
    ] {
        if let Some(value_part) = rest.strip_prefix(prefix) {
            return parse_exact(value_part).map(|v| (relation, v));
        }
    }
    None
}
