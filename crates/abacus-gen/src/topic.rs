//! Exercise data model: topics, difficulty tiers, solution shapes, and the
//! `Problem` value every generator produces.

use std::collections::BTreeMap;
use std::fmt;

use abacus_num::Rational;
use serde::{Deserialize, Serialize};

/// Shared epsilon for topics whose canonical answer is a decimal
/// approximation (trig values, non-integer scale factors).
pub const TOLERANCE: f64 = 0.01;

/// One exercise family per variant. Stringly-typed topic ids stay at the
/// progress-reporting boundary (`Topic::id`); everything else dispatches on
/// the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Linear,
    Quadratic,
    System,
    Proportion,
    Fraction,
    Inequality,
    Boolean,
    Trig,
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::Linear,
        Topic::Quadratic,
        Topic::System,
        Topic::Proportion,
        Topic::Fraction,
        Topic::Inequality,
        Topic::Boolean,
        Topic::Trig,
    ];

    /// Stable identifier used as the progress-reporter key.
    pub fn id(&self) -> &'static str {
        match self {
            Topic::Linear => "linear",
            Topic::Quadratic => "quadratic",
            Topic::System => "system",
            Topic::Proportion => "proportion",
            Topic::Fraction => "fraction",
            Topic::Inequality => "inequality",
            Topic::Boolean => "boolean",
            Topic::Trig => "trig",
        }
    }
}

/// Difficulty tier. Fraction exercises change shape per tier; other topics
/// widen their variant pool or ranges without touching any invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Intro,
    #[default]
    Standard,
    Challenge,
}

/// Ordering relation of an inequality exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl Relation {
    pub const ALL: [Relation; 4] = [
        Relation::Less,
        Relation::LessEq,
        Relation::Greater,
        Relation::GreaterEq,
    ];

    /// Reverse the direction, preserving strictness. Applied when both
    /// sides of an inequality are divided by a negative number.
    pub fn flip(&self) -> Relation {
        match self {
            Relation::Less => Relation::Greater,
            Relation::LessEq => Relation::GreaterEq,
            Relation::Greater => Relation::Less,
            Relation::GreaterEq => Relation::LessEq,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = match self {
            Relation::Less => "<",
            Relation::LessEq => "≤",
            Relation::Greater => ">",
            Relation::GreaterEq => "≥",
        };
        f.write_str(sym)
    }
}

/// Every answer shape the engine grades, as one tagged union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Solution {
    /// A decimal approximation, graded within `Problem::tolerance`.
    Number { value: f64 },
    /// An exact rational, graded after reducing the submitted answer.
    Exact { value: Rational },
    /// An ordered pair; `x` and `y` are not interchangeable.
    Pair { x: Rational, y: Rational },
    /// The two roots of a quadratic; order does not matter.
    Roots { r1: i64, r2: i64 },
    /// Solution half-line of an inequality: `x <relation> value`.
    Bound { relation: Relation, value: Rational },
    /// A truth value.
    Truth { value: bool },
    /// One label out of a fixed set (e.g. quadrant numerals).
    Choice { value: String },
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Number { value } => write!(f, "{value}"),
            Solution::Exact { value } => write!(f, "{value}"),
            Solution::Pair { x, y } => write!(f, "({x}, {y})"),
            Solution::Roots { r1, r2 } => write!(f, "{{{r1}, {r2}}}"),
            Solution::Bound { relation, value } => write!(f, "x {relation} {value}"),
            Solution::Truth { value } => write!(f, "{value}"),
            Solution::Choice { value } => f.write_str(value),
        }
    }
}

/// One generated exercise. Immutable; the generator guarantees that
/// `solution` satisfies `parameters` under the topic's textbook formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub topic: Topic,
    /// Human-readable exercise text, ready for display.
    pub display: String,
    /// Named coefficients of the exercise, topic-specific.
    pub parameters: BTreeMap<String, f64>,
    pub solution: Solution,
    pub hint: String,
    /// `0.0` for exact topics, [`TOLERANCE`] for decimal-valued ones.
    pub tolerance: f64,
}

impl Problem {
    /// Look up a named coefficient. Generators always populate the keys
    /// they advertise, so a miss is a caller-side typo.
    pub fn param(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_flip_preserves_strictness() {
        assert_eq!(Relation::Less.flip(), Relation::Greater);
        assert_eq!(Relation::LessEq.flip(), Relation::GreaterEq);
        assert_eq!(Relation::Greater.flip(), Relation::Less);
        assert_eq!(Relation::GreaterEq.flip(), Relation::LessEq);
    }

    #[test]
    fn test_topic_ids_unique() {
        let mut ids: Vec<&str> = Topic::ALL.iter().map(|t| t.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Topic::ALL.len());
    }
}
