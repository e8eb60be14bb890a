//! Answer verification.
//!
//! `verify` is pure: it parses the raw answer into the shape the problem's
//! solution expects and applies the topic's equality rule. Malformed input
//! is a first-class `InvalidInput` outcome, not an error; the caller is
//! responsible for forwarding Correct/Incorrect to the progress reporter.

use abacus_gen::{Problem, Solution};
use serde::{Deserialize, Serialize};

use crate::answer::{parse_bound, parse_exact, parse_number, parse_relation, RawAnswer};

/// Outcome of grading one answer against one problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VerificationResult {
    Correct,
    Incorrect { expected: Solution },
    /// The answer did not parse as the expected shape (non-numeric text,
    /// missing component, zero denominator). Recoverable by re-prompting.
    InvalidInput,
}

/// Grade `answer` against `problem` under the topic's equality rule.
pub fn verify(problem: &Problem, answer: &RawAnswer) -> VerificationResult {
    let correct = match (&problem.solution, answer) {
        // Tolerance-graded decimal answers.
        (Solution::Number { value }, RawAnswer::Text { value: text }) => {
            match parse_number(text) {
                Some(v) => (v - value).abs() < problem.tolerance,
                None => return VerificationResult::InvalidInput,
            }
        }

        // Exact rational answers; the submitted spelling is reduced before
        // comparison, so equivalent fractions are accepted.
        (Solution::Exact { value }, RawAnswer::Text { value: text }) => {
            match parse_exact(text) {
                Some(v) => v == *value,
                None => return VerificationResult::InvalidInput,
            }
        }

        // Ordered pair: x and y are not interchangeable.
        (Solution::Pair { x, y }, RawAnswer::Pair { first, second }) => {
            match (parse_exact(first), parse_exact(second)) {
                (Some(fx), Some(fy)) => fx == *x && fy == *y,
                _ => return VerificationResult::InvalidInput,
            }
        }

        // Quadratic roots: a two-element multiset, either order accepted.
        (Solution::Roots { r1, r2 }, RawAnswer::Pair { first, second }) => {
            match (parse_exact(first), parse_exact(second)) {
                (Some(s1), Some(s2)) => {
                    let (e1, e2) = (
                        abacus_num::Rational::from_integer(*r1),
                        abacus_num::Rational::from_integer(*r2),
                    );
                    (s1 == e1 && s2 == e2) || (s1 == e2 && s2 == e1)
                }
                _ => return VerificationResult::InvalidInput,
            }
        }

        // Inequality: relation plus bound, as one field or two.
        (Solution::Bound { relation, value }, RawAnswer::Text { value: text }) => {
            match parse_bound(text) {
                Some((rel, v)) => rel == *relation && v == *value,
                None => return VerificationResult::InvalidInput,
            }
        }
        (Solution::Bound { relation, value }, RawAnswer::Pair { first, second }) => {
            match (parse_relation(first), parse_exact(second)) {
                (Some(rel), Some(v)) => rel == *relation && v == *value,
                _ => return VerificationResult::InvalidInput,
            }
        }

        (Solution::Truth { value }, RawAnswer::Truth { value: submitted }) => {
            submitted == value
        }
        (Solution::Truth { value }, RawAnswer::Text { value: text }) => {
            match text.trim().to_ascii_lowercase().as_str() {
                "true" => *value,
                "false" => !*value,
                _ => return VerificationResult::InvalidInput,
            }
        }

        (Solution::Choice { value }, RawAnswer::Text { value: text }) => {
            let submitted = text.trim();
            if submitted.is_empty() {
                return VerificationResult::InvalidInput;
            }
            submitted.eq_ignore_ascii_case(value)
        }

        // Any other pairing is a shape mismatch.
        _ => return VerificationResult::InvalidInput,
    };

    if correct {
        VerificationResult::Correct
    } else {
        VerificationResult::Incorrect {
            expected: problem.solution.clone(),
        }
    }
}
