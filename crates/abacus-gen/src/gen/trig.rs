//! Trigonometry generator.
//!
//! Four variants: a notable-angle function value (3-decimal rounding,
//! graded within the shared tolerance), quadrant classification over
//! `(0°, 360°)` excluding axis angles, the Pythagorean identity (always 1),
//! and degrees-to-radians conversion.

use std::collections::BTreeMap;

use abacus_num::Rational;
use rand::Rng;

use super::GenError;
use crate::sample::{sample_until, MAX_ATTEMPTS};
use crate::topic::{Difficulty, Problem, Solution, Topic, TOLERANCE};

/// Angles with notable sine/cosine values.
const NOTABLE_DEGREES: [i64; 11] = [0, 30, 45, 60, 90, 120, 135, 150, 180, 270, 360];

/// Roman numerals, indexed by quadrant number minus one.
const QUADRANTS: [&str; 4] = ["I", "II", "III", "IV"];

pub fn generate(difficulty: Difficulty, rng: &mut impl Rng) -> Result<Problem, GenError> {
    let variant = match difficulty {
        Difficulty::Intro => rng.gen_range(0..2),
        _ => rng.gen_range(0..4),
    };
    match variant {
        0 => notable_value(rng),
        1 => quadrant(rng),
        2 => identity(rng),
        _ => deg_to_rad(rng),
    }
}

/// Round to 3 decimals, the precision the notable-value tables carry.
fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn notable_value(rng: &mut impl Rng) -> Result<Problem, GenError> {
    let use_sin = rng.gen_bool(0.5);
    // Tangent is deliberately absent: it is undefined at two of the
    // notable angles and the source tables stop at sine and cosine.
    let deg = NOTABLE_DEGREES[rng.gen_range(0..NOTABLE_DEGREES.len())];
    let radians = (deg as f64).to_radians();
    let (name, value) = if use_sin {
        ("sin", round3(radians.sin()))
    } else {
        ("cos", round3(radians.cos()))
    };

    let mut parameters = BTreeMap::new();
    parameters.insert("degrees".into(), deg as f64);

    Ok(Problem {
        topic: Topic::Trig,
        display: format!("{name}({deg}°) = ?  (3 decimals)"),
        parameters,
        solution: Solution::Number { value },
        hint: "Use the notable-angle table.".to_string(),
        tolerance: TOLERANCE,
    })
}

fn quadrant(rng: &mut impl Rng) -> Result<Problem, GenError> {
    // Axis angles (multiples of 90°) belong to no quadrant; reject them.
    let deg = sample_until(
        rng,
        |r| r.gen_range(1..360),
        |d| d % 90 != 0,
        MAX_ATTEMPTS,
    )?;
    let q = (deg + 89) / 90; // ceil(deg / 90)

    let mut parameters = BTreeMap::new();
    parameters.insert("degrees".into(), deg as f64);

    Ok(Problem {
        topic: Topic::Trig,
        display: format!("In which quadrant does a {deg}° angle lie? (I-IV)"),
        parameters,
        solution: Solution::Choice {
            value: QUADRANTS[(q - 1) as usize].to_string(),
        },
        hint: "Each quadrant spans 90°, counterclockwise from the positive \
               x-axis."
            .to_string(),
        tolerance: 0.0,
    })
}

fn identity(rng: &mut impl Rng) -> Result<Problem, GenError> {
    let deg = rng.gen_range(0..360);

    let mut parameters = BTreeMap::new();
    parameters.insert("degrees".into(), deg as f64);

    Ok(Problem {
        topic: Topic::Trig,
        display: format!("sin²({deg}°) + cos²({deg}°) = ?"),
        parameters,
        solution: Solution::Exact {
            value: Rational::from_integer(1),
        },
        hint: "Pythagorean identity: the value does not depend on the angle.".to_string(),
        tolerance: 0.0,
    })
}

fn deg_to_rad(rng: &mut impl Rng) -> Result<Problem, GenError> {
    let deg = NOTABLE_DEGREES[rng.gen_range(0..NOTABLE_DEGREES.len())];
    let value = round3(deg as f64 * std::f64::consts::PI / 180.0);

    let mut parameters = BTreeMap::new();
    parameters.insert("degrees".into(), deg as f64);

    Ok(Problem {
        topic: Topic::Trig,
        display: format!("Convert {deg}° to radians (3 decimals)."),
        parameters,
        solution: Solution::Number { value },
        hint: "radians = degrees · π / 180".to_string(),
        tolerance: TOLERANCE,
    })
}
