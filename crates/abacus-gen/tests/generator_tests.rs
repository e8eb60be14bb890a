use abacus_gen::gen::boolean::BoolOp;
use abacus_gen::gen::fraction::Op;
use abacus_gen::rng::session_rng;
use abacus_gen::{generate, Difficulty, Problem, Relation, Solution, Topic};
use abacus_num::Rational;

const ROUNDS: usize = 2_000;

fn param(p: &Problem, name: &str) -> i64 {
    p.param(name).unwrap_or_else(|| panic!("missing parameter '{name}'")) as i64
}

#[test]
fn test_same_seed_same_stream() {
    for topic in Topic::ALL {
        let mut rng1 = session_rng(7);
        let mut rng2 = session_rng(7);
        for _ in 0..50 {
            let p1 = generate(topic, Difficulty::Standard, &mut rng1).unwrap();
            let p2 = generate(topic, Difficulty::Standard, &mut rng2).unwrap();
            assert_eq!(p1.display, p2.display);
            assert_eq!(p1.solution, p2.solution);
        }
    }
}

#[test]
fn test_linear_solvability() {
    let mut rng = session_rng(11);
    for _ in 0..ROUNDS {
        let p = generate(Topic::Linear, Difficulty::Standard, &mut rng).unwrap();
        let x = match &p.solution {
            Solution::Exact { value } => *value,
            other => panic!("unexpected solution shape: {other:?}"),
        };
        assert!(x.is_integer());
        let x = x.numer();
        if p.parameters.contains_key("a1") {
            // a1·x + b1 = a2·x + b2
            let (a1, b1) = (param(&p, "a1"), param(&p, "b1"));
            let (a2, b2) = (param(&p, "a2"), param(&p, "b2"));
            assert!(a2 < a1, "unknown must not cancel");
            assert_eq!(a1 * x + b1, a2 * x + b2);
        } else if p.display.contains('(') {
            // a(x + b) = c
            let (a, b, c) = (param(&p, "a"), param(&p, "b"), param(&p, "c"));
            assert_eq!(a * (x + b), c);
        } else {
            // ax + b = c
            let (a, b, c) = (param(&p, "a"), param(&p, "b"), param(&p, "c"));
            assert!(a != 0);
            assert_eq!(a * x + b, c);
        }
    }
}

#[test]
fn test_quadratic_solvability() {
    let mut rng = session_rng(12);
    for _ in 0..ROUNDS {
        let p = generate(Topic::Quadratic, Difficulty::Standard, &mut rng).unwrap();
        let (r1, r2) = match &p.solution {
            Solution::Roots { r1, r2 } => (*r1, *r2),
            other => panic!("unexpected solution shape: {other:?}"),
        };
        let (a, b, c) = (param(&p, "a"), param(&p, "b"), param(&p, "c"));
        assert!(a != 0, "leading coefficient must be nonzero");
        assert!(r1 != 0, "first root is clamped away from zero");
        assert_eq!(b, -a * (r1 + r2));
        assert_eq!(c, a * r1 * r2);
        for r in [r1, r2] {
            assert_eq!(a * r * r + b * r + c, 0, "root {r} must satisfy the equation");
        }
    }
}

#[test]
fn test_system_solvability_and_non_degeneracy() {
    let mut rng = session_rng(13);
    for _ in 0..ROUNDS {
        let p = generate(Topic::System, Difficulty::Standard, &mut rng).unwrap();
        let (x, y) = match &p.solution {
            Solution::Pair { x, y } => (x.numer(), y.numer()),
            other => panic!("unexpected solution shape: {other:?}"),
        };
        let (a1, b1, c1) = (param(&p, "a1"), param(&p, "b1"), param(&p, "c1"));
        let (a2, b2, c2) = (param(&p, "a2"), param(&p, "b2"), param(&p, "c2"));
        assert_eq!(a1 * x + b1 * y, c1);
        assert_eq!(a2 * x + b2 * y, c2);
        assert!(b1 != 0);
        assert_ne!(a1 * b2, a2 * b1, "lines must never be parallel");
        // Zero coefficients drop out of the rendering entirely.
        assert!(!p.display.contains("0x"), "bad rendering: {}", p.display);
        assert!(!p.display.contains("0y"), "bad rendering: {}", p.display);
    }
}

#[test]
fn test_proportion_solvability() {
    let mut rng = session_rng(14);
    for _ in 0..ROUNDS {
        let p = generate(Topic::Proportion, Difficulty::Standard, &mut rng).unwrap();
        if p.parameters.contains_key("side") {
            let (side, scaled) = (param(&p, "side"), param(&p, "scaled"));
            let k = match &p.solution {
                Solution::Number { value } => *value,
                other => panic!("unexpected solution shape: {other:?}"),
            };
            assert!(side > 0 && scaled > 0);
            assert!((scaled as f64 / side as f64 - k).abs() < 1e-9);
        } else {
            let (a, b, c) = (param(&p, "a"), param(&p, "b"), param(&p, "c"));
            let d = match &p.solution {
                Solution::Exact { value } => *value,
                other => panic!("unexpected solution shape: {other:?}"),
            };
            assert!(d.is_integer() && d.numer() > 0, "fourth segment must be a positive integer");
            // a/b = c/d  =>  a·d = b·c
            assert_eq!(a * d.numer(), b * c);
        }
    }
}

#[test]
fn test_fraction_solvability_all_tiers() {
    for (seed, difficulty) in [
        (15, Difficulty::Intro),
        (16, Difficulty::Standard),
        (17, Difficulty::Challenge),
    ] {
        let mut rng = session_rng(seed);
        for _ in 0..ROUNDS {
            let p = generate(Topic::Fraction, difficulty, &mut rng).unwrap();
            let (n1, d1) = (param(&p, "n1"), param(&p, "d1"));
            let (n2, d2) = (param(&p, "n2"), param(&p, "d2"));
            let op = Op::from_code(p.param("op").unwrap()).unwrap();
            let lhs = Rational::new(n1, d1).unwrap();
            let rhs = Rational::new(n2, d2).unwrap();
            let expected = match op {
                Op::Add => lhs.add(&rhs),
                Op::Sub => lhs.sub(&rhs),
                Op::Mul => lhs.mul(&rhs),
                Op::Div => lhs.div(&rhs).unwrap(),
            };
            match &p.solution {
                Solution::Exact { value } => assert_eq!(*value, expected),
                other => panic!("unexpected solution shape: {other:?}"),
            }
            if difficulty == Difficulty::Intro {
                assert_eq!(d1, d2, "intro tier uses equal denominators");
                assert!(matches!(op, Op::Add | Op::Sub));
            }
        }
    }
}

#[test]
fn test_inequality_solvability_and_flip() {
    let mut rng = session_rng(18);
    let mut saw_negative = false;
    for _ in 0..ROUNDS {
        let p = generate(Topic::Inequality, Difficulty::Standard, &mut rng).unwrap();
        let (a, b, c) = (param(&p, "a"), param(&p, "b"), param(&p, "c"));
        assert!(a != 0);
        saw_negative |= a < 0;
        let (relation, value) = match &p.solution {
            Solution::Bound { relation, value } => (*relation, *value),
            other => panic!("unexpected solution shape: {other:?}"),
        };
        assert_eq!(value, Rational::new(c - b, a).unwrap());

        // The displayed relation, un-flipped.
        let displayed = ["≤", "≥", "<", ">"]
            .iter()
            .find(|s| p.display.contains(**s))
            .copied()
            .unwrap();
        let displayed = match displayed {
            "<" => Relation::Less,
            "≤" => Relation::LessEq,
            ">" => Relation::Greater,
            _ => Relation::GreaterEq,
        };
        if a < 0 {
            assert_eq!(relation, displayed.flip(), "negative a must flip the relation");
        } else {
            assert_eq!(relation, displayed);
        }
    }
    assert!(saw_negative, "draw must be biased toward negative a");
}

// Worked scenario from the flip rule: -3x + 6 ≤ 12 has solution x ≥ -2.
#[test]
fn test_inequality_flip_scenario() {
    let (a, b, c) = (-3i64, 6i64, 12i64);
    let bound = Rational::new(c - b, a).unwrap();
    assert_eq!(bound, Rational::from_integer(-2));
    let effective = if a < 0 {
        Relation::LessEq.flip()
    } else {
        Relation::LessEq
    };
    assert_eq!(effective, Relation::GreaterEq);
}

#[test]
fn test_boolean_solvability() {
    let mut rng = session_rng(19);
    for _ in 0..ROUNDS {
        let p = generate(Topic::Boolean, Difficulty::Standard, &mut rng).unwrap();
        let op = BoolOp::from_code(p.param("op").unwrap()).unwrap();
        let pv = param(&p, "p") != 0;
        let qv = p.param("q").map(|q| q != 0.0).unwrap_or(false);
        if op == BoolOp::Not {
            assert!(p.param("q").is_none(), "NOT is unary");
        }
        match &p.solution {
            Solution::Truth { value } => assert_eq!(*value, op.apply(pv, qv)),
            other => panic!("unexpected solution shape: {other:?}"),
        }
    }
}

#[test]
fn test_trig_solvability() {
    let mut rng = session_rng(20);
    for _ in 0..ROUNDS {
        let p = generate(Topic::Trig, Difficulty::Standard, &mut rng).unwrap();
        let deg = param(&p, "degrees");
        let radians = (deg as f64).to_radians();
        if p.display.starts_with("sin(") {
            match &p.solution {
                Solution::Number { value } => {
                    assert!((value - radians.sin()).abs() < 0.001)
                }
                other => panic!("unexpected solution shape: {other:?}"),
            }
        } else if p.display.starts_with("cos(") {
            match &p.solution {
                Solution::Number { value } => {
                    assert!((value - radians.cos()).abs() < 0.001)
                }
                other => panic!("unexpected solution shape: {other:?}"),
            }
        } else if p.display.contains("quadrant") {
            assert!(deg > 0 && deg < 360 && deg % 90 != 0);
            let expected = ["I", "II", "III", "IV"][((deg + 89) / 90 - 1) as usize];
            match &p.solution {
                Solution::Choice { value } => assert_eq!(value, expected),
                other => panic!("unexpected solution shape: {other:?}"),
            }
        } else if p.display.contains("sin²") {
            match &p.solution {
                Solution::Exact { value } => assert_eq!(*value, Rational::from_integer(1)),
                other => panic!("unexpected solution shape: {other:?}"),
            }
        } else {
            // degrees -> radians conversion
            match &p.solution {
                Solution::Number { value } => {
                    assert!((value - radians).abs() < 0.001)
                }
                other => panic!("unexpected solution shape: {other:?}"),
            }
        }
    }
}

#[test]
fn test_problem_serde_round_trip() {
    let mut rng = session_rng(21);
    for topic in Topic::ALL {
        let p = generate(topic, Difficulty::Standard, &mut rng).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: Problem = serde_json::from_str(&json).unwrap();
        assert_eq!(p.solution, back.solution);
        assert_eq!(p.display, back.display);
    }
}

#[test]
fn test_tolerance_policy() {
    let mut rng = session_rng(22);
    for _ in 0..200 {
        for topic in Topic::ALL {
            let p = generate(topic, Difficulty::Standard, &mut rng).unwrap();
            match p.solution {
                Solution::Number { .. } => assert_eq!(p.tolerance, 0.01),
                _ => assert_eq!(p.tolerance, 0.0),
            }
        }
    }
}
