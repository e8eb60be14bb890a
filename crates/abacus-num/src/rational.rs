//! Exact rational arithmetic in canonical reduced form.
//!
//! Every `Rational` holds `denom > 0` and `gcd(|numer|, denom) == 1`. The
//! invariant is established by `new` and preserved by every operation, so
//! structural equality is value equality: `2/4` and `1/2` are the same
//! `Rational` once constructed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum RationalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("malformed rational literal: '{input}'")]
    Malformed { input: String },
}

/// An exact fraction, always in reduced form with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

/// Iterative Euclid. Both arguments non-negative; `gcd(0, 0)` never occurs
/// because a zero denominator is rejected before reduction.
fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Rational {
    /// Construct `n/d` in canonical form. Rejects `d == 0`.
    pub fn new(n: i64, d: i64) -> Result<Self, RationalError> {
        if d == 0 {
            return Err(RationalError::DivisionByZero);
        }
        // Normalize sign onto the numerator first, then reduce.
        let (n, d) = if d < 0 { (-n, -d) } else { (n, d) };
        let g = gcd(n.abs(), d);
        Ok(Self {
            numer: n / g,
            denom: d / g,
        })
    }

    /// The integer `n` as `n/1`.
    pub fn from_integer(n: i64) -> Self {
        Self { numer: n, denom: 1 }
    }

    pub fn numer(&self) -> i64 {
        self.numer
    }

    pub fn denom(&self) -> i64 {
        self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    /// True when the value is a whole number.
    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Reduce with a denominator already known to be positive.
    fn reduced(n: i64, d: i64) -> Self {
        debug_assert!(d > 0);
        let g = gcd(n.abs(), d);
        Self {
            numer: n / g,
            denom: d / g,
        }
    }

    /// Cross-multiplied sum, reduced.
    pub fn add(&self, other: &Self) -> Self {
        Self::reduced(
            self.numer * other.denom + other.numer * self.denom,
            self.denom * other.denom,
        )
    }

    /// Cross-multiplied difference, reduced.
    pub fn sub(&self, other: &Self) -> Self {
        Self::reduced(
            self.numer * other.denom - other.numer * self.denom,
            self.denom * other.denom,
        )
    }

    /// Product, reduced.
    pub fn mul(&self, other: &Self) -> Self {
        Self::reduced(self.numer * other.numer, self.denom * other.denom)
    }

    /// Quotient, reduced. Dividing by a zero rational is `DivisionByZero`.
    pub fn div(&self, other: &Self) -> Result<Self, RationalError> {
        if other.numer == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Self::new(self.numer * other.denom, self.denom * other.numer)
    }

    pub fn neg(&self) -> Self {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl std::ops::Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Rational) -> Rational {
        Rational::add(&self, &rhs)
    }
}

impl std::ops::Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Rational) -> Rational {
        Rational::sub(&self, &rhs)
    }
}

impl std::ops::Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Rational) -> Rational {
        Rational::mul(&self, &rhs)
    }
}

impl std::ops::Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational::neg(&self)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Accepts `"n"` and `"n/d"`, with surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let malformed = || RationalError::Malformed {
            input: s.to_string(),
        };
        match trimmed.split_once('/') {
            Some((n, d)) => {
                let n: i64 = n.trim().parse().map_err(|_| malformed())?;
                let d: i64 = d.trim().parse().map_err(|_| malformed())?;
                if d == 0 {
                    return Err(RationalError::DivisionByZero);
                }
                Self::new(n, d)
            }
            None => {
                let n: i64 = trimmed.parse().map_err(|_| malformed())?;
                Ok(Self::from_integer(n))
            }
        }
    }
}
