pub mod rational;

pub use rational::{Rational, RationalError};
