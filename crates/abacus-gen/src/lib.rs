pub mod gen;
pub mod rng;
pub mod sample;
pub mod topic;

pub use gen::{generate, GenError};
pub use sample::{sample_until, GenerationExhausted, MAX_ATTEMPTS};
pub use topic::{Difficulty, Problem, Relation, Solution, Topic};
