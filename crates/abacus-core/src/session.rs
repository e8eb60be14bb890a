//! Session glue: owns the RNG and the current problem, applies the
//! retry-once policy on generation exhaustion, and forwards graded
//! outcomes to the progress reporter.

use abacus_gen::rng::session_rng;
use abacus_gen::{generate, Difficulty, GenError, Problem, Topic};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::progress::{MemoryProgress, ProgressReporter};
use crate::verify::{verify, VerificationResult};
use crate::RawAnswer;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Generation failed twice with fresh budgets. A configuration bug in
    /// the topic's parameter ranges, not a runtime fluke.
    #[error("generation failed: {0}")]
    Generate(#[from] GenError),

    #[error("no active problem; call next_problem first")]
    NoActiveProblem,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for a reproducible exercise stream. `None` seeds from entropy.
    pub seed: Option<u64>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// One learner sitting: a stream of problems and their graded answers.
pub struct Session<P: ProgressReporter = MemoryProgress> {
    rng: ChaCha8Rng,
    difficulty: Difficulty,
    current: Option<Problem>,
    progress: P,
}

impl Session<MemoryProgress> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_reporter(config, MemoryProgress::new())
    }
}

impl<P: ProgressReporter> Session<P> {
    pub fn with_reporter(config: SessionConfig, progress: P) -> Self {
        let rng = match config.seed {
            Some(seed) => session_rng(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            rng,
            difficulty: config.difficulty,
            current: None,
            progress,
        }
    }

    /// Generate and install the next problem for `topic`, discarding the
    /// previous one. An exhausted budget is retried once with a fresh
    /// budget before surfacing.
    pub fn next_problem(&mut self, topic: Topic) -> Result<&Problem, EngineError> {
        self.next_problem_with(topic, |topic, difficulty, rng| {
            generate(topic, difficulty, rng)
        })
    }

    /// Generation seam behind `next_problem`: applies the retry-once
    /// policy to whatever generator it is handed. Production goes through
    /// `next_problem`; tests substitute an exhausting generator here.
    pub fn next_problem_with<F>(&mut self, topic: Topic, mut gen: F) -> Result<&Problem, EngineError>
    where
        F: FnMut(Topic, Difficulty, &mut ChaCha8Rng) -> Result<Problem, GenError>,
    {
        let problem = match gen(topic, self.difficulty, &mut self.rng) {
            Ok(problem) => problem,
            Err(GenError::Exhausted(e)) => {
                tracing::warn!(topic = topic.id(), error = %e, "generation exhausted, retrying once");
                gen(topic, self.difficulty, &mut self.rng)?
            }
            Err(e) => return Err(e.into()),
        };
        Ok(self.current.insert(problem))
    }

    /// The problem currently being answered, if any.
    pub fn problem(&self) -> Option<&Problem> {
        self.current.as_ref()
    }

    /// Grade `answer` against the current problem and record the outcome.
    /// `InvalidInput` is not recorded; the learner is re-prompted.
    pub fn check(&mut self, answer: &RawAnswer) -> Result<VerificationResult, EngineError> {
        let problem = self.current.as_ref().ok_or(EngineError::NoActiveProblem)?;
        let result = verify(problem, answer);
        match result {
            VerificationResult::Correct => self.progress.record_correct(problem.topic.id()),
            VerificationResult::Incorrect { .. } => {
                self.progress.record_incorrect(problem.topic.id())
            }
            VerificationResult::InvalidInput => {}
        }
        Ok(result)
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut P {
        &mut self.progress
    }
}
