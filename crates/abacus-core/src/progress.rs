//! Progress reporting: a two-method sink keyed by topic id.
//!
//! The persistence medium is the embedder's concern. The engine only needs
//! the trait; `MemoryProgress` is the in-memory implementation used by
//! tests and by embedders without their own store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Running score for one topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicScore {
    pub correct: u32,
    pub total: u32,
}

/// Consumer of verification outcomes. `InvalidInput` is never recorded;
/// only graded attempts count.
pub trait ProgressReporter {
    fn record_correct(&mut self, topic_id: &str);
    fn record_incorrect(&mut self, topic_id: &str);
    fn reset(&mut self, topic_id: &str);
    fn read(&self, topic_id: &str) -> TopicScore;
}

/// In-memory score table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryProgress {
    scores: BTreeMap<String, TopicScore>,
}

impl MemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for MemoryProgress {
    fn record_correct(&mut self, topic_id: &str) {
        let score = self.scores.entry(topic_id.to_string()).or_default();
        score.correct += 1;
        score.total += 1;
    }

    fn record_incorrect(&mut self, topic_id: &str) {
        let score = self.scores.entry(topic_id.to_string()).or_default();
        score.total += 1;
    }

    fn reset(&mut self, topic_id: &str) {
        self.scores.remove(topic_id);
    }

    fn read(&self, topic_id: &str) -> TopicScore {
        self.scores.get(topic_id).copied().unwrap_or_default()
    }
}
