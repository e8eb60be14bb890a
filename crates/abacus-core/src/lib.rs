pub mod answer;
pub mod progress;
pub mod session;
pub mod verify;

pub use answer::RawAnswer;
pub use progress::{MemoryProgress, ProgressReporter, TopicScore};
pub use session::{EngineError, Session, SessionConfig};
pub use verify::{verify, VerificationResult};
