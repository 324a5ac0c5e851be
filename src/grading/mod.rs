pub mod creativity;
pub mod diff;
pub mod engine;
pub mod grammar;
pub mod types;
pub mod vocabulary;

pub use diff::{classify, ClassifiedError, ErrorCategory, ErrorCounts};
pub use engine::{grade, score_pair};
pub use types::{EssayPair, GradingResult};
