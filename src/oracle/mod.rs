mod client;

pub use client::{HttpGrammarOracle, HttpSentimentOracle};

use crate::error::GradeError;
use async_trait::async_trait;

/// Grammar-correction collaborator.
///
/// Given raw text, returns a corrected rendition. The engine treats the
/// corrected text as advisory: it is diffed against the original and then
/// discarded.
#[async_trait]
pub trait GrammarOracle: Send + Sync {
    async fn correct(&self, text: &str) -> Result<String, GradeError>;
}

/// Sentiment/polarity collaborator.
///
/// Returns a scalar in [-1, 1]; the creativity scorer uses its magnitude.
#[async_trait]
pub trait SentimentOracle: Send + Sync {
    async fn polarity(&self, text: &str) -> Result<f64, GradeError>;
}
