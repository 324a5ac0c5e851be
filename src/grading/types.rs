use super::diff::ClassifiedError;
use serde::Serialize;

/// An essay alongside its oracle-corrected rendition.
///
/// Immutable once produced. The corrected text is advisory: it exists to be
/// diffed against the original and shown to the writer, never stored on its
/// own.
#[derive(Debug, Clone)]
pub struct EssayPair {
    pub original: String,
    pub corrected: String,
}

/// The outcome of grading one essay. Produced fresh per request; carries no
/// cross-request state.
#[derive(Debug, Clone, Serialize)]
pub struct GradingResult {
    pub final_score: f64,
    pub classified_errors: Vec<ClassifiedError>,
    /// Per-signal scores, absent when the corresponding weight is zero
    pub grammar_score: Option<f64>,
    pub vocabulary_score: Option<f64>,
    pub creativity_score: Option<f64>,
    pub feedback: Vec<String>,
    pub total_word_count: usize,
    pub error_rate_percent: f64,
}
