use thiserror::Error;

/// Failures a grading request can surface to the caller.
///
/// Everything past tokenization is plain arithmetic and cannot fail, so the
/// taxonomy stays small: bad input, or a collaborator we could not reach.
#[derive(Debug, Error)]
pub enum GradeError {
    /// The essay tokenizes to zero words. Scoring divides by the word count
    /// in several places, so this is rejected up front.
    #[error("essay contains no words to score")]
    EmptyInput,

    /// A collaborator (grammar correction, sentiment) was unreachable or
    /// returned something we could not use. Retries, if any, happen inside
    /// the collaborator's client, never here.
    #[error("{service} oracle failure: {reason}")]
    Oracle {
        service: &'static str,
        reason: String,
    },
}

impl GradeError {
    pub fn oracle(service: &'static str, reason: impl ToString) -> Self {
        GradeError::Oracle {
            service,
            reason: reason.to_string(),
        }
    }
}
