use super::{GrammarOracle, SentimentOracle};
use crate::error::GradeError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_retry::{strategy::ExponentialBackoff, Retry};

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct CorrectionResponse {
    corrected: String,
}

#[derive(Debug, Deserialize)]
struct PolarityResponse {
    polarity: f64,
}

/// Retry strategy shared by both oracle clients: exponential backoff with 3
/// attempts. Retrying lives here, in the collaborator's client, never in the
/// scoring engine.
fn retry_strategy() -> impl Iterator<Item = std::time::Duration> {
    ExponentialBackoff::from_millis(100)
        .max_delay(std::time::Duration::from_secs(5))
        .take(3)
}

/// Grammar-correction service client.
///
/// Speaks a minimal JSON protocol: POST `{"text": ...}` to the configured
/// endpoint, expect `{"corrected": ...}` back.
pub struct HttpGrammarOracle {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGrammarOracle {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl GrammarOracle for HttpGrammarOracle {
    async fn correct(&self, text: &str) -> Result<String, GradeError> {
        let response = Retry::spawn(retry_strategy(), || async {
            self.client
                .post(&self.endpoint)
                .json(&TextRequest { text })
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
        })
        .await
        .map_err(|e| GradeError::oracle("grammar-correction", e))?;

        let body: CorrectionResponse = response
            .json()
            .await
            .map_err(|e| GradeError::oracle("grammar-correction", format!("malformed response: {e}")))?;

        Ok(body.corrected)
    }
}

/// Sentiment service client. Same protocol shape as the grammar oracle,
/// returning `{"polarity": -1.0..1.0}`.
pub struct HttpSentimentOracle {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSentimentOracle {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl SentimentOracle for HttpSentimentOracle {
    async fn polarity(&self, text: &str) -> Result<f64, GradeError> {
        let response = Retry::spawn(retry_strategy(), || async {
            self.client
                .post(&self.endpoint)
                .json(&TextRequest { text })
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
        })
        .await
        .map_err(|e| GradeError::oracle("sentiment", e))?;

        let body: PolarityResponse = response
            .json()
            .await
            .map_err(|e| GradeError::oracle("sentiment", format!("malformed response: {e}")))?;

        // A polarity outside [-1, 1] is malformed output, not a usable score
        if !body.polarity.is_finite() || !(-1.0..=1.0).contains(&body.polarity) {
            return Err(GradeError::oracle(
                "sentiment",
                format!("polarity {} outside [-1, 1]", body.polarity),
            ));
        }

        Ok(body.polarity)
    }
}
