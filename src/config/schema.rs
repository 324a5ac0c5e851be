use crate::params::GradingParameters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration.
///
/// Points the grader at its collaborators and optionally seeds extra grading
/// categories on top of the built-ins.
///
/// Example YAML:
/// ```yaml
/// grammar_api: "http://localhost:8085/correct"
/// sentiment_api: "http://localhost:8085/polarity"
/// lexicon_path: "/usr/share/essay-grader/lexicon.json"
/// categories:
///   - category_name: flash
///     min_word_count: 50
///     max_word_count: 150
///     grammar_weight: 0.5
///     vocabulary_weight: 0.25
///     creativity_weight: 0.25
/// ```
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Grammar-correction service endpoint
    #[serde(default = "default_grammar_api")]
    pub grammar_api: String,

    /// Sentiment service endpoint
    #[serde(default = "default_sentiment_api")]
    pub sentiment_api: String,

    /// Path to the lexical-database JSON index
    /// (defaults to lexicon.json next to the config file)
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,

    /// Extra grading categories seeded into the parameter store at startup
    #[serde(default)]
    pub categories: Vec<GradingParameters>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grammar_api: default_grammar_api(),
            sentiment_api: default_sentiment_api(),
            lexicon_path: None,
            categories: Vec::new(),
        }
    }
}

fn default_grammar_api() -> String {
    "http://localhost:8085/correct".to_string()
}

fn default_sentiment_api() -> String {
    "http://localhost:8085/polarity".to_string()
}
