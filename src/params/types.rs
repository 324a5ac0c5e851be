use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// Category looked up when a request names no category, or names one the
/// store does not know.
pub const DEFAULT_CATEGORY: &str = "medium";

/// Grading configuration for one essay category.
///
/// Weights need not sum to 1; the aggregator normalizes by their sum. A
/// weight of 0 suppresses that sub-score from the result.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GradingParameters {
    pub category_name: String,
    pub min_word_count: u32,
    pub max_word_count: u32,
    pub grammar_weight: f64,
    pub vocabulary_weight: f64,
    pub creativity_weight: f64,
}

impl GradingParameters {
    fn new(
        category_name: &str,
        min_word_count: u32,
        max_word_count: u32,
        grammar_weight: f64,
        vocabulary_weight: f64,
        creativity_weight: f64,
    ) -> Self {
        Self {
            category_name: category_name.to_string(),
            min_word_count,
            max_word_count,
            grammar_weight,
            vocabulary_weight,
            creativity_weight,
        }
    }
}

/// The three built-in essay-length categories.
pub fn builtin_parameters() -> Vec<GradingParameters> {
    vec![
        GradingParameters::new("short", 100, 300, 0.4, 0.3, 0.3),
        GradingParameters::new("medium", 300, 600, 0.35, 0.35, 0.3),
        GradingParameters::new("long", 600, 1000, 0.3, 0.4, 0.3),
    ]
}

/// Process-wide category → parameters mapping.
///
/// Reads and writes are mutually exclusive behind the lock so a lookup never
/// observes a half-written configuration. Last writer wins; there is no
/// versioning or history.
#[derive(Debug)]
pub struct ParameterStore {
    entries: RwLock<HashMap<String, GradingParameters>>,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl ParameterStore {
    /// Create a store seeded with the three built-in categories.
    pub fn with_builtins() -> Self {
        let entries = builtin_parameters()
            .into_iter()
            .map(|params| (params.category_name.clone(), params))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Look up the configuration for a category.
    ///
    /// `None` or an unknown category falls back to `medium`; an unknown
    /// category is a configuration to default around, never an error.
    pub fn resolve(&self, category: Option<&str>) -> GradingParameters {
        let entries = self.entries.read().expect("parameter store lock poisoned");
        let name = category.unwrap_or(DEFAULT_CATEGORY);
        entries
            .get(name)
            .or_else(|| entries.get(DEFAULT_CATEGORY))
            .cloned()
            .unwrap_or_else(|| {
                // Only reachable if medium itself was never seeded
                GradingParameters::new(DEFAULT_CATEGORY, 300, 600, 0.35, 0.35, 0.3)
            })
    }

    /// Write or overwrite the entry for the parameters' category.
    pub fn update(&self, params: GradingParameters) {
        let mut entries = self.entries.write().expect("parameter store lock poisoned");
        entries.insert(params.category_name.clone(), params);
    }

    /// All current entries, sorted by category name.
    pub fn snapshot(&self) -> Vec<GradingParameters> {
        let entries = self.entries.read().expect("parameter store lock poisoned");
        let mut all: Vec<_> = entries.values().cloned().collect();
        all.sort_by(|a, b| a.category_name.cmp(&b.category_name));
        all
    }
}
