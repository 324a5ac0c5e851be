mod store;

pub use store::FileLexicon;

use serde::{Deserialize, Serialize};

/// One sense of a word in the lexical database.
///
/// Mirrors a WordNet-style entry: the lemmas that share the sense, the
/// sense's depth in the hypernym hierarchy, and recorded usage examples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSense {
    pub lemmas: Vec<String>,
    pub depth: u32,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl WordSense {
    /// Complexity contribution of this sense: lemma count plus hierarchy
    /// depth. Averaged per word by the vocabulary scorer.
    pub fn complexity(&self) -> f64 {
        self.lemmas.len() as f64 + self.depth as f64
    }
}

/// Capability interface for word-sense lookup.
///
/// The scoring engine only ever asks one question of the lexical database,
/// so test stand-ins are a couple of lines.
pub trait Lexicon: Send + Sync {
    /// All senses recorded for `word`, most common first. Empty for unknown
    /// words.
    fn senses(&self, word: &str) -> &[WordSense];
}
