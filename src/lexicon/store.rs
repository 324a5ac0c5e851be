use super::{Lexicon, WordSense};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Lexical database backed by a JSON sense index on disk.
///
/// File format: a map from word to its sense list, e.g.
/// ```json
/// { "apple": [ { "lemmas": ["apple"], "depth": 9, "examples": ["an apple a day"] } ] }
/// ```
#[derive(Debug, Default)]
pub struct FileLexicon {
    entries: HashMap<String, Vec<WordSense>>,
}

impl FileLexicon {
    /// Load the sense index from a JSON file.
    ///
    /// A missing file yields an empty lexicon rather than an error: scoring
    /// degrades gracefully (complexity and metaphor signals read as zero),
    /// and the caller can warn about it.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open lexicon at {}", path.display()))?;

        let entries: HashMap<String, Vec<WordSense>> = serde_json::from_reader(file)
            .with_context(|| format!("Failed to parse lexicon JSON at {}", path.display()))?;

        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Lexicon for FileLexicon {
    fn senses(&self, word: &str) -> &[WordSense] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_returns_empty() {
        let temp_path = env::temp_dir().join("essay_grader_test_missing_lexicon.json");
        let _ = std::fs::remove_file(&temp_path);

        let lexicon = FileLexicon::load(&temp_path).unwrap();
        assert!(lexicon.is_empty());
        assert!(lexicon.senses("anything").is_empty());
    }

    #[test]
    fn test_load_and_lookup() {
        let temp_path = env::temp_dir().join("essay_grader_test_lexicon.json");
        let mut file = std::fs::File::create(&temp_path).unwrap();
        write!(
            file,
            r#"{{"apple": [{{"lemmas": ["apple", "orchard apple"], "depth": 9, "examples": ["an apple a day"]}}]}}"#
        )
        .unwrap();

        let lexicon = FileLexicon::load(&temp_path).unwrap();
        assert_eq!(lexicon.len(), 1);

        let senses = lexicon.senses("apple");
        assert_eq!(senses.len(), 1);
        assert_eq!(senses[0].lemmas.len(), 2);
        assert_eq!(senses[0].depth, 9);
        assert!(lexicon.senses("pear").is_empty());

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_malformed_json_errors() {
        let temp_path = env::temp_dir().join("essay_grader_test_bad_lexicon.json");
        std::fs::write(&temp_path, "not json").unwrap();

        assert!(FileLexicon::load(&temp_path).is_err());

        let _ = std::fs::remove_file(&temp_path);
    }
}
