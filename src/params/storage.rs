use super::types::GradingParameters;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the default stored-parameters path (~/.config/essay-grader/parameters.json)
pub fn get_parameters_path() -> PathBuf {
    crate::config::get_config_dir().join("parameters.json")
}

/// On-disk form of the parameter store: category overrides written by
/// `set-params`, layered over the built-ins at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredParameters {
    pub version: u32,
    #[serde(default)]
    pub categories: HashMap<String, StoredEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEntry {
    pub updated_at: DateTime<Utc>,
    pub params: GradingParameters,
}

impl Default for StoredParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl StoredParameters {
    pub fn new() -> Self {
        Self {
            version: 1,
            categories: HashMap::new(),
        }
    }

    /// Write or overwrite the entry for the parameters' category, stamping
    /// the update time.
    pub fn record(&mut self, params: GradingParameters) {
        let entry = StoredEntry {
            updated_at: Utc::now(),
            params,
        };
        self.categories.insert(entry.params.category_name.clone(), entry);
    }
}

/// Load stored parameters from a JSON file
///
/// If the file doesn't exist, returns a new empty state.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_parameters(path: &Path) -> Result<StoredParameters> {
    if !path.exists() {
        return Ok(StoredParameters::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open parameters file at {}", path.display()))?;

    let stored: StoredParameters =
        serde_json::from_reader(file).context("Failed to load stored parameters")?;

    if stored.version != 1 {
        anyhow::bail!("Unsupported parameters file version: {}", stored.version);
    }

    Ok(stored)
}

/// Save stored parameters to a JSON file atomically
///
/// Uses atomic-write-file so the file is never left in a corrupted state.
/// Creates the config directory if it doesn't exist.
pub fn save_parameters(path: &Path, stored: &StoredParameters) -> Result<()> {
    crate::config::ensure_config_dir()?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, stored).context("Failed to serialize parameters")?;

    file.commit().context("Failed to save parameters")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn sample(category: &str, min: u32) -> GradingParameters {
        GradingParameters {
            category_name: category.to_string(),
            min_word_count: min,
            max_word_count: min * 10,
            grammar_weight: 0.5,
            vocabulary_weight: 0.3,
            creativity_weight: 0.2,
        }
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let temp_path = env::temp_dir().join("essay_grader_test_missing_params.json");
        let _ = std::fs::remove_file(&temp_path);

        let stored = load_parameters(&temp_path).unwrap();
        assert_eq!(stored.version, 1);
        assert!(stored.categories.is_empty());
    }

    #[test]
    fn test_record_overwrites_same_category() {
        let mut stored = StoredParameters::new();
        stored.record(sample("short", 50));
        stored.record(sample("short", 80));

        assert_eq!(stored.categories.len(), 1);
        assert_eq!(stored.categories["short"].params.min_word_count, 80);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("essay_grader_test_params_roundtrip.json");
        let _ = std::fs::remove_file(&temp_path);

        let mut stored = StoredParameters::new();
        stored.record(sample("short", 50));
        stored.record(sample("epic", 1000));

        save_parameters(&temp_path, &stored).unwrap();
        let loaded = load_parameters(&temp_path).unwrap();

        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.categories.len(), 2);
        assert_eq!(loaded.categories["epic"].params.max_word_count, 10_000);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let temp_path = env::temp_dir().join("essay_grader_test_params_version.json");
        std::fs::write(&temp_path, r#"{"version": 9, "categories": {}}"#).unwrap();

        assert!(load_parameters(&temp_path).is_err());

        let _ = std::fs::remove_file(&temp_path);
    }
}
