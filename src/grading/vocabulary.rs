use crate::error::GradeError;
use crate::lexicon::{Lexicon, WordSense};
use crate::text::tokenize;
use std::collections::HashSet;

/// Score lexical richness of the original essay text.
///
/// Three normalized signals, equally weighted: average word length over the
/// distinct vocabulary, lexical diversity (distinct / total tokens), and
/// average sense complexity from the lexical database. Words the database
/// does not know are excluded from the complexity average rather than
/// counted as zero.
pub fn vocabulary_score(essay: &str, lexicon: &dyn Lexicon) -> Result<f64, GradeError> {
    let tokens = tokenize(essay);
    if tokens.is_empty() {
        return Err(GradeError::EmptyInput);
    }

    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    let avg_word_length = distinct
        .iter()
        .map(|word| word.chars().count())
        .sum::<usize>() as f64
        / distinct.len() as f64;

    let lexical_diversity = distinct.len() as f64 / tokens.len() as f64;

    let mut complexities = Vec::new();
    for word in &distinct {
        let senses = lexicon.senses(word);
        if !senses.is_empty() {
            let total: f64 = senses.iter().map(WordSense::complexity).sum();
            complexities.push(total / senses.len() as f64);
        }
    }
    let avg_complexity = if complexities.is_empty() {
        0.0
    } else {
        complexities.iter().sum::<f64>() / complexities.len() as f64
    };

    let length_norm = (avg_word_length / 8.0).min(1.0);
    let diversity_norm = (lexical_diversity * 2.0).min(1.0);
    let complexity_norm = (avg_complexity / 15.0).min(1.0);

    Ok((length_norm + diversity_norm + complexity_norm) / 3.0 * 10.0)
}
