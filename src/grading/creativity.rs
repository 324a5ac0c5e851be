use crate::error::GradeError;
use crate::lexicon::Lexicon;
use crate::text::{split_sentences, tokenize};
use std::collections::{HashMap, HashSet};

/// Score creativity of the original essay text.
///
/// Five equally-weighted signals, each normalized to [0, 1]:
/// sentiment strength, unique-word ratio, figurative-language proxy,
/// sentence-length variety, and singleton-word usage.
///
/// `polarity` comes from the sentiment oracle; only its magnitude matters,
/// so a strongly negative essay scores the same as a strongly positive one.
pub fn creativity_score(
    essay: &str,
    polarity: f64,
    lexicon: &dyn Lexicon,
) -> Result<f64, GradeError> {
    let tokens = tokenize(essay);
    if tokens.is_empty() {
        return Err(GradeError::EmptyInput);
    }

    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    let sentiment_score = polarity.abs();

    let unique_word_ratio = distinct.len() as f64 / tokens.len() as f64;

    // Figurative-language proxy: a word whose most common sense carries a
    // recorded usage example tends to appear in idiomatic or metaphorical
    // phrasing. Up to 10% of the vocabulary maps to a full score.
    let example_bearing = distinct
        .iter()
        .filter(|word| {
            lexicon
                .senses(word)
                .first()
                .is_some_and(|sense| !sense.examples.is_empty())
        })
        .count();
    let metaphor_score = (example_bearing as f64 / (distinct.len() as f64 * 0.1)).min(1.0);

    // Sentence variety: spread between the longest and shortest sentence.
    // A single-sentence essay has no spread and scores 0.
    let sentence_lengths: Vec<usize> = split_sentences(essay)
        .iter()
        .map(|sentence| tokenize(sentence).len())
        .collect();
    let length_variety = match (sentence_lengths.iter().max(), sentence_lengths.iter().min()) {
        (Some(max), Some(min)) => (((max - min) as f64) / 15.0).clamp(0.0, 1.0),
        _ => 0.0,
    };

    // Singleton words: up to 5% of the vocabulary occurring exactly once
    // maps to a full score.
    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    for token in &tokens {
        *frequencies.entry(token.as_str()).or_insert(0) += 1;
    }
    let singletons = frequencies.values().filter(|&&count| count == 1).count();
    let rare_word_score = (singletons as f64 / (distinct.len() as f64 * 0.05)).min(1.0);

    let combined =
        (sentiment_score + unique_word_ratio + metaphor_score + length_variety + rare_word_score)
            / 5.0;

    Ok(combined * 10.0)
}
