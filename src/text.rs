/// Count words by whitespace splitting.
///
/// This is the denominator for error rate and the value checked against the
/// category word-count bounds. It is independent of `tokenize`, which drops
/// punctuation.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Tokenize text into lower-cased word tokens.
///
/// A token is a run of alphanumeric characters, keeping internal apostrophes
/// ("don't" stays one token). Punctuation and symbols are not tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() || c == '\'' {
            for lc in c.to_lowercase() {
                current.push(lc);
            }
        } else if !current.is_empty() {
            push_token(&mut tokens, &mut current);
        }
    }
    if !current.is_empty() {
        push_token(&mut tokens, &mut current);
    }

    tokens
}

fn push_token(tokens: &mut Vec<String>, current: &mut String) {
    // Strip apostrophes that ended up on the edges (quoted words)
    let trimmed = current.trim_matches('\'');
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
    current.clear();
}

/// Split text into sentences on terminal punctuation (`.`, `!`, `?`).
///
/// Empty fragments (e.g. from "..." or trailing periods) are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
