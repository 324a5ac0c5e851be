use super::types::GradingParameters;

/// Validate grading parameters before they are used or stored.
/// Returns all validation errors at once (not just the first).
pub fn validate_parameters(params: &GradingParameters) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if params.category_name.trim().is_empty() {
        errors.push("category_name: must not be empty".to_string());
    }

    if params.min_word_count > params.max_word_count {
        errors.push(format!(
            "word count bounds: min ({}) exceeds max ({})",
            params.min_word_count, params.max_word_count
        ));
    }

    for (name, weight) in [
        ("grammar_weight", params.grammar_weight),
        ("vocabulary_weight", params.vocabulary_weight),
        ("creativity_weight", params.creativity_weight),
    ] {
        if !weight.is_finite() {
            errors.push(format!("{name}: must be a finite number"));
        } else if weight < 0.0 {
            errors.push(format!("{name}: must be non-negative, got {weight}"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
