use super::creativity::creativity_score;
use super::diff::{classify, ErrorCounts};
use super::grammar::grammar_score;
use super::types::{EssayPair, GradingResult};
use super::vocabulary::vocabulary_score;
use crate::error::GradeError;
use crate::lexicon::Lexicon;
use crate::oracle::{GrammarOracle, SentimentOracle};
use crate::params::GradingParameters;
use crate::text::word_count;

/// Grade an essay end to end: obtain the corrected rendition and polarity
/// from the oracles, then score the pair.
///
/// The returned `EssayPair` lets the caller display the corrected text; it
/// is not part of the result proper and is never persisted.
pub async fn grade(
    essay: &str,
    params: &GradingParameters,
    grammar: &dyn GrammarOracle,
    sentiment: &dyn SentimentOracle,
    lexicon: &dyn Lexicon,
) -> Result<(EssayPair, GradingResult), GradeError> {
    // Reject empty essays before spending an oracle round-trip on them
    if word_count(essay) == 0 {
        return Err(GradeError::EmptyInput);
    }

    let corrected = grammar.correct(essay).await?;
    let polarity = sentiment.polarity(essay).await?;

    let pair = EssayPair {
        original: essay.to_string(),
        corrected,
    };
    let result = score_pair(&pair, params, polarity, lexicon)?;

    Ok((pair, result))
}

/// Score an original/corrected pair with a known polarity. This is the whole
/// engine minus the oracle round-trips; tests drive it directly.
pub fn score_pair(
    pair: &EssayPair,
    params: &GradingParameters,
    polarity: f64,
    lexicon: &dyn Lexicon,
) -> Result<GradingResult, GradeError> {
    let total_word_count = word_count(&pair.original);
    if total_word_count == 0 {
        return Err(GradeError::EmptyInput);
    }

    let classified_errors = classify(&pair.original, &pair.corrected);
    let counts = ErrorCounts::tally(&classified_errors);
    let error_rate = counts.total() as f64 / total_word_count as f64;

    let grammar = grammar_score(error_rate);
    // Vocabulary and creativity deliberately read only the original text:
    // the writer's own wording is being scored, not the corrector's
    let vocabulary = vocabulary_score(&pair.original, lexicon)?;
    let creativity = creativity_score(&pair.original, polarity, lexicon)?;

    let total_weight =
        params.grammar_weight + params.vocabulary_weight + params.creativity_weight;
    let final_score = if total_weight == 0.0 {
        0.0
    } else {
        (grammar * params.grammar_weight
            + vocabulary * params.vocabulary_weight
            + creativity * params.creativity_weight)
            / total_weight
            * 10.0
    };

    let mut feedback = Vec::new();
    if total_word_count < params.min_word_count as usize
        || total_word_count > params.max_word_count as usize
    {
        feedback.push(format!(
            "Word count ({}) is outside the required range ({}-{}).",
            total_word_count, params.min_word_count, params.max_word_count
        ));
    }
    feedback.push(format!("Spelling errors: {}", counts.spelling));
    feedback.push(format!("Grammar errors: {}", counts.grammar));
    feedback.push(format!("Punctuation errors: {}", counts.punctuation));
    if params.grammar_weight > 0.0 {
        feedback.push(format!("Grammar score: {grammar:.2}/10"));
    }
    if params.vocabulary_weight > 0.0 {
        feedback.push(format!("Vocabulary score: {vocabulary:.2}/10"));
    }
    if params.creativity_weight > 0.0 {
        feedback.push(format!("Creativity score: {creativity:.2}/10"));
    }

    Ok(GradingResult {
        final_score: round2(final_score),
        classified_errors,
        grammar_score: (params.grammar_weight > 0.0).then(|| round2(grammar)),
        vocabulary_score: (params.vocabulary_weight > 0.0).then(|| round2(vocabulary)),
        creativity_score: (params.creativity_weight > 0.0).then(|| round2(creativity)),
        feedback,
        total_word_count,
        error_rate_percent: round2(error_rate * 100.0),
    })
}

/// Round to 2 decimal places at the output boundary.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::WordSense;
    use crate::params::builtin_parameters;
    use async_trait::async_trait;

    struct EmptyLexicon;

    impl Lexicon for EmptyLexicon {
        fn senses(&self, _word: &str) -> &[WordSense] {
            &[]
        }
    }

    /// Correction oracle returning a canned answer.
    struct FixedCorrection(&'static str);

    #[async_trait]
    impl GrammarOracle for FixedCorrection {
        async fn correct(&self, _text: &str) -> Result<String, GradeError> {
            Ok(self.0.to_string())
        }
    }

    struct FixedSentiment(f64);

    #[async_trait]
    impl SentimentOracle for FixedSentiment {
        async fn polarity(&self, _text: &str) -> Result<f64, GradeError> {
            Ok(self.0)
        }
    }

    fn params(grammar: f64, vocabulary: f64, creativity: f64) -> GradingParameters {
        GradingParameters {
            category_name: "test".to_string(),
            min_word_count: 1,
            max_word_count: 10_000,
            grammar_weight: grammar,
            vocabulary_weight: vocabulary,
            creativity_weight: creativity,
        }
    }

    fn pair(original: &str, corrected: &str) -> EssayPair {
        EssayPair {
            original: original.to_string(),
            corrected: corrected.to_string(),
        }
    }

    #[test]
    fn test_clean_essay_full_grammar_score() {
        let essay = "A perfectly clean essay about nothing in particular.";
        let result = score_pair(&pair(essay, essay), &params(1.0, 1.0, 1.0), 0.0, &EmptyLexicon)
            .unwrap();
        assert_eq!(result.error_rate_percent, 0.0);
        assert_eq!(result.grammar_score, Some(10.0));
        assert!(result.classified_errors.is_empty());
    }

    #[test]
    fn test_dense_errors_clamp_grammar_to_zero() {
        // 2 grammar errors over 4 words: error rate 0.5, deep in the
        // clamped tail
        let result = score_pair(
            &pair("I has a apple.", "I have an apple."),
            &params(1.0, 0.0, 0.0),
            0.0,
            &EmptyLexicon,
        )
        .unwrap();
        assert_eq!(result.error_rate_percent, 50.0);
        assert_eq!(result.grammar_score, Some(0.0));
        assert_eq!(result.final_score, 0.0);
        assert!(result
            .feedback
            .contains(&"Grammar errors: 2".to_string()));
        assert!(result
            .feedback
            .contains(&"Spelling errors: 0".to_string()));
    }

    #[test]
    fn test_zero_weights_zero_final_score() {
        let essay = "Some words in a row here.";
        let result =
            score_pair(&pair(essay, essay), &params(0.0, 0.0, 0.0), 0.5, &EmptyLexicon).unwrap();
        assert_eq!(result.final_score, 0.0);
        assert!(result.grammar_score.is_none());
        assert!(result.vocabulary_score.is_none());
        assert!(result.creativity_score.is_none());
        // No score feedback lines either, just the three error tallies
        assert!(result.feedback.iter().all(|line| !line.contains("score")));
    }

    #[test]
    fn test_weights_normalized_by_sum() {
        // Grammar-only weighting: final = grammar * 10 regardless of the
        // weight's magnitude
        let essay = "A clean essay with several distinct words inside.";
        let halves = score_pair(&pair(essay, essay), &params(0.5, 0.0, 0.0), 0.0, &EmptyLexicon)
            .unwrap();
        let wholes = score_pair(&pair(essay, essay), &params(2.0, 0.0, 0.0), 0.0, &EmptyLexicon)
            .unwrap();
        assert_eq!(halves.final_score, 100.0);
        assert_eq!(wholes.final_score, 100.0);
    }

    #[test]
    fn test_word_count_feedback_does_not_change_score() {
        let essay = "Only five words right here.";
        let wide = params(1.0, 1.0, 1.0);
        let mut narrow = wide.clone();
        narrow.min_word_count = 100;
        narrow.max_word_count = 300;

        let in_range = score_pair(&pair(essay, essay), &wide, 0.0, &EmptyLexicon).unwrap();
        let out_of_range = score_pair(&pair(essay, essay), &narrow, 0.0, &EmptyLexicon).unwrap();

        assert_eq!(in_range.final_score, out_of_range.final_score);
        assert!(out_of_range.feedback[0].contains("outside the required range (100-300)"));
        assert!(!in_range.feedback[0].contains("outside"));
    }

    #[test]
    fn test_suppressed_subscore_still_computed_into_final() {
        // Creativity weight 0: field absent, but grammar and vocabulary
        // still weighted normally
        let essay = "A clean essay with several distinct words inside.";
        let result =
            score_pair(&pair(essay, essay), &params(1.0, 1.0, 0.0), 0.9, &EmptyLexicon).unwrap();
        assert!(result.creativity_score.is_none());
        assert!(result.grammar_score.is_some());
        assert!(result.vocabulary_score.is_some());
    }

    #[test]
    fn test_empty_essay_rejected() {
        let result = score_pair(&pair("   ", "still empty"), &params(1.0, 1.0, 1.0), 0.0, &EmptyLexicon);
        assert!(matches!(result, Err(GradeError::EmptyInput)));
    }

    #[test]
    fn test_builtin_medium_weights_roundtrip() {
        let medium = builtin_parameters()
            .into_iter()
            .find(|p| p.category_name == "medium")
            .unwrap();
        let essay = "A short but clean essay.";
        let result = score_pair(&pair(essay, essay), &medium, 0.0, &EmptyLexicon).unwrap();
        // All three weights positive, so all three fields present
        assert!(result.grammar_score.is_some());
        assert!(result.vocabulary_score.is_some());
        assert!(result.creativity_score.is_some());
    }

    #[test]
    fn test_updated_category_bounds_reach_feedback() {
        use crate::params::ParameterStore;

        let store = ParameterStore::with_builtins();
        let essay = "Only five words right here.";
        let p = pair(essay, essay);

        // Stock short category: 100-300 words
        let before = score_pair(&p, &store.resolve(Some("short")), 0.0, &EmptyLexicon).unwrap();
        assert!(before.feedback[0].contains("(100-300)"));

        // Tighten the bounds and grade again through the store
        let mut custom = store.resolve(Some("short"));
        custom.min_word_count = 2;
        custom.max_word_count = 4;
        store.update(custom);

        let after = score_pair(&p, &store.resolve(Some("short")), 0.0, &EmptyLexicon).unwrap();
        assert!(after.feedback[0].contains("(2-4)"));
        assert_eq!(before.final_score, after.final_score);
    }

    #[tokio::test]
    async fn test_grade_wires_oracles_through() {
        let result = grade(
            "I has a apple.",
            &params(1.0, 0.0, 0.0),
            &FixedCorrection("I have an apple."),
            &FixedSentiment(0.25),
            &EmptyLexicon,
        )
        .await
        .unwrap();

        let (pair, result) = result;
        assert_eq!(pair.corrected, "I have an apple.");
        assert_eq!(result.error_rate_percent, 50.0);
        assert_eq!(result.total_word_count, 4);
    }

    #[tokio::test]
    async fn test_grade_rejects_empty_before_oracle_call() {
        struct PanickingOracle;

        #[async_trait]
        impl GrammarOracle for PanickingOracle {
            async fn correct(&self, _text: &str) -> Result<String, GradeError> {
                panic!("oracle must not be called for empty input");
            }
        }

        let result = grade(
            "  ",
            &params(1.0, 1.0, 1.0),
            &PanickingOracle,
            &FixedSentiment(0.0),
            &EmptyLexicon,
        )
        .await;
        assert!(matches!(result, Err(GradeError::EmptyInput)));
    }
}
