/// Convert classified-edit density into a banded score.
///
/// Step bands down to an error rate of 0.15, then a linear tail that reaches
/// 0 at 0.45 and stays clamped there.
pub fn grammar_score(error_rate: f64) -> f64 {
    if error_rate <= 0.02 {
        10.0
    } else if error_rate <= 0.05 {
        9.0
    } else if error_rate <= 0.10 {
        8.0
    } else if error_rate <= 0.15 {
        7.0
    } else {
        (6.0 - (error_rate - 0.15) * 20.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(grammar_score(0.0), 10.0);
        assert_eq!(grammar_score(0.02), 10.0);
        assert_eq!(grammar_score(0.05), 9.0);
        assert_eq!(grammar_score(0.10), 8.0);
        assert_eq!(grammar_score(0.15), 7.0);
    }

    #[test]
    fn test_linear_tail() {
        // 6 - (0.25 - 0.15) * 20 = 4
        assert!((grammar_score(0.25) - 4.0).abs() < 1e-9);
        // 6 - (0.45 - 0.15) * 20 = 0
        assert!(grammar_score(0.45).abs() < 1e-9);
    }

    #[test]
    fn test_tail_clamps_at_zero() {
        assert_eq!(grammar_score(0.5), 0.0);
        assert_eq!(grammar_score(10.0), 0.0);
    }

    #[test]
    fn test_monotonically_non_increasing() {
        let mut rate = 0.0;
        let mut previous = f64::INFINITY;
        while rate <= 1.0 {
            let score = grammar_score(rate);
            assert!(score <= previous, "score rose at error_rate {rate}");
            assert!((0.0..=10.0).contains(&score));
            previous = score;
            rate += 0.005;
        }
    }
}
