use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::grading::{ClassifiedError, ErrorCategory, EssayPair, GradingResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a full grading result for the terminal.
pub fn format_result(result: &GradingResult, pair: &EssayPair, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let score_line = format!("Final score: {:.2}", result.final_score);
    lines.push(if use_colors {
        score_line.bold().to_string()
    } else {
        score_line
    });

    let mut sub_scores = Vec::new();
    if let Some(score) = result.grammar_score {
        sub_scores.push(format!("Grammar {score:.2}/10"));
    }
    if let Some(score) = result.vocabulary_score {
        sub_scores.push(format!("Vocabulary {score:.2}/10"));
    }
    if let Some(score) = result.creativity_score {
        sub_scores.push(format!("Creativity {score:.2}/10"));
    }
    if !sub_scores.is_empty() {
        lines.push(sub_scores.join(" | "));
    }

    lines.push(format!(
        "Words: {} | Error rate: {:.2}%",
        result.total_word_count, result.error_rate_percent
    ));

    lines.push(String::new());
    lines.push("Feedback:".to_string());
    for item in &result.feedback {
        lines.push(format!("  - {item}"));
    }

    if !result.classified_errors.is_empty() {
        lines.push(String::new());
        lines.push(format!("Errors ({}):", result.classified_errors.len()));
        for error in &result.classified_errors {
            lines.push(format!("  {}", format_error_line(error, use_colors)));
        }
    }

    lines.push(String::new());
    lines.push("Corrected:".to_string());
    lines.push(format!("  {}", pair.corrected));

    lines.join("\n")
}

/// Format one classified error as "Category 'original' -> 'corrected'"
pub fn format_error_line(error: &ClassifiedError, use_colors: bool) -> String {
    let original = display_span(&error.original_text);
    let corrected = display_span(&error.corrected_text);
    let label = error.category.label();

    if use_colors {
        let colored_label = match error.category {
            ErrorCategory::Spelling => label.yellow().to_string(),
            ErrorCategory::Grammar => label.red().to_string(),
            ErrorCategory::Punctuation => label.cyan().to_string(),
        };
        format!("{colored_label:<12} '{original}' -> '{corrected}'")
    } else {
        format!("{label:<12} '{original}' -> '{corrected}'")
    }
}

/// Edit spans come straight out of the character alignment; keep them
/// readable on one terminal line.
fn display_span(span: &str) -> String {
    let max_width = terminal_width().unwrap_or(120) / 3;
    truncate(span, max_width.max(8))
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else {
        let truncated: String = chars[..max_width.saturating_sub(3)].iter().collect();
        format!("{truncated}...")
    }
}
