//! Presentation-boundary helpers
//!
//! A user-facing front end (window, CLI, web form) hands over raw strings and
//! shows back one string. These helpers hold the rules for that exchange so
//! every front end behaves the same: unparsable counts fall back to the
//! default, empty input shows a prompt, and errors render as `Error: ...`.

use crate::errors::Result;
use crate::summarizer::Summarizer;
use crate::types::DEFAULT_SENTENCE_COUNT;

/// Message shown instead of a summary when the input is empty
pub const EMPTY_INPUT_PROMPT: &str = "Please enter some text to summarize.";

/// Parse a user-supplied sentence count
///
/// Non-numeric input falls back to [`DEFAULT_SENTENCE_COUNT`]. Numeric input
/// is returned as-is, including zero and negative values, so the core can
/// reject them.
pub fn parse_sentence_count(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .unwrap_or(DEFAULT_SENTENCE_COUNT as i64)
}

/// Render a summarization result for display
pub fn render_result(result: &Result<String>) -> String {
    match result {
        Ok(summary) => summary.clone(),
        Err(err) => format!("Error: {}", err),
    }
}

/// Handle one request from a front end and produce the text to display
pub fn handle_request(summarizer: &Summarizer, raw_text: &str, raw_count: &str) -> String {
    let text = raw_text.trim();
    if text.is_empty() {
        return EMPTY_INPUT_PROMPT.to_string();
    }

    // Negative counts map to 0 so they surface as a config error.
    let count = usize::try_from(parse_sentence_count(raw_count)).unwrap_or(0);
    render_result(&summarizer.summarize(text, count))
}
