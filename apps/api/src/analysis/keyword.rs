//! Keyword metrics — normalization, occurrence counting, and density.
//!
//! The focus keyword is matched as a literal: it is escaped before being
//! compiled, so punctuation-heavy keywords ("c++", "node.js") count their
//! literal occurrences instead of being misread as patterns.

use regex::RegexBuilder;

/// Normalizes the user-supplied focus keyword once, before any check uses
/// it. Returns `None` when no keyword is effectively set.
pub fn normalize_keyword(raw: &str) -> Option<String> {
    let keyword = raw.trim().to_lowercase();
    if keyword.is_empty() {
        None
    } else {
        Some(keyword)
    }
}

/// Non-overlapping, case-insensitive occurrences of `keyword` in `text`.
pub fn keyword_count(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    let re = RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .expect("escaped keyword is a valid literal pattern");
    re.find_iter(text).count()
}

/// Keyword density as a percentage rounded to two decimal places.
/// `None` when there are no words to measure against.
pub fn keyword_density(count: usize, word_count: usize) -> Option<f64> {
    if word_count == 0 {
        return None;
    }
    let density = count as f64 / word_count as f64 * 100.0;
    Some((density * 100.0).round() / 100.0)
}

/// Word count of plain text: trimmed, split on whitespace runs.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-insensitive containment, used by the title/meta/heading checks.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.to_lowercase().contains(keyword)
}
