//! String helpers and unit conversions.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Characters that are unsafe in file names on common platforms.
const UNSAFE_FILENAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Reverse `text` by Unicode scalar value.
#[must_use]
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

/// Number of whitespace-separated words. Empty or blank input has none.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Degrees Celsius to degrees Fahrenheit.
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Degrees Fahrenheit to degrees Celsius.
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Loose shape check: one `@`, something on both sides, and a `.` in the domain.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !domain.contains('@') && domain.contains('.')
}

/// Replace path separators and other unsafe characters with `_` and trim.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.replace(UNSAFE_FILENAME_CHARS, "_").trim().to_string()
}

/// Cut `text` to at most `max_len` characters, ending with `suffix` when cut.
///
/// If `suffix` alone is longer than `max_len`, the suffix itself is cut.
#[must_use]
pub fn truncate_string(text: &str, max_len: usize, suffix: &str) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let suffix_len = suffix.chars().count();
    if suffix_len >= max_len {
        return suffix.chars().take(max_len).collect();
    }
    let mut out: String = text.chars().take(max_len - suffix_len).collect();
    out.push_str(suffix);
    out
}

fn number_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"-?\d+\.?\d*").ok())
        .as_ref()
}

/// Every number in `text`, in order of appearance. `12.` parses as `12`.
#[must_use]
pub fn extract_numbers(text: &str) -> Vec<f64> {
    let Some(pattern) = number_pattern() else {
        return Vec::new();
    };
    pattern
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// Pretty-print `value` as JSON with 2-space indentation, keeping non-ASCII text as-is.
///
/// # Errors
/// Returns the serializer error if `value` cannot be represented as JSON.
pub fn format_json_output<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
