//! Line normalization for raw recognition output.
//!
//! Recognition backends hand over either one newline-delimited string or
//! an already-split sequence of lines. Both forms reduce to the same thing
//! here: trimmed, non-empty lines in the original reading order. This
//! never fails; empty input yields an empty sequence.

/// Normalize a newline-delimited string of recognized text.
pub fn normalize_text(raw: &str) -> Vec<String> {
    let split: Vec<&str> = raw.lines().collect();
    normalize_lines(&split)
}

/// Normalize an already-split sequence of recognized lines.
pub fn normalize_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
