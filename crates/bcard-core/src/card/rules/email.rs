//! Email extraction.

use tracing::debug;

use super::patterns::{EMAIL, EMAIL_LOOSE};
use super::FieldExtractor;

/// Email field extractor.
///
/// All lines are joined with a single space and the pattern is searched
/// once over the whole concatenation, so an address does not have to sit
/// on a line of its own. The ASCII pattern is tried before the
/// Hangul-tolerant one.
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn extract(&self, lines: &[String]) -> Option<String> {
        let joined = lines.join(" ");

        let found = EMAIL
            .find(&joined)
            .or_else(|| EMAIL_LOOSE.find(&joined))
            .map(|m| m.as_str().to_string());

        if let Some(ref email) = found {
            debug!("email matched: {}", email);
        }

        found
    }
}

/// Extract the first email address from normalized lines.
pub fn extract_email(lines: &[String]) -> Option<String> {
    EmailExtractor::new().extract(lines)
}
