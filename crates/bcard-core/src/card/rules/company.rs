//! Company name extraction.

use tracing::debug;

use super::keywords::{contains_any, LEGAL_ENTITY_TOKENS};
use super::patterns::{PHONE, PHONE_INTL};
use super::FieldExtractor;

/// Company-name extractor.
///
/// Primary rule: the first line carrying a legal-entity token. Fallback,
/// only when the primary rule found nothing: the first line longer than
/// four characters that carries neither an email nor a phone-like number.
pub struct CompanyExtractor;

impl CompanyExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CompanyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CompanyExtractor {
    type Output = String;

    fn extract(&self, lines: &[String]) -> Option<String> {
        for line in lines {
            if contains_any(line, LEGAL_ENTITY_TOKENS) {
                debug!("company matched by legal-entity token: {}", line);
                return Some(line.clone());
            }
        }

        lines
            .iter()
            .find(|line| {
                !line.contains('@')
                    && !PHONE.is_match(line)
                    && !PHONE_INTL.is_match(line)
                    && line.chars().count() > 4
            })
            .map(|line| {
                debug!("company fallback candidate: {}", line);
                line.clone()
            })
    }
}

/// Extract the company name from normalized lines.
pub fn extract_company(lines: &[String]) -> Option<String> {
    CompanyExtractor::new().extract(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_legal_entity_token_wins() {
        let found = extract_company(&lines(&["홍길동 과장", "(주)테크놀로지"]));
        assert_eq!(found, Some("(주)테크놀로지".to_string()));
    }

    #[test]
    fn test_latin_legal_entity_token() {
        let found = extract_company(&lines(&["Acme Systems Co., Ltd"]));
        assert_eq!(found, Some("Acme Systems Co., Ltd".to_string()));
    }

    #[test]
    fn test_fallback_skips_contact_lines() {
        let found = extract_company(&lines(&[
            "hong@tech.co.kr",
            "02-123-4567",
            "테크스타트업",
        ]));
        assert_eq!(found, Some("테크스타트업".to_string()));
    }

    #[test]
    fn test_fallback_requires_length_over_four() {
        assert_eq!(extract_company(&lines(&["테크"])), None);
        assert_eq!(extract_company(&lines(&["넷마을기술연구소"])), Some("넷마을기술연구소".to_string()));
    }

    #[test]
    fn test_no_candidate() {
        assert_eq!(extract_company(&lines(&["02-123-4567", "a@b.kr"])), None);
    }
}
