//! Personal name extraction, Hangul and Latin.

use tracing::debug;

use super::keywords::{contains_any, starts_with_surname, POSITION_KEYWORDS};
use super::patterns::{HANGUL_NAME_LINE, LATIN_NAME, NAME_THEN_TITLE, TITLE_THEN_NAME};
use super::FieldExtractor;

/// Hangul name extractor.
///
/// Two ordered sub-rules; the first hit stops the whole extractor:
/// 1. a job-title line with an adjacent 2-4 syllable run whose first
///    syllable is a known family name ("홍길동 과장", "대표이사 성인근",
///    run together as "대표성인근")
/// 2. a standalone 2-4 syllable line starting with a known family name
pub struct NameExtractor;

impl NameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = String;

    fn extract(&self, lines: &[String]) -> Option<String> {
        for line in lines {
            if !contains_any(line, POSITION_KEYWORDS) {
                continue;
            }
            if let Some(name) = name_beside_title(line) {
                debug!("name beside title: '{}' -> '{}'", line, name);
                return Some(name);
            }
        }

        for line in lines {
            if HANGUL_NAME_LINE.is_match(line) && starts_with_surname(line) {
                debug!("standalone name: '{}'", line);
                return Some(line.clone());
            }
        }

        None
    }
}

/// Adjacent Hangul run next to a job-title keyword. Title-then-name is
/// tried before name-then-title so a compound title binds to the run on
/// its right rather than being captured itself.
fn name_beside_title(line: &str) -> Option<String> {
    for pattern in [&*TITLE_THEN_NAME, &*NAME_THEN_TITLE] {
        if let Some(caps) = pattern.captures(line) {
            let candidate = caps[1].to_string();
            if starts_with_surname(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Extract the Hangul personal name from normalized lines.
pub fn extract_name(lines: &[String]) -> Option<String> {
    NameExtractor::new().extract(lines)
}

/// Latin name extractor: the first substring of any line matching two
/// consecutive capitalized words.
pub struct LatinNameExtractor;

impl LatinNameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LatinNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LatinNameExtractor {
    type Output = String;

    fn extract(&self, lines: &[String]) -> Option<String> {
        lines
            .iter()
            .find_map(|line| LATIN_NAME.find(line).map(|m| m.as_str().to_string()))
    }
}

/// Extract the Latin personal name from normalized lines.
pub fn extract_latin_name(lines: &[String]) -> Option<String> {
    LatinNameExtractor::new().extract(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_name_beside_title() {
        assert_eq!(
            extract_name(&lines(&["(주)테크놀로지", "홍길동 과장"])),
            Some("홍길동".to_string())
        );
    }

    #[test]
    fn test_title_then_name() {
        assert_eq!(
            extract_name(&lines(&["대표이사 성인근"])),
            Some("성인근".to_string())
        );
    }

    #[test]
    fn test_title_run_together_with_name() {
        assert_eq!(
            extract_name(&lines(&["대표우태경"])),
            Some("우태경".to_string())
        );
    }

    #[test]
    fn test_standalone_name_needs_known_surname() {
        assert_eq!(
            extract_name(&lines(&["홍길동", "02-123-4567"])),
            Some("홍길동".to_string())
        );
        // 4-syllable line that does not start with a listed family name
        assert_eq!(extract_name(&lines(&["빠른배송"])), None);
    }

    #[test]
    fn test_title_rule_beats_standalone_rule() {
        assert_eq!(
            extract_name(&lines(&["김철수", "이영희 부장"])),
            Some("이영희".to_string())
        );
    }

    #[test]
    fn test_latin_name() {
        assert_eq!(
            extract_latin_name(&lines(&["(주)테크놀로지", "Gildong Hong", "홍길동"])),
            Some("Gildong Hong".to_string())
        );
        assert_eq!(extract_latin_name(&lines(&["홍길동"])), None);
    }
}
