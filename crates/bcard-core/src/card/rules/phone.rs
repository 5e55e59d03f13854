//! Phone-family extraction: landline, mobile, and fax numbers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::patterns::{PHONE, PHONE_INTL};
use super::{FieldExtractor, TieBreak};

/// Phone numbers found on a card, split by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumbers {
    /// Landline number.
    pub phone: Option<String>,

    /// Mobile number.
    pub mobile: Option<String>,

    /// Fax number.
    pub fax: Option<String>,
}

impl PhoneNumbers {
    /// True if no number was found in any category.
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.mobile.is_none() && self.fax.is_none()
    }
}

/// Phone-family extractor.
///
/// Every line is scanned, and a later match overwrites an earlier one in
/// the same category (no deduplication guard). The three categories never
/// collide with each other. NOTE: last-match-wins here while every text
/// field keeps its first match; the mismatch looks unintentional but is
/// kept because stored cards depend on it.
pub struct PhoneFamilyExtractor;

impl PhoneFamilyExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneFamilyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneFamilyExtractor {
    type Output = PhoneNumbers;

    fn tie_break(&self) -> TieBreak {
        TieBreak::Last
    }

    fn extract(&self, lines: &[String]) -> Option<PhoneNumbers> {
        let numbers = extract_phones(lines);
        (!numbers.is_empty()).then_some(numbers)
    }
}

/// Scan all lines in order and classify every phone-like match.
///
/// A line is classified as fax when it mentions "fax", as mobile when it
/// mentions "mobile" or the number starts with the domestic mobile prefix
/// (010, or +82-10 in international form), and as a landline otherwise.
pub fn extract_phones(lines: &[String]) -> PhoneNumbers {
    let mut numbers = PhoneNumbers::default();

    for line in lines {
        let Some(found) = PHONE_INTL.find(line).or_else(|| PHONE.find(line)) else {
            continue;
        };

        let number = normalize_separators(found.as_str());
        let lower = line.to_lowercase();

        if lower.contains("fax") {
            debug!("fax matched: {} ({})", number, line);
            numbers.fax = Some(number);
        } else if lower.contains("mobile")
            || number.starts_with("010")
            || number.starts_with("+82-10")
        {
            debug!("mobile matched: {} ({})", number, line);
            numbers.mobile = Some(number);
        } else {
            debug!("phone matched: {} ({})", number, line);
            numbers.phone = Some(number);
        }
    }

    numbers
}

/// Collapse mixed hyphen/space separators into single hyphens.
fn normalize_separators(raw: &str) -> String {
    raw.split(|c: char| c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
