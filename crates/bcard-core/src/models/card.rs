//! Contact record model produced by the card parser.

use serde::{Deserialize, Serialize};

/// Confidence attached to every extraction pass.
///
/// The engine does not vary this by how many fields resolved. Callers that
/// have a real score from their recognition backend are expected to
/// overwrite it; the engine only guarantees a stable baseline.
pub const CONFIDENCE_BASELINE: f32 = 80.0;

fn default_confidence() -> f32 {
    CONFIDENCE_BASELINE
}

/// A structured contact record extracted from recognized card text.
///
/// Every extracted field is independent and absent unless its rule
/// matched; a card with nothing extracted is still a well-formed value.
/// `ocr_raw_text` holds the exact normalized lines the pass ran on,
/// serialized as a JSON array, so review workflows can show the operator
/// what the extraction actually saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCard {
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Personal name in Hangul.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Personal name in Latin script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,

    /// Job title, kept as the full printed line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Department or organizational unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Landline number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Mobile number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    /// Fax number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,

    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Postal code. No extraction rule of its own; stays unset unless the
    /// caller supplies it from another source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// The normalized lines this card was extracted from, as a JSON array.
    #[serde(default)]
    pub ocr_raw_text: String,

    /// Extraction confidence.
    #[serde(default = "default_confidence")]
    pub ocr_confidence: f32,
}

impl ParsedCard {
    /// Create an empty card carrying its audit trail and confidence.
    pub fn new(ocr_raw_text: String, ocr_confidence: f32) -> Self {
        Self {
            company_name: None,
            name: None,
            name_en: None,
            position: None,
            department: None,
            email: None,
            phone: None,
            mobile: None,
            fax: None,
            address: None,
            postal_code: None,
            ocr_raw_text,
            ocr_confidence,
        }
    }

    /// Audit the card for missing key fields and return any issues found.
    ///
    /// Nothing here rejects the card; a sparse card is valid. Review
    /// workflows use these to decide what needs manual correction.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.name.is_none() {
            issues.push("missing name".to_string());
        }

        if self.company_name.is_none() {
            issues.push("missing company name".to_string());
        }

        if self.email.is_none() && self.phone.is_none() && self.mobile.is_none() {
            issues.push("no contact channel (email, phone, or mobile)".to_string());
        }

        issues
    }
}

impl Default for ParsedCard {
    fn default() -> Self {
        Self::new("[]".to_string(), CONFIDENCE_BASELINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_card_is_valid_but_flagged() {
        let card = ParsedCard::default();
        let issues = card.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().any(|i| i.contains("name")));
        assert!(issues.iter().any(|i| i.contains("company")));
        assert!(issues.iter().any(|i| i.contains("contact")));
    }

    #[test]
    fn test_contact_channel_satisfied_by_mobile() {
        let mut card = ParsedCard::default();
        card.mobile = Some("010-1234-5678".to_string());
        assert!(!card.validate().iter().any(|i| i.contains("contact")));
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let card = ParsedCard::default();
        let json = serde_json::to_string(&card).unwrap();
        assert!(!json.contains("company_name"));
        assert!(json.contains("ocr_raw_text"));
        assert!(json.contains("ocr_confidence"));
    }
}
