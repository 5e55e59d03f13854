//! Rule-based card parser combining the per-field extractors.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::models::card::{ParsedCard, CONFIDENCE_BASELINE};
use crate::models::config::ExtractionConfig;

use super::normalize::{normalize_lines, normalize_text};
use super::rules::{
    extract_address, extract_company, extract_department, extract_email, extract_latin_name,
    extract_name, extract_phones, extract_position,
};

/// Result of a card extraction pass.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted card data.
    pub card: ParsedCard,
    /// Audit warnings (missing name, company, or contact channel).
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for card parsing.
pub trait CardParser {
    /// Parse a card from a newline-delimited string.
    fn parse_text(&self, text: &str) -> ExtractionResult;

    /// Parse a card from an already-split sequence of lines.
    fn parse_lines(&self, lines: &[String]) -> ExtractionResult;
}

/// Rule-based card parser.
///
/// A deterministic cascade: identical normalized lines always produce an
/// identical card. Extraction never fails; degraded input just leaves
/// fields unset.
pub struct RuleCardParser {
    /// Confidence attached to every pass.
    confidence_baseline: f32,
    /// Whether to collect audit warnings for missing key fields.
    collect_warnings: bool,
}

impl RuleCardParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            confidence_baseline: CONFIDENCE_BASELINE,
            collect_warnings: true,
        }
    }

    /// Create a parser from an extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            confidence_baseline: config.confidence_baseline,
            collect_warnings: config.collect_warnings,
        }
    }

    /// Set the confidence value attached to every pass.
    pub fn with_confidence_baseline(mut self, baseline: f32) -> Self {
        self.confidence_baseline = baseline;
        self
    }

    /// Set whether audit warnings are collected.
    pub fn with_warnings(mut self, collect: bool) -> Self {
        self.collect_warnings = collect;
        self
    }

    fn extract(&self, lines: Vec<String>) -> ExtractionResult {
        let start = Instant::now();

        info!("parsing card from {} recognized lines", lines.len());

        // The audit trail records exactly the lines this pass ran on.
        let raw_text = serde_json::Value::from(lines.clone()).to_string();
        let mut card = ParsedCard::new(raw_text, self.confidence_baseline);

        card.email = extract_email(&lines);

        let phones = extract_phones(&lines);
        card.phone = phones.phone;
        card.mobile = phones.mobile;
        card.fax = phones.fax;

        card.name_en = extract_latin_name(&lines);
        card.company_name = extract_company(&lines);
        card.name = extract_name(&lines);
        card.position = extract_position(&lines);
        card.department = extract_department(&lines, card.position.as_deref());
        card.address = extract_address(&lines);
        // postal_code has no rule of its own; callers fill it in from
        // another source if they have one.

        let warnings = if self.collect_warnings {
            card.validate()
        } else {
            Vec::new()
        };
        for warning in &warnings {
            warn!("{}", warning);
        }

        debug!(
            "parsed card: name={:?} company={:?} email={:?}",
            card.name, card.company_name, card.email
        );

        ExtractionResult {
            card,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for RuleCardParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardParser for RuleCardParser {
    fn parse_text(&self, text: &str) -> ExtractionResult {
        self.extract(normalize_text(text))
    }

    fn parse_lines(&self, lines: &[String]) -> ExtractionResult {
        self.extract(normalize_lines(lines))
    }
}
