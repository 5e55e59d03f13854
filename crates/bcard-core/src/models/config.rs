//! Configuration structures for the card parsing pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BcardError, Result};
use crate::models::card::CONFIDENCE_BASELINE;

/// Main configuration for the bcard pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BcardConfig {
    /// Card extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for BcardConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Card extraction configuration.
///
/// The rule tables themselves (keywords, surnames, patterns) are
/// compiled-in constants and not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Confidence value attached to every extraction pass.
    pub confidence_baseline: f32,

    /// Collect audit warnings for missing name/company/contact fields.
    pub collect_warnings: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            confidence_baseline: CONFIDENCE_BASELINE,
            collect_warnings: true,
        }
    }
}

impl BcardConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| BcardError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BcardConfig::default();
        assert_eq!(config.extraction.confidence_baseline, CONFIDENCE_BASELINE);
        assert!(config.extraction.collect_warnings);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: BcardConfig =
            serde_json::from_str(r#"{"extraction": {"collect_warnings": false}}"#).unwrap();
        assert!(!config.extraction.collect_warnings);
        assert_eq!(config.extraction.confidence_baseline, CONFIDENCE_BASELINE);
    }

    #[test]
    fn test_round_trip() {
        let config = BcardConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: BcardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back.extraction.confidence_baseline,
            config.extraction.confidence_baseline
        );
    }
}
