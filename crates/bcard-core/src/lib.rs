//! Core library for business card OCR text parsing.
//!
//! This crate provides:
//! - Line normalization for raw recognition output
//! - Rule-based contact field extraction (company, Hangul and Latin name,
//!   title, department, phone/mobile/fax, email, address)
//! - Contact record models carrying a serialized audit trail and a
//!   confidence baseline
//!
//! The engine is a pure, synchronous rule cascade: no I/O, no state
//! between calls, and identical input always produces an identical card.

pub mod card;
pub mod error;
pub mod models;

pub use card::rules::{FieldExtractor, PhoneNumbers, TieBreak};
pub use card::{normalize_lines, normalize_text, CardParser, ExtractionResult, RuleCardParser};
pub use error::{BcardError, Result};
pub use models::card::{ParsedCard, CONFIDENCE_BASELINE};
pub use models::config::{BcardConfig, ExtractionConfig};
