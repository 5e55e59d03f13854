//! Rule-based field extractors for recognized card text.

pub mod address;
pub mod company;
pub mod email;
pub mod keywords;
pub mod name;
pub mod patterns;
pub mod phone;
pub mod position;

pub use address::{extract_address, AddressExtractor};
pub use company::{extract_company, CompanyExtractor};
pub use email::{extract_email, EmailExtractor};
pub use name::{extract_latin_name, extract_name, LatinNameExtractor, NameExtractor};
pub use patterns::*;
pub use phone::{extract_phones, PhoneFamilyExtractor, PhoneNumbers};
pub use position::{extract_department, extract_position, DepartmentExtractor, PositionExtractor};

/// Tie-break policy applied when several lines qualify for the same field.
///
/// Text fields (company, name, position, department, address) keep the
/// first qualifying line and stop scanning; the phone family processes
/// every line and keeps the last. The asymmetry is probably an accident
/// rather than a decision, but downstream review workflows depend on the
/// exact values, so both policies are preserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Earliest qualifying line in reading order wins; scanning stops.
    First,
    /// Every qualifying line is processed; the latest overwrites.
    Last,
}

/// Trait for field extractors over normalized card lines.
///
/// Extractors are pure: they read the lines and the static pattern
/// library, and produce zero or one value.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Tie-break policy this extractor applies between qualifying lines.
    fn tie_break(&self) -> TieBreak {
        TieBreak::First
    }

    /// Extract the field from normalized lines.
    fn extract(&self, lines: &[String]) -> Option<Self::Output>;
}
