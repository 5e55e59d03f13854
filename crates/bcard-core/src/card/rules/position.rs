//! Job title and department extraction.

use tracing::debug;

use super::keywords::{contains_any, DEPARTMENT_KEYWORDS, POSITION_KEYWORDS};
use super::FieldExtractor;

/// Job-title extractor: the first line carrying a title keyword, kept as
/// the whole line (cards print "홍길동 과장" as one unit and review
/// screens expect the full line, not the bare keyword).
pub struct PositionExtractor;

impl PositionExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PositionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PositionExtractor {
    type Output = String;

    fn extract(&self, lines: &[String]) -> Option<String> {
        lines
            .iter()
            .find(|line| contains_any(line, POSITION_KEYWORDS))
            .map(|line| {
                debug!("position matched: {}", line);
                line.clone()
            })
    }
}

/// Extract the job title from normalized lines.
pub fn extract_position(lines: &[String]) -> Option<String> {
    PositionExtractor::new().extract(lines)
}

/// Department extractor: the first line carrying an organizational-unit
/// suffix, skipping the line already chosen as the position so a combined
/// title line is not reported twice.
pub struct DepartmentExtractor {
    position: Option<String>,
}

impl DepartmentExtractor {
    pub fn new() -> Self {
        Self { position: None }
    }

    /// Set the line already chosen as the position, to be excluded here.
    pub fn with_position(mut self, position: Option<String>) -> Self {
        self.position = position;
        self
    }
}

impl Default for DepartmentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DepartmentExtractor {
    type Output = String;

    fn extract(&self, lines: &[String]) -> Option<String> {
        lines
            .iter()
            .find(|line| {
                contains_any(line, DEPARTMENT_KEYWORDS)
                    && self.position.as_deref() != Some(line.as_str())
            })
            .map(|line| {
                debug!("department matched: {}", line);
                line.clone()
            })
    }
}

/// Extract the department from normalized lines, excluding the line
/// already chosen as the position.
pub fn extract_department(lines: &[String], position: Option<&str>) -> Option<String> {
    DepartmentExtractor::new()
        .with_position(position.map(str::to_string))
        .extract(lines)
}
