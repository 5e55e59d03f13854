//! Common regex patterns for card field extraction.

use lazy_static::lazy_static;
use regex::Regex;

use super::keywords::position_alternation;

lazy_static! {
    // Email, ASCII form
    pub static ref EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
    ).unwrap();

    // Recognition output occasionally mixes Hangul into an address;
    // tried after the ASCII form
    pub static ref EMAIL_LOOSE: Regex = Regex::new(
        r"\b[가-힣A-Za-z0-9._%+-]+@[가-힣A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
    ).unwrap();

    // Domestic phone groups: 02-123-4567, 010-1234-5678, 031 123 4567
    pub static ref PHONE: Regex = Regex::new(
        r"\d{2,3}[-\s]?\d{3,4}[-\s]?\d{4}"
    ).unwrap();

    // International form: +82-10-1234-5678
    pub static ref PHONE_INTL: Regex = Regex::new(
        r"\+82[-\s]?\d{1,2}[-\s]?\d{3,4}[-\s]?\d{4}"
    ).unwrap();

    // Two consecutive capitalized Latin words: "Gildong Hong"
    pub static ref LATIN_NAME: Regex = Regex::new(
        r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b"
    ).unwrap();

    // A line that is nothing but a 2-4 syllable Hangul run
    pub static ref HANGUL_NAME_LINE: Regex = Regex::new(
        r"^[가-힣]{2,4}$"
    ).unwrap();

    // Title followed by a name: "대표이사 성인근", also run together
    // without a space ("대표성인근")
    pub static ref TITLE_THEN_NAME: Regex = Regex::new(
        &format!(r"(?:{})\s*([가-힣]{{2,4}})", position_alternation())
    ).unwrap();

    // Name followed by a title: "홍길동 과장"
    pub static ref NAME_THEN_TITLE: Regex = Regex::new(
        &format!(r"([가-힣]{{2,4}})\s*(?:{})", position_alternation())
    ).unwrap();
}
