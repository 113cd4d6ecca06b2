//! Decoded UNI_p registration rows.

use std::fmt;

use crate::classes::{ParaClass, masters_band};
use crate::issue::Issue;
use crate::swim::{Course, Gender, Stroke};

/// Age-group code resolved from the tail of the gender+class field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AgeClass {
    #[default]
    None,
    /// Two-digit marker for the last two digits of a birth year.
    BirthDigits(u8),
    /// A known class abbreviation resolved to its full name.
    Named(String),
    /// Unrecognized token passed through raw; ambiguity is reported
    /// downstream if it turns out to be unusable.
    Raw(String),
}

impl fmt::Display for AgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::BirthDigits(digits) => write!(f, "Born YY={digits:02}"),
            Self::Named(name) | Self::Raw(name) => f.write_str(name),
        }
    }
}

/// Resolved birth-year-or-class field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassValue {
    #[default]
    Empty,
    /// Literal four-digit birth year.
    Year(i32),
    /// A relay-class keyword resolved to its full name, or the age-group
    /// code a relay row fell back to.
    Named(String),
    /// Valid para-sport classification.
    Para(ParaClass),
    /// Anything else, retained verbatim as an opaque class label.
    Opaque(String),
}

impl ClassValue {
    /// Class token as text, when the value carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) | Self::Opaque(name) => Some(name),
            _ => None,
        }
    }
}

/// One decoded registration line. Immutable once parsed; catalog validation
/// computes additional issues separately and never touches [`Self::issues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRow {
    /// 1-based position among non-blank data lines, for diagnostics.
    pub line: usize,
    pub event_number: Option<u32>,
    /// Number of relay legs; 1 means an individual registration.
    pub relay_count: u32,
    /// Distance in meters (per leg for relays).
    pub distance: Option<u32>,
    /// Raw two-letter stroke token, upper-cased.
    pub stroke_code: String,
    pub stroke: Option<Stroke>,
    pub last_name: String,
    /// May be empty for relays.
    pub first_name: String,
    pub gender: Option<Gender>,
    pub age_class: AgeClass,
    pub class: ClassValue,
    pub qual_time: String,
    pub qual_date: String,
    pub qual_place: String,
    pub course: Option<Course>,
    /// Parse-time issues, append-only.
    pub issues: Vec<Issue>,
}

impl RegistrationRow {
    /// An empty row for the given data line, to be filled by the parser.
    pub fn blank(line: usize) -> Self {
        Self {
            line,
            event_number: None,
            relay_count: 1,
            distance: None,
            stroke_code: String::new(),
            stroke: None,
            last_name: String::new(),
            first_name: String::new(),
            gender: None,
            age_class: AgeClass::None,
            class: ClassValue::Empty,
            qual_time: String::new(),
            qual_date: String::new(),
            qual_place: String::new(),
            course: None,
            issues: Vec::new(),
        }
    }

    pub fn is_relay(&self) -> bool {
        self.relay_count > 1
    }

    /// True for relay rows whose class token is exactly "junior".
    pub fn is_junior_relay(&self) -> bool {
        self.is_relay()
            && self
                .class
                .name()
                .is_some_and(|name| name.trim().eq_ignore_ascii_case("junior"))
    }

    /// Masters relay letter, from the class token or the age-group code.
    /// Only letters with a defined total-age band count.
    pub fn masters_letter(&self) -> Option<char> {
        let from_class = self.class.name().and_then(masters_class_letter);
        let from_age_class = match &self.age_class {
            AgeClass::Named(name) => masters_class_letter(name),
            _ => None,
        };
        from_class
            .or(from_age_class)
            .filter(|letter| masters_band(*letter).is_some())
    }

    /// Birth year from the literal class value, or derived from the
    /// two-digit marker: a value greater than the current year's last two
    /// digits is assumed to fall in the prior century.
    pub fn birth_year(&self, current_year: i32) -> Option<i32> {
        if let ClassValue::Year(year) = self.class {
            return Some(year);
        }
        if let AgeClass::BirthDigits(digits) = self.age_class {
            let digits = i32::from(digits);
            let century = if digits > current_year % 100 {
                current_year / 100 - 1
            } else {
                current_year / 100
            };
            return Some(century * 100 + digits);
        }
        None
    }
}

fn masters_class_letter(name: &str) -> Option<char> {
    let rest = name.trim().strip_prefix("Masters ")?;
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}

/// Output of parsing one registration file.
#[derive(Debug, Clone)]
pub struct RegistrationFile {
    pub club_name: String,
    pub rows: Vec<RegistrationRow>,
}
