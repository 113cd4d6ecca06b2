//! Row-level validation issues.
//!
//! Issues are a closed enumeration with free-form detail where needed; their
//! `Display` output is the human-readable phrasing shown in reports, so the
//! wording here is load-bearing.

use std::fmt;

use crate::classes::ParaPrefix;
use crate::row::RegistrationRow;

/// One reason a registration row cannot be exported.
///
/// Parse-time variants are raised by the row parser, catalog variants by the
/// cross-validator. A row's effective issue set is the deduplicated union of
/// both, computed by [`effective_issues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    // Parse-time
    InvalidEventNumber(String),
    InvalidDistanceField(String),
    UnknownStroke(String),
    MissingLastName,
    MissingFirstName,
    InvalidGenderMarker(String),
    ParaLevelOutOfRange(String),
    InvalidMastersSuffix(char),
    ParaPrefixMismatch { expected: ParaPrefix },
    // Catalog cross-validation
    InvalidEvent,
    InvalidLength,
    InvalidDistance,
    InvalidStyle,
    InvalidGender,
    ClosedRound(String),
    MissingJuniorAgeGroup,
    InvalidAgeGroup { age: i32, event: u32 },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEventNumber(raw) => write!(f, "Invalid event number '{raw}'"),
            Self::InvalidDistanceField(raw) => write!(f, "Invalid distance field '{raw}'"),
            Self::UnknownStroke(code) => write!(f, "Unknown stroke code '{code}'"),
            Self::MissingLastName => write!(f, "Missing last name"),
            Self::MissingFirstName => write!(f, "Missing first name"),
            Self::InvalidGenderMarker(raw) => write!(f, "Invalid gender marker '{raw}'"),
            Self::ParaLevelOutOfRange(token) => {
                write!(f, "Para classification '{token}' is out of range")
            }
            Self::InvalidMastersSuffix(letter) => {
                write!(f, "Invalid masters relay class suffix '{letter}'")
            }
            Self::ParaPrefixMismatch { expected } => {
                write!(f, "Para classification prefix does not match stroke (expected {expected})")
            }
            Self::InvalidEvent => write!(f, "Invalid event"),
            Self::InvalidLength => write!(f, "Invalid length"),
            Self::InvalidDistance => write!(f, "Invalid distance"),
            Self::InvalidStyle => write!(f, "Invalid style"),
            Self::InvalidGender => write!(f, "Invalid gender"),
            Self::ClosedRound(round) => write!(f, "Registration for {round}"),
            Self::MissingJuniorAgeGroup => {
                write!(f, "Missing JUNIOR age group in Lenex event for junior relay")
            }
            Self::InvalidAgeGroup { age, event } => {
                write!(f, "Invalid age group (age {age} not allowed for event {event})")
            }
        }
    }
}

/// Deduplicated, order-preserving union of a row's parse-time issues and the
/// catalog issues computed for it. The row's own list is never mutated.
pub fn effective_issues(row: &RegistrationRow, catalog_issues: &[Issue]) -> Vec<Issue> {
    let mut merged: Vec<Issue> = Vec::with_capacity(row.issues.len() + catalog_issues.len());
    for issue in row.issues.iter().chain(catalog_issues) {
        if !merged.contains(issue) {
            merged.push(issue.clone());
        }
    }
    merged
}
