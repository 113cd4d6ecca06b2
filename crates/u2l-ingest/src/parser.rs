//! UNI_p line parser.
//!
//! The format is line-oriented and comma-separated: the first non-blank line
//! is the club name, every later non-blank line is one registration with 15
//! logical fields. Missing trailing fields are padded with empty strings and
//! excess fields dropped, so stray commas never abort a row. The parser
//! never rejects a line; it records issues and lets validation decide.

use tracing::{debug, info};

use u2l_model::classes::{ParaParse, ParaPrefix, masters_band, parse_para, relay_class_keyword,
    relay_class_name};
use u2l_model::row::{AgeClass, ClassValue, RegistrationFile, RegistrationRow};
use u2l_model::swim::{Course, Gender, Stroke};
use u2l_model::Issue;

use crate::error::{IngestError, Result};

const FIELD_COUNT: usize = 15;

// Logical field positions within a data line.
const F_EVENT: usize = 0;
const F_DISTANCE: usize = 1;
const F_STROKE: usize = 2;
const F_LAST_NAME: usize = 3;
const F_FIRST_NAME: usize = 4;
const F_GENDER_CLASS: usize = 5;
const F_BIRTH_OR_CLASS: usize = 6;
const F_QUAL_TIME: usize = 7;
const F_QUAL_DATE: usize = 8;
const F_QUAL_PLACE: usize = 9;
const F_COURSE: usize = 10;

/// Parse a whole registration file. The only hard failure is a structurally
/// empty file; every malformed row comes back flagged instead.
pub fn parse_registration(text: &str) -> Result<RegistrationFile> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let Some(club_name) = lines.next() else {
        return Err(IngestError::EmptyFile);
    };
    let rows: Vec<RegistrationRow> = lines
        .enumerate()
        .map(|(index, line)| parse_row(line, index + 1))
        .collect();
    let flagged = rows.iter().filter(|row| !row.issues.is_empty()).count();
    info!(club = club_name, rows = rows.len(), flagged, "parsed registration file");
    Ok(RegistrationFile {
        club_name: club_name.to_string(),
        rows,
    })
}

/// Parse one data line. `line_no` is the position among non-blank data
/// lines, 1-based.
pub fn parse_row(line: &str, line_no: usize) -> RegistrationRow {
    let mut fields: Vec<&str> = line.split(',').map(str::trim).collect();
    fields.resize(FIELD_COUNT, "");

    let mut row = RegistrationRow::blank(line_no);

    parse_event_number(&mut row, fields[F_EVENT]);
    parse_distance(&mut row, fields[F_DISTANCE]);
    parse_stroke(&mut row, fields[F_STROKE]);
    parse_names(&mut row, fields[F_LAST_NAME], fields[F_FIRST_NAME]);
    parse_gender_class(&mut row, fields[F_GENDER_CLASS]);
    parse_birth_or_class(&mut row, fields[F_BIRTH_OR_CLASS]);

    row.qual_time = fields[F_QUAL_TIME].to_string();
    row.qual_date = fields[F_QUAL_DATE].to_string();
    row.qual_place = fields[F_QUAL_PLACE].to_string();
    row.course = Course::from_uni_code(fields[F_COURSE]);

    check_para_prefix(&mut row);
    check_masters_suffix(&mut row);

    if !row.issues.is_empty() {
        debug!(line = line_no, issues = row.issues.len(), "row flagged during parse");
    }
    row
}

fn parse_event_number(row: &mut RegistrationRow, field: &str) {
    match field.parse::<u32>() {
        Ok(number) if number > 0 => row.event_number = Some(number),
        _ => row.issues.push(Issue::InvalidEventNumber(field.to_string())),
    }
}

/// Either a plain distance or `R*D` for a relay of R legs over D meters.
fn parse_distance(row: &mut RegistrationRow, field: &str) {
    if let Some((legs, meters)) = field.split_once('*') {
        if let (Ok(legs), Ok(meters)) = (legs.trim().parse::<u32>(), meters.trim().parse::<u32>())
            && legs > 0
            && meters > 0
        {
            row.relay_count = legs;
            row.distance = Some(meters);
            return;
        }
    } else if let Ok(meters) = field.parse::<u32>()
        && meters > 0
    {
        row.distance = Some(meters);
        return;
    }
    row.issues.push(Issue::InvalidDistanceField(field.to_string()));
}

fn parse_stroke(row: &mut RegistrationRow, field: &str) {
    row.stroke_code = field.to_ascii_uppercase();
    row.stroke = Stroke::from_uni_code(&row.stroke_code);
    if row.stroke.is_none() {
        row.issues.push(Issue::UnknownStroke(row.stroke_code.clone()));
    }
}

fn parse_names(row: &mut RegistrationRow, last: &str, first: &str) {
    row.last_name = last.to_string();
    row.first_name = first.to_string();
    if row.last_name.is_empty() {
        row.issues.push(Issue::MissingLastName);
    }
    // First name is only mandatory for individual registrations.
    if row.first_name.is_empty() && !row.is_relay() {
        row.issues.push(Issue::MissingFirstName);
    }
}

/// Leading character is the gender marker, the rest an age-group code:
/// a two-digit birth-year marker, a known class abbreviation, or a raw
/// token kept for downstream reporting.
fn parse_gender_class(row: &mut RegistrationRow, field: &str) {
    let mut chars = field.chars();
    match chars.next().and_then(Gender::from_uni_char) {
        Some(gender) => row.gender = Some(gender),
        None => row.issues.push(Issue::InvalidGenderMarker(field.to_string())),
    }
    let rest: &str = chars.as_str();
    if rest.is_empty() {
        return;
    }
    if rest.len() == 2
        && rest.chars().all(|ch| ch.is_ascii_digit())
        && let Ok(digits) = rest.parse::<u8>()
    {
        row.age_class = AgeClass::BirthDigits(digits);
    } else if let Some(name) = relay_class_name(rest) {
        row.age_class = AgeClass::Named(name);
    } else {
        row.age_class = AgeClass::Raw(rest.to_string());
    }
}

fn parse_birth_or_class(row: &mut RegistrationRow, field: &str) {
    if field.len() == 4
        && field.chars().all(|ch| ch.is_ascii_digit())
        && let Ok(year) = field.parse::<i32>()
    {
        row.class = ClassValue::Year(year);
        return;
    }
    if field.is_empty() {
        // Relays fall back to the age-group code already derived. The
        // two-digit birth-year marker stays out of the fallback: it encodes
        // a year, not a class, and remains available on the row directly.
        if row.is_relay()
            && let AgeClass::Named(name) | AgeClass::Raw(name) = &row.age_class
        {
            row.class = ClassValue::Named(name.clone());
        }
        return;
    }
    if let Some(name) = relay_class_keyword(field) {
        row.class = ClassValue::Named(name);
        return;
    }
    match parse_para(field) {
        ParaParse::Valid(class) => row.class = ClassValue::Para(class),
        ParaParse::OutOfRange { .. } => {
            row.issues.push(Issue::ParaLevelOutOfRange(field.to_string()));
            row.class = ClassValue::Opaque(field.to_string());
        }
        ParaParse::NotPara => row.class = ClassValue::Opaque(field.to_string()),
    }
}

/// For individual rows the para prefix must match the stroke: FREE, BACK
/// and FLY expect S, BREAST expects SB, MEDLEY expects SM.
fn check_para_prefix(row: &mut RegistrationRow) {
    if row.is_relay() {
        return;
    }
    if let ClassValue::Para(class) = &row.class
        && let Some(stroke) = row.stroke
    {
        let expected = ParaPrefix::expected_for(stroke);
        if class.prefix != expected {
            row.issues.push(Issue::ParaPrefixMismatch { expected });
        }
    }
}

/// For relay rows a masters class suffix must name a defined band letter
/// (O or A..G).
fn check_masters_suffix(row: &mut RegistrationRow) {
    if !row.is_relay() {
        return;
    }
    if let AgeClass::Named(name) = &row.age_class
        && let Some(rest) = name.strip_prefix("Masters ")
        && let Some(letter) = rest.chars().next()
        && masters_band(letter).is_none()
    {
        row.issues.push(Issue::InvalidMastersSuffix(letter));
    }
}
