//! Competition class vocabulary: relay class names, masters relay age bands,
//! para-sport classifications and round codes closed to new registrations.
//!
//! The letter-to-band and prefix-to-stroke relations are kept as flat lookup
//! tables so the eligibility rules stay auditable in isolation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::swim::Stroke;

/// Round codes where new registrations are not accepted.
pub const CLOSED_ROUNDS: [&str; 6] = ["FIN", "SEM", "QUA", "SOP", "SOS", "SOQ"];

pub fn round_is_closed(round: &str) -> bool {
    CLOSED_ROUNDS.contains(&round)
}

/// Map a UNI_p relay-class abbreviation (JR, SR, MA..MO) to its full name.
pub fn relay_class_name(code: &str) -> Option<String> {
    let upper = code.to_ascii_uppercase();
    match upper.as_str() {
        "JR" => Some("Junior".to_string()),
        "SR" => Some("Senior".to_string()),
        _ => {
            let mut chars = upper.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some('M'), Some(letter @ 'A'..='O'), None) => Some(format!("Masters {letter}")),
                _ => None,
            }
        }
    }
}

/// Map a birth-year-or-class keyword (JUNIOR, SENIOR, MASTERS A..O) to the
/// same full-name vocabulary as [`relay_class_name`].
pub fn relay_class_keyword(token: &str) -> Option<String> {
    let upper = token.trim().to_ascii_uppercase();
    match upper.as_str() {
        "JUNIOR" => Some("Junior".to_string()),
        "SENIOR" => Some("Senior".to_string()),
        _ => {
            let rest = upper.strip_prefix("MASTERS")?.trim_start();
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(letter @ 'A'..='O'), None) => Some(format!("Masters {letter}")),
                _ => None,
            }
        }
    }
}

/// Inclusive total-age band of a masters relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MastersBand {
    pub min: i32,
    pub max: i32,
}

const MASTERS_RELAY_BANDS: [(char, MastersBand); 8] = [
    ('O', MastersBand { min: 80, max: 99 }),
    ('A', MastersBand { min: 100, max: 119 }),
    ('B', MastersBand { min: 120, max: 159 }),
    ('C', MastersBand { min: 160, max: 199 }),
    ('D', MastersBand { min: 200, max: 239 }),
    ('E', MastersBand { min: 240, max: 279 }),
    ('F', MastersBand { min: 280, max: 319 }),
    ('G', MastersBand { min: 320, max: 359 }),
];

/// Total-age band for a masters relay letter; `None` for letters outside
/// O, A..G.
pub fn masters_band(letter: char) -> Option<MastersBand> {
    let upper = letter.to_ascii_uppercase();
    MASTERS_RELAY_BANDS
        .iter()
        .find(|(code, _)| *code == upper)
        .map(|(_, band)| *band)
}

/// Para-classification prefix. S covers freestyle, backstroke and butterfly,
/// SB breaststroke, SM medley.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParaPrefix {
    S,
    Sb,
    Sm,
}

impl ParaPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::Sb => "SB",
            Self::Sm => "SM",
        }
    }

    /// The prefix a given stroke requires.
    pub fn expected_for(stroke: Stroke) -> Self {
        match stroke {
            Stroke::Free | Stroke::Back | Stroke::Fly => Self::S,
            Stroke::Breast => Self::Sb,
            Stroke::Medley => Self::Sm,
        }
    }

    /// Lenex HANDICAP attribute carrying the classification level.
    pub fn handicap_attr(self) -> &'static str {
        match self {
            Self::S => "free",
            Self::Sb => "breast",
            Self::Sm => "medley",
        }
    }
}

impl fmt::Display for ParaPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A valid para-sport classification (prefix plus level 1-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParaClass {
    pub prefix: ParaPrefix,
    pub level: u32,
}

impl fmt::Display for ParaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.level)
    }
}

/// Outcome of inspecting a class token for a para classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParaParse {
    /// Prefix plus a level in 1..=15.
    Valid(ParaClass),
    /// Para-shaped token with a level outside 1..=15.
    OutOfRange { prefix: ParaPrefix, level: u32 },
    /// Not a para classification at all.
    NotPara,
}

static PARA_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(SB|SM|S)(\d{1,3})$").expect("para token pattern"));

/// Inspect a class token for the `(S|SB|SM)<level>` shape.
pub fn parse_para(token: &str) -> ParaParse {
    let Some(caps) = PARA_TOKEN.captures(token.trim()) else {
        return ParaParse::NotPara;
    };
    let prefix = match caps[1].to_ascii_uppercase().as_str() {
        "SB" => ParaPrefix::Sb,
        "SM" => ParaPrefix::Sm,
        _ => ParaPrefix::S,
    };
    let Ok(level) = caps[2].parse::<u32>() else {
        return ParaParse::NotPara;
    };
    if (1..=15).contains(&level) {
        ParaParse::Valid(ParaClass { prefix, level })
    } else {
        ParaParse::OutOfRange { prefix, level }
    }
}
