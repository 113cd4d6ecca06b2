//! Stroke, gender and pool-course vocabulary shared by the UNI_p and Lenex
//! sides of the pipeline.

use serde::Serialize;

/// Swim stroke, named the way Lenex spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stroke {
    Free,
    Breast,
    Back,
    Fly,
    Medley,
}

impl Stroke {
    /// Resolve a two-letter UNI_p stroke code. `LM` is the long-form medley
    /// alias used by some club exports.
    pub fn from_uni_code(code: &str) -> Option<Self> {
        match code {
            "FR" => Some(Self::Free),
            "BR" => Some(Self::Breast),
            "RY" => Some(Self::Back),
            "BU" => Some(Self::Fly),
            "IM" | "LM" => Some(Self::Medley),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Breast => "BREAST",
            Self::Back => "BACK",
            Self::Fly => "FLY",
            Self::Medley => "MEDLEY",
        }
    }
}

/// Competitor gender (X marks mixed relays).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
    Mixed,
}

impl Gender {
    /// Resolve the leading character of the UNI_p gender+class field.
    /// `K` is the legacy female marker.
    pub fn from_uni_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'M' => Some(Self::Male),
            'K' => Some(Self::Female),
            'X' => Some(Self::Mixed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Mixed => "X",
        }
    }
}

/// Pool course of a qualification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Course {
    Scm,
    Lcm,
}

impl Course {
    /// Resolve the UNI_p course marker; any other value means "no course",
    /// which the rest of the pipeline tolerates.
    pub fn from_uni_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "K" => Some(Self::Scm),
            "L" => Some(Self::Lcm),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scm => "SCM",
            Self::Lcm => "LCM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_codes_resolve() {
        assert_eq!(Stroke::from_uni_code("FR"), Some(Stroke::Free));
        assert_eq!(Stroke::from_uni_code("RY"), Some(Stroke::Back));
        assert_eq!(Stroke::from_uni_code("IM"), Some(Stroke::Medley));
        assert_eq!(Stroke::from_uni_code("LM"), Some(Stroke::Medley));
        assert_eq!(Stroke::from_uni_code("XX"), None);
    }

    #[test]
    fn gender_markers_resolve() {
        assert_eq!(Gender::from_uni_char('M'), Some(Gender::Male));
        assert_eq!(Gender::from_uni_char('k'), Some(Gender::Female));
        assert_eq!(Gender::from_uni_char('X'), Some(Gender::Mixed));
        assert_eq!(Gender::from_uni_char('Q'), None);
    }

    #[test]
    fn course_markers_resolve() {
        assert_eq!(Course::from_uni_code("K"), Some(Course::Scm));
        assert_eq!(Course::from_uni_code("l"), Some(Course::Lcm));
        assert_eq!(Course::from_uni_code("Z"), None);
        assert_eq!(Course::from_uni_code(""), None);
    }
}
