//! Generated athlete, relay and entry structures destined for the club
//! roster of the output document.

use crate::classes::ParaClass;
use crate::swim::{Course, Gender};

/// Para-sport handicap classification attached to an athlete. The attribute
/// name is one of `free`, `breast`, `medley`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handicap {
    pub attr: &'static str,
    pub level: u32,
}

impl From<ParaClass> for Handicap {
    fn from(class: ParaClass) -> Self {
        Self {
            attr: class.prefix.handicap_attr(),
            level: class.level,
        }
    }
}

/// One generated entry, referencing a resolved event identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub event_id: String,
    pub time: Option<String>,
    pub course: Option<Course>,
    /// Qualification-meet metadata, when the row carried any.
    pub meet_date: Option<String>,
    pub meet_place: Option<String>,
}

/// One athlete with its accumulated entries. Identity is last name + first
/// name + gender + inferred birth year; repeated registrations of the same
/// swimmer merge into one record.
#[derive(Debug, Clone)]
pub struct Athlete {
    pub id: u32,
    pub last_name: String,
    pub first_name: String,
    pub gender: Option<Gender>,
    pub birth_year: Option<i32>,
    pub handicap: Option<Handicap>,
    pub entries: Vec<Entry>,
}

/// One relay registration with its single entry. Numbered sequentially in
/// row order, independent of athlete numbering.
#[derive(Debug, Clone)]
pub struct Relay {
    pub number: u32,
    pub name: String,
    pub gender: Option<Gender>,
    /// Masters total-age band; -1/-1 when unbanded.
    pub age_total_min: i32,
    pub age_total_max: i32,
    /// Junior relay age ceiling; -1 when unbounded.
    pub age_max: i32,
    pub entry: Entry,
}

/// Everything the document merger folds into the club roster.
#[derive(Debug, Clone, Default)]
pub struct EntryList {
    pub athletes: Vec<Athlete>,
    pub relays: Vec<Relay>,
    /// Exportable rows that still found no winning event.
    pub skipped: usize,
}

impl EntryList {
    pub fn entry_count(&self) -> usize {
        self.athletes
            .iter()
            .map(|athlete| athlete.entries.len())
            .sum::<usize>()
            + self.relays.len()
    }
}
