//! Event catalog read from a Lenex meet document.

use std::collections::BTreeMap;

/// Inclusive age bounds of an event age group. A bound of -1 means
/// unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeGroup {
    pub id: String,
    pub min: i32,
    pub max: i32,
    pub name: String,
}

impl AgeGroup {
    pub fn allows(&self, age: i32) -> bool {
        (self.min < 0 || age >= self.min) && (self.max < 0 || age <= self.max)
    }
}

/// One event of one round. Event numbers are shared across rounds, so they
/// key an ordered list of events, never a single one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LenexEvent {
    /// Identifier unique within the document; entries reference it.
    pub id: String,
    pub number: u32,
    pub gender: String,
    pub round: String,
    pub stroke: String,
    pub relay_count: u32,
    pub distance: u32,
    /// Date of the session the event belongs to.
    pub session_date: String,
    pub age_groups: Vec<AgeGroup>,
}

impl LenexEvent {
    /// Age group with the given name, case-insensitively.
    pub fn age_group_named(&self, name: &str) -> Option<&AgeGroup> {
        self.age_groups
            .iter()
            .find(|group| group.name.eq_ignore_ascii_case(name))
    }

    /// Whether a swimmer of the given age may enter. An event with no age
    /// groups is unrestricted.
    pub fn allows_age(&self, age: i32) -> bool {
        self.age_groups.is_empty() || self.age_groups.iter().any(|group| group.allows(age))
    }

    /// Four-digit year embedded in the session date.
    pub fn session_year(&self) -> Option<i32> {
        let year = self.session_date.get(..4)?;
        year.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub date: String,
    pub name: String,
    pub events: Vec<LenexEvent>,
}

/// Read-only session/event tree of an uploaded meet document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetCatalog {
    pub sessions: Vec<Session>,
    pub event_count: usize,
}

impl MeetCatalog {
    /// Events in document order across all sessions.
    pub fn events(&self) -> impl Iterator<Item = &LenexEvent> {
        self.sessions.iter().flat_map(|session| session.events.iter())
    }

    /// Event-number index. Several rounds of the same numbered event
    /// coexist, so each number maps to an ordered list.
    pub fn events_by_number(&self) -> BTreeMap<u32, Vec<&LenexEvent>> {
        let mut index: BTreeMap<u32, Vec<&LenexEvent>> = BTreeMap::new();
        for event in self.events() {
            index.entry(event.number).or_default().push(event);
        }
        index
    }
}
