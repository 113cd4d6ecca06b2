//! Entry building: pick the winning event for each exportable row and derive
//! the athlete, relay and entry structures for the output roster.

use std::collections::BTreeMap;
use std::collections::HashMap;

use tracing::{info, warn};

use u2l_model::catalog::LenexEvent;
use u2l_model::classes::{masters_band, round_is_closed};
use u2l_model::entry::{Athlete, Entry, EntryList, Relay};
use u2l_model::row::{ClassValue, RegistrationRow};

/// Select the winning event for a row: the first candidate in catalog order
/// whose round is open and whose relay count and distance match exactly,
/// with stroke and gender matching when the row specifies them. An event
/// missing its stroke or gender attribute matches any value.
pub fn select_event<'a>(
    row: &RegistrationRow,
    index: &BTreeMap<u32, Vec<&'a LenexEvent>>,
) -> Option<&'a LenexEvent> {
    let candidates = index.get(&row.event_number?)?;
    candidates
        .iter()
        .copied()
        .find(|event| {
            !round_is_closed(&event.round)
                && event.relay_count == row.relay_count
                && Some(event.distance) == row.distance
                && row.stroke.is_none_or(|stroke| {
                    event.stroke.is_empty() || event.stroke.eq_ignore_ascii_case(stroke.as_str())
                })
                && row.gender.is_none_or(|gender| {
                    event.gender.is_empty() || event.gender.eq_ignore_ascii_case(gender.as_str())
                })
        })
}

/// Build the roster structures for a set of exportable rows (rows whose
/// effective issue set is empty — the caller filters). Rows that still find
/// no winning event are counted as skipped, separately from issue-based
/// exclusions.
pub fn build_entries(
    rows: &[&RegistrationRow],
    index: &BTreeMap<u32, Vec<&LenexEvent>>,
    current_year: i32,
) -> EntryList {
    let mut list = EntryList::default();
    let mut athlete_slots: HashMap<(String, String, String, String), usize> = HashMap::new();
    let mut relay_number = 0u32;

    for row in rows {
        let Some(event) = select_event(row, index) else {
            warn!(line = row.line, event = ?row.event_number, "no winning event, row skipped");
            list.skipped += 1;
            continue;
        };
        let entry = build_entry(row, event);

        if row.is_relay() {
            relay_number += 1;
            list.relays.push(build_relay(row, event, relay_number, entry));
            continue;
        }

        let birth_year = row.birth_year(current_year);
        // An undeterminable birth year joins the key as an empty string, so
        // two same-named swimmers without one merge. Accepted approximation
        // carried over from the legacy behavior.
        let key = (
            row.last_name.clone(),
            row.first_name.clone(),
            row.gender.map(|g| g.as_str().to_string()).unwrap_or_default(),
            birth_year.map(|y| y.to_string()).unwrap_or_default(),
        );
        let slot = *athlete_slots.entry(key).or_insert_with(|| {
            list.athletes.push(Athlete {
                id: list.athletes.len() as u32 + 1,
                last_name: row.last_name.clone(),
                first_name: row.first_name.clone(),
                gender: row.gender,
                birth_year,
                handicap: None,
                entries: Vec::new(),
            });
            list.athletes.len() - 1
        });
        let athlete = &mut list.athletes[slot];
        if let ClassValue::Para(class) = &row.class {
            athlete.handicap = Some((*class).into());
        }
        athlete.entries.push(entry);
    }

    info!(
        athletes = list.athletes.len(),
        relays = list.relays.len(),
        skipped = list.skipped,
        "built entry list"
    );
    list
}

fn build_entry(row: &RegistrationRow, event: &LenexEvent) -> Entry {
    let meet_place = (!row.qual_place.is_empty()).then(|| row.qual_place.clone());
    Entry {
        event_id: event.id.clone(),
        time: normalize_entry_time(&row.qual_time),
        course: row.course,
        meet_date: normalize_entry_date(&row.qual_date),
        meet_place,
    }
}

fn build_relay(row: &RegistrationRow, event: &LenexEvent, number: u32, entry: Entry) -> Relay {
    let band = row.masters_letter().and_then(masters_band);
    let age_max = if row.is_junior_relay() {
        event
            .age_group_named("junior")
            .map_or(-1, |group| group.max)
    } else {
        -1
    };
    Relay {
        number,
        name: row.last_name.clone(),
        gender: row.gender,
        age_total_min: band.map_or(-1, |band| band.min),
        age_total_max: band.map_or(-1, |band| band.max),
        age_max,
        entry,
    }
}

/// Pad an `mm:ss.hh`-shaped qualification time with a leading hours field.
/// A value already carrying two colons passes through unchanged; anything
/// else yields no entry time.
pub fn normalize_entry_time(value: &str) -> Option<String> {
    let value = value.trim();
    if value.matches(':').count() == 2 {
        return Some(value.to_string());
    }
    let (minutes, rest) = value.split_once(':')?;
    let (seconds, hundredths) = rest.split_once('.')?;
    let shaped = (1..=2).contains(&minutes.len())
        && minutes.chars().all(|ch| ch.is_ascii_digit())
        && seconds.len() == 2
        && seconds.chars().all(|ch| ch.is_ascii_digit())
        && (1..=2).contains(&hundredths.len())
        && hundredths.chars().all(|ch| ch.is_ascii_digit());
    shaped.then(|| format!("00:{value}"))
}

/// Reformat an 8-digit compact date as `YYYY-MM-DD`; any other non-empty
/// value passes through verbatim.
pub fn normalize_entry_date(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if value.len() == 8 && value.chars().all(|ch| ch.is_ascii_digit()) {
        return Some(format!("{}-{}-{}", &value[..4], &value[4..6], &value[6..8]));
    }
    Some(value.to_string())
}
