//! Cross-validation of parsed registration rows against the event catalog.
//!
//! Validation is display-time: it computes issues for a row without touching
//! the row's parse-time issue list. A row is exportable when the union of
//! both lists is empty.

use std::collections::BTreeMap;

use tracing::debug;

use u2l_model::catalog::LenexEvent;
use u2l_model::classes::round_is_closed;
use u2l_model::row::RegistrationRow;
use u2l_model::swim::{Gender, Stroke};
use u2l_model::Issue;

/// Compute the catalog issues for one row.
///
/// Rows without an event number are skipped here; their parse-time issue
/// already blocks export. With candidates present, the length, distance,
/// stroke and gender checks are independent and may all fire. Round
/// eligibility and age rules only apply once a compatible candidate exists.
pub fn cross_validate(
    row: &RegistrationRow,
    index: &BTreeMap<u32, Vec<&LenexEvent>>,
    current_year: i32,
) -> Vec<Issue> {
    let Some(number) = row.event_number else {
        return Vec::new();
    };
    let Some(candidates) = index.get(&number).filter(|events| !events.is_empty()) else {
        return vec![Issue::InvalidEvent];
    };

    let mut issues = Vec::new();
    if !candidates.iter().any(|e| e.relay_count == row.relay_count) {
        issues.push(Issue::InvalidLength);
    }
    if !candidates.iter().any(|e| Some(e.distance) == row.distance) {
        issues.push(Issue::InvalidDistance);
    }
    if let Some(stroke) = row.stroke
        && !candidates.iter().any(|e| stroke_matches(e, stroke))
    {
        issues.push(Issue::InvalidStyle);
    }
    if let Some(gender) = row.gender
        && !candidates.iter().any(|e| gender_matches(e, gender))
    {
        issues.push(Issue::InvalidGender);
    }

    let compatible: Vec<&LenexEvent> = candidates
        .iter()
        .copied()
        .filter(|e| is_compatible(row, e))
        .collect();
    if compatible.is_empty() {
        return issues;
    }

    if compatible.iter().all(|e| round_is_closed(&e.round)) {
        let mut seen: Vec<&str> = Vec::new();
        for event in &compatible {
            if !seen.contains(&event.round.as_str()) {
                seen.push(&event.round);
                issues.push(Issue::ClosedRound(event.round.clone()));
            }
        }
    }

    // Rounds open to registration, falling back to every compatible
    // candidate when all rounds are closed.
    let allowed: Vec<&LenexEvent> = compatible
        .iter()
        .copied()
        .filter(|e| !round_is_closed(&e.round))
        .collect();
    let pool: &[&LenexEvent] = if allowed.is_empty() { &compatible } else { &allowed };

    if row.is_junior_relay()
        && !pool.iter().any(|e| e.age_group_named("junior").is_some())
    {
        issues.push(Issue::MissingJuniorAgeGroup);
    }

    if !row.is_relay()
        && let Some(birth_year) = row.birth_year(current_year)
        && let Some(season_year) = compatible[0].session_year()
    {
        let age = season_year - birth_year;
        if !pool.iter().any(|e| e.allows_age(age)) {
            issues.push(Issue::InvalidAgeGroup { age, event: number });
        }
    }

    if !issues.is_empty() {
        debug!(line = row.line, event = number, issues = issues.len(), "row failed validation");
    }
    issues
}

/// Candidate compatible on relay count, distance, and stroke/gender where
/// the row specifies them.
fn is_compatible(row: &RegistrationRow, event: &LenexEvent) -> bool {
    event.relay_count == row.relay_count
        && Some(event.distance) == row.distance
        && row.stroke.is_none_or(|stroke| stroke_matches(event, stroke))
        && row.gender.is_none_or(|gender| gender_matches(event, gender))
}

/// An event without a stroke attribute matches any stroke.
fn stroke_matches(event: &LenexEvent, stroke: Stroke) -> bool {
    event.stroke.is_empty() || event.stroke.eq_ignore_ascii_case(stroke.as_str())
}

/// An event without a gender attribute matches any gender.
fn gender_matches(event: &LenexEvent, gender: Gender) -> bool {
    event.gender.is_empty() || event.gender.eq_ignore_ascii_case(gender.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use u2l_model::catalog::AgeGroup;
    use u2l_model::row::{AgeClass, ClassValue};

    fn event(number: u32, round: &str) -> LenexEvent {
        LenexEvent {
            id: format!("{number}-{round}"),
            number,
            gender: "M".to_string(),
            round: round.to_string(),
            stroke: "FREE".to_string(),
            relay_count: 1,
            distance: 100,
            session_date: "2024-06-01".to_string(),
            age_groups: Vec::new(),
        }
    }

    fn index(events: &[LenexEvent]) -> BTreeMap<u32, Vec<&LenexEvent>> {
        let mut index: BTreeMap<u32, Vec<&LenexEvent>> = BTreeMap::new();
        for event in events {
            index.entry(event.number).or_default().push(event);
        }
        index
    }

    fn individual_row(number: u32) -> RegistrationRow {
        let mut row = RegistrationRow::blank(1);
        row.event_number = Some(number);
        row.distance = Some(100);
        row.stroke = Some(Stroke::Free);
        row.gender = Some(Gender::Male);
        row.last_name = "Doe".to_string();
        row.first_name = "John".to_string();
        row
    }

    #[test]
    fn unknown_event_number_is_terminal() {
        let events = [event(5, "TIM")];
        let issues = cross_validate(&individual_row(9), &index(&events), 2024);
        assert_eq!(issues, vec![Issue::InvalidEvent]);
    }

    #[test]
    fn mismatch_checks_fire_independently() {
        let events = [event(5, "TIM")];
        let mut row = individual_row(5);
        row.distance = Some(200);
        row.stroke = Some(Stroke::Breast);
        row.gender = Some(Gender::Female);
        let issues = cross_validate(&row, &index(&events), 2024);
        assert_eq!(
            issues,
            vec![Issue::InvalidDistance, Issue::InvalidStyle, Issue::InvalidGender]
        );
    }

    #[test]
    fn relay_count_mismatch_is_invalid_length() {
        let events = [event(5, "TIM")];
        let mut row = individual_row(5);
        row.relay_count = 4;
        let issues = cross_validate(&row, &index(&events), 2024);
        assert!(issues.contains(&Issue::InvalidLength));
    }

    #[test]
    fn all_closed_rounds_block_registration() {
        let events = [event(5, "FIN")];
        let issues = cross_validate(&individual_row(5), &index(&events), 2024);
        assert_eq!(issues, vec![Issue::ClosedRound("FIN".to_string())]);
    }

    #[test]
    fn one_closed_round_per_distinct_code() {
        let events = [event(5, "FIN"), event(5, "SEM"), event(5, "FIN")];
        let issues = cross_validate(&individual_row(5), &index(&events), 2024);
        assert_eq!(
            issues,
            vec![
                Issue::ClosedRound("FIN".to_string()),
                Issue::ClosedRound("SEM".to_string())
            ]
        );
    }

    #[test]
    fn open_round_clears_closed_round_issue() {
        let events = [event(5, "FIN"), event(5, "TIM")];
        let issues = cross_validate(&individual_row(5), &index(&events), 2024);
        assert!(issues.is_empty(), "issues: {issues:?}");
    }

    #[test]
    fn age_checked_against_open_round_age_groups() {
        let mut heats = event(5, "TIM");
        heats.age_groups.push(AgeGroup {
            id: "1".to_string(),
            min: 15,
            max: 18,
            name: "Junior".to_string(),
        });
        let events = [heats];
        let mut row = individual_row(5);
        row.class = ClassValue::Year(2010);
        let issues = cross_validate(&row, &index(&events), 2024);
        assert_eq!(issues, vec![Issue::InvalidAgeGroup { age: 14, event: 5 }]);

        row.class = ClassValue::Year(2008);
        let issues = cross_validate(&row, &index(&events), 2024);
        assert!(issues.is_empty(), "issues: {issues:?}");
    }

    #[test]
    fn two_digit_marker_feeds_age_check() {
        let mut heats = event(5, "TIM");
        heats.age_groups.push(AgeGroup {
            id: "1".to_string(),
            min: -1,
            max: 40,
            name: "Open".to_string(),
        });
        let events = [heats];
        let mut row = individual_row(5);
        // 65 > 24, so the marker lands in the prior century: born 1965.
        row.age_class = AgeClass::BirthDigits(65);
        let issues = cross_validate(&row, &index(&events), 2024);
        assert_eq!(issues, vec![Issue::InvalidAgeGroup { age: 59, event: 5 }]);
    }

    #[test]
    fn event_without_age_groups_is_unrestricted() {
        let events = [event(5, "TIM")];
        let mut row = individual_row(5);
        row.class = ClassValue::Year(1950);
        let issues = cross_validate(&row, &index(&events), 2024);
        assert!(issues.is_empty(), "issues: {issues:?}");
    }

    #[test]
    fn junior_relay_needs_junior_age_group() {
        let mut relay_event = event(7, "TIM");
        relay_event.relay_count = 4;
        relay_event.distance = 50;
        relay_event.gender = "X".to_string();
        let events = [relay_event];

        let mut row = RegistrationRow::blank(1);
        row.event_number = Some(7);
        row.relay_count = 4;
        row.distance = Some(50);
        row.stroke = Some(Stroke::Free);
        row.gender = Some(Gender::Mixed);
        row.class = ClassValue::Named("Junior".to_string());
        let issues = cross_validate(&row, &index(&events), 2024);
        assert_eq!(issues, vec![Issue::MissingJuniorAgeGroup]);

        let mut with_group = events[0].clone();
        with_group.age_groups.push(AgeGroup {
            id: "1".to_string(),
            min: -1,
            max: 17,
            name: "JUNIOR".to_string(),
        });
        let events = [with_group];
        let issues = cross_validate(&row, &index(&events), 2024);
        assert!(issues.is_empty(), "issues: {issues:?}");
    }

    #[test]
    fn event_without_gender_or_stroke_attribute_matches_any_row() {
        let mut bare = event(5, "TIM");
        bare.gender = String::new();
        bare.stroke = String::new();
        let events = [bare];
        let issues = cross_validate(&individual_row(5), &index(&events), 2024);
        assert!(issues.is_empty(), "issues: {issues:?}");
    }

    #[test]
    fn rows_without_event_number_are_left_alone() {
        let events = [event(5, "TIM")];
        let row = RegistrationRow::blank(1);
        assert!(cross_validate(&row, &index(&events), 2024).is_empty());
    }
}
