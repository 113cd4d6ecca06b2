//! Merge behavior against a realistic meet document.

use u2l_lenex::{merge_entries, read_meet};
use u2l_model::entry::{Athlete, Entry, EntryList, Handicap, Relay};
use u2l_model::{Course, Gender};

const ORIGINAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<LENEX version="3.0" revision="7">
  <CONSTRUCTOR name="MeetManagerX" version="9.9">
    <CONTACT email="old@example.org"/>
  </CONSTRUCTOR>
  <MEETS>
    <MEET name="Spring Open" city="Springfield" course="LCM">
      <SESSIONS>
        <SESSION date="2024-06-01" name="Morning">
          <EVENTS>
            <EVENT eventid="11" number="5" gender="M" round="TIM">
              <SWIMSTYLE distance="100" relaycount="1" stroke="FREE"/>
              <AGEGROUPS>
                <AGEGROUP agegroupid="1" agemin="15" agemax="18" name="Junior"/>
              </AGEGROUPS>
              <HEATS>
                <HEAT heatid="1" number="1" daytime="09:00"/>
              </HEATS>
            </EVENT>
            <EVENT eventid="12" number="7" gender="X" round="TIM">
              <SWIMSTYLE distance="50" relaycount="4" stroke="FREE"/>
            </EVENT>
          </EVENTS>
        </SESSION>
      </SESSIONS>
      <CLUBS>
        <CLUB name="Stale Roster SC">
          <ATHLETES>
            <ATHLETE athleteid="99" lastname="Gone" firstname="Long"/>
          </ATHLETES>
        </CLUB>
      </CLUBS>
    </MEET>
  </MEETS>
</LENEX>"#;

fn sample_entries() -> EntryList {
    EntryList {
        athletes: vec![Athlete {
            id: 1,
            last_name: "Doe".to_string(),
            first_name: "John".to_string(),
            gender: Some(Gender::Male),
            birth_year: Some(2007),
            handicap: Some(Handicap {
                attr: "free",
                level: 9,
            }),
            entries: vec![Entry {
                event_id: "11".to_string(),
                time: Some("00:01:02.35".to_string()),
                course: Some(Course::Lcm),
                meet_date: Some("2024-01-15".to_string()),
                meet_place: Some("Springfield".to_string()),
            }],
        }],
        relays: vec![Relay {
            number: 1,
            name: "CityTeam Relay".to_string(),
            gender: Some(Gender::Mixed),
            age_total_min: -1,
            age_total_max: -1,
            age_max: -1,
            entry: Entry {
                event_id: "12".to_string(),
                time: None,
                course: None,
                meet_date: None,
                meet_place: None,
            },
        }],
        skipped: 0,
    }
}

#[test]
fn roster_is_replaced_and_heats_stripped() {
    let merged = merge_entries(ORIGINAL, "Springfield SC", &sample_entries()).expect("merge");

    assert!(merged.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(merged.contains("<CLUB name=\"Springfield SC\">"));
    assert!(merged.contains("lastname=\"Doe\""));
    assert!(merged.contains("birthdate=\"2007-01-01\""));
    assert!(merged.contains("<HANDICAP free=\"9\"/>"));
    assert!(merged.contains("entrytime=\"00:01:02.35\""));
    assert!(merged.contains("<MEETINFO date=\"2024-01-15\" city=\"Springfield\"/>"));
    assert!(merged.contains("<RELAY number=\"1\" name=\"CityTeam Relay\""));

    assert!(!merged.contains("Stale Roster SC"));
    assert!(!merged.contains("HEAT"));
    assert!(!merged.contains("MeetManagerX"));
    assert!(merged.contains("<CONSTRUCTOR name=\"uni2lenex\""));
}

#[test]
fn root_version_is_pinned_and_attributes_kept() {
    let merged = merge_entries(ORIGINAL, "Springfield SC", &sample_entries()).expect("merge");
    assert!(merged.contains("revision=\"7\""));
    assert!(merged.contains("version=\"3.0\""));
}

#[test]
fn merged_document_reads_back_to_the_same_catalog() {
    let before = read_meet(ORIGINAL).expect("read original");
    let merged = merge_entries(ORIGINAL, "Springfield SC", &sample_entries()).expect("merge");
    let after = read_meet(&merged).expect("read merged");
    assert_eq!(before, after);
}

#[test]
fn merging_twice_is_idempotent() {
    let entries = sample_entries();
    let once = merge_entries(ORIGINAL, "Springfield SC", &entries).expect("merge once");
    let twice = merge_entries(&once, "Springfield SC", &entries).expect("merge twice");
    assert_eq!(once, twice);
}
