//! End-to-end tests over the convert and check commands.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use u2l_cli::cli::{CheckArgs, CheckFormatArg, ConvertArgs, EncodingArg};
use u2l_cli::commands::{check_report, run_check, run_convert};

const MEET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<LENEX version="3.0" revision="2">
  <CONSTRUCTOR name="MeetPlanner" version="9.1"/>
  <MEET name="Spring Cup" city="Brno">
    <SESSIONS>
      <SESSION date="2026-05-09" name="Morning">
        <EVENTS>
          <EVENT eventid="101" number="3" gender="M" round="TIM">
            <SWIMSTYLE distance="100" stroke="FREE" relaycount="1"/>
            <AGEGROUPS>
              <AGEGROUP agegroupid="1" agemin="-1" agemax="-1"/>
            </AGEGROUPS>
          </EVENT>
          <EVENT eventid="102" number="12" gender="X" round="TIM">
            <SWIMSTYLE distance="50" stroke="FREE" relaycount="4"/>
          </EVENT>
        </EVENTS>
      </SESSION>
    </SESSIONS>
    <CLUBS>
      <CLUB name="Stale Roster"/>
    </CLUBS>
  </MEET>
</LENEX>
"#;

const REGISTRATIONS: &str = "\
SK Testovo
3,100,FR,Novak,Petr,M95,1995,00:58.20,20250101,Praha,K,,,,
12,4*50,FR,SK Testovo A,,XSR,,,,,,,,,
99,100,FR,Ghost,Anna,K00,2000,,,,,,,,
";

fn write_inputs(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let meet = dir.join("meet.lef");
    let registrations = dir.join("club.uni");
    fs::write(&meet, MEET).unwrap();
    fs::write(&registrations, REGISTRATIONS).unwrap();
    (meet, registrations)
}

#[test]
fn convert_produces_merged_document() {
    let dir = tempdir().unwrap();
    let (meet, registrations) = write_inputs(dir.path());
    let output = dir.path().join("entries.lef");

    let args = ConvertArgs {
        meet,
        registrations,
        output: Some(output.clone()),
        encoding: EncodingArg::Utf8,
        club: None,
        year: Some(2026),
    };
    let result = run_convert(&args).unwrap();

    assert_eq!(result.club, "SK Testovo");
    assert_eq!(result.rows.len(), 3);
    assert_eq!(result.flagged(), 1);
    assert_eq!(result.athletes, 1);
    assert_eq!(result.relays, 1);
    assert_eq!(result.entries, 2);
    assert_eq!(result.skipped, 0);

    let merged = fs::read_to_string(&output).unwrap();
    assert!(merged.contains(r#"<CONSTRUCTOR name="uni2lenex""#));
    assert!(merged.contains(r#"<CLUB name="SK Testovo">"#));
    assert!(merged.contains(r#"lastname="Novak""#));
    assert!(merged.contains(r#"birthdate="1995-01-01""#));
    assert!(merged.contains(r#"entrytime="00:00:58.20""#));
    assert!(merged.contains(r#"entrycourse="SCM""#));
    assert!(merged.contains(r#"<MEETINFO date="2025-01-01" city="Praha"/>"#));
    assert!(merged.contains(r#"<RELAY number="1" name="SK Testovo A" gender="X""#));
    // The stale roster and the previous constructor are gone.
    assert!(!merged.contains("Stale Roster"));
    assert!(!merged.contains("MeetPlanner"));
    // Flagged rows never reach the roster.
    assert!(!merged.contains("Ghost"));
}

#[test]
fn convert_defaults_output_next_to_registrations() {
    let dir = tempdir().unwrap();
    let (meet, registrations) = write_inputs(dir.path());

    let args = ConvertArgs {
        meet,
        registrations: registrations.clone(),
        output: None,
        encoding: EncodingArg::Utf8,
        club: Some("Override SC".to_string()),
        year: Some(2026),
    };
    let result = run_convert(&args).unwrap();

    assert_eq!(result.club, "Override SC");
    assert_eq!(result.output, registrations.with_extension("lef"));
    let merged = fs::read_to_string(&result.output).unwrap();
    assert!(merged.contains(r#"<CLUB name="Override SC">"#));
}

#[test]
fn check_flags_rows_without_writing_output() {
    let dir = tempdir().unwrap();
    let (meet, registrations) = write_inputs(dir.path());

    let args = CheckArgs {
        registrations,
        meet: Some(meet),
        encoding: EncodingArg::Utf8,
        format: CheckFormatArg::Text,
        year: Some(2026),
    };
    let result = run_check(&args).unwrap();

    assert_eq!(result.club, "SK Testovo");
    assert_eq!(result.exportable(), 2);
    assert_eq!(result.flagged(), 1);

    let report = check_report(&result);
    assert_eq!(report.rows.len(), 3);
    let ghost = &report.rows[2];
    assert_eq!(ghost.line, 3);
    assert_eq!(ghost.name, "Ghost Anna");
    assert_eq!(ghost.issues, vec!["Invalid event".to_string()]);
}

#[test]
fn check_without_meet_reports_parse_issues_only() {
    let dir = tempdir().unwrap();
    let registrations = dir.path().join("club.uni");
    fs::write(
        &registrations,
        "SK Testovo\n3,100,XX,Novak,Petr,M95,1995,,,,,,,,\n",
    )
    .unwrap();

    let args = CheckArgs {
        registrations,
        meet: None,
        encoding: EncodingArg::Utf8,
        format: CheckFormatArg::Text,
        year: Some(2026),
    };
    let result = run_check(&args).unwrap();

    assert_eq!(result.flagged(), 1);
    let report = check_report(&result);
    assert_eq!(report.rows[0].issues, vec!["Unknown stroke code 'XX'".to_string()]);
}
