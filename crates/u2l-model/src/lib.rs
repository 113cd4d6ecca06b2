pub mod catalog;
pub mod classes;
pub mod entry;
pub mod issue;
pub mod report;
pub mod row;
pub mod swim;

pub use catalog::{AgeGroup, LenexEvent, MeetCatalog, Session};
pub use classes::{MastersBand, ParaClass, ParaParse, ParaPrefix};
pub use entry::{Athlete, Entry, EntryList, Handicap, Relay};
pub use issue::{Issue, effective_issues};
pub use report::{CheckReport, RowReport};
pub use row::{AgeClass, ClassValue, RegistrationFile, RegistrationRow};
pub use swim::{Course, Gender, Stroke};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes() {
        let report = CheckReport {
            club: "Test SC".to_string(),
            rows: vec![RowReport {
                line: 1,
                event: Some(5),
                name: "Doe John".to_string(),
                issues: vec!["Invalid event".to_string()],
            }],
            exportable: 0,
            flagged: 1,
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: CheckReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.club, "Test SC");
        assert_eq!(round.rows[0].issues.len(), 1);
    }
}
