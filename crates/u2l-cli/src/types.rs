use std::path::PathBuf;

use u2l_model::row::RegistrationRow;
use u2l_model::Issue;

/// One row paired with its effective issue set (parse-time plus catalog
/// issues, deduplicated).
#[derive(Debug, Clone)]
pub struct RowStatus {
    pub row: RegistrationRow,
    pub issues: Vec<Issue>,
}

impl RowStatus {
    pub fn is_exportable(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Result of the convert command.
#[derive(Debug)]
pub struct ConvertResult {
    pub club: String,
    pub output: PathBuf,
    pub rows: Vec<RowStatus>,
    pub athletes: usize,
    pub relays: usize,
    pub entries: usize,
    /// Exportable rows that found no winning event at build time.
    pub skipped: usize,
}

impl ConvertResult {
    pub fn flagged(&self) -> usize {
        self.rows.iter().filter(|status| !status.is_exportable()).count()
    }
}

/// Result of the check command.
#[derive(Debug)]
pub struct CheckResult {
    pub club: String,
    pub rows: Vec<RowStatus>,
}

impl CheckResult {
    pub fn exportable(&self) -> usize {
        self.rows.iter().filter(|status| status.is_exportable()).count()
    }

    pub fn flagged(&self) -> usize {
        self.rows.len() - self.exportable()
    }
}
