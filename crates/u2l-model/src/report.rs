//! Machine-readable check report, serialized by the CLI's JSON output.

use serde::{Deserialize, Serialize};

/// One row of a check report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowReport {
    pub line: usize,
    pub event: Option<u32>,
    pub name: String,
    pub issues: Vec<String>,
}

/// Full check report for one registration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub club: String,
    pub rows: Vec<RowReport>,
    pub exportable: usize,
    pub flagged: usize,
}
