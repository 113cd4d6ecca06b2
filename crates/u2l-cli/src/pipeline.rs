//! Conversion pipeline with explicit stages.
//!
//! 1. **Load meet**: decode and read the Lenex catalog (once per document)
//! 2. **Load registrations**: decode and parse the UNI_p file
//! 3. **Validate**: compute each row's effective issue set
//! 4. **Build**: select winning events and derive roster structures
//! 5. **Merge**: fold the roster into a copy of the original document

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use u2l_entries::build_entries;
use u2l_ingest::{TextEncoding, decode_registration, parse_registration};
use u2l_lenex::{decode_lenex, merge_entries, read_meet};
use u2l_model::entry::EntryList;
use u2l_model::row::{RegistrationFile, RegistrationRow};
use u2l_model::{MeetCatalog, effective_issues};
use u2l_validate::cross_validate;

use crate::types::RowStatus;

/// The original document text alongside its decoded catalog; the merger
/// reuses the text so untouched content survives structurally.
pub struct LoadedMeet {
    pub document: String,
    pub catalog: MeetCatalog,
}

pub fn load_meet(path: &Path) -> Result<LoadedMeet> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let document = decode_lenex(&bytes);
    let catalog =
        read_meet(&document).with_context(|| format!("read meet from {}", path.display()))?;
    Ok(LoadedMeet { document, catalog })
}

pub fn load_registrations(path: &Path, encoding: TextEncoding) -> Result<RegistrationFile> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let text = decode_registration(&bytes, encoding);
    parse_registration(&text).with_context(|| format!("parse {}", path.display()))
}

/// Pair every row with its effective issue set. Without a catalog only the
/// parse-time issues apply.
pub fn validate_rows(
    rows: &[RegistrationRow],
    catalog: Option<&MeetCatalog>,
    current_year: i32,
) -> Vec<RowStatus> {
    let index = catalog.map(MeetCatalog::events_by_number);
    rows.iter()
        .map(|row| {
            let catalog_issues = match &index {
                Some(index) => cross_validate(row, index, current_year),
                None => Vec::new(),
            };
            RowStatus {
                row: row.clone(),
                issues: effective_issues(row, &catalog_issues),
            }
        })
        .collect()
}

/// Build the roster from the exportable subset of validated rows.
pub fn build_roster(
    statuses: &[RowStatus],
    catalog: &MeetCatalog,
    current_year: i32,
) -> EntryList {
    let exportable: Vec<&RegistrationRow> = statuses
        .iter()
        .filter(|status| status.is_exportable())
        .map(|status| &status.row)
        .collect();
    info!(
        rows = statuses.len(),
        exportable = exportable.len(),
        "building entries"
    );
    build_entries(&exportable, &catalog.events_by_number(), current_year)
}

/// Merge the roster into the original document and write the result.
pub fn write_output(
    output: &Path,
    meet: &LoadedMeet,
    club_name: &str,
    entries: &EntryList,
) -> Result<()> {
    let merged = merge_entries(&meet.document, club_name, entries)
        .context("merge entries into meet document")?;
    fs::write(output, merged).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}
