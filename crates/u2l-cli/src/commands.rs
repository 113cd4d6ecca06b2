use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Datelike, Local};

use u2l_ingest::TextEncoding;
use u2l_model::report::{CheckReport, RowReport};

use crate::cli::{CheckArgs, ConvertArgs, EncodingArg};
use crate::pipeline::{build_roster, load_meet, load_registrations, validate_rows, write_output};
use crate::types::{CheckResult, ConvertResult};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let current_year = args.year.unwrap_or_else(|| Local::now().year());
    let meet = load_meet(&args.meet)?;
    let file = load_registrations(&args.registrations, encoding(args.encoding))?;
    let club = args.club.clone().unwrap_or_else(|| file.club_name.clone());

    let statuses = validate_rows(&file.rows, Some(&meet.catalog), current_year);
    let entries = build_roster(&statuses, &meet.catalog, current_year);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.registrations));
    write_output(&output, &meet, &club, &entries)?;

    Ok(ConvertResult {
        club,
        output,
        rows: statuses,
        athletes: entries.athletes.len(),
        relays: entries.relays.len(),
        entries: entries.entry_count(),
        skipped: entries.skipped,
    })
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let current_year = args.year.unwrap_or_else(|| Local::now().year());
    let catalog = match &args.meet {
        Some(path) => Some(load_meet(path)?.catalog),
        None => None,
    };
    let file = load_registrations(&args.registrations, encoding(args.encoding))?;
    let statuses = validate_rows(&file.rows, catalog.as_ref(), current_year);
    Ok(CheckResult {
        club: file.club_name,
        rows: statuses,
    })
}

/// Machine-readable form of a check result.
pub fn check_report(result: &CheckResult) -> CheckReport {
    CheckReport {
        club: result.club.clone(),
        rows: result
            .rows
            .iter()
            .map(|status| RowReport {
                line: status.row.line,
                event: status.row.event_number,
                name: format!("{} {}", status.row.last_name, status.row.first_name)
                    .trim_end()
                    .to_string(),
                issues: status.issues.iter().map(ToString::to_string).collect(),
            })
            .collect(),
        exportable: result.exportable(),
        flagged: result.flagged(),
    }
}

fn encoding(arg: EncodingArg) -> TextEncoding {
    match arg {
        EncodingArg::Utf8 => TextEncoding::Utf8,
        EncodingArg::Win1250 => TextEncoding::Win1250,
    }
}

fn default_output(registrations: &Path) -> PathBuf {
    registrations.with_extension("lef")
}
