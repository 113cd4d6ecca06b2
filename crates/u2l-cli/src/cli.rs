//! CLI argument definitions for uni2lenex.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "uni2lenex",
    version,
    about = "Convert UNI_p swim-meet registration lists to Lenex entries",
    long_about = "Convert a club's UNI_p registration list into entries attached to an\n\
                  existing Lenex 3 meet-definition document.\n\n\
                  Registrations that cannot be unambiguously or legally matched to a\n\
                  defined event are flagged and excluded from the output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a registration list into a Lenex entries document.
    Convert(ConvertArgs),

    /// Parse and validate a registration list without writing output.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Lenex meet-definition document (.lef/.lxf already unzipped).
    #[arg(value_name = "MEET")]
    pub meet: PathBuf,

    /// UNI_p registration list.
    #[arg(value_name = "REGISTRATIONS")]
    pub registrations: PathBuf,

    /// Output path (default: <REGISTRATIONS> with a .lef extension).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Registration file encoding.
    #[arg(long = "encoding", value_enum, default_value = "utf8")]
    pub encoding: EncodingArg,

    /// Override the club name from the file's header line.
    #[arg(long = "club", value_name = "NAME")]
    pub club: Option<String>,

    /// Pin the current year used for two-digit birth-year inference.
    #[arg(long = "year", value_name = "YYYY")]
    pub year: Option<i32>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// UNI_p registration list.
    #[arg(value_name = "REGISTRATIONS")]
    pub registrations: PathBuf,

    /// Lenex meet document to cross-validate against (parse-only without it).
    #[arg(long = "meet", value_name = "PATH")]
    pub meet: Option<PathBuf>,

    /// Registration file encoding.
    #[arg(long = "encoding", value_enum, default_value = "utf8")]
    pub encoding: EncodingArg,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: CheckFormatArg,

    /// Pin the current year used for two-digit birth-year inference.
    #[arg(long = "year", value_name = "YYYY")]
    pub year: Option<i32>,
}

/// Registration file encoding choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum EncodingArg {
    Utf8,
    Win1250,
}

/// Check report format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum CheckFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
