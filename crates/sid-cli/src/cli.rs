//! CLI argument definitions for the Stores Issue Desk.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "stores-desk",
    version,
    about = "Stores Issue Desk - material issue entry tooling",
    long_about = "Record material issue entries against a stores catalog.\n\n\
                  Replays edit scripts through the line-item table engine,\n\
                  validates screen drafts, and assembles submission payloads."
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
    /// Replay an edit script against a catalog snapshot.
    Simulate(SimulateArgs),

    /// Validate a screen draft and report findings.
    Validate(ValidateArgs),

    /// Validate an issue entry draft and emit its submission payload.
    Payload(PayloadArgs),
}

#[derive(Parser)]
pub struct SimulateArgs {
    /// Catalog snapshot (.json array or .csv with id,name,unit_rate columns).
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Edit script to replay (JSON list of table operations).
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Write the issued-items payload to a file instead of stdout.
    #[arg(long = "payload-out", value_name = "PATH")]
    pub payload_out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Which screen the draft belongs to.
    #[arg(value_enum, value_name = "SCREEN")]
    pub screen: ScreenArg,

    /// Draft file (JSON).
    #[arg(value_name = "DRAFT")]
    pub draft: PathBuf,
}

#[derive(Parser)]
pub struct PayloadArgs {
    /// Issue entry draft file (JSON).
    #[arg(value_name = "DRAFT")]
    pub draft: PathBuf,

    /// Write the payload to a file instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Screens the desk can validate.
#[derive(Clone, Copy, ValueEnum)]
pub enum ScreenArg {
    Issue,
    Employee,
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
