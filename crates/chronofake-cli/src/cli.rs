//! CLI argument definitions for Chronofake.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `past` | Local date-time before a reference |
//! | `future` | Local date-time after a reference |
//! | `soon` | Local date-time in the next few days |
//! | `recent` | Local date-time in the last few days |
//! | `between` | Local date-time between two bounds |
//! | `duration` | Elapsed span up to a maximum |
//! | `instant` | The same windows as UTC instants |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--count` | `1` | Number of values to draw |
//! | `--seed` | none | Seed for reproducible output |
//! | `--offset` | local | Fixed UTC offset such as `+02:00` |
//! | `--config` | `$CHRONOFAKE_CONFIG` | JSON file with default windows |
//! | `--verbose` | `false` | Log every draw to stderr |
//!
//! # Examples
//!
//! ```bash
//! chronofake past --days 30
//! chronofake between 2020-01-01T00:00:00 2020-01-10T00:00:00 --count 5
//! chronofake --seed 42 --format json instant recent
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Chronofake - random dates, instants and durations for test data.
#[derive(Debug, Parser)]
#[command(
    name = "chronofake",
    author,
    version,
    about = "Random dates, instants and durations for test data"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Number of values to draw.
    #[arg(long, global = true, default_value_t = 1)]
    pub count: usize,

    /// Seed for a reproducible random sequence (overrides the config file).
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Fixed UTC offset used for "now", e.g. +02:00 (overrides the config file).
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// JSON configuration file. Falls back to $CHRONOFAKE_CONFIG.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log every draw to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line.
    Text,
    /// Single JSON object.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Local date-time within the last N days of a reference (default: now).
    ///
    ///   chronofake past
    ///   chronofake past --days 30 --reference 2024-01-01T00:00:00
    Past(WindowArgs),

    /// Local date-time within the next N days of a reference (default: now).
    Future(WindowArgs),

    /// Local date-time between now and N days ahead.
    Soon(DaysArgs),

    /// Local date-time between N days ago and now.
    Recent(DaysArgs),

    /// Local date-time between two bounds, in either order.
    ///
    ///   chronofake between 2020-01-01T00:00:00 2020-01-10T00:00:00
    Between(BetweenArgs),

    /// Elapsed span between zero and a maximum (default: one week).
    Duration(DurationArgs),

    /// UTC instants instead of local date-times.
    Instant(InstantArgs),
}

/// Day count plus an optional reference point.
#[derive(Debug, Args)]
pub struct WindowArgs {
    /// Window size in days (defaults to the configured window).
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i32>,

    /// Reference point; local date-time or RFC3339 instant depending on the command.
    #[arg(long)]
    pub reference: Option<String>,
}

/// Day count only.
#[derive(Debug, Args)]
pub struct DaysArgs {
    /// Window size in days (defaults to the configured window).
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i32>,
}

/// Two bounds.
#[derive(Debug, Args)]
pub struct BetweenArgs {
    /// First bound.
    pub start: String,
    /// Second bound.
    pub end: String,
}

/// Arguments for the `duration` command.
#[derive(Debug, Args)]
pub struct DurationArgs {
    /// Upper bound in seconds (defaults to the configured maximum).
    #[arg(long)]
    pub max_seconds: Option<u64>,
}

/// Arguments for the `instant` command group.
#[derive(Debug, Args)]
pub struct InstantArgs {
    #[command(subcommand)]
    pub command: InstantCommand,
}

/// Instant subcommands. Bounds and references are RFC3339.
#[derive(Debug, Subcommand)]
pub enum InstantCommand {
    Past(WindowArgs),
    Future(WindowArgs),
    Soon(DaysArgs),
    Recent(DaysArgs),
    Between(BetweenArgs),
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Past(_) => "past",
            Self::Future(_) => "future",
            Self::Soon(_) => "soon",
            Self::Recent(_) => "recent",
            Self::Between(_) => "between",
            Self::Duration(_) => "duration",
            Self::Instant(args) => match args.command {
                InstantCommand::Past(_) => "instant past",
                InstantCommand::Future(_) => "instant future",
                InstantCommand::Soon(_) => "instant soon",
                InstantCommand::Recent(_) => "instant recent",
                InstantCommand::Between(_) => "instant between",
            },
        }
    }
}
