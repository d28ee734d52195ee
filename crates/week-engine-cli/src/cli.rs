use std::path::PathBuf;

use clap::{Parser, Subcommand};
use week_engine::WeekConvention;

/// Week numbers, week-aligned ranges and week-qualified labels.
#[derive(Parser)]
#[command(
    name = "weekcal",
    version,
    about = "Week numbers, week-aligned ranges and week-qualified labels"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// First day of the week: 1 (Monday) ..= 7 (Sunday) or a weekday name.
    #[arg(long, global = true, env = "WEEKCAL_FIRST_DAY")]
    pub first_day: Option<WeekConvention>,

    /// Path to a TOML settings file.
    #[arg(long, global = true, env = "WEEKCAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the week containing a date.
    Key(KeyArgs),
    /// Show the boundaries of a week given as `2024-W52`.
    Lookup(LookupArgs),
    /// Widen a date range to the whole weeks it touches.
    Align(RangeArgs),
    /// Render a date range with a week template.
    Format(FormatArgs),
    /// Show the start of week 1 of a year.
    FirstWeek(YearArgs),
    /// List every week of a week-year.
    Weeks(YearArgs),
    /// List weeks that straddle New Year.
    CrossYear(CrossYearArgs),
}

#[derive(clap::Args)]
pub struct KeyArgs {
    /// Date as `yyyy-MM-dd` or `yyyy-MM-ddTHH:MM:SS`.
    pub date: String,
}

#[derive(clap::Args)]
pub struct LookupArgs {
    /// Week key, e.g. `2024-W52`.
    pub key: String,
}

#[derive(clap::Args)]
pub struct RangeArgs {
    /// One end of the range.
    pub min: String,
    /// The other end of the range.
    pub max: String,
}

#[derive(clap::Args)]
pub struct FormatArgs {
    /// One end of the range (unparseable text renders as an empty string).
    pub min: String,
    /// The other end of the range.
    pub max: String,

    /// Format template, e.g. `yyyy-WW` or `yyyy 'week' W`.
    #[arg(short, long, env = "WEEKCAL_TEMPLATE")]
    pub template: Option<String>,
}

#[derive(clap::Args)]
pub struct YearArgs {
    /// Calendar year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

#[derive(clap::Args)]
pub struct CrossYearArgs {
    /// First year to scan.
    #[arg(allow_negative_numbers = true)]
    pub from: i32,
    /// Last year to scan.
    #[arg(allow_negative_numbers = true)]
    pub to: i32,
}
