use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calendari wall calendar with fallas, holidays and events.
#[derive(Parser)]
#[command(
    name = "calendari",
    version,
    about = "Wall calendar with Valencian fallas, holidays and iCalendar invites"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: calendari.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the calendar year from config.
    #[arg(short, long, global = true)]
    pub year: Option<i32>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show one month grid and its notable days.
    Month(MonthArgs),
    /// Show all twelve months.
    Year(YearArgs),
    /// Describe a single day.
    Day(DayArgs),
    /// Write an iCalendar invite for a single day.
    Invite(InviteArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Month number (1 = January).
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Print the grid as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Print the grids as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Month number (1 = January).
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Day of the month.
    pub day: u32,
}

/// Arguments for the `invite` subcommand.
#[derive(clap::Args)]
pub struct InviteArgs {
    /// Month number (1 = January).
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Day of the month.
    pub day: u32,

    /// Event title (default "Evento día <day> de <month>").
    #[arg(short, long)]
    pub title: Option<String>,

    /// Local start time, HH:MM.
    #[arg(long)]
    pub start: Option<String>,

    /// Local end time, HH:MM.
    #[arg(long)]
    pub end: Option<String>,

    /// Event description.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Output file; defaults to the suggested filename in the configured
    /// output directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
