//! CLI argument structures

use crate::cli::validation::parse_date;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Randomize the speaking order of each team in a standup roster
#[derive(Parser, Debug)]
#[command(name = "random-standup")]
#[command(
    about = "random-standup - Print each team's members in a random order for standup",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// TOML roster file: one table per team, each with a `members` array
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,

    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Seed for the shuffle, to reproduce an earlier order
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Date to print in the header instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}
