//! Run a standup from parsed CLI arguments

use crate::cli::args::Cli;
use crate::roster::load_roster;
use crate::standup::render_standup;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Settings for a single standup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub roster: PathBuf,
    /// Fixed shuffle seed; `None` uses the thread-local generator
    pub seed: Option<u64>,
    /// Header date; `None` uses today's local date
    pub date: Option<NaiveDate>,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            roster: cli.roster.clone(),
            seed: cli.seed,
            date: cli.date,
        }
    }
}

impl RunOptions {
    pub fn new(roster: impl Into<PathBuf>) -> Self {
        Self {
            roster: roster.into(),
            seed: None,
            date: None,
        }
    }

    fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(seed) => {
                debug!("Using fixed shuffle seed {}", seed);
                Box::new(StdRng::seed_from_u64(seed))
            }
            None => Box::new(rand::rng()),
        }
    }

    fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Load the roster and write the standup text to `out`
///
/// Nothing is written unless the roster loads successfully.
pub fn execute<W: Write>(options: &RunOptions, out: &mut W) -> Result<()> {
    let roster = load_roster(&options.roster)?;
    info!(
        "Loaded {} teams from {}",
        roster.len(),
        options.roster.display()
    );

    let mut rng = options.rng();
    let text = render_standup(&roster, options.date(), rng.as_mut());

    out.write_all(text.as_bytes())
        .context("Failed to write standup output")?;
    out.flush().context("Failed to flush standup output")?;
    Ok(())
}
