//! Standup output assembly
//!
//! Combines the roster's declaration-ordered teams with per-team shuffles:
//!
//! ```text
//! # 2021-03-27
//! ## Subteam-1
//! Alice
//! David
//! Bob
//! Carol
//!
//! ## Subteam 2
//! Grace
//! Erin
//! ```

use crate::roster::Roster;
use crate::shuffle::shuffle_team;
use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

/// Format used for the date header line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shuffled blocks for every team with members, separated by a blank line
///
/// Returns an empty string when no team has members.
pub fn standup_order<R>(roster: &Roster, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let blocks: Vec<String> = roster
        .sorted_team_names()
        .into_iter()
        .filter_map(|name| roster.get(name))
        .map(|team| shuffle_team(&team.name, team.members(), rng))
        .collect();

    debug!("Rendered {} team blocks", blocks.len());
    blocks.join("\n")
}

/// Full standup text: the `# <date>` header followed by [`standup_order`]
pub fn render_standup<R>(roster: &Roster, date: NaiveDate, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    format!(
        "# {}\n{}",
        date.format(DATE_FORMAT),
        standup_order(roster, rng)
    )
}
