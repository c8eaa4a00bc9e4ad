//! # random-standup
//!
//! Randomize the speaking order of a standup meeting from a team roster.
//!
//! ## Usage
//!
//! ```bash
//! random-standup [--seed N] [--date YYYY-MM-DD] <roster.toml>
//! ```
//!
//! ## Modules
//!
//! - `cli` - Argument parsing and run orchestration
//! - `error` - Coded error types
//! - `roster` - Roster model and TOML loading with declaration order
//! - `shuffle` - Uniform shuffling of a team's members
//! - `standup` - Assembly of the dated standup text
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use random_standup::roster::parse_roster;
//! use random_standup::standup::render_standup;
//!
//! # fn example() -> anyhow::Result<()> {
//! let roster = parse_roster("[Core]\nmembers = [\"Alice\", \"Bob\"]\n")?;
//! let date = NaiveDate::from_ymd_opt(2021, 3, 27).unwrap();
//! let text = render_standup(&roster, date, &mut StdRng::seed_from_u64(7));
//! assert!(text.starts_with("# 2021-03-27\n## Core\n"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
pub mod cli;
pub mod error;
pub mod roster;
pub mod shuffle;
pub mod standup;
