//! Roster file loading
//!
//! A roster is a TOML document whose top-level tables are teams:
//!
//! ```toml
//! [Subteam-1]
//! members = ["Alice", "Bob", "Carol", "David"]
//!
//! ["Subteam 2"]       # quoted keys may contain whitespace
//! members = ["Erin", "Frank"]
//!
//! ["On Leave"]        # no members key: the team is kept but never printed
//! ```

use super::{Roster, SourcePosition, Team};
use crate::error::{common, ErrorCode, ErrorExt, Result, StandupError};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use toml::Spanned;
use tracing::{debug, trace};

#[derive(Debug, Deserialize)]
struct TeamSection {
    #[serde(default)]
    members: Option<Vec<String>>,
}

/// Read and parse the roster at `path`
pub fn load_roster(path: &Path) -> Result<Roster> {
    debug!("Loading roster from {}", path.display());

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(common::roster_not_found(path).with_source(e));
        }
        Err(e) => {
            return Err(e).to_roster_error(
                ErrorCode::ROSTER_READ_FAILED,
                format!("Failed to read roster file: {}", path.display()),
                path,
            );
        }
    };

    parse(&source).to_roster_error(
        ErrorCode::ROSTER_PARSE_ERROR,
        format!("Failed to parse roster file: {}", path.display()),
        path,
    )
}

/// Parse roster text that did not come from a file
pub fn parse_roster(source: &str) -> Result<Roster> {
    parse(source).map_err(|e| {
        StandupError::roster_with_code(ErrorCode::ROSTER_PARSE_ERROR, "Failed to parse roster", None)
            .with_source(e)
    })
}

fn parse(source: &str) -> std::result::Result<Roster, toml::de::Error> {
    let sections: HashMap<String, Spanned<TeamSection>> = toml::from_str(source)?;

    let roster = Roster::from_teams(sections.into_iter().map(|(name, section)| {
        let position = SourcePosition::from_offset(source, section.span().start);
        let members = section.into_inner().members;
        trace!(
            team = %name,
            line = position.line,
            members = members.as_ref().map_or(0, Vec::len),
            "Parsed team"
        );
        Team::new(name, members, position)
    }));

    debug!("Parsed roster with {} teams", roster.len());
    Ok(roster)
}
