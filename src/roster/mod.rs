//! Team roster model
//!
//! A roster maps team names to their members. Teams are stored in a
//! `HashMap`, so declaration order is not available from iteration; each
//! [`Team`] instead carries the [`SourcePosition`] it was declared at, and
//! [`Roster::sorted_team_names`] orders by that.

pub mod loader;

pub use loader::{load_roster, parse_roster};

use std::collections::HashMap;
use tracing::{debug, trace};

/// Where a team was declared in the roster source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SourcePosition {
    /// Byte offset of the declaration
    pub offset: usize,
    /// 1-based line number of the declaration
    pub line: usize,
}

impl SourcePosition {
    /// Compute the position of `offset` within `source`
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let line = source.as_bytes()[..offset]
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
            + 1;
        Self { offset, line }
    }
}

/// A named team and its members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    /// `None` when the team declared no `members` key
    pub members: Option<Vec<String>>,
    pub position: SourcePosition,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        members: Option<Vec<String>>,
        position: SourcePosition,
    ) -> Self {
        Self {
            name: name.into(),
            members,
            position,
        }
    }

    /// Members as a slice, empty when absent
    pub fn members(&self) -> &[String] {
        self.members.as_deref().unwrap_or_default()
    }

    pub fn has_members(&self) -> bool {
        !self.members().is_empty()
    }
}

/// All teams read from one roster file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    teams: HashMap<String, Team>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from teams; a later team replaces an earlier one with
    /// the same name.
    pub fn from_teams(teams: impl IntoIterator<Item = Team>) -> Self {
        let mut roster = Self::new();
        for team in teams {
            roster.insert(team);
        }
        roster
    }

    pub fn insert(&mut self, team: Team) -> Option<Team> {
        self.teams.insert(team.name.clone(), team)
    }

    pub fn get(&self, name: &str) -> Option<&Team> {
        self.teams.get(name)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Names of teams with at least one member, in declaration order
    pub fn sorted_team_names(&self) -> Vec<&str> {
        let mut teams: Vec<&Team> = self
            .teams
            .values()
            .filter(|team| {
                let keep = team.has_members();
                if !keep {
                    trace!(team = %team.name, line = team.position.line, "Skipping team without members");
                }
                keep
            })
            .collect();

        teams.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.name.cmp(&b.name))
        });

        debug!(
            "Resolved {} of {} teams with members",
            teams.len(),
            self.teams.len()
        );

        teams.into_iter().map(|team| team.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: usize) -> SourcePosition {
        SourcePosition { offset, line: 1 }
    }

    fn members(names: &[&str]) -> Option<Vec<String>> {
        Some(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_source_position_from_offset() {
        let source = "[a]\nmembers = []\n\n[b]\n";
        let pos = SourcePosition::from_offset(source, source.find("[b]").unwrap());
        assert_eq!(pos.line, 4);
        assert_eq!(pos.offset, 18);

        assert_eq!(SourcePosition::from_offset(source, 0).line, 1);
        // Offsets past the end clamp to the end of the source
        assert_eq!(SourcePosition::from_offset(source, 1000).offset, source.len());
    }

    #[test]
    fn test_sorted_team_names_follows_declaration_order() {
        // Insert in an order unrelated to declaration position
        let roster = Roster::from_teams([
            Team::new("zeta", members(&["Zoe"]), at(50)),
            Team::new("alpha", members(&["Al"]), at(300)),
            Team::new("mid", members(&["Mo"]), at(120)),
            Team::new("first", members(&["Fi"]), at(0)),
        ]);

        assert_eq!(
            roster.sorted_team_names(),
            vec!["first", "zeta", "mid", "alpha"]
        );
    }

    #[test]
    fn test_sorted_team_names_skips_empty_and_absent() {
        let roster = Roster::from_teams([
            Team::new("subteam 1", Some(vec![]), at(1)),
            Team::new("subteam-2", members(&["Alice", "Bob"]), at(20)),
            Team::new("subteam 3", None, at(60)),
        ]);

        assert_eq!(roster.sorted_team_names(), vec!["subteam-2"]);
    }

    #[test]
    fn test_sorted_team_names_all_empty() {
        let roster = Roster::from_teams([
            Team::new("subteam 1", None, at(1)),
            Team::new("subteam-2", None, at(14)),
            Team::new("subteam 3", Some(vec![]), at(27)),
        ]);

        assert!(roster.sorted_team_names().is_empty());
        assert!(Roster::new().sorted_team_names().is_empty());
    }

    #[test]
    fn test_team_members_accessors() {
        let absent = Team::new("a", None, at(0));
        assert!(absent.members().is_empty());
        assert!(!absent.has_members());

        let present = Team::new("b", members(&["Erin"]), at(0));
        assert_eq!(present.members(), ["Erin".to_string()]);
        assert!(present.has_members());
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut roster = Roster::new();
        assert!(roster.insert(Team::new("a", None, at(0))).is_none());
        let previous = roster.insert(Team::new("a", members(&["X"]), at(5)));
        assert!(previous.is_some());
        assert_eq!(roster.len(), 1);
        assert!(roster.get("a").unwrap().has_members());
    }
}
