//! Team and Selection.

use crate::models::draw::{DrawError, UNAVAILABLE_TEAM};
use serde::{Deserialize, Serialize};

/// Identifier of a selection (chosen by the host application).
pub type SelectionId = u32;

/// A team that can be drawn. Two teams with the same name are interchangeable.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The teams available for a draw. Duplicate names are allowed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub id: SelectionId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Selection {
    pub fn new(id: SelectionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            teams: Vec::new(),
        }
    }

    pub fn with_teams<I, S>(id: SelectionId, name: impl Into<String>, teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            teams: teams.into_iter().map(Team::new).collect(),
            ..Self::new(id, name)
        }
    }

    /// Append a team (trimmed, non-empty, not the unavailable placeholder).
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<(), DrawError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(DrawError::EmptyName);
        }
        if name_trimmed == UNAVAILABLE_TEAM {
            return Err(DrawError::ReservedTeamName);
        }
        self.teams.push(Team::new(name_trimmed));
        Ok(())
    }

    /// Number of distinct team names; the most a no-repeat draw can hand out.
    pub fn distinct_team_count(&self) -> usize {
        let mut names: Vec<&str> = self.teams.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}
