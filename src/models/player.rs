//! Player and Group data structures.

use crate::models::draw::DrawError;
use serde::{Deserialize, Serialize};

/// Identifier of a group (chosen by the host application).
pub type GroupId = u32;

/// A player; identity within a group is the name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An ordered list of players. Order matters: it drives participant order in a draw.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Group {
    /// Create an empty group.
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            players: Vec::new(),
        }
    }

    /// Create a group from player names, in order. Names are taken as-is.
    pub fn with_players<I, S>(id: GroupId, name: impl Into<String>, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Player::new).collect(),
            ..Self::new(id, name)
        }
    }

    /// Append a player. Names are trimmed and must be unique (case-insensitive).
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), DrawError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(DrawError::EmptyName);
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(DrawError::DuplicatePlayerName(name_trimmed.to_string()));
        }
        self.players.push(Player::new(name_trimmed));
        Ok(())
    }

    /// Remove a player by name (exact match).
    pub fn remove_player(&mut self, name: &str) -> Result<(), DrawError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| DrawError::PlayerNotFound(name.to_string()))?;
        self.players.remove(idx);
        Ok(())
    }
}
