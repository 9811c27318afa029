//! DrawOptions, Participant and DrawResult.

use crate::models::player::GroupId;
use crate::models::team::SelectionId;
use serde::{Deserialize, Serialize};

/// Team name handed out when a no-repeat draw has run out of teams.
/// Reserved: [`crate::Selection::add_team`] rejects it as a real team name.
pub const UNAVAILABLE_TEAM: &str = "-";

/// Errors from building groups, selections, catalogs and draw options.
///
/// The draw itself never fails; see [`crate::run_draw`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DrawError {
    /// A player or team name is empty after trimming.
    EmptyName,
    /// The name is reserved for the unavailable-team placeholder.
    ReservedTeamName,
    /// A player with this name is already in the group (case-insensitive).
    DuplicatePlayerName(String),
    /// No player with this name in the group.
    PlayerNotFound(String),
    /// A form field is unset (still holds the placeholder).
    MissingField(&'static str),
    /// A form field could not be parsed.
    InvalidField { field: &'static str, value: String },
    /// Teams per participant must be at least 1.
    InvalidTeamsPerParticipant(i64),
    /// The catalog document could not be parsed.
    Catalog(String),
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::EmptyName => write!(f, "Name must not be empty"),
            DrawError::ReservedTeamName => {
                write!(f, "'{}' is reserved and cannot be a team name", UNAVAILABLE_TEAM)
            }
            DrawError::DuplicatePlayerName(name) => {
                write!(f, "A player named '{}' is already in the group", name)
            }
            DrawError::PlayerNotFound(name) => write!(f, "Player '{}' not found", name),
            DrawError::MissingField(field) => write!(f, "Field '{}' must be set", field),
            DrawError::InvalidField { field, value } => {
                write!(f, "Invalid value '{}' for field '{}'", value, field)
            }
            DrawError::InvalidTeamsPerParticipant(n) => {
                write!(f, "Teams per participant must be at least 1 (got {})", n)
            }
            DrawError::Catalog(msg) => write!(f, "Invalid catalog: {}", msg),
        }
    }
}

impl std::error::Error for DrawError {}

/// How participants are derived from players.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameplayMode {
    /// Each player draws alone.
    #[default]
    Single,
    /// Every unordered pair of distinct players draws together.
    Pair,
}

impl GameplayMode {
    /// Numeric code used by form inputs (0 = single, 1 = pair).
    pub fn code(self) -> u8 {
        match self {
            GameplayMode::Single => 0,
            GameplayMode::Pair => 1,
        }
    }
}

/// Everything that determines a draw.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawOptions {
    pub group_id: GroupId,
    pub selection_id: SelectionId,
    pub teams_per_participant: u32,
    pub gameplay_mode: GameplayMode,
    pub allow_repeats: bool,
}

/// One entry of a draw: a single player or a player pair, and the teams drawn for it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub display_name: String,
    /// Filled in draw order; one entry per round.
    pub drawn_teams: Vec<String>,
}

impl Participant {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            drawn_teams: Vec::new(),
        }
    }

    /// Whether any round handed this participant the unavailable placeholder.
    pub fn has_unavailable(&self) -> bool {
        self.drawn_teams.iter().any(|t| t == UNAVAILABLE_TEAM)
    }
}

/// A finished draw: the options used and the participants with their teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawResult {
    pub options: DrawOptions,
    pub participants: Vec<Participant>,
}
