//! Team draw: library with models and draw logic.

pub mod logic;
pub mod models;

pub use logic::{
    assemble_result, build_participants, draw_team, participant_count, run_catalog_draw, run_draw,
    teams_needed, DrawForm, DrawOutcome, TeamPool, PLACEHOLDER,
};
pub use models::{
    Catalog, DrawError, DrawOptions, DrawResult, GameplayMode, Group, GroupId, Participant, Player,
    Selection, SelectionId, Team, UNAVAILABLE_TEAM,
};
