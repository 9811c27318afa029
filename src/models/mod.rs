//! Data structures for a team draw: players, teams, options, results.

mod catalog;
mod draw;
mod player;
mod team;

pub use catalog::Catalog;
pub use draw::{DrawError, DrawOptions, DrawResult, GameplayMode, Participant, UNAVAILABLE_TEAM};
pub use player::{Group, GroupId, Player};
pub use team::{Selection, SelectionId, Team};
