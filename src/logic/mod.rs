//! Draw logic: participants, team pool, engine, result assembly, options form.

mod engine;
mod form;
mod participants;
mod pool;
mod result;

pub use engine::{run_catalog_draw, run_draw};
pub use form::{DrawForm, PLACEHOLDER};
pub use participants::{build_participants, participant_count, teams_needed};
pub use pool::{draw_team, TeamPool};
pub use result::{assemble_result, DrawOutcome};
