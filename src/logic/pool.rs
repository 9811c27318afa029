//! Team pool: the per-draw working copy of the selection's teams.

use crate::models::{Team, UNAVAILABLE_TEAM};
use rand::Rng;

/// Teams still eligible in the current draw. Created from a selection at draw start
/// and dropped when the draw ends; the selection itself is never touched.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TeamPool {
    teams: Vec<Team>,
}

impl TeamPool {
    pub fn new(teams: &[Team]) -> Self {
        Self {
            teams: teams.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t.name == name)
    }

    /// Pick a team uniformly at random and return its name.
    /// An empty pool yields [`UNAVAILABLE_TEAM`].
    pub fn draw_one<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        if self.teams.is_empty() {
            log::warn!("Team pool exhausted, handing out '{}'", UNAVAILABLE_TEAM);
            return UNAVAILABLE_TEAM.to_string();
        }
        let idx = rng.gen_range(0..self.teams.len());
        self.teams[idx].name.clone()
    }

    /// Remove every team called `name`, not only the one drawn.
    pub fn remove_all_named(&mut self, name: &str) {
        self.teams.retain(|t| t.name != name);
    }
}

/// Draw one team and return it with the pool for the next draw.
/// Without repeats, every team sharing the drawn name is gone from the returned pool.
pub fn draw_team<R: Rng + ?Sized>(
    mut pool: TeamPool,
    allow_repeats: bool,
    rng: &mut R,
) -> (String, TeamPool) {
    let name = pool.draw_one(rng);
    if !allow_repeats {
        pool.remove_all_named(&name);
    }
    (name, pool)
}
