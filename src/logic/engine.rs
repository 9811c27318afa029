//! Draw engine: deal teams to participants round by round.

use crate::logic::participants::{build_participants, teams_needed};
use crate::logic::pool::{draw_team, TeamPool};
use crate::logic::result::{assemble_result, DrawOutcome};
use crate::models::{Catalog, DrawOptions, Group, Selection, UNAVAILABLE_TEAM};
use rand::Rng;

/// Run a draw.
///
/// Returns `None` without drawing anything when the group or selection is missing or empty.
/// Otherwise, for each of `teams_per_participant` rounds, every participant (in builder order)
/// draws one team. Without repeats the drawn name leaves the pool at once, so a later
/// participant in the same round can already miss it.
pub fn run_draw<R: Rng + ?Sized>(
    options: &DrawOptions,
    group: Option<&Group>,
    selection: Option<&Selection>,
    rng: &mut R,
) -> Option<DrawOutcome> {
    let players = group.map(|g| g.players.as_slice()).unwrap_or_default();
    let teams = selection.map(|s| s.teams.as_slice()).unwrap_or_default();

    if players.is_empty() || teams.is_empty() {
        log::info!(
            "Skipping draw: group {} has {} player(s), selection {} has {} team(s)",
            options.group_id,
            players.len(),
            options.selection_id,
            teams.len()
        );
        return None;
    }

    let mut participants = build_participants(players, options.gameplay_mode);
    log::debug!(
        "Drawing {} round(s) for {} participant(s) from {} team(s), repeats {}",
        options.teams_per_participant,
        participants.len(),
        teams.len(),
        if options.allow_repeats { "allowed" } else { "disallowed" }
    );

    if !options.allow_repeats {
        let needed = teams_needed(
            players.len(),
            options.gameplay_mode,
            options.teams_per_participant,
        );
        let available = selection.map_or(0, Selection::distinct_team_count);
        if needed > available {
            log::warn!(
                "Draw needs {} team(s) without repeats but only {} are distinct; the rest get '{}'",
                needed,
                available,
                UNAVAILABLE_TEAM
            );
        }
    }

    let mut pool = TeamPool::new(teams);
    for _ in 0..options.teams_per_participant {
        for participant in participants.iter_mut() {
            let (team_name, rest) = draw_team(pool, options.allow_repeats, rng);
            pool = rest;
            participant.drawn_teams.push(team_name);
        }
    }

    Some(assemble_result(*options, participants))
}

/// Look up the group and selection named by `options` and run the draw.
pub fn run_catalog_draw<R: Rng + ?Sized>(
    options: &DrawOptions,
    catalog: &Catalog,
    rng: &mut R,
) -> Option<DrawOutcome> {
    run_draw(
        options,
        catalog.group(options.group_id),
        catalog.selection(options.selection_id),
        rng,
    )
}
