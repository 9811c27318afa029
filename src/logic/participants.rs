//! Participant builder: players to draw participants, per gameplay mode.

use crate::models::{GameplayMode, Participant, Player};

/// Build the participants for a draw, all with no teams yet.
///
/// - Single: one participant per player, in player order.
/// - Pair: one participant per unordered pair, `"<a> & <b>"`, ordered by the first player's
///   index and then the second's (A&B, A&C, B&C for [A, B, C]). Fewer than 2 players gives none.
pub fn build_participants(players: &[Player], mode: GameplayMode) -> Vec<Participant> {
    match mode {
        GameplayMode::Single => players
            .iter()
            .map(|p| Participant::new(p.name.as_str()))
            .collect(),
        GameplayMode::Pair => players
            .iter()
            .enumerate()
            .flat_map(|(i, first)| {
                players[i + 1..]
                    .iter()
                    .map(move |second| {
                        Participant::new(format!("{} & {}", first.name, second.name))
                    })
            })
            .collect(),
    }
}

/// Number of participants `build_participants` yields for `player_count` players.
pub fn participant_count(player_count: usize, mode: GameplayMode) -> usize {
    match mode {
        GameplayMode::Single => player_count,
        GameplayMode::Pair if player_count % 2 == 0 => {
            (player_count / 2).saturating_mul(player_count.saturating_sub(1))
        }
        GameplayMode::Pair => player_count.saturating_mul(player_count.saturating_sub(1) / 2),
    }
}

/// Teams a draw hands out in total; saturates instead of overflowing.
pub fn teams_needed(player_count: usize, mode: GameplayMode, teams_per_participant: u32) -> usize {
    let per_participant = usize::try_from(teams_per_participant).unwrap_or(usize::MAX);
    participant_count(player_count, mode).saturating_mul(per_participant)
}
