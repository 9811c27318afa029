//! Integration tests for the participant builder.

use team_draw::{build_participants, participant_count, teams_needed, GameplayMode, Player};

fn players(names: &[&str]) -> Vec<Player> {
    names.iter().map(|n| Player::new(*n)).collect()
}

fn names(participants: &[team_draw::Participant]) -> Vec<&str> {
    participants.iter().map(|p| p.display_name.as_str()).collect()
}

#[test]
fn single_mode_keeps_player_order() {
    let ps = build_participants(&players(&["Ann", "Bob", "Cid"]), GameplayMode::Single);
    assert_eq!(names(&ps), vec!["Ann", "Bob", "Cid"]);
    assert!(ps.iter().all(|p| p.drawn_teams.is_empty()));
}

#[test]
fn pair_mode_orders_by_first_then_second_player() {
    let ps = build_participants(&players(&["A", "B", "C"]), GameplayMode::Pair);
    assert_eq!(names(&ps), vec!["A & B", "A & C", "B & C"]);
}

#[test]
fn pair_mode_four_players() {
    let ps = build_participants(&players(&["A", "B", "C", "D"]), GameplayMode::Pair);
    assert_eq!(
        names(&ps),
        vec!["A & B", "A & C", "A & D", "B & C", "B & D", "C & D"]
    );
}

#[test]
fn pair_mode_count_is_n_choose_2() {
    for n in 0usize..8 {
        let ps: Vec<Player> = (0..n).map(|i| Player::new(format!("P{i}"))).collect();
        let built = build_participants(&ps, GameplayMode::Pair);
        assert_eq!(built.len(), n * n.saturating_sub(1) / 2, "n = {n}");
        assert_eq!(built.len(), participant_count(n, GameplayMode::Pair));
    }
}

#[test]
fn pair_mode_needs_two_players() {
    assert!(build_participants(&[], GameplayMode::Pair).is_empty());
    assert!(build_participants(&players(&["Solo"]), GameplayMode::Pair).is_empty());
}

#[test]
fn single_mode_count_matches_players() {
    for n in 0usize..6 {
        let ps: Vec<Player> = (0..n).map(|i| Player::new(format!("P{i}"))).collect();
        assert_eq!(build_participants(&ps, GameplayMode::Single).len(), n);
        assert_eq!(participant_count(n, GameplayMode::Single), n);
    }
}

#[test]
fn teams_needed_counts_all_slots() {
    assert_eq!(teams_needed(3, GameplayMode::Single, 2), 6);
    assert_eq!(teams_needed(4, GameplayMode::Pair, 3), 18);
    assert_eq!(teams_needed(1, GameplayMode::Pair, 5), 0);
}

#[test]
fn teams_needed_saturates_instead_of_overflowing() {
    assert_eq!(teams_needed(usize::MAX, GameplayMode::Single, u32::MAX), usize::MAX);
    assert_eq!(teams_needed(usize::MAX, GameplayMode::Pair, 2), usize::MAX);
}
