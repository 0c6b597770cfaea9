//! Integration tests for the match lifecycle: create, edit, finalize, delete.

use padel_league_web::{
    create_match, delete_match, edit_match, finalize_match, list_active_matches, list_history,
    rank_by, register_player, totals, League, LeagueError, Level, MatchStatus, Metric,
    PairingMode, PlayerId, Score, Side,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const FOUR: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];

fn league_with(names: &[&str]) -> League {
    let mut league = League::new();
    for name in names {
        register_player(&mut league, name, Level::Beginner).unwrap();
    }
    league
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn id_of(league: &League, name: &str) -> PlayerId {
    league.player_by_name(name).unwrap().id
}

#[test]
fn create_requires_four_registered_players() {
    let mut league = league_with(&["Alice", "Bob", "Carol"]);
    assert_eq!(
        create_match(
            &mut league,
            &["Alice", "Bob", "Carol", "Carol"],
            PairingMode::Manual,
            &mut rng(),
        ),
        Err(LeagueError::InsufficientPlayers { registered: 3 })
    );
    assert!(league.matches().is_empty());
}

#[test]
fn create_rejects_repeated_player() {
    let mut league = league_with(&FOUR);
    assert_eq!(
        create_match(
            &mut league,
            &["Alice", "Bob", "Alice", "Dave"],
            PairingMode::Manual,
            &mut rng(),
        ),
        Err(LeagueError::DuplicatePlayerInMatch("Alice".to_string()))
    );
    assert!(league.matches().is_empty());
}

#[test]
fn create_rejects_unknown_player() {
    let mut league = league_with(&FOUR);
    assert_eq!(
        create_match(
            &mut league,
            &["Alice", "Bob", "Carol", "Zed"],
            PairingMode::Manual,
            &mut rng(),
        ),
        Err(LeagueError::PlayerNotFound("Zed".to_string()))
    );
    assert!(league.matches().is_empty());
}

#[test]
fn names_are_trimmed_like_registration() {
    let mut league = league_with(&FOUR);
    let m = create_match(
        &mut league,
        &[" Alice", "Bob ", " Carol ", "Dave"],
        PairingMode::Manual,
        &mut rng(),
    )
    .unwrap();
    assert_eq!(m.pair_a, [id_of(&league, "Alice"), id_of(&league, "Bob")]);
    assert_eq!(
        create_match(
            &mut league,
            &["Alice", " Alice ", "Carol", "Dave"],
            PairingMode::Manual,
            &mut rng(),
        ),
        Err(LeagueError::DuplicatePlayerInMatch("Alice".to_string()))
    );
}

#[test]
fn manual_pairing_keeps_given_order() {
    let mut league = league_with(&FOUR);
    let m = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    assert_eq!(m.pair_a, [id_of(&league, "Alice"), id_of(&league, "Bob")]);
    assert_eq!(m.pair_b, [id_of(&league, "Carol"), id_of(&league, "Dave")]);
    assert_eq!(m.status, MatchStatus::Active);
    assert_eq!(m.score, None);
    assert_eq!(m.winner, None);
}

#[test]
fn random_pairing_is_deterministic_for_a_seed() {
    let mut league = league_with(&FOUR);
    let m = create_match(&mut league, &FOUR, PairingMode::Random, &mut rng()).unwrap();

    let mut expected: Vec<PlayerId> = FOUR.iter().map(|n| id_of(&league, n)).collect();
    expected.shuffle(&mut rng());
    assert_eq!(m.pair_a, [expected[0], expected[1]]);
    assert_eq!(m.pair_b, [expected[2], expected[3]]);

    let mut all = m.player_ids().to_vec();
    all.sort();
    let mut registered: Vec<PlayerId> = league.players().iter().map(|p| p.id).collect();
    registered.sort();
    assert_eq!(all, registered);
}

#[test]
fn match_ids_increase_and_are_not_reused() {
    let mut league = league_with(&FOUR);
    let first = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    delete_match(&mut league, first.id).unwrap();
    let second = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    assert!(second.id > first.id);
}

#[test]
fn edit_changes_pairing_without_touching_stats() {
    let mut league = league_with(&["Alice", "Bob", "Carol", "Dave", "Erin"]);
    let m = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    let edited = edit_match(
        &mut league,
        m.id,
        &["Erin", "Bob", "Carol", "Alice"],
        PairingMode::Manual,
        &mut rng(),
    )
    .unwrap();
    assert_eq!(edited.pair_a, [id_of(&league, "Erin"), id_of(&league, "Bob")]);
    assert_eq!(league.get_match(m.id), Some(&edited));
    assert_eq!(totals(league.players()).matches_played, 0);
}

#[test]
fn edit_validates_like_create() {
    let mut league = league_with(&FOUR);
    let m = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    assert_eq!(
        edit_match(
            &mut league,
            m.id,
            &["Bob", "Bob", "Carol", "Dave"],
            PairingMode::Manual,
            &mut rng(),
        ),
        Err(LeagueError::DuplicatePlayerInMatch("Bob".to_string()))
    );
    assert_eq!(
        edit_match(&mut league, 99, &FOUR, PairingMode::Manual, &mut rng()),
        Err(LeagueError::MatchNotFound(99))
    );
    assert_eq!(league.get_match(m.id), Some(&m));
}

#[test]
fn edit_of_finalized_match_is_rejected() {
    let mut league = league_with(&FOUR);
    let m = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    finalize_match(&mut league, m.id, 6, 3).unwrap();
    assert_eq!(
        edit_match(&mut league, m.id, &FOUR, PairingMode::Random, &mut rng()),
        Err(LeagueError::MatchAlreadyFinalized(m.id))
    );
}

#[test]
fn finalize_scenario_updates_all_four_players() {
    let mut league = league_with(&FOUR);
    let m = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    let done = finalize_match(&mut league, m.id, 21, 15).unwrap();

    assert_eq!(done.status, MatchStatus::Finalized);
    assert_eq!(done.score, Some(Score { a: 21, b: 15 }));
    assert_eq!(done.winner, Some(Side::A));

    for name in ["Alice", "Bob"] {
        let p = league.player_by_name(name).unwrap();
        assert_eq!((p.matches_played, p.wins, p.losses), (1, 1, 0));
        assert_eq!((p.points_for, p.points_against, p.diff()), (21, 15, 6));
    }
    for name in ["Carol", "Dave"] {
        let p = league.player_by_name(name).unwrap();
        assert_eq!((p.matches_played, p.wins, p.losses), (1, 0, 1));
        assert_eq!((p.points_for, p.points_against, p.diff()), (15, 21, -6));
    }

    let ranked = rank_by(league.players(), Metric::PointsFor);
    assert_eq!(ranked[0].name, "Alice");
    assert_eq!(ranked[1].name, "Bob");

    let history = list_history(&league, 10);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].match_id, m.id);
    assert_eq!(history[0].pair_a, "Alice & Bob");
    assert_eq!(history[0].pair_b, "Carol & Dave");
    assert_eq!(history[0].result, "21-15");
    assert_eq!(history[0].winner, "Alice & Bob");
}

#[test]
fn pair_b_can_win() {
    let mut league = league_with(&FOUR);
    let m = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    let done = finalize_match(&mut league, m.id, 4, 6).unwrap();
    assert_eq!(done.winner, Some(Side::B));
    let carol = league.player_by_name("Carol").unwrap();
    assert_eq!((carol.wins, carol.points_for, carol.points_against), (1, 6, 4));
    let alice = league.player_by_name("Alice").unwrap();
    assert_eq!((alice.losses, alice.points_for, alice.points_against), (1, 4, 6));
    assert_eq!(list_history(&league, 1)[0].winner, "Carol & Dave");
}

#[test]
fn tie_is_rejected_and_nothing_changes() {
    let mut league = league_with(&FOUR);
    let m = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    let players_before = league.players().to_vec();
    assert_eq!(
        finalize_match(&mut league, m.id, 10, 10),
        Err(LeagueError::TieScoreNotAllowed)
    );
    assert_eq!(league.get_match(m.id).unwrap().status, MatchStatus::Active);
    assert_eq!(league.players(), players_before.as_slice());
    assert!(league.history().is_empty());
}

#[test]
fn second_finalize_fails_without_mutation() {
    let mut league = league_with(&FOUR);
    let m = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    finalize_match(&mut league, m.id, 21, 15).unwrap();
    let players_before = league.players().to_vec();

    for (a, b) in [(21, 15), (3, 21), (7, 7)] {
        assert_eq!(
            finalize_match(&mut league, m.id, a, b),
            Err(LeagueError::MatchAlreadyFinalized(m.id))
        );
    }
    assert_eq!(league.players(), players_before.as_slice());
    assert_eq!(league.history().len(), 1);
    assert_eq!(league.get_match(m.id).unwrap().score, Some(Score { a: 21, b: 15 }));
}

#[test]
fn overflowing_score_is_rejected_before_any_player_changes() {
    let mut league = league_with(&FOUR);
    let first = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    let second = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    finalize_match(&mut league, first.id, 3_000_000_000, 1).unwrap();
    let players_before = league.players().to_vec();

    assert_eq!(
        finalize_match(&mut league, second.id, 3_000_000_000, 1),
        Err(LeagueError::StatsOverflow("Alice".to_string()))
    );
    assert_eq!(league.players(), players_before.as_slice());
    assert_eq!(league.get_match(second.id).unwrap().status, MatchStatus::Active);
    assert_eq!(league.history().len(), 1);
}

#[test]
fn finalize_unknown_match_fails() {
    let mut league = league_with(&FOUR);
    assert_eq!(
        finalize_match(&mut league, 7, 21, 15),
        Err(LeagueError::MatchNotFound(7))
    );
}

#[test]
fn points_stay_zero_sum_across_many_matches() {
    let names = ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank"];
    let mut league = league_with(&names);
    let mut r = rng();
    let scores = [(21, 15), (9, 21), (21, 19), (30, 28), (2, 21)];
    for (i, (a, b)) in scores.into_iter().enumerate() {
        let mut pick: Vec<&str> = names.to_vec();
        pick.rotate_left(i);
        let four = [pick[0], pick[1], pick[2], pick[3]];
        let m = create_match(&mut league, &four, PairingMode::Random, &mut r).unwrap();
        finalize_match(&mut league, m.id, a, b).unwrap();
    }
    let t = totals(league.players());
    assert_eq!(t.points_for, t.points_against);
    assert_eq!(t.matches_played, 4 * scores.len() as u64);
}

#[test]
fn delete_removes_match_and_history_but_not_stats() {
    let mut league = league_with(&FOUR);
    let m = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    finalize_match(&mut league, m.id, 21, 15).unwrap();

    let removed = delete_match(&mut league, m.id).unwrap();
    assert_eq!(removed.id, m.id);
    assert!(league.get_match(m.id).is_none());
    assert!(league.history().is_empty());
    assert_eq!(league.player_by_name("Alice").unwrap().wins, 1);
    assert_eq!(
        delete_match(&mut league, m.id),
        Err(LeagueError::MatchNotFound(m.id))
    );
}

#[test]
fn active_list_excludes_finalized() {
    let mut league = league_with(&FOUR);
    let first = create_match(&mut league, &FOUR, PairingMode::Manual, &mut rng()).unwrap();
    let second = create_match(&mut league, &FOUR, PairingMode::Random, &mut rng()).unwrap();
    finalize_match(&mut league, first.id, 21, 15).unwrap();
    let active: Vec<_> = list_active_matches(&league).iter().map(|m| m.id).collect();
    assert_eq!(active, [second.id]);
}
