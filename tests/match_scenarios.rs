//! End-to-end match scenarios.
//!
//! These drive whole matches through the public API: construction,
//! turn-by-turn resolution, winners and the frozen finished state.

use skirmish::{
    AttackOutcome, Combatant, ComplexName, ContestantId, Fighter, Killable, Match, MatchConfig,
    MatchEvent, MatchResult, Monster, Roster, TeamId, TeamRegistry, TurnOutcome,
};

fn fighter(first: &str, last: &str, team: TeamId) -> Combatant {
    Fighter::new(ComplexName::new(first, last), team).into()
}

fn config(seed: u64) -> MatchConfig {
    MatchConfig::new().with_seed(seed)
}

// =============================================================================
// Two fighters
// =============================================================================

/// One turn between two hostile fighters ends the match.
#[test]
fn test_two_fighters_one_turn() {
    for seed in 0..20 {
        let mut teams = TeamRegistry::new(seed);
        let red = teams.create_team(&[]);
        let blue = teams.create_team(&[]);
        let mut game = Match::new(
            vec![fighter("Jacob", "Dixon", red), fighter("Tim", "Marion", blue)],
            &teams,
            &config(seed),
        );
        assert!(!game.is_finished());

        let TurnOutcome::Attack { attacker, defender, outcome } = game.next_turn(&teams) else {
            panic!("expected an attack");
        };
        assert_eq!(outcome, AttackOutcome::Killed);
        assert!(game.is_finished());

        let dead: Vec<_> = game.contestants().iter().filter(|c| !c.is_alive()).collect();
        assert_eq!(dead.len(), 1);
        assert!(!game.contestant(defender).unwrap().is_alive());
        assert_eq!(game.result(), Some(&MatchResult::Winner(attacker)));
    }
}

// =============================================================================
// Monster vs fighter
// =============================================================================

/// A two-health monster survives the fighter's first hit; its own first
/// hit kills the fighter outright.
#[test]
fn test_monster_against_fighter() {
    for seed in 0..20 {
        let mut teams = TeamRegistry::new(seed);
        let heroes = teams.create_team(&[]);
        let mut game = Match::new(
            vec![
                Monster::wild("Skeleton", 2.0, &teams).into(),
                fighter("Sigma", "Balls", heroes),
            ],
            &teams,
            &config(seed),
        );
        let skeleton = ContestantId(0);
        let sigma = ContestantId(1);

        let mut fighter_hits = 0;
        while !game.is_finished() {
            match game.next_turn(&teams) {
                TurnOutcome::Attack { attacker, outcome, .. } if attacker == sigma => {
                    fighter_hits += 1;
                    if fighter_hits == 1 {
                        assert_eq!(outcome, AttackOutcome::Wounded { remaining: 1 });
                        let monster = game.contestant(skeleton).unwrap().as_monster().unwrap();
                        assert!(monster.is_alive());
                        assert_eq!(monster.health(), 1);
                    }
                }
                TurnOutcome::Attack { attacker, outcome, .. } => {
                    assert_eq!(attacker, skeleton);
                    assert_eq!(outcome, AttackOutcome::Killed);
                    assert!(!game.contestant(sigma).unwrap().is_alive());
                }
                other => panic!("unexpected {other:?}"),
            }
        }

        let winners = game.winners();
        assert_eq!(winners.len(), 1);
        assert!(game.contestant(winners[0]).unwrap().is_alive());
    }
}

// =============================================================================
// Team battles
// =============================================================================

/// Two teams of two fight until one team is gone; only that team's members
/// can be among the winners.
#[test]
fn test_two_teams_of_two() {
    for seed in 0..20 {
        let mut teams = TeamRegistry::new(seed);
        let wolves = teams.create_named_team("Wolves", &[]).unwrap();
        let ravens = teams.create_named_team("Ravens", &[]).unwrap();

        let mut game = Match::new(
            vec![
                fighter("Zackery", "Fisher", wolves),
                fighter("Tim", "Marion", wolves),
                fighter("Jacob", "Dixon", ravens),
                fighter("Sigma", "Balls", ravens),
            ],
            &teams,
            &config(seed),
        );
        assert!(!game.is_finished());

        game.run_to_completion(&teams);
        let winners = game.winners();
        assert!(!winners.is_empty() && winners.len() <= 2);
        let team = game.contestant(winners[0]).unwrap().team();
        let mut living = game.living();
        living.sort_unstable();
        assert_eq!(living, winners);
        for contestant in game.contestants() {
            if contestant.team() != team {
                assert!(!contestant.is_alive());
            }
        }
        assert!(game.turn() >= 2 && game.turn() <= 3);
    }
}

/// A team of two sturdy monsters wipes out two fighters and both share
/// the win.
#[test]
fn test_joint_winners() {
    for seed in 0..20 {
        let mut teams = TeamRegistry::new(seed);
        let wolves = teams.create_named_team("Wolves", &[]).unwrap();
        let ravens = teams.create_named_team("Ravens", &[]).unwrap();

        let mut game = Match::new(
            vec![
                Monster::new("Grey Wolf", 10.0, wolves).into(),
                Monster::new("Dire Wolf", 10.0, wolves).into(),
                fighter("Jacob", "Dixon", ravens),
                fighter("Sigma", "Balls", ravens),
            ],
            &teams,
            &config(seed),
        );

        let result = game.run_to_completion(&teams);
        assert_eq!(result, MatchResult::Winners(vec![ContestantId(0), ContestantId(1)]));
        assert!(game.winners().iter().all(|&w| game.contestant(w).unwrap().team() == wolves));
    }
}

/// Allied teams never start fighting.
#[test]
fn test_allied_teams_finish_at_start() {
    let mut teams = TeamRegistry::new(4);
    let a = teams.create_team(&[]);
    let b = teams.create_team(&[]);
    teams.add_ally_symmetric(a, b);

    let game = Match::new(
        vec![fighter("A", "One", a), fighter("B", "Two", b), fighter("C", "Three", a)],
        &teams,
        &config(4),
    );
    assert!(game.is_finished());
    assert_eq!(game.winners().len(), 3);
    assert_eq!(game.turn(), 0);
}

/// Alliances added after a fight started are honoured from the next turn on.
#[test]
fn test_late_alliance_ends_match() {
    let mut teams = TeamRegistry::new(9);
    let a = teams.create_team(&[]);
    let b = teams.create_team(&[]);
    let mut game = Match::new(
        vec![Monster::new("Ogre", 5.0, a).into(), Monster::new("Troll", 5.0, b).into()],
        &teams,
        &config(9),
    );
    game.next_turn(&teams);
    assert!(!game.is_finished());

    teams.add_ally_symmetric(a, b);
    assert!(matches!(game.next_turn(&teams), TurnOutcome::Finished(MatchResult::Winners(_))));
}

// =============================================================================
// Finished state
// =============================================================================

/// Turning a finished match changes nothing and re-reports the same result.
#[test]
fn test_finished_match_rereports() {
    let mut teams = TeamRegistry::new(2);
    let a = teams.create_team(&[]);
    let mut game = Match::new(
        vec![fighter("A", "One", a), Monster::wild("Rat", 1.0, &teams).into()],
        &teams,
        &config(2),
    );
    let first = game.run_to_completion(&teams);
    let turn = game.turn();
    let before = game.contestants().to_vec();
    game.drain_events();

    assert_eq!(game.next_turn(&teams), TurnOutcome::AlreadyFinished(first.clone()));
    assert_eq!(game.turn(), turn);
    assert_eq!(game.contestants(), before.as_slice());
    assert_eq!(game.result(), Some(&first));

    let events = game.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], MatchEvent::AlreadyOver { .. }));
}

/// Reset brings a finished match back to life and it can be replayed.
#[test]
fn test_reset_and_replay() {
    let mut teams = TeamRegistry::new(5);
    let cast = Roster::default_cast().build(&mut teams).unwrap();
    let mut game = Match::new(cast, &teams, &config(5));
    let bound = game.total_hits_to_kill();
    assert_eq!(bound, 6);

    game.run_to_completion(&teams);
    game.reset(&teams);
    assert!(!game.is_finished());
    assert_eq!(game.total_hits_to_kill(), bound);
    assert!(game.contestants().iter().all(Killable::is_alive));

    let mut calls = 0;
    while !game.is_finished() {
        game.next_turn(&teams);
        calls += 1;
    }
    assert!(calls <= bound);
    assert_eq!(game.winners().len(), 1);
}

/// Each death is narrated exactly once.
#[test]
fn test_one_death_notice_per_kill() {
    let mut teams = TeamRegistry::new(8);
    let cast = Roster::default_cast().build(&mut teams).unwrap();
    let mut game = Match::new(cast, &teams, &config(8));
    game.run_to_completion(&teams);
    game.next_turn(&teams);

    let deaths = game
        .events()
        .iter()
        .filter(|e| matches!(e, MatchEvent::Died { .. }))
        .count();
    assert_eq!(deaths, game.contestants().len() - 1);
}
