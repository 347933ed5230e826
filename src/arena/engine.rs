//! Turn resolution.
//!
//! A match is `active` until no hostile living pair remains, then
//! `finished` for good (until `reset`).
//!
//! ## Turn order
//!
//! `initialize` shuffles the order of *all* contestants, dead or alive.
//! Each turn walks the living contestants in that order: the attacker is
//! `living[turn % living.len()]`, and its defender is the nearest contestant
//! after it in turn order that it may target.
//!
//! ## Asymmetric alliances
//!
//! Viability asks whether *anyone* alive can target *anyone* else alive.
//! With one-directional alliances the scheduled attacker may have no target
//! while someone else does. The attacker then forfeits its turn and the
//! next living contestant in order acts, so every call on an active match
//! lands exactly one attack.
//!
//! ## Termination
//!
//! Each attack removes at least one hit point from the cast and viability is
//! re-checked right after it, so `next_turn` finishes the match within
//! `total_hits_to_kill()` calls.

use super::config::MatchConfig;
use super::event::{MatchEvent, StallReason};
use super::result::{ContestantId, MatchResult};
use crate::combatants::{AttackOutcome, Combatant, Killable};
use crate::core::{GameRng, TeamRegistry};

/// What a call to [`Match::next_turn`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// An attack was made. The match may have finished as a result.
    Attack {
        attacker: ContestantId,
        defender: ContestantId,
        outcome: AttackOutcome,
    },
    /// No hostile pair was left, so the match finished without an attack.
    Finished(MatchResult),
    /// The match had already finished. Nothing changed.
    AlreadyFinished(MatchResult),
}

/// A contest between a fixed set of combatants.
#[derive(Clone, Debug)]
pub struct Match {
    contestants: Vec<Combatant>,
    /// Turn order as indices into `contestants`.
    order: Vec<usize>,
    turn: usize,
    result: Option<MatchResult>,
    rng: GameRng,
    events: Vec<MatchEvent>,
}

impl Match {
    /// Create and initialize a match.
    pub fn new(contestants: Vec<Combatant>, teams: &TeamRegistry, config: &MatchConfig) -> Self {
        Self::with_rng(contestants, teams, config.rng())
    }

    /// Create and initialize a match that shuffles with `rng`.
    pub fn with_rng(contestants: Vec<Combatant>, teams: &TeamRegistry, rng: GameRng) -> Self {
        let order = (0..contestants.len()).collect();
        let mut game = Self {
            contestants,
            order,
            turn: 0,
            result: None,
            rng,
            events: Vec::new(),
        };
        game.initialize(teams);
        game
    }

    /// Check whether the match can be fought and, if so, shuffle turn order.
    ///
    /// A match that cannot be fought finishes immediately.
    pub fn initialize(&mut self, teams: &TeamRegistry) {
        let living = self.living_indices();
        match self.stall_reason(&living, teams) {
            Some(reason) => {
                tracing::info!(%reason, "match cannot start");
                self.events.push(MatchEvent::NotStarted { reason });
                self.finish(teams);
            }
            None => {
                self.result = None;
                self.rng.shuffle_by_removal(&mut self.order);
                tracing::debug!(contestants = self.contestants.len(), living = living.len(), "match initialized");
            }
        }
    }

    /// Play one turn.
    pub fn next_turn(&mut self, teams: &TeamRegistry) -> TurnOutcome {
        if let Some(result) = &self.result {
            let winners = self.names_of(&result.winners(), teams);
            self.events.push(MatchEvent::AlreadyOver { winners });
            return TurnOutcome::AlreadyFinished(result.clone());
        }

        // The living list is fixed for the whole turn.
        let living = self.living_indices();
        if self.stall_reason(&living, teams).is_some() {
            return TurnOutcome::Finished(self.finish(teams));
        }

        let count = living.len();
        for skipped in 0..count {
            let attacker = living[(self.turn + skipped) % count];
            let Some(defender) = self.find_target(&living, (self.turn + skipped) % count, teams) else {
                tracing::trace!(attacker, "no target in reach, turn forfeited");
                continue;
            };
            self.turn += skipped + 1;
            let outcome = self.resolve_attack(attacker, defender, teams);
            if self.stall_reason(&self.living_indices(), teams).is_some() {
                self.finish(teams);
            }
            return TurnOutcome::Attack {
                attacker: ContestantId(attacker as u32),
                defender: ContestantId(defender as u32),
                outcome,
            };
        }

        // Unreachable while viability and targeting share `verify_target`.
        TurnOutcome::Finished(self.finish(teams))
    }

    /// Play turns until the match finishes.
    pub fn run_to_completion(&mut self, teams: &TeamRegistry) -> MatchResult {
        loop {
            match self.next_turn(teams) {
                TurnOutcome::Finished(result) | TurnOutcome::AlreadyFinished(result) => return result,
                TurnOutcome::Attack { .. } => {
                    if let Some(result) = &self.result {
                        return result.clone();
                    }
                }
            }
        }
    }

    /// Revive every contestant, rewind the turn counter and re-initialize.
    pub fn reset(&mut self, teams: &TeamRegistry) {
        for contestant in &mut self.contestants {
            contestant.reset();
        }
        self.turn = 0;
        self.result = None;
        self.initialize(teams);
    }

    /// Whether a result has been recorded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// The recorded result, once finished.
    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Winners of a finished match. Empty while active or with no winner.
    #[must_use]
    pub fn winners(&self) -> Vec<ContestantId> {
        self.result.as_ref().map(MatchResult::winners).unwrap_or_default()
    }

    /// Turns played since the last initialization.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Contestants in the order the match was created with.
    #[must_use]
    pub fn contestants(&self) -> &[Combatant] {
        &self.contestants
    }

    /// Look up a contestant by id.
    #[must_use]
    pub fn contestant(&self, id: ContestantId) -> Option<&Combatant> {
        self.contestants.get(id.index())
    }

    /// All contestants in turn order.
    #[must_use]
    pub fn turn_order(&self) -> Vec<ContestantId> {
        self.order.iter().map(|&i| ContestantId(i as u32)).collect()
    }

    /// Living contestants in turn order.
    #[must_use]
    pub fn living(&self) -> Vec<ContestantId> {
        self.living_indices()
            .into_iter()
            .map(|i| ContestantId(i as u32))
            .collect()
    }

    /// Attacks still needed to kill every living contestant.
    #[must_use]
    pub fn total_hits_to_kill(&self) -> u64 {
        self.contestants.iter().map(|c| u64::from(c.hits_to_kill())).sum()
    }

    /// Narration recorded so far.
    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Take the narration recorded so far.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Multi-line status of every contestant.
    #[must_use]
    pub fn describe(&self, teams: &TeamRegistry) -> String {
        let mut out = String::from("Match: {\n");
        for contestant in &self.contestants {
            out.push('\t');
            out.push_str(&contestant.describe(teams));
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }

    fn living_indices(&self) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|&i| self.contestants[i].is_alive())
            .collect()
    }

    /// `None` if at least one living contestant may target another.
    fn stall_reason(&self, living: &[usize], teams: &TeamRegistry) -> Option<StallReason> {
        if living.len() < 2 {
            return Some(StallReason::TooFewLiving);
        }
        let hostile = living.iter().any(|&a| {
            living
                .iter()
                .any(|&d| a != d && self.contestants[a].verify_target(&self.contestants[d], teams))
        });
        (!hostile).then_some(StallReason::AllFriendly)
    }

    /// Nearest contestant after `living[slot]` in turn order that it may target.
    fn find_target(&self, living: &[usize], slot: usize, teams: &TeamRegistry) -> Option<usize> {
        let attacker = &self.contestants[living[slot]];
        (1..living.len())
            .map(|k| living[(slot + k) % living.len()])
            .find(|&d| attacker.verify_target(&self.contestants[d], teams))
    }

    fn resolve_attack(&mut self, attacker: usize, defender: usize, teams: &TeamRegistry) -> AttackOutcome {
        let attacker_name = self.contestants[attacker].identifier(teams);
        let defender_name = self.contestants[defender].identifier(teams);
        self.events.push(MatchEvent::Attacked {
            attacker: attacker_name,
            defender: defender_name.clone(),
        });

        let (a, d) = pair_mut(&mut self.contestants, attacker, defender);
        let outcome = a.attack(d).unwrap_or(AttackOutcome::NoEffect);
        tracing::debug!(turn = self.turn, attacker, defender, ?outcome, "attack resolved");

        if outcome.is_kill() {
            self.events.push(MatchEvent::Died { name: defender_name });
        }
        outcome
    }

    /// Record the survivors as the result.
    fn finish(&mut self, teams: &TeamRegistry) -> MatchResult {
        let survivors = self
            .living_indices()
            .into_iter()
            .map(|i| ContestantId(i as u32))
            .collect();
        let result = MatchResult::from_survivors(survivors);
        let winners = self.names_of(&result.winners(), teams);
        tracing::info!(turn = self.turn, ?result, "match finished");
        self.events.push(MatchEvent::Finished { winners });
        self.result = Some(result.clone());
        result
    }

    fn names_of(&self, ids: &[ContestantId], teams: &TeamRegistry) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.contestant(id))
            .map(|c| c.identifier(teams))
            .collect()
    }
}

/// Borrow two distinct contestants, the first shared and the second mutable.
fn pair_mut(items: &mut [Combatant], first: usize, second: usize) -> (&Combatant, &mut Combatant) {
    debug_assert_ne!(first, second);
    if first < second {
        let (head, tail) = items.split_at_mut(second);
        (&head[first], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(first);
        (&tail[0], &mut head[second])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatants::{Fighter, Monster};
    use crate::core::TeamId;
    use crate::names::ComplexName;

    fn fighter(first: &str, team: TeamId) -> Combatant {
        Fighter::new(ComplexName::new(first, "Test"), team).into()
    }

    fn seeded() -> MatchConfig {
        MatchConfig::new().with_seed(42)
    }

    #[test]
    fn test_too_few_living_finishes_at_init() {
        let mut teams = TeamRegistry::new(1);
        let t = teams.create_team(&[]);
        let game = Match::new(vec![fighter("Solo", t)], &teams, &seeded());

        assert!(game.is_finished());
        assert_eq!(game.result(), Some(&MatchResult::Winner(ContestantId(0))));
        assert_eq!(
            game.events()[0],
            MatchEvent::NotStarted { reason: StallReason::TooFewLiving }
        );
    }

    #[test]
    fn test_empty_match_has_no_winner() {
        let teams = TeamRegistry::new(1);
        let game = Match::new(Vec::new(), &teams, &seeded());
        assert_eq!(game.result(), Some(&MatchResult::NoWinner));
        assert!(game.winners().is_empty());
    }

    #[test]
    fn test_all_friendly_finishes_with_joint_winners() {
        let mut teams = TeamRegistry::new(1);
        let t = teams.create_team(&[]);
        let game = Match::new(vec![fighter("A", t), fighter("B", t)], &teams, &seeded());

        assert!(game.is_finished());
        assert_eq!(game.winners(), vec![ContestantId(0), ContestantId(1)]);
        assert_eq!(
            game.events()[0],
            MatchEvent::NotStarted { reason: StallReason::AllFriendly }
        );
    }

    #[test]
    fn test_dead_contestants_do_not_count() {
        let mut teams = TeamRegistry::new(1);
        let a = teams.create_team(&[]);
        let b = teams.create_team(&[]);
        let dead: Combatant = Fighter::new(ComplexName::new("Gone", "Test"), b).with_alive(false).into();
        let game = Match::new(vec![fighter("A", a), dead], &teams, &seeded());

        assert_eq!(game.result(), Some(&MatchResult::Winner(ContestantId(0))));
    }

    #[test]
    fn test_shuffle_covers_dead_contestants() {
        let mut teams = TeamRegistry::new(1);
        let a = teams.create_team(&[]);
        let b = teams.create_team(&[]);
        let dead: Combatant = Fighter::new(ComplexName::new("Gone", "Test"), b).with_alive(false).into();
        let game = Match::new(vec![fighter("A", a), dead, fighter("B", b)], &teams, &seeded());

        let mut order = game.turn_order();
        assert_eq!(order.len(), 3);
        order.sort_unstable();
        assert_eq!(order, vec![ContestantId(0), ContestantId(1), ContestantId(2)]);
        assert_eq!(game.living().len(), 2);
    }

    #[test]
    fn test_one_directional_alliance_forfeits_turn() {
        // Red won't hit Blue, but Blue will hit Red.
        let mut teams = TeamRegistry::new(1);
        let red = teams.create_team(&[]);
        let blue = teams.create_team(&[]);
        teams.add_ally(red, blue);

        let mut game = Match::new(vec![fighter("Red", red), fighter("Blue", blue)], &teams, &seeded());
        assert!(!game.is_finished());

        let outcome = game.next_turn(&teams);
        assert_eq!(
            outcome,
            TurnOutcome::Attack {
                attacker: ContestantId(1),
                defender: ContestantId(0),
                outcome: AttackOutcome::Killed,
            }
        );
        assert!(game.is_finished());
        assert_eq!(game.winners(), vec![ContestantId(1)]);
    }

    #[test]
    fn test_attacks_nearest_hostile_in_turn_order() {
        let mut teams = TeamRegistry::new(1);
        let a = teams.create_team(&[]);
        let b = teams.create_team(&[]);
        let roster = vec![fighter("A1", a), fighter("A2", a), fighter("B1", b), fighter("B2", b)];
        let mut game = Match::new(roster, &teams, &seeded());

        let order = game.turn_order();
        let TurnOutcome::Attack { attacker, defender, .. } = game.next_turn(&teams) else {
            panic!("expected an attack");
        };
        assert_eq!(attacker, order[0]);

        let attacker_team = game.contestant(attacker).unwrap().team();
        let expected = order
            .iter()
            .skip(1)
            .copied()
            .find(|id| game.contestant(*id).unwrap().team() != attacker_team)
            .unwrap();
        assert_eq!(defender, expected);
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_finished_match_is_frozen() {
        let mut teams = TeamRegistry::new(1);
        let a = teams.create_team(&[]);
        let b = teams.create_team(&[]);
        let mut game = Match::new(vec![fighter("A", a), fighter("B", b)], &teams, &seeded());

        game.next_turn(&teams);
        assert!(game.is_finished());
        let result = game.result().cloned().unwrap();
        let turn = game.turn();
        let snapshot = game.contestants().to_vec();

        for _ in 0..3 {
            assert_eq!(game.next_turn(&teams), TurnOutcome::AlreadyFinished(result.clone()));
        }
        assert_eq!(game.turn(), turn);
        assert_eq!(game.contestants(), snapshot.as_slice());
        assert!(matches!(game.events().last(), Some(MatchEvent::AlreadyOver { .. })));
    }

    #[test]
    fn test_reset_revives_and_reinitializes() {
        let mut teams = TeamRegistry::new(1);
        let a = teams.create_team(&[]);
        let mut game = Match::new(
            vec![fighter("A", a), Monster::wild("Ogre", 3.0, &teams).into()],
            &teams,
            &seeded(),
        );
        game.run_to_completion(&teams);
        assert!(game.is_finished());

        game.reset(&teams);
        assert!(!game.is_finished());
        assert_eq!(game.turn(), 0);
        assert_eq!(game.living().len(), 2);
        assert_eq!(game.total_hits_to_kill(), 4);
    }

    #[test]
    fn test_run_to_completion_within_bound() {
        let mut teams = TeamRegistry::new(1);
        let a = teams.create_team(&[]);
        let b = teams.create_team(&[]);
        let roster = vec![
            fighter("A", a),
            fighter("B", b),
            Monster::wild("Troll", 5.0, &teams).into(),
            Monster::wild("Rat", 1.0, &teams).into(),
        ];
        let mut game = Match::new(roster, &teams, &seeded());
        let bound = game.total_hits_to_kill();

        let mut calls = 0;
        while !game.is_finished() {
            game.next_turn(&teams);
            calls += 1;
            assert!(calls <= bound);
        }
        assert!(!game.winners().is_empty());
    }

    #[test]
    fn test_narration_order() {
        let mut teams = TeamRegistry::new(1);
        let a = teams.create_named_team("Red", &[]).unwrap();
        let b = teams.create_named_team("Blue", &[]).unwrap();
        let mut game = Match::new(vec![fighter("A", a), fighter("B", b)], &teams, &seeded());
        game.drain_events();

        game.next_turn(&teams);
        let events = game.drain_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], MatchEvent::Attacked { .. }));
        assert!(matches!(events[1], MatchEvent::Died { .. }));
        assert!(matches!(events[2], MatchEvent::Finished { ref winners } if winners.len() == 1));
        assert!(game.events().is_empty());
    }

    #[test]
    fn test_describe_lists_everyone() {
        let mut teams = TeamRegistry::new(1);
        let a = teams.create_named_team("Red", &[]).unwrap();
        let game = Match::new(vec![fighter("A", a)], &teams, &seeded());
        assert_eq!(
            game.describe(&teams),
            "Match: {\n\tName: A Test, Alive: true, Team: Red\n}\n"
        );
    }
}
