//! The capability every combatant shares.

use serde::{Deserialize, Serialize};

use crate::core::{TeamId, TeamRegistry};

/// What an attack did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// The target died from this attack.
    Killed,
    /// The target lost health but survived.
    Wounded { remaining: u32 },
    /// The target was already dead.
    NoEffect,
}

impl AttackOutcome {
    #[must_use]
    pub fn is_kill(self) -> bool {
        matches!(self, AttackOutcome::Killed)
    }
}

/// Something that can be alive or dead, belongs to a team, and can attack
/// and be attacked.
///
/// ## Implementation Notes
///
/// - `kill` and `reset` are idempotent.
/// - `kill` returns `true` only on the call that actually killed, so a
///   caller can emit exactly one death notice.
/// - Once dead, a combatant stays dead until `reset`.
pub trait Killable {
    fn is_alive(&self) -> bool;

    fn team(&self) -> TeamId;

    fn set_team(&mut self, team: TeamId);

    /// Apply an incoming attack.
    fn receive_attack(&mut self, attacker: &dyn Killable) -> AttackOutcome;

    /// Mark dead. Returns whether this call changed anything.
    fn kill(&mut self) -> bool;

    /// Return to a full-health living state. The team is kept.
    fn reset(&mut self);

    /// Attacks still needed to kill this combatant. Zero once dead.
    fn hits_to_kill(&self) -> u32;

    /// The unstyled preferred name.
    fn display_name(&self) -> String;

    /// Styled name plus team, as used in narration.
    fn identifier(&self, teams: &TeamRegistry) -> String;

    /// A one-line status summary.
    fn describe(&self, teams: &TeamRegistry) -> String;

    /// Attack `opponent`. Does nothing if this combatant is dead.
    fn attack(&self, opponent: &mut dyn Killable) -> Option<AttackOutcome>
    where
        Self: Sized,
    {
        if !self.is_alive() {
            return None;
        }
        Some(opponent.receive_attack(self))
    }

    /// Whether this combatant may attack `defender`.
    ///
    /// True iff the teams differ and this combatant's team does not list the
    /// defender's team as an ally. The check only reads this side's ally
    /// list, so `a.verify_target(b)` and `b.verify_target(a)` can disagree.
    fn verify_target(&self, defender: &dyn Killable, teams: &TeamRegistry) -> bool {
        let (own, other) = (self.team(), defender.team());
        own != other && !teams.is_allied(own, other)
    }
}
