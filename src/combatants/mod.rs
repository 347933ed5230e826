//! Combatants: fighters and monsters.
//!
//! Both implement [`Killable`]. A match holds them as the [`Combatant`]
//! tagged variant so it can own a mixed cast.

pub mod fighter;
pub mod killable;
pub mod monster;

#[cfg(test)]
pub(crate) mod log_capture;

pub use fighter::Fighter;
pub use killable::{AttackOutcome, Killable};
pub use monster::Monster;

use serde::{Deserialize, Serialize};

use crate::core::{TeamId, TeamRegistry};

/// Any combatant a match can hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Combatant {
    Fighter(Fighter),
    Monster(Monster),
}

impl Combatant {
    fn inner(&self) -> &dyn Killable {
        match self {
            Combatant::Fighter(f) => f,
            Combatant::Monster(m) => m,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Killable {
        match self {
            Combatant::Fighter(f) => f,
            Combatant::Monster(m) => m,
        }
    }

    #[must_use]
    pub fn as_fighter(&self) -> Option<&Fighter> {
        match self {
            Combatant::Fighter(f) => Some(f),
            Combatant::Monster(_) => None,
        }
    }

    #[must_use]
    pub fn as_monster(&self) -> Option<&Monster> {
        match self {
            Combatant::Monster(m) => Some(m),
            Combatant::Fighter(_) => None,
        }
    }
}

impl From<Fighter> for Combatant {
    fn from(fighter: Fighter) -> Self {
        Combatant::Fighter(fighter)
    }
}

impl From<Monster> for Combatant {
    fn from(monster: Monster) -> Self {
        Combatant::Monster(monster)
    }
}

impl Killable for Combatant {
    fn is_alive(&self) -> bool {
        self.inner().is_alive()
    }

    fn team(&self) -> TeamId {
        self.inner().team()
    }

    fn set_team(&mut self, team: TeamId) {
        self.inner_mut().set_team(team);
    }

    fn receive_attack(&mut self, attacker: &dyn Killable) -> AttackOutcome {
        self.inner_mut().receive_attack(attacker)
    }

    fn kill(&mut self) -> bool {
        self.inner_mut().kill()
    }

    fn reset(&mut self) {
        self.inner_mut().reset();
    }

    fn hits_to_kill(&self) -> u32 {
        self.inner().hits_to_kill()
    }

    fn display_name(&self) -> String {
        self.inner().display_name()
    }

    fn identifier(&self, teams: &TeamRegistry) -> String {
        self.inner().identifier(teams)
    }

    fn describe(&self, teams: &TeamRegistry) -> String {
        self.inner().describe(teams)
    }
}
