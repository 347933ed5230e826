//! Fighters: named combatants that die to a single hit.

use serde::{Deserialize, Serialize};

use super::{AttackOutcome, Killable};
use crate::core::{TeamId, TeamRegistry};
use crate::names::{ComplexName, Name};
use crate::style::Style;

/// A combatant with a structured name. Any attack received while alive kills it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    name: ComplexName,
    team: TeamId,
    alive: bool,
    style: Option<Style>,
}

impl Fighter {
    /// A living fighter on `team`.
    pub fn new(name: ComplexName, team: TeamId) -> Self {
        Self {
            name,
            team,
            alive: true,
            style: None,
        }
    }

    /// A fighter on a freshly created team of its own.
    pub fn unaffiliated(name: ComplexName, teams: &mut TeamRegistry) -> Self {
        let team = teams.create_team(&[]);
        Self::new(name, team)
    }

    /// Start alive or dead.
    #[must_use]
    pub fn with_alive(mut self, alive: bool) -> Self {
        self.alive = alive;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn name(&self) -> &ComplexName {
        &self.name
    }

    pub fn set_name(&mut self, name: ComplexName) {
        self.name = name;
    }

    #[must_use]
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    fn styled_name(&self) -> String {
        let name = self.name.display_name();
        match &self.style {
            Some(style) => style.apply(&name),
            None => name,
        }
    }
}

impl Killable for Fighter {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn team(&self) -> TeamId {
        self.team
    }

    fn set_team(&mut self, team: TeamId) {
        self.team = team;
    }

    fn receive_attack(&mut self, _attacker: &dyn Killable) -> AttackOutcome {
        if self.kill() {
            AttackOutcome::Killed
        } else {
            AttackOutcome::NoEffect
        }
    }

    fn kill(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        tracing::debug!(fighter = %self.name.display_name(), team = %self.team, "fighter died");
        true
    }

    fn reset(&mut self) {
        self.alive = true;
    }

    fn hits_to_kill(&self) -> u32 {
        u32::from(self.alive)
    }

    fn display_name(&self) -> String {
        self.name.display_name()
    }

    fn identifier(&self, teams: &TeamRegistry) -> String {
        let team = teams
            .get(self.team)
            .map_or_else(|| "?".to_string(), |t| t.styled_label());
        format!("{} of the {}", self.styled_name(), team)
    }

    fn describe(&self, teams: &TeamRegistry) -> String {
        format!(
            "Name: {}, Alive: {}, Team: {}",
            self.name.full_name(),
            self.alive,
            teams.label(self.team)
        )
    }
}
