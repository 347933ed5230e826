//! Monsters: combatants with a depletable health pool.

use serde::{Deserialize, Serialize};

use super::{AttackOutcome, Killable};
use crate::core::{TeamId, TeamRegistry};
use crate::names::{Name, SimpleName};
use crate::style::{Color, Style};

/// Round a requested health value up to whole hit points.
///
/// Negative and NaN requests become zero.
fn whole_health(value: f64) -> u32 {
    let value = value.ceil();
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value as u32
    }
}

/// A combatant that loses one health per attack and dies at zero.
///
/// Invariant: `health <= max_health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    name: SimpleName,
    team: TeamId,
    alive: bool,
    health: u32,
    max_health: u32,
    style: Option<Style>,
}

impl Monster {
    /// Create a monster at full health. `health` is rounded up.
    pub fn new(name: impl Into<String>, health: f64, team: TeamId) -> Self {
        let health = whole_health(health);
        Self {
            name: SimpleName::new(name),
            team,
            alive: true,
            health,
            max_health: health,
            style: None,
        }
    }

    /// A monster on the registry's built-in monster team.
    pub fn wild(name: impl Into<String>, health: f64, teams: &TeamRegistry) -> Self {
        Self::new(name, health, teams.monster_team())
    }

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
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.name = self.name.with_nickname(nickname);
        self
    }

    #[must_use]
    pub fn name(&self) -> &SimpleName {
        &self.name
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Set current health, rounded up and clamped to `0..=max_health`.
    pub fn set_health(&mut self, value: f64) {
        self.health = whole_health(value).min(self.max_health);
    }

    /// Set max health, rounded up. Current health is clamped to the new max.
    pub fn set_max_health(&mut self, value: f64) {
        self.max_health = whole_health(value);
        self.health = self.health.min(self.max_health);
    }

    fn styled_name(&self, teams: &TeamRegistry) -> String {
        let name = self.name.display_name();
        if self.team == teams.monster_team() {
            return Style::from_flags("b").with_fill(Color::RED).apply(&name);
        }
        match &self.style {
            Some(style) => style.apply(&name),
            None => name,
        }
    }
}

impl Killable for Monster {
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
        if !self.alive {
            return AttackOutcome::NoEffect;
        }
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.kill();
            AttackOutcome::Killed
        } else {
            AttackOutcome::Wounded {
                remaining: self.health,
            }
        }
    }

    fn kill(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        tracing::debug!(monster = %self.name.display_name(), team = %self.team, health = self.health, "monster died");
        true
    }

    fn reset(&mut self) {
        self.alive = true;
        self.health = self.max_health;
    }

    fn hits_to_kill(&self) -> u32 {
        if self.alive {
            self.health.max(1)
        } else {
            0
        }
    }

    fn display_name(&self) -> String {
        self.name.display_name()
    }

    /// Monsters on the built-in team are known by name alone, in bold red.
    fn identifier(&self, teams: &TeamRegistry) -> String {
        let name = self.styled_name(teams);
        if self.team == teams.monster_team() {
            return name;
        }
        let team = teams
            .get(self.team)
            .map_or_else(|| "?".to_string(), |t| t.styled_label());
        format!("{name} of the {team}")
    }

    fn describe(&self, teams: &TeamRegistry) -> String {
        format!(
            "Name: {}, Health: {}/{}, Team: {}",
            self.name,
            self.health,
            self.max_health,
            teams.label(self.team)
        )
    }
}
