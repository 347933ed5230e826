//! Casts described in TOML.
//!
//! A roster names teams (with alliances and styling), lists combatants, and
//! may carry match settings:
//!
//! ```toml
//! [match]
//! seed = 7
//!
//! [[teams]]
//! label = "Red"
//! allies = ["Blue"]
//! mutual = true
//! style = { flags = "b", fill = [200, 30, 30] }
//!
//! [[teams]]
//! label = "Blue"
//!
//! [[combatants]]
//! kind = "fighter"
//! first = "Zackery"
//! last = "Fisher"
//! nickname = "ZomB"
//! team = "Red"
//!
//! [[combatants]]
//! kind = "monster"
//! name = "Skeleton"
//! health = 2
//! ```
//!
//! A fighter without a team gets a fresh team of its own; a monster without
//! one joins the registry's built-in monster team.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::arena::MatchConfig;
use crate::combatants::{Combatant, Fighter, Monster};
use crate::core::{Result, SkirmishError, TeamId, TeamRegistry};
use crate::names::{ComplexName, NameComponent};
use crate::style::{Color, Style};

/// Styling as written in a roster. Colors are validated when built.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    /// Any of `b`, `i`, `u`.
    pub flags: String,
    pub fill: Option<[f64; 3]>,
    pub highlight: Option<[f64; 3]>,
}

impl StyleSpec {
    pub fn build(&self) -> Result<Style> {
        let mut style = Style::from_flags(&self.flags);
        if let Some([r, g, b]) = self.fill {
            style = style.with_fill(Color::from_channels(r, g, b)?);
        }
        if let Some([r, g, b]) = self.highlight {
            style = style.with_highlight(Color::from_channels(r, g, b)?);
        }
        Ok(style)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamSpec {
    /// `None` generates a label.
    pub label: Option<String>,
    /// Labels of teams this team will not attack.
    pub allies: Vec<String>,
    /// Make every listed alliance two-way.
    pub mutual: bool,
    pub style: Option<StyleSpec>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FighterSpec {
    pub first: String,
    pub last: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub middle: Vec<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default = "default_alive")]
    pub alive: bool,
    #[serde(default)]
    pub style: Option<StyleSpec>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonsterSpec {
    pub name: String,
    pub health: f64,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default = "default_alive")]
    pub alive: bool,
    #[serde(default)]
    pub style: Option<StyleSpec>,
}

fn default_alive() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CombatantSpec {
    Fighter(FighterSpec),
    Monster(MonsterSpec),
}

/// A full cast plus match settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    #[serde(rename = "match")]
    pub match_config: MatchConfig,
    pub teams: Vec<TeamSpec>,
    pub combatants: Vec<CombatantSpec>,
}

impl Roster {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let roster = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            teams = roster.teams.len(),
            combatants = roster.combatants.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    /// A skeleton with two health against four unaffiliated fighters.
    #[must_use]
    pub fn default_cast() -> Self {
        let fighter = |first: &str, last: &str, nickname: &str| {
            CombatantSpec::Fighter(FighterSpec {
                first: first.to_string(),
                last: last.to_string(),
                nickname: Some(nickname.to_string()),
                middle: Vec::new(),
                team: None,
                alive: true,
                style: None,
            })
        };
        Self {
            match_config: MatchConfig::default(),
            teams: Vec::new(),
            combatants: vec![
                fighter("Zackery", "Fisher", "ZomB"),
                fighter("Tim", "Marion", "Zeltar"),
                fighter("Jacob", "Dixon", "Metal"),
                fighter("Sigma", "Balls", "Sol"),
                CombatantSpec::Monster(MonsterSpec {
                    name: "Skeleton".to_string(),
                    health: 2.0,
                    team: None,
                    alive: true,
                    style: None,
                }),
            ],
        }
    }

    /// Create the roster's teams in `registry` and build its combatants.
    ///
    /// Teams are created before alliances are wired, so an ally may be
    /// declared later in the file.
    pub fn build(&self, registry: &mut TeamRegistry) -> Result<Vec<Combatant>> {
        let mut created = Vec::with_capacity(self.teams.len());
        for spec in &self.teams {
            let id = match &spec.label {
                Some(label) => registry.create_named_team(label.clone(), &[])?,
                None => registry.create_team(&[]),
            };
            if let Some(style) = &spec.style {
                registry.set_style(id, style.build()?);
            }
            created.push(id);
        }

        for (spec, &id) in self.teams.iter().zip(&created) {
            for ally in &spec.allies {
                let ally = lookup(registry, ally)?;
                if spec.mutual {
                    registry.add_ally_symmetric(id, ally);
                } else {
                    registry.add_ally(id, ally);
                }
            }
        }

        self.combatants
            .iter()
            .map(|spec| build_combatant(spec, registry))
            .collect()
    }
}

fn lookup(registry: &TeamRegistry, label: &str) -> Result<TeamId> {
    registry
        .find(label)
        .ok_or_else(|| SkirmishError::UnknownTeam(label.to_string()))
}

fn build_combatant(spec: &CombatantSpec, registry: &mut TeamRegistry) -> Result<Combatant> {
    match spec {
        CombatantSpec::Fighter(f) => {
            let mut name = ComplexName::new(f.first.as_str(), f.last.as_str());
            if let Some(nickname) = &f.nickname {
                name = name.with_nickname(nickname.as_str());
            }
            for middle in &f.middle {
                name = name.with_middle(NameComponent::used(middle.as_str()));
            }
            let mut fighter = match &f.team {
                Some(label) => Fighter::new(name, lookup(registry, label)?),
                None => Fighter::unaffiliated(name, registry),
            };
            fighter = fighter.with_alive(f.alive);
            if let Some(style) = &f.style {
                fighter = fighter.with_style(style.build()?);
            }
            Ok(fighter.into())
        }
        CombatantSpec::Monster(m) => {
            let team = match &m.team {
                Some(label) => lookup(registry, label)?,
                None => registry.monster_team(),
            };
            let mut monster = Monster::new(m.name.as_str(), m.health, team).with_alive(m.alive);
            if let Some(style) = &m.style {
                monster = monster.with_style(style.build()?);
            }
            Ok(monster.into())
        }
    }
}
