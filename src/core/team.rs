//! Teams, alliances and the team registry.
//!
//! ## TeamId
//!
//! Teams are addressed by a `TeamId` handle: the team's creation index in
//! the registry that made it. Combatants store a `TeamId`, never a `Team`.
//!
//! ## Alliances
//!
//! An ally list is one-directional. `add_ally(a, b)` stops `a` from
//! targeting `b` but leaves `b` free to target `a`. Use
//! `add_ally_symmetric` for a mutual alliance.
//!
//! ## Labels
//!
//! Every team label is unique within its registry. Auto-generated labels
//! pair an adjective with a plural noun ("Crimson Wolves"); collisions fall
//! back to the registry size, then to random numbers drawn from a range that
//! grows with the registry. The last tier makes a collision vanishingly
//! unlikely rather than impossible, so it loops until a free label appears.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;
use super::{Result, SkirmishError};
use crate::style::{Color, Style};

/// Attempts at an adjective + noun label before falling back.
pub const LABEL_RETRY_LIMIT: usize = 10;

/// Label of the built-in team monsters join by default.
pub const MONSTER_TEAM_LABEL: &str = "Monsters";

const ADJECTIVES: &[&str] = &[
    "Crimson", "Iron", "Silent", "Golden", "Ashen", "Broken", "Howling", "Gilded",
    "Frozen", "Wandering", "Hollow", "Burning", "Restless", "Scarlet", "Pale", "Stone",
    "Thorned", "Verdant", "Bitter", "Shrouded",
];

const NOUNS: &[&str] = &[
    "Wolves", "Ravens", "Blades", "Lanterns", "Owls", "Serpents", "Hounds", "Crowns",
    "Vipers", "Spears", "Stags", "Wardens", "Foxes", "Anvils", "Herons", "Jackals",
    "Banners", "Moths", "Bears", "Oaths",
];

/// Team handle. The index of the team in its registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team({})", self.0)
    }
}

/// A named group of combatants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    label: String,
    allies: SmallVec<[TeamId; 4]>,
    style: Option<Style>,
}

impl Team {
    #[must_use]
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// The unique label, e.g. "Crimson Wolves".
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Teams this team will not attack. May contain duplicates.
    #[must_use]
    pub fn allies(&self) -> &[TeamId] {
        &self.allies
    }

    #[must_use]
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// The label decorated with this team's style, if any.
    #[must_use]
    pub fn styled_label(&self) -> String {
        match &self.style {
            Some(style) => style.apply(&self.label),
            None => self.label.clone(),
        }
    }
}

/// Owns every team created during a run, in creation order.
///
/// Teams are never removed. The registry starts with a single built-in
/// team, [`MONSTER_TEAM_LABEL`].
#[derive(Clone, Debug)]
pub struct TeamRegistry {
    teams: Vec<Team>,
    by_label: FxHashMap<String, TeamId>,
    builtin_count: usize,
    rng: GameRng,
}

impl TeamRegistry {
    /// Create a registry whose generated labels come from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a registry drawing labels from an existing RNG stream.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        let mut registry = Self {
            teams: Vec::new(),
            by_label: FxHashMap::default(),
            builtin_count: 0,
            rng,
        };
        let monsters = registry.insert(MONSTER_TEAM_LABEL.to_string(), &[]);
        registry.set_style(monsters, Style::from_flags("b").with_fill(Color::RED));
        registry.builtin_count = registry.teams.len();
        registry
    }

    /// The built-in team monsters join when no team is given.
    #[must_use]
    pub fn monster_team(&self) -> TeamId {
        TeamId(0)
    }

    /// Every team created so far, in creation order.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Always false: the built-in team exists from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.index())
    }

    /// Look a team up by its label.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<TeamId> {
        self.by_label.get(label).copied()
    }

    /// The team's label, or `"?"` for a handle this registry never issued.
    #[must_use]
    pub fn label(&self, id: TeamId) -> &str {
        self.get(id).map_or("?", Team::label)
    }

    /// Create a team with a generated, unique label.
    pub fn create_team(&mut self, allies: &[TeamId]) -> TeamId {
        let label = self.generate_label();
        self.insert(label, allies)
    }

    /// Create a team with a caller-chosen label.
    ///
    /// Fails if the label is already taken.
    pub fn create_named_team(&mut self, label: impl Into<String>, allies: &[TeamId]) -> Result<TeamId> {
        let label = label.into();
        if self.by_label.contains_key(&label) {
            return Err(SkirmishError::DuplicateTeamLabel(label));
        }
        Ok(self.insert(label, allies))
    }

    /// A uniformly random non-built-in team, creating one if none exist.
    pub fn random_team(&mut self) -> TeamId {
        let candidates = self.teams.len() - self.builtin_count;
        if candidates == 0 {
            return self.create_team(&[]);
        }
        let offset = self.rng.gen_range_usize(0..candidates);
        TeamId((self.builtin_count + offset) as u32)
    }

    /// `team` stops treating `ally` as hostile. `ally` is unaffected.
    pub fn add_ally(&mut self, team: TeamId, ally: TeamId) {
        if let Some(t) = self.teams.get_mut(team.index()) {
            t.allies.push(ally);
            tracing::trace!(team = %t.label, ally = %ally, "ally added");
        }
    }

    /// Both teams stop treating each other as hostile.
    pub fn add_ally_symmetric(&mut self, a: TeamId, b: TeamId) {
        self.add_ally(a, b);
        self.add_ally(b, a);
    }

    pub fn set_style(&mut self, team: TeamId, style: Style) {
        if let Some(t) = self.teams.get_mut(team.index()) {
            t.style = Some(style);
        }
    }

    #[must_use]
    pub fn allies_of(&self, team: TeamId) -> &[TeamId] {
        self.get(team).map(Team::allies).unwrap_or_default()
    }

    /// Whether `team` lists `other` as an ally. Not symmetric.
    #[must_use]
    pub fn is_allied(&self, team: TeamId, other: TeamId) -> bool {
        self.allies_of(team).contains(&other)
    }

    fn insert(&mut self, label: String, allies: &[TeamId]) -> TeamId {
        let id = TeamId(self.teams.len() as u32);
        tracing::debug!(%id, label = %label, "team created");
        self.by_label.insert(label.clone(), id);
        self.teams.push(Team {
            id,
            label,
            allies: allies.iter().copied().collect(),
            style: None,
        });
        id
    }

    fn generate_label(&mut self) -> String {
        for _ in 0..LABEL_RETRY_LIMIT {
            let adjective = self.rng.choose(ADJECTIVES).copied().unwrap_or("Nameless");
            let noun = self.rng.choose(NOUNS).copied().unwrap_or("Band");
            let candidate = format!("{adjective} {noun}");
            if !self.by_label.contains_key(&candidate) {
                return candidate;
            }
        }

        let by_size = self.teams.len().to_string();
        if !self.by_label.contains_key(&by_size) {
            return by_size;
        }

        let bound = (self.teams.len() as u64 + 1).saturating_mul(1_000);
        loop {
            let candidate = self.rng.gen_range_u64(0..bound).to_string();
            if !self.by_label.contains_key(&candidate) {
                tracing::trace!(label = %candidate, "fell back to numeric team label");
                return candidate;
            }
        }
    }
}

impl Default for TeamRegistry {
    fn default() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }
}
