//! Battle participants and their combat stats.

use core::fmt;

use super::skill::{Skill, SkillSpec, build_skill};
use super::Buffs;
use crate::attribute::AttributeStore;

/// Participant identity, unique within one battle.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParticipantId(pub String);

impl ParticipantId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Screen position. Opaque to the rules, carried for presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Health, mana and combat ratings of one participant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub hp: f32,
    pub max_hp: f32,
    pub mp: f32,
    pub max_mp: f32,
    pub attack: f32,
    pub defense: f32,
    pub speed: f32,
}

impl CombatStats {
    /// Share of defense subtracted from every incoming hit.
    pub const DEFENSE_MITIGATION: f32 = 0.1;
    /// Smallest damage any hit deals.
    pub const MIN_DAMAGE: f32 = 1.0;

    /// Full health and mana.
    pub fn new(max_hp: f32, max_mp: f32, attack: f32, defense: f32, speed: f32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            mp: max_mp,
            max_mp,
            attack,
            defense,
            speed,
        }
    }

    /// Reads `hp`, `mp`, `attack`, `defense` and `speed` from a character's
    /// attributes (any type); missing attributes count as zero.
    pub fn from_attributes(attributes: &AttributeStore) -> Self {
        let value = |id: &str| {
            attributes
                .definitions()
                .iter()
                .find(|def| def.id == id)
                .and_then(|def| attributes.get(&def.id, Some(def.kind)).ok())
                .map_or(0.0, |value| value.as_f64() as f32)
        };
        Self::new(
            value("hp"),
            value("mp"),
            value("attack"),
            value("defense"),
            value("speed"),
        )
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Applies a hit after defense mitigation.
    ///
    /// Formula: `max(MIN_DAMAGE, amount - defense * DEFENSE_MITIGATION)`, with
    /// hp clamped to `[0, max_hp]`. Returns the damage dealt before clamping.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let final_damage =
            (amount - self.defense * Self::DEFENSE_MITIGATION).max(Self::MIN_DAMAGE);
        self.hp = (self.hp - final_damage).clamp(0.0, self.max_hp.max(0.0));
        final_damage
    }

    /// Restores hp up to `max_hp`. Negative amounts heal nothing.
    pub fn heal(&mut self, amount: f32) {
        self.hp = (self.hp + amount.max(0.0)).clamp(0.0, self.max_hp.max(0.0));
    }
}

/// One side's fighter: identity, stats, owned skills and active buffs.
#[derive(Debug)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub stats: CombatStats,
    pub position: Position,
    pub is_player: bool,
    /// Each participant owns independent skill instances and cooldowns.
    pub skills: Vec<Box<dyn Skill>>,
    pub buffs: Buffs,
}

impl Participant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stats: CombatStats,
        is_player: bool,
    ) -> Self {
        Self {
            id: ParticipantId(id.into()),
            name: name.into(),
            stats,
            position: Position::ORIGIN,
            is_player,
            skills: Vec::new(),
            buffs: Buffs::default(),
        }
    }

    #[must_use]
    pub fn with_skill(mut self, skill: Box<dyn Skill>) -> Self {
        self.skills.push(skill);
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    pub fn is_opponent_of(&self, other: &Participant) -> bool {
        self.is_player != other.is_player
    }

    /// Indices of the skills castable right now.
    pub fn castable_skills(&self) -> Vec<usize> {
        self.skills
            .iter()
            .enumerate()
            .filter(|(_, skill)| skill.can_cast(&self.stats))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Data-driven participant setup.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantSpec {
    pub id: String,
    pub name: String,
    pub stats: CombatStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_player: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<SkillSpec>,
}

impl ParticipantSpec {
    pub fn build(&self) -> Participant {
        self.skills.iter().fold(
            Participant::new(self.id.clone(), self.name.clone(), self.stats, self.is_player)
                .with_position(self.position),
            |participant, spec| participant.with_skill(build_skill(spec)),
        )
    }
}
