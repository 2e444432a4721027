//! Skill contract and the built-in skills.
//!
//! A skill owns its cooldown. Casting validates readiness and mana, spends
//! the cost, starts the cooldown and applies its effect to the targets.

mod basic_attack;

pub use basic_attack::BasicAttack;

use core::fmt;

use super::CombatStats;

/// Broad category of a skill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillType {
    #[default]
    Attack,
    Heal,
    Buff,
    Debuff,
}

/// Static description shared by every instance of a skill.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDescriptor {
    pub id: String,
    pub name: String,
    pub mana_cost: f32,
    /// Seconds between casts.
    pub cooldown: f32,
    /// Informational; casts resolve instantly.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cast_time: f32,
    #[cfg_attr(feature = "serde", serde(default, rename = "type"))]
    pub kind: SkillType,
}

impl fmt::Display for SkillDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Outcome of a successful cast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CastReport {
    pub mana_spent: f32,
    /// Damage dealt to the primary target after mitigation.
    pub damage: f32,
}

/// Readiness timer counting down to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cooldown {
    remaining: f32,
}

impl Cooldown {
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn start(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }

    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }
}

/// Contract every castable skill implements.
///
/// Object safe; participants hold `Box<dyn Skill>` so each owns its own
/// cooldown state.
pub trait Skill: fmt::Debug + Send + Sync {
    fn descriptor(&self) -> &SkillDescriptor;

    fn cooldown_remaining(&self) -> f32;

    /// Ready and affordable for `caster`.
    fn can_cast(&self, caster: &CombatStats) -> bool {
        self.cooldown_remaining() <= 0.0 && caster.mp >= self.descriptor().mana_cost
    }

    /// Resolves the skill against `targets`. Returns `None` and changes
    /// nothing when the skill cannot be cast.
    fn cast(&mut self, caster: &mut CombatStats, targets: &mut [&mut CombatStats])
        -> Option<CastReport>;

    /// Advances the cooldown by `dt` seconds.
    fn update_cooldown(&mut self, dt: f32);

    fn id(&self) -> &str {
        &self.descriptor().id
    }
}

/// Data-driven skill setup.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillSpec {
    /// The stock basic attack.
    BasicAttack,
    /// A direct-damage skill with custom numbers. Only valid with an
    /// `Attack` descriptor.
    Strike {
        descriptor: SkillDescriptor,
        multiplier: f32,
    },
}

impl SkillSpec {
    /// Declared type of the skill this spec builds.
    pub fn kind(&self) -> SkillType {
        match self {
            Self::BasicAttack => SkillType::Attack,
            Self::Strike { descriptor, .. } => descriptor.kind,
        }
    }

    /// Whether the declared type matches what the built skill does.
    pub fn is_consistent(&self) -> bool {
        self.kind() == SkillType::Attack
    }
}

/// Instantiates a fresh skill, cooldown ready.
pub fn build_skill(spec: &SkillSpec) -> Box<dyn Skill> {
    match spec {
        SkillSpec::BasicAttack => Box::new(BasicAttack::default()),
        SkillSpec::Strike {
            descriptor,
            multiplier,
        } => Box::new(BasicAttack::with_descriptor(descriptor.clone(), *multiplier)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_never_goes_negative() {
        let mut cooldown = Cooldown::default();
        cooldown.start(1.0);
        cooldown.tick(0.4);
        assert!(!cooldown.is_ready());
        cooldown.tick(5.0);
        assert_eq!(cooldown.remaining(), 0.0);
        assert!(cooldown.is_ready());
    }

    #[test]
    fn build_skill_from_spec() {
        let basic = build_skill(&SkillSpec::BasicAttack);
        assert_eq!(basic.id(), "basic_attack");

        let strike = build_skill(&SkillSpec::Strike {
            descriptor: SkillDescriptor {
                id: "claw".into(),
                name: "Claw".into(),
                mana_cost: 5.0,
                cooldown: 2.0,
                cast_time: 0.0,
                kind: SkillType::Attack,
            },
            multiplier: 1.5,
        });
        assert_eq!(strike.id(), "claw");
        assert_eq!(strike.descriptor().mana_cost, 5.0);
    }

    #[test]
    fn strike_must_be_an_attack() {
        assert!(SkillSpec::BasicAttack.is_consistent());
        let heal = SkillSpec::Strike {
            descriptor: SkillDescriptor {
                kind: SkillType::Heal,
                ..BasicAttack::default().descriptor().clone()
            },
            multiplier: 1.0,
        };
        assert_eq!(heal.kind(), SkillType::Heal);
        assert!(!heal.is_consistent());
    }
}
