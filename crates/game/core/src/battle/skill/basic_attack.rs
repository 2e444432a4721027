use tracing::debug;

use super::{CastReport, Cooldown, Skill, SkillDescriptor, SkillType};
use crate::battle::CombatStats;

/// Single-target hit for `attack * multiplier` damage.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicAttack {
    descriptor: SkillDescriptor,
    multiplier: f32,
    cooldown: Cooldown,
}

impl BasicAttack {
    pub const ID: &'static str = "basic_attack";
    pub const DAMAGE_MULTIPLIER: f32 = 1.2;
    pub const COOLDOWN: f32 = 1.0;

    pub fn with_descriptor(descriptor: SkillDescriptor, multiplier: f32) -> Self {
        Self {
            descriptor,
            multiplier,
            cooldown: Cooldown::default(),
        }
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }
}

impl Default for BasicAttack {
    fn default() -> Self {
        Self::with_descriptor(
            SkillDescriptor {
                id: Self::ID.to_owned(),
                name: "Basic Attack".to_owned(),
                mana_cost: 0.0,
                cooldown: Self::COOLDOWN,
                cast_time: 0.0,
                kind: SkillType::Attack,
            },
            Self::DAMAGE_MULTIPLIER,
        )
    }
}

impl Skill for BasicAttack {
    fn descriptor(&self) -> &SkillDescriptor {
        &self.descriptor
    }

    fn cooldown_remaining(&self) -> f32 {
        self.cooldown.remaining()
    }

    fn cast(
        &mut self,
        caster: &mut CombatStats,
        targets: &mut [&mut CombatStats],
    ) -> Option<CastReport> {
        if !self.can_cast(caster) {
            debug!(skill = %self.descriptor.id, "skill not ready");
            return None;
        }
        let target = targets.first_mut()?;

        let mana_spent = self.descriptor.mana_cost;
        caster.mp -= mana_spent;
        self.cooldown.start(self.descriptor.cooldown);

        let damage = target.take_damage(caster.attack * self.multiplier);
        Some(CastReport { mana_spent, damage })
    }

    fn update_cooldown(&mut self, dt: f32) {
        self.cooldown.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(attack: f32, defense: f32) -> CombatStats {
        CombatStats::new(100.0, 50.0, attack, defense, 5.0)
    }

    #[test]
    fn hits_for_attack_times_multiplier() {
        let mut skill = BasicAttack::default();
        let mut caster = fighter(20.0, 10.0);
        let mut target = fighter(10.0, 10.0);

        let report = skill.cast(&mut caster, &mut [&mut target]).unwrap();

        assert_eq!(report.damage, 23.0);
        assert_eq!(target.hp, 77.0);
        assert_eq!(skill.cooldown_remaining(), 1.0);
        assert_eq!(caster.mp, 50.0);
    }

    #[test]
    fn cooldown_blocks_recast_until_elapsed() {
        let mut skill = BasicAttack::default();
        let mut caster = fighter(20.0, 0.0);
        let mut target = fighter(0.0, 0.0);

        assert!(skill.cast(&mut caster, &mut [&mut target]).is_some());
        assert!(skill.cast(&mut caster, &mut [&mut target]).is_none());
        let hp = target.hp;

        skill.update_cooldown(0.6);
        assert!(!skill.can_cast(&caster));
        skill.update_cooldown(0.6);
        assert!(skill.can_cast(&caster));
        assert!(skill.cast(&mut caster, &mut [&mut target]).is_some());
        assert!(target.hp < hp);
    }

    #[test]
    fn insufficient_mana_changes_nothing() {
        let mut skill = BasicAttack::with_descriptor(
            SkillDescriptor {
                id: "fireball".into(),
                name: "Fireball".into(),
                mana_cost: 30.0,
                cooldown: 2.0,
                cast_time: 0.5,
                kind: SkillType::Attack,
            },
            2.0,
        );
        let mut caster = fighter(20.0, 0.0);
        caster.mp = 10.0;
        let mut target = fighter(0.0, 0.0);

        assert!(skill.cast(&mut caster, &mut [&mut target]).is_none());
        assert_eq!(caster.mp, 10.0);
        assert_eq!(target.hp, 100.0);
        assert_eq!(skill.cooldown_remaining(), 0.0);
    }

    #[test]
    fn mana_is_spent_on_cast() {
        let mut skill = BasicAttack::with_descriptor(
            SkillDescriptor {
                id: "fireball".into(),
                name: "Fireball".into(),
                mana_cost: 30.0,
                cooldown: 2.0,
                cast_time: 0.0,
                kind: SkillType::Attack,
            },
            2.0,
        );
        let mut caster = fighter(20.0, 0.0);
        let mut target = fighter(0.0, 0.0);
        let report = skill.cast(&mut caster, &mut [&mut target]).unwrap();
        assert_eq!(report.mana_spent, 30.0);
        assert_eq!(caster.mp, 20.0);
        assert_eq!(target.hp, 60.0);
    }

    #[test]
    fn no_target_is_not_a_cast() {
        let mut skill = BasicAttack::default();
        let mut caster = fighter(20.0, 0.0);
        assert!(skill.cast(&mut caster, &mut []).is_none());
        assert_eq!(skill.cooldown_remaining(), 0.0);
    }
}
