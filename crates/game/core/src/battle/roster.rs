use tracing::{debug, trace};

use super::{Participant, ParticipantId};
use crate::event::GameEvent;

/// Ordered set of battle participants.
///
/// Indices are stable for the lifetime of a battle and double as handles
/// for decision policies.
#[derive(Debug, Default)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Participant> {
        self.participants.get_mut(index)
    }

    pub fn index_of(&self, id: &ParticipantId) -> Option<usize> {
        self.participants.iter().position(|p| &p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn as_slice(&self) -> &[Participant] {
        &self.participants
    }

    /// Indices of living participants on the given side.
    pub fn living(&self, players: bool) -> impl Iterator<Item = usize> + '_ {
        self.participants
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.is_player == players && p.is_alive())
            .map(|(index, _)| index)
    }

    /// True when no participant of the side is alive. An empty side counts
    /// as defeated.
    pub fn side_defeated(&self, players: bool) -> bool {
        self.living(players).next().is_none()
    }

    /// Advances skill cooldowns and buff timers of every participant.
    pub fn tick(&mut self, dt: f32) {
        for participant in &mut self.participants {
            for skill in &mut participant.skills {
                skill.update_cooldown(dt);
            }
            for expired in participant.buffs.tick(dt) {
                trace!(participant = %participant.id, buff = %expired, "buff expired");
            }
        }
    }

    /// Casts skill `skill` of `caster` at `target`.
    ///
    /// Returns the `SkillCast` event on success; `None` when any index is
    /// out of range, the caster targets itself, or the skill refuses.
    pub fn cast(&mut self, caster: usize, skill: usize, target: usize) -> Option<GameEvent> {
        let (caster, target) = pair_mut(&mut self.participants, caster, target)?;
        let Participant {
            id, stats, skills, ..
        } = caster;
        let skill = skills.get_mut(skill)?;
        let report = skill.cast(stats, &mut [&mut target.stats])?;

        debug!(
            caster = %id,
            skill = skill.id(),
            target = %target.id,
            damage = report.damage,
            target_hp = target.stats.hp,
            "skill cast"
        );
        Some(GameEvent::SkillCast {
            caster: id.clone(),
            skill: skill.id().to_owned(),
            targets: vec![target.id.clone()],
            damage: report.damage,
        })
    }
}

/// Two distinct mutable elements of one slice.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b || a >= items.len() || b >= items.len() {
        return None;
    }
    if a < b {
        let (head, tail) = items.split_at_mut(b);
        Some((&mut head[a], &mut tail[0]))
    } else {
        let (head, tail) = items.split_at_mut(a);
        Some((&mut tail[0], &mut head[b]))
    }
}
