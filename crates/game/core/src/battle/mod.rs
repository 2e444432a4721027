//! Real-time battle: participants, skills and the phase state machine.
//!
//! [`BattleManager`] is a tick-driven state machine. The host calls
//! [`BattleManager::update`] with the elapsed time of each frame and drains
//! the queued [`GameEvent`](crate::GameEvent)s afterwards.

mod buff;
mod manager;
mod participant;
mod roster;
pub mod skill;
mod state;
pub mod targeting;

pub use buff::{Buff, Buffs};
pub use manager::BattleManager;
pub use participant::{CombatStats, Participant, ParticipantId, ParticipantSpec, Position};
pub use roster::Roster;
pub use skill::{BasicAttack, CastReport, Skill, SkillDescriptor, SkillSpec, SkillType, build_skill};
pub use state::CombatState;
pub use targeting::{FirstLivingOpponent, TargetingStrategy, WeakestOpponent};
