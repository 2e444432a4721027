//! Typed notifications emitted by the rules.
//!
//! Core components queue events while they mutate state; the owner drains
//! them after each call (`drain_events`) and routes them to presentation
//! layers. Events are plain data and carry no references into the state.

use std::collections::BTreeMap;

use crate::attribute::{AttributeKey, AttributeValue};
use crate::battle::ParticipantId;

/// Notifications consumable by presentation and orchestration layers.
#[derive(Clone, Debug, PartialEq, strum::EnumDiscriminants)]
#[strum_discriminants(name(GameEventKind), derive(Hash, strum::Display))]
pub enum GameEvent {
    /// The attribute store finished (re)initialization.
    SystemInitialized { attributes: usize },

    /// A single attribute was overwritten or incremented.
    AttributeChanged {
        key: AttributeKey,
        old: AttributeValue,
        new: AttributeValue,
    },

    /// One level was gained. Emitted once per level.
    LevelUp {
        level: u32,
        changed: BTreeMap<AttributeKey, AttributeValue>,
    },

    /// The preparation countdown elapsed and fighting began.
    BattleStarted,

    /// A skill resolved against its targets.
    SkillCast {
        caster: ParticipantId,
        skill: String,
        targets: Vec<ParticipantId>,
        damage: f32,
    },

    /// An end condition was met.
    BattleEnded { victory: bool },

    /// Victory reward for the surviving player participant.
    BattleReward {
        recipient: Option<ParticipantId>,
        experience: u64,
        items: Vec<String>,
    },

    /// The result display window elapsed.
    BattleResultConfirmed { victory: bool },
}

impl GameEvent {
    pub fn kind(&self) -> GameEventKind {
        GameEventKind::from(self)
    }

    /// True for events produced by the battle state machine.
    pub fn is_battle(&self) -> bool {
        matches!(
            self,
            Self::BattleStarted
                | Self::SkillCast { .. }
                | Self::BattleEnded { .. }
                | Self::BattleReward { .. }
                | Self::BattleResultConfirmed { .. }
        )
    }
}
