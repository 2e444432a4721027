//! Rules of the cultivation RPG, free of I/O.
//!
//! `xiuxian-core` defines the attribute store, the level/experience engine,
//! the skill contract, the battle state machine and the enemy decision
//! policy. Components are plain owned values: the host constructs them,
//! drives them, and drains the [`GameEvent`]s they queue.
pub mod ai;
pub mod attribute;
pub mod battle;
pub mod config;
pub mod error;
pub mod event;
pub mod progression;

pub use ai::{AiState, Decision, DecisionPolicy, EnemyAi};
pub use attribute::{
    AttributeChange, AttributeDefinition, AttributeError, AttributeKey, AttributeKind,
    AttributeStore, AttributeValue, ValueKind,
};
pub use battle::{
    BasicAttack, BattleManager, Buff, Buffs, CastReport, CombatState, CombatStats,
    FirstLivingOpponent, Participant, ParticipantId, ParticipantSpec, Position, Roster, Skill,
    SkillDescriptor, SkillSpec, SkillType, TargetingStrategy, WeakestOpponent, build_skill,
};
pub use config::{
    AiConfig, BattleConfig, CurveConfig, GameConfig, MismatchPolicy, ProgressionConfig,
    RewardPolicy,
};
pub use error::{ErrorSeverity, GameError, is_error_code};
pub use event::{GameEvent, GameEventKind};
pub use progression::{
    Character, ExperienceCurve, ExperienceSource, ExperienceTable, GrowthTable, LevelEngine,
    LinearCurve, ProgressionError, ScaledReward, TableCurve,
};
