use core::fmt::Debug;

use crate::battle::Roster;

/// What the policy settled on this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum AiState {
    #[default]
    Attacking,
    Defending,
    UsingSkill,
    Moving,
}

/// One decision: a target and, when one was castable, a skill to cast at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub target: usize,
    pub skill: Option<usize>,
}

/// Pluggable decision making for a non-player participant.
pub trait DecisionPolicy: Debug + Send + Sync {
    /// Roster index of the participant this policy drives.
    fn owner(&self) -> usize;

    /// Advances the decision timer. Returns a decision when one is due and
    /// the owner has someone to fight.
    fn update(&mut self, dt: f32, roster: &Roster) -> Option<Decision>;

    fn state(&self) -> AiState;

    fn difficulty(&self) -> f32;

    fn set_difficulty(&mut self, difficulty: f32);
}
