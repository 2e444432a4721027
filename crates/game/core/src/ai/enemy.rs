use rand::{Rng, rngs::StdRng};
use tracing::trace;

use super::{AiState, Decision, DecisionPolicy, policy_rng};
use crate::battle::{Roster, targeting};
use crate::config::AiConfig;

/// Timer-driven enemy policy.
///
/// Targets the living player with the least hp and casts a uniformly chosen
/// castable skill at it. The first decision happens on the first fighting
/// tick; afterwards the wait is re-rolled in the configured interval.
#[derive(Debug)]
pub struct EnemyAi {
    owner: usize,
    timer: f32,
    min_interval: f32,
    max_interval: f32,
    difficulty: f32,
    state: AiState,
    rng: StdRng,
}

impl EnemyAi {
    /// Non-finite intervals fall back: the minimum to its default, the
    /// maximum to the minimum.
    pub fn new(owner: usize, config: &AiConfig, rng: StdRng) -> Self {
        let finite_or = |value: f32, fallback: f32| {
            if value.is_finite() { value } else { fallback }
        };
        let min_interval = finite_or(
            config.min_decision_interval,
            AiConfig::default().min_decision_interval,
        )
        .max(0.0);
        let mut ai = Self {
            owner,
            timer: 0.0,
            min_interval,
            max_interval: finite_or(config.max_decision_interval, min_interval).max(min_interval),
            difficulty: AiConfig::MIN_DIFFICULTY,
            state: AiState::default(),
            rng,
        };
        ai.set_difficulty(config.difficulty);
        ai
    }

    /// Policy with a generator derived from `seed` and the owner index.
    pub fn seeded(owner: usize, config: &AiConfig, seed: Option<u64>) -> Self {
        Self::new(owner, config, policy_rng(seed, owner))
    }

    /// Seconds until the next decision.
    pub fn timer(&self) -> f32 {
        self.timer
    }

    fn decide(&mut self, roster: &Roster) -> Option<Decision> {
        let target = targeting::weakest(roster, true)?;
        let castable = roster.get(self.owner)?.castable_skills();
        let skill = if castable.is_empty() {
            None
        } else {
            Some(castable[self.rng.gen_range(0..castable.len())])
        };

        self.state = if skill.is_some() {
            AiState::UsingSkill
        } else {
            AiState::Attacking
        };
        Some(Decision { target, skill })
    }
}

impl DecisionPolicy for EnemyAi {
    fn owner(&self) -> usize {
        self.owner
    }

    fn update(&mut self, dt: f32, roster: &Roster) -> Option<Decision> {
        if !roster.get(self.owner)?.is_alive() {
            return None;
        }
        self.timer -= dt;
        if self.timer > 0.0 {
            return None;
        }
        self.timer = if self.max_interval > self.min_interval {
            self.rng.gen_range(self.min_interval..=self.max_interval)
        } else {
            self.min_interval
        };

        let decision = self.decide(roster);
        trace!(owner = self.owner, state = %self.state, ?decision, next_in = self.timer, "ai decision");
        decision
    }

    fn state(&self) -> AiState {
        self.state
    }

    fn difficulty(&self) -> f32 {
        self.difficulty
    }

    /// Stored clamped to `[MIN_DIFFICULTY, MAX_DIFFICULTY]`; it does not
    /// change decisions.
    fn set_difficulty(&mut self, difficulty: f32) {
        self.difficulty = difficulty.clamp(AiConfig::MIN_DIFFICULTY, AiConfig::MAX_DIFFICULTY);
    }
}
