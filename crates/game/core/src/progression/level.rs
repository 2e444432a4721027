//! Level and experience bookkeeping.

use tracing::{debug, warn};

use super::{ExperienceCurve, LinearCurve, ProgressionError};
use crate::config::ProgressionConfig;

/// Tracks level and experience against an [`ExperienceCurve`].
///
/// Invariant: once a call returns, `current_experience <
/// experience_to_next_level()`. Each level-up consumes exactly the threshold
/// of the level being left; the remainder carries forward.
#[derive(Debug)]
pub struct LevelEngine {
    level: u32,
    current_experience: u64,
    total_experience: u64,
    curve: Box<dyn ExperienceCurve>,
}

impl LevelEngine {
    pub fn new(curve: Box<dyn ExperienceCurve>) -> Self {
        Self {
            level: 1,
            current_experience: 0,
            total_experience: 0,
            curve,
        }
    }

    pub fn from_config(config: &ProgressionConfig) -> Result<Self, ProgressionError> {
        Ok(Self::new(config.curve.build()?))
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Experience accumulated within the current level.
    pub fn current_experience(&self) -> u64 {
        self.current_experience
    }

    /// Experience gained over the engine's lifetime.
    pub fn total_experience(&self) -> u64 {
        self.total_experience
    }

    pub fn experience_to_next_level(&self) -> u64 {
        self.curve.threshold(self.level)
    }

    pub fn required_experience(&self, level: u32) -> Result<u64, ProgressionError> {
        self.curve.required_experience(level)
    }

    pub fn can_level_up(&self) -> bool {
        self.current_experience >= self.experience_to_next_level()
    }

    /// Adds experience and applies every level-up it pays for.
    ///
    /// Returns the levels reached, in order (empty when no level was gained).
    pub fn add_experience(&mut self, amount: i64) -> Result<Vec<u32>, ProgressionError> {
        let Ok(amount) = u64::try_from(amount) else {
            warn!(amount, "experience amount must not be negative");
            return Err(ProgressionError::NegativeExperience(amount));
        };

        self.current_experience = self.current_experience.saturating_add(amount);
        self.total_experience = self.total_experience.saturating_add(amount);

        let mut gained = Vec::new();
        while self.level_up() {
            gained.push(self.level);
        }
        debug!(
            amount,
            level = self.level,
            current = self.current_experience,
            next = self.experience_to_next_level(),
            "experience added"
        );
        Ok(gained)
    }

    /// Advances one level if enough experience has accumulated.
    pub fn level_up(&mut self) -> bool {
        if !self.can_level_up() || self.level == u32::MAX {
            return false;
        }
        self.current_experience -= self.experience_to_next_level();
        self.level += 1;
        true
    }

    /// Jumps straight to `level`, discarding progress within the old level.
    pub fn set_level(&mut self, level: u32) -> Result<(), ProgressionError> {
        if level < 1 {
            warn!(level, "level must be at least 1");
            return Err(ProgressionError::InvalidLevel(level));
        }
        self.level = level;
        self.current_experience = 0;
        Ok(())
    }
}

impl Default for LevelEngine {
    fn default() -> Self {
        Self::new(Box::new(LinearCurve::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_level_one() {
        let engine = LevelEngine::default();
        assert_eq!(engine.level(), 1);
        assert_eq!(engine.current_experience(), 0);
        assert_eq!(engine.experience_to_next_level(), 150);
    }

    #[test]
    fn below_threshold_keeps_level() {
        let mut engine = LevelEngine::default();
        assert_eq!(engine.add_experience(100), Ok(vec![]));
        assert_eq!(engine.level(), 1);
        assert_eq!(engine.current_experience(), 100);
        assert!(!engine.level_up());
    }

    #[test]
    fn exact_threshold_levels_once() {
        let mut engine = LevelEngine::default();
        assert_eq!(engine.add_experience(150), Ok(vec![2]));
        assert_eq!(engine.current_experience(), 0);
        assert_eq!(engine.experience_to_next_level(), 250);
    }

    #[test]
    fn large_grant_levels_repeatedly_and_carries_remainder() {
        let mut engine = LevelEngine::default();
        // 150 + 250 + 350 = 750 reaches level 4, 10 left over.
        assert_eq!(engine.add_experience(760), Ok(vec![2, 3, 4]));
        assert_eq!(engine.current_experience(), 10);
        assert_eq!(engine.total_experience(), 760);
    }

    #[test]
    fn negative_experience_is_rejected() {
        let mut engine = LevelEngine::default();
        engine.add_experience(40).unwrap();
        assert_eq!(
            engine.add_experience(-50),
            Err(ProgressionError::NegativeExperience(-50))
        );
        assert_eq!(engine.current_experience(), 40);
        assert_eq!(engine.total_experience(), 40);
    }

    #[test]
    fn set_level_validates_and_resets_progress() {
        let mut engine = LevelEngine::default();
        engine.add_experience(100).unwrap();
        assert_eq!(engine.set_level(0), Err(ProgressionError::InvalidLevel(0)));
        assert_eq!(engine.level(), 1);

        engine.set_level(5).unwrap();
        assert_eq!(engine.level(), 5);
        assert_eq!(engine.current_experience(), 0);
        assert_eq!(engine.experience_to_next_level(), 550);
    }

    proptest! {
        #[test]
        fn rollover_invariant_holds(grants in proptest::collection::vec(0i64..5_000, 1..8)) {
            let mut engine = LevelEngine::default();
            for grant in grants {
                engine.add_experience(grant).unwrap();
                prop_assert!(engine.current_experience() < engine.experience_to_next_level());
            }
        }

        #[test]
        fn total_experience_is_conserved(grant in 0i64..100_000) {
            let mut engine = LevelEngine::default();
            engine.add_experience(grant).unwrap();
            let spent: u64 = (1..engine.level()).map(|l| engine.required_experience(l).unwrap()).sum();
            prop_assert_eq!(spent + engine.current_experience(), grant as u64);
        }
    }
}
