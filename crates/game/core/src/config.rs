use crate::progression::GrowthTable;

/// Game configuration: tunable policy data for battles and progression.
///
/// Every field has a default matching the baseline rules, so content files
/// only need to override what they change.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub battle: BattleConfig,
    pub progression: ProgressionConfig,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Phase timings, rewards and AI pacing for the battle state machine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Length of the Preparing countdown, in time units.
    pub preparation_time: f32,
    /// Length of the Victory/Defeat display window, in time units.
    pub result_display_time: f32,
    pub reward: RewardPolicy,
    pub ai: AiConfig,
    /// Seed for enemy decision policies. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl BattleConfig {
    pub const DEFAULT_PREPARATION_TIME: f32 = 3.0;
    pub const DEFAULT_RESULT_DISPLAY_TIME: f32 = 5.0;

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            preparation_time: Self::DEFAULT_PREPARATION_TIME,
            result_display_time: Self::DEFAULT_RESULT_DISPLAY_TIME,
            reward: RewardPolicy::default(),
            ai: AiConfig::default(),
            seed: None,
        }
    }
}

/// Reward granted once on Victory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardPolicy {
    pub experience: u64,
    pub items: Vec<String>,
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self {
            experience: 100,
            items: vec!["potion_health".to_owned()],
        }
    }
}

/// Enemy decision pacing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiConfig {
    pub min_decision_interval: f32,
    pub max_decision_interval: f32,
    /// Stored on every policy, clamped to `[MIN_DIFFICULTY, MAX_DIFFICULTY]`.
    pub difficulty: f32,
}

impl AiConfig {
    pub const MIN_DIFFICULTY: f32 = 0.5;
    pub const MAX_DIFFICULTY: f32 = 3.0;
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            min_decision_interval: 1.0,
            max_decision_interval: 3.0,
            difficulty: 1.0,
        }
    }
}

/// Leveling curve, growth fallback and arithmetic policy.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionConfig {
    pub curve: CurveConfig,
    pub growth_table: GrowthTable,
    pub mismatch: MismatchPolicy,
}

/// Experience curve selection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum CurveConfig {
    /// `level * per_level + offset`.
    Linear { per_level: u64, offset: u64 },
    /// Explicit thresholds for levels 1..=N; linear default past the end.
    Table { thresholds: Vec<u64> },
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self::Linear {
            per_level: 100,
            offset: 50,
        }
    }
}

/// What `add` does when the stored value and the delta differ in kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MismatchPolicy {
    /// Replace the stored value with the delta.
    #[default]
    Overwrite,
    /// Leave the value untouched and report `IncompatibleOperation`.
    Reject,
}
