//! Experience curves: how much experience each level costs.

use core::fmt::Debug;

use super::ProgressionError;
use crate::config::CurveConfig;

/// Experience required to advance from a level to the next.
///
/// Implementations must be deterministic and strictly increasing in
/// `level`, and never return zero.
pub trait ExperienceCurve: Debug + Send + Sync {
    /// Threshold for `level` (`level >= 1`).
    fn threshold(&self, level: u32) -> u64;

    /// Checked variant of [`threshold`](Self::threshold).
    fn required_experience(&self, level: u32) -> Result<u64, ProgressionError> {
        if level < 1 {
            return Err(ProgressionError::InvalidLevel(level));
        }
        Ok(self.threshold(level))
    }
}

/// `level * per_level + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearCurve {
    per_level: u64,
    offset: u64,
}

impl LinearCurve {
    pub fn new(per_level: u64, offset: u64) -> Result<Self, ProgressionError> {
        if per_level == 0 {
            return Err(ProgressionError::InvalidCurve(
                "linear curve needs a positive per-level cost",
            ));
        }
        Ok(Self { per_level, offset })
    }
}

impl Default for LinearCurve {
    fn default() -> Self {
        Self {
            per_level: 100,
            offset: 50,
        }
    }
}

impl ExperienceCurve for LinearCurve {
    fn threshold(&self, level: u32) -> u64 {
        u64::from(level)
            .saturating_mul(self.per_level)
            .saturating_add(self.offset)
    }
}

/// Explicit thresholds for the first levels, linear past the end of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableCurve {
    thresholds: Vec<u64>,
    fallback: LinearCurve,
}

impl TableCurve {
    /// `thresholds[0]` is the cost of level 1.
    pub fn new(thresholds: Vec<u64>, fallback: LinearCurve) -> Result<Self, ProgressionError> {
        if thresholds.first() == Some(&0) {
            return Err(ProgressionError::InvalidCurve(
                "table thresholds must be positive",
            ));
        }
        if !thresholds.windows(2).all(|w| w[0] < w[1]) {
            return Err(ProgressionError::InvalidCurve(
                "table thresholds must be strictly increasing",
            ));
        }
        if let Some(&last) = thresholds.last() {
            let next = fallback.threshold(thresholds.len() as u32 + 1);
            if next <= last {
                return Err(ProgressionError::InvalidCurve(
                    "fallback curve must continue above the last table threshold",
                ));
            }
        }
        Ok(Self {
            thresholds,
            fallback,
        })
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

impl ExperienceCurve for TableCurve {
    fn threshold(&self, level: u32) -> u64 {
        self.thresholds
            .get(level.saturating_sub(1) as usize)
            .copied()
            .unwrap_or_else(|| self.fallback.threshold(level))
    }
}

impl CurveConfig {
    /// Builds the configured curve, validating its monotonicity.
    pub fn build(&self) -> Result<Box<dyn ExperienceCurve>, ProgressionError> {
        Ok(match self {
            Self::Linear { per_level, offset } => Box::new(LinearCurve::new(*per_level, *offset)?),
            Self::Table { thresholds } => {
                Box::new(TableCurve::new(thresholds.clone(), LinearCurve::default())?)
            }
        })
    }
}
