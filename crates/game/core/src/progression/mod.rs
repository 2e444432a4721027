//! Level/experience engine.
//!
//! - [`ExperienceCurve`]: cost of each level (`level * 100 + 50` by default)
//! - [`LevelEngine`]: level, experience and rollover
//! - [`Character`]: level engine coupled to an attribute store
//! - [`GrowthTable`]: fallback per-level growth by attribute id
//! - [`ExperienceTable`]: rewards by enemy, task and exploration source

mod character;
mod curve;
mod error;
mod growth;
mod level;
mod sources;

pub use character::Character;
pub use curve::{ExperienceCurve, LinearCurve, TableCurve};
pub use error::ProgressionError;
pub use growth::GrowthTable;
pub use level::LevelEngine;
pub use sources::{ExperienceSource, ExperienceTable, ScaledReward};
