//! Data-driven content definitions and loaders.
//!
//! This crate reads the static content the rules are parameterized by:
//! - Attribute catalogs (RON)
//! - Experience reward tables (RON)
//! - Battle rosters (RON)
//! - Game configuration (TOML)
//!
//! All loaders deserialize xiuxian-core types directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AttributeCatalog, AttributeLoader, BattleLoader, BattleSetup, ConfigLoader, ContentFactory,
    ExperienceLoader, LoadResult,
};
