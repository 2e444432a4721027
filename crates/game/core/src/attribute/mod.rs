//! Attribute store: named, leveled numeric stats.
//!
//! Definitions are immutable descriptors loaded from content. The store
//! derives one value per definition from the character level
//! (`base + (level - 1) * growth`) and caches it until the level changes.

mod definition;
mod error;
mod store;
mod value;

pub use definition::{AttributeDefinition, AttributeKey, AttributeKind};
pub use error::AttributeError;
pub use store::{AttributeChange, AttributeStore};
pub use value::{AttributeValue, ValueKind};
