//! Static attribute descriptors and the keys derived from them.

use core::fmt;

use super::AttributeValue;

/// Attribute category.
///
/// `Base` attributes are addressed by their bare id; every other kind is
/// addressed by the qualified form `"{id}_{Kind}"`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKind {
    #[default]
    Base,
    Combat,
    Special,
    Growth,
}

/// Unique cache key of an attribute value.
///
/// Structured rather than string-concatenated, so a qualified key can never
/// collide with the bare id of another attribute.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeKey {
    pub id: String,
    pub kind: AttributeKind,
}

impl AttributeKey {
    pub fn new(id: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Key of a `Base` attribute.
    pub fn base(id: impl Into<String>) -> Self {
        Self::new(id, AttributeKind::Base)
    }

    pub fn is_qualified(&self) -> bool {
        self.kind != AttributeKind::Base
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_qualified() {
            write!(f, "{}_{}", self.id, self.kind)
        } else {
            f.write_str(&self.id)
        }
    }
}

/// Immutable attribute descriptor, loaded once from content.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: AttributeKind,
    pub base_value: AttributeValue,
    /// Per-level increment. `None` defers to the fixed growth table.
    #[cfg_attr(feature = "serde", serde(default))]
    pub growth_rate: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon_path: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sort_order: i32,
}

impl AttributeDefinition {
    pub fn new(
        id: impl Into<String>,
        kind: AttributeKind,
        base_value: impl Into<AttributeValue>,
        growth_rate: f64,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind,
            base_value: base_value.into(),
            growth_rate: Some(growth_rate),
            description: String::new(),
            icon_path: String::new(),
            sort_order: 0,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Clears the definition-level growth rate so the fixed table applies.
    #[must_use]
    pub fn with_table_growth(mut self) -> Self {
        self.growth_rate = None;
        self
    }

    pub fn key(&self) -> AttributeKey {
        AttributeKey::new(self.id.clone(), self.kind)
    }

    pub fn matches(&self, id: &str, kind: Option<AttributeKind>) -> bool {
        self.id == id && kind.is_none_or(|kind| kind == self.kind)
    }

    /// Value of this attribute at `level` for the given growth rate.
    ///
    /// Level 1 yields the base value; each level above it adds one growth
    /// step.
    pub fn value_at(&self, level: u32, growth_rate: f64) -> AttributeValue {
        self.base_value.grown(level.saturating_sub(1), growth_rate)
    }
}

impl fmt::Display for AttributeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AttributeDefinition[id={}, name={}, type={}, base={}, growth={:?}]",
            self.id, self.name, self.kind, self.base_value, self.growth_rate
        )
    }
}
