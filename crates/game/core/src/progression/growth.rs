//! Fixed per-level growth table.
//!
//! Used for any attribute whose definition carries no growth rate of its own.

use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GrowthTable {
    rates: BTreeMap<String, f64>,
}

impl GrowthTable {
    pub fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_rate(mut self, id: impl Into<String>, rate: f64) -> Self {
        self.rates.insert(id.into(), rate);
        self
    }

    /// Growth per level for `id`; attributes missing from the table do not grow.
    pub fn rate(&self, id: &str) -> f64 {
        self.rates.get(id).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rates.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.rates.iter().map(|(id, rate)| (id.as_str(), *rate))
    }
}

impl Default for GrowthTable {
    fn default() -> Self {
        Self::empty()
            .with_rate("hp", 10.0)
            .with_rate("mp", 5.0)
            .with_rate("attack", 2.0)
            .with_rate("defense", 1.5)
            .with_rate("speed", 1.0)
    }
}
