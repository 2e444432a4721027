//! Attribute store: definitions plus the values derived from them.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use super::{
    AttributeDefinition, AttributeError, AttributeKey, AttributeKind, AttributeValue,
};
use crate::config::{MismatchPolicy, ProgressionConfig};
use crate::event::GameEvent;
use crate::progression::GrowthTable;

/// Result of a successful `set` or `add`.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeChange {
    pub key: AttributeKey,
    pub old: AttributeValue,
    pub new: AttributeValue,
}

/// Holds attribute definitions and the cached value of each one.
///
/// Values are derived from the level the store was last computed at.
/// After [`initialize`](Self::initialize) every definition has a cached
/// value; mutations through [`set`](Self::set) and [`add`](Self::add) last
/// until the next level change re-derives everything.
#[derive(Clone, Debug)]
pub struct AttributeStore {
    definitions: Vec<AttributeDefinition>,
    values: BTreeMap<AttributeKey, AttributeValue>,
    level: u32,
    growth_table: GrowthTable,
    mismatch: MismatchPolicy,
    events: Vec<GameEvent>,
}

impl AttributeStore {
    pub fn new(config: &ProgressionConfig) -> Self {
        Self {
            definitions: Vec::new(),
            values: BTreeMap::new(),
            level: 1,
            growth_table: config.growth_table.clone(),
            mismatch: config.mismatch,
            events: Vec::new(),
        }
    }

    /// Replaces all definitions and derives every value at `level`.
    ///
    /// Fails with `InvalidArgument` when `definitions` is empty or contains
    /// the same (id, type) pair twice; prior state is kept in that case.
    pub fn initialize(
        &mut self,
        mut definitions: Vec<AttributeDefinition>,
        level: u32,
    ) -> Result<(), AttributeError> {
        if definitions.is_empty() {
            warn!("attribute definition list must not be empty");
            return Err(AttributeError::InvalidArgument(
                "attribute definition list must not be empty",
            ));
        }

        let mut seen = HashSet::with_capacity(definitions.len());
        if !definitions.iter().all(|def| seen.insert(def.key())) {
            warn!("attribute definitions contain a duplicate id/type pair");
            return Err(AttributeError::InvalidArgument(
                "duplicate attribute id/type pair",
            ));
        }

        definitions.sort_by_key(|def| def.sort_order);
        self.definitions = definitions;
        self.level = level.max(1);
        self.values.clear();
        for def in &self.definitions {
            let value = def.value_at(self.level, self.growth_rate(def));
            self.values.insert(def.key(), value);
        }

        debug!(
            attributes = self.values.len(),
            level = self.level,
            "attribute store initialized"
        );
        self.events.push(GameEvent::SystemInitialized {
            attributes: self.values.len(),
        });
        Ok(())
    }

    /// Current value of `id` (optionally restricted to `kind`).
    ///
    /// Falls back to deriving the value from its definition if nothing is
    /// cached for it.
    pub fn get(
        &self,
        id: &str,
        kind: Option<AttributeKind>,
    ) -> Result<AttributeValue, AttributeError> {
        let def = self.resolve(id, kind)?;
        Ok(self
            .values
            .get(&def.key())
            .copied()
            .unwrap_or_else(|| def.value_at(self.level, self.growth_rate(def))))
    }

    /// Overwrites the value of `id` and emits `AttributeChanged`.
    pub fn set(
        &mut self,
        id: &str,
        value: AttributeValue,
        kind: Option<AttributeKind>,
    ) -> Result<AttributeChange, AttributeError> {
        let old = self.get(id, kind)?;
        let key = self.resolve(id, kind)?.key();
        Ok(self.store(key, old, value))
    }

    /// Adds `delta` to the value of `id` using kind-matched arithmetic.
    ///
    /// Mixed kinds follow the configured [`MismatchPolicy`]: `Overwrite`
    /// stores `delta` as the new value, `Reject` returns
    /// `IncompatibleOperation` without touching the value.
    pub fn add(
        &mut self,
        id: &str,
        delta: AttributeValue,
        kind: Option<AttributeKind>,
    ) -> Result<AttributeChange, AttributeError> {
        let current = self.get(id, kind)?;
        let key = self.resolve(id, kind)?.key();

        let new = match (current.checked_add(delta), self.mismatch) {
            (Some(sum), _) => sum,
            (None, MismatchPolicy::Overwrite) => {
                debug!(%key, %current, %delta, "mixed value kinds, overwriting with delta");
                delta
            }
            (None, MismatchPolicy::Reject) => {
                warn!(%key, %current, %delta, "mixed value kinds, add rejected");
                return Err(AttributeError::IncompatibleOperation {
                    key: key.to_string(),
                    current: current.kind(),
                    delta: delta.kind(),
                });
            }
        };

        Ok(self.store(key, current, new))
    }

    /// Snapshot of every cached value.
    pub fn all(&self) -> BTreeMap<AttributeKey, AttributeValue> {
        self.values.clone()
    }

    /// Snapshot of the values of one kind, keyed by bare attribute id.
    pub fn by_kind(&self, kind: AttributeKind) -> BTreeMap<String, AttributeValue> {
        self.values
            .iter()
            .filter(|(key, _)| key.kind == kind)
            .map(|(key, value)| (key.id.clone(), *value))
            .collect()
    }

    /// Re-derives every value at `level`.
    ///
    /// Returns the attributes whose value differs from the cached one.
    pub fn recompute(&mut self, level: u32) -> BTreeMap<AttributeKey, AttributeValue> {
        self.level = level.max(1);
        let mut changed = BTreeMap::new();
        for def in &self.definitions {
            let value = def.value_at(self.level, self.growth_rate(def));
            let key = def.key();
            if self.values.insert(key.clone(), value) != Some(value) {
                changed.insert(key, value);
            }
        }
        changed
    }

    /// Definitions in `sort_order`.
    pub fn definitions(&self) -> &[AttributeDefinition] {
        &self.definitions
    }

    /// Level the cached values were derived at.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_initialized(&self) -> bool {
        !self.definitions.is_empty()
    }

    /// Takes the queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn resolve(
        &self,
        id: &str,
        kind: Option<AttributeKind>,
    ) -> Result<&AttributeDefinition, AttributeError> {
        if id.is_empty() {
            warn!("attribute id must not be empty");
            return Err(AttributeError::InvalidArgument(
                "attribute id must not be empty",
            ));
        }
        // A bare id names the Base entry when one exists.
        let base = kind
            .is_none()
            .then(|| {
                self.definitions
                    .iter()
                    .find(|def| def.matches(id, Some(AttributeKind::Base)))
            })
            .flatten();
        base.or_else(|| self.definitions.iter().find(|def| def.matches(id, kind)))
            .ok_or_else(|| {
                warn!(id, ?kind, "attribute definition not found");
                AttributeError::not_found(id, kind)
            })
    }

    fn growth_rate(&self, def: &AttributeDefinition) -> f64 {
        def.growth_rate
            .unwrap_or_else(|| self.growth_table.rate(&def.id))
    }

    fn store(
        &mut self,
        key: AttributeKey,
        old: AttributeValue,
        new: AttributeValue,
    ) -> AttributeChange {
        self.values.insert(key.clone(), new);
        self.events.push(GameEvent::AttributeChanged {
            key: key.clone(),
            old,
            new,
        });
        AttributeChange { key, old, new }
    }
}

impl Default for AttributeStore {
    fn default() -> Self {
        Self::new(&ProgressionConfig::default())
    }
}
