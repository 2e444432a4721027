//! A leveled character: level engine coupled to its attribute store.

use tracing::info;

use super::{LevelEngine, ProgressionError};
use crate::attribute::{AttributeDefinition, AttributeError, AttributeStore};
use crate::config::ProgressionConfig;
use crate::event::GameEvent;

/// Level engine plus attribute store, kept in step.
///
/// Every level gained re-derives all attributes and queues one
/// `LevelUp` event carrying the attributes that changed.
#[derive(Debug)]
pub struct Character {
    level: LevelEngine,
    attributes: AttributeStore,
    events: Vec<GameEvent>,
}

impl Character {
    pub fn new(config: &ProgressionConfig) -> Result<Self, ProgressionError> {
        Ok(Self::with_parts(
            LevelEngine::from_config(config)?,
            AttributeStore::new(config),
        ))
    }

    pub fn with_parts(level: LevelEngine, attributes: AttributeStore) -> Self {
        Self {
            level,
            attributes,
            events: Vec::new(),
        }
    }

    /// Loads attribute definitions at the current level.
    pub fn initialize(&mut self, definitions: Vec<AttributeDefinition>) -> Result<(), AttributeError> {
        self.attributes.initialize(definitions, self.level.level())
    }

    pub fn level(&self) -> u32 {
        self.level.level()
    }

    pub fn level_engine(&self) -> &LevelEngine {
        &self.level
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    /// Grants experience, applying and announcing each level gained.
    ///
    /// Returns the number of levels gained.
    pub fn add_experience(&mut self, amount: i64) -> Result<u32, ProgressionError> {
        let reached = self.level.add_experience(amount)?;
        for &level in &reached {
            self.announce_level(level);
        }
        Ok(reached.len() as u32)
    }

    /// Manual level-up; false when the experience threshold is not met.
    pub fn level_up(&mut self) -> bool {
        if !self.level.level_up() {
            return false;
        }
        self.announce_level(self.level.level());
        true
    }

    /// Sets the level directly and re-derives attributes without `LevelUp`.
    pub fn set_level(&mut self, level: u32) -> Result<(), ProgressionError> {
        self.level.set_level(level)?;
        self.attributes.recompute(level);
        Ok(())
    }

    /// Takes the queued events of the character and its attribute store,
    /// oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.flush_attribute_events();
        std::mem::take(&mut self.events)
    }

    fn announce_level(&mut self, level: u32) {
        self.flush_attribute_events();
        let changed = self.attributes.recompute(level);
        info!(level, changed = changed.len(), "level up");
        self.events.push(GameEvent::LevelUp { level, changed });
    }

    fn flush_attribute_events(&mut self) {
        self.events.extend(self.attributes.drain_events());
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::with_parts(LevelEngine::default(), AttributeStore::default())
    }
}
