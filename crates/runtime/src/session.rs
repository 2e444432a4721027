//! The session: one character, one inventory and one battle, driven frame
//! by frame.

use std::collections::VecDeque;

use tracing::{debug, info, warn};
use xiuxian_core::{
    AttributeDefinition, BattleManager, Character, CombatState, CombatStats, ExperienceSource,
    ExperienceTable, GameConfig, GameEvent, Participant,
};

use crate::events::{EventBus, SubscriptionId, Topic};
use crate::hooks::{HookContext, HookRegistry, SessionHook};
use crate::{Inventory, Result, RuntimeError};

/// Owns the game state of one player and routes every event it produces.
///
/// After each mutating call the session drains the queued core events,
/// runs hooks on each, and publishes them. Events a hook causes (e.g. a
/// `LevelUp` from a reward) are published right after their cause.
///
/// A critical hook failure stops dispatch after the failing event is
/// published. Events behind it stay queued and go out on the next call.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    character: Character,
    inventory: Inventory,
    battle: BattleManager,
    experience: ExperienceTable,
    bus: EventBus,
    hooks: HookRegistry,
    pending: VecDeque<GameEvent>,
}

impl Session {
    /// Builds a level-1 character from `definitions` with the default hooks.
    pub fn new(config: GameConfig, definitions: Vec<AttributeDefinition>) -> Result<Self> {
        let mut character = Character::new(&config.progression)?;
        character.initialize(definitions)?;
        let battle = BattleManager::new(config.battle.clone());
        Ok(Self {
            config,
            character,
            inventory: Inventory::default(),
            battle,
            experience: ExperienceTable::default(),
            bus: EventBus::new(),
            hooks: HookRegistry::default_hooks(),
            pending: VecDeque::new(),
        })
    }

    #[must_use]
    pub fn with_experience_table(mut self, table: ExperienceTable) -> Self {
        self.experience = table;
        self
    }

    #[must_use]
    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn register_hook(&mut self, hook: Box<dyn SessionHook>) {
        self.hooks.register(hook);
    }

    pub fn subscribe(
        &mut self,
        topic: Topic,
        handler: impl FnMut(&GameEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.bus.subscribe(topic, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Publishes the events queued during construction (`SystemInitialized`).
    pub fn flush(&mut self) -> Result<()> {
        self.dispatch()
    }

    /// Starts a battle with `participants`. Fails while another battle is
    /// preparing or fighting.
    pub fn start_battle(&mut self, participants: Vec<Participant>) -> Result<()> {
        if matches!(
            self.battle.state(),
            CombatState::Preparing | CombatState::Fighting
        ) {
            warn!(state = %self.battle.state(), "battle already running");
            return Err(RuntimeError::BattleInProgress);
        }
        self.battle.initialize(participants);
        self.dispatch()
    }

    /// Advances the battle by `dt` and dispatches what happened.
    pub fn update(&mut self, dt: f32) -> Result<()> {
        self.battle.update(dt);
        self.dispatch()
    }

    /// Casts skill `skill` of the first living player. Returns whether the
    /// cast happened.
    pub fn cast_player_skill(&mut self, skill: usize) -> Result<bool> {
        if self.battle.state() == CombatState::Idle {
            return Err(RuntimeError::NoBattle);
        }
        let caster = self
            .battle
            .roster()
            .living(true)
            .next()
            .ok_or(RuntimeError::NoPlayer)?;
        let cast = self.battle.cast_player_skill(caster, skill);
        self.dispatch()?;
        Ok(cast)
    }

    /// Grants the experience `source` is worth. Returns levels gained.
    pub fn grant_experience(&mut self, source: &ExperienceSource) -> Result<u32> {
        let amount = self
            .experience
            .resolve(source)
            .ok_or_else(|| RuntimeError::UnknownExperienceSource(format!("{source:?}")))?;
        self.add_experience(i64::try_from(amount).unwrap_or(i64::MAX))
    }

    /// Adds raw experience to the character. Returns levels gained.
    pub fn add_experience(&mut self, amount: i64) -> Result<u32> {
        let levels = self.character.add_experience(amount)?;
        self.dispatch()?;
        Ok(levels)
    }

    /// Full-health battle stats derived from the character's attributes at
    /// its current level.
    pub fn character_stats(&self) -> CombatStats {
        CombatStats::from_attributes(self.character.attributes())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn battle(&self) -> &BattleManager {
        &self.battle
    }

    pub fn battle_mut(&mut self) -> &mut BattleManager {
        &mut self.battle
    }

    pub fn experience_table(&self) -> &ExperienceTable {
        &self.experience
    }

    /// Events still waiting to be dispatched.
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    fn dispatch(&mut self) -> Result<()> {
        self.pending.extend(self.battle.drain_events());
        self.pending.extend(self.character.drain_events());

        while let Some(event) = self.pending.pop_front() {
            let mut ctx = HookContext {
                event: &event,
                character: &mut self.character,
                inventory: &mut self.inventory,
            };
            let outcome = self.hooks.run(&mut ctx);

            let delivered = self.bus.publish(&event);
            debug!(kind = %event.kind(), delivered, "event dispatched");
            if let GameEvent::BattleResultConfirmed { victory } = event {
                info!(victory, level = self.character.level(), "battle closed");
            }

            for caused in self.character.drain_events().into_iter().rev() {
                self.pending.push_front(caused);
            }

            if let Err(e) = outcome {
                warn!(
                    kind = %event.kind(),
                    queued = self.pending.len(),
                    "dispatch stopped by hook failure"
                );
                return Err(e);
            }
        }
        Ok(())
    }
}
