//! Topic-based event bus implementation.

use std::collections::HashMap;

use xiuxian_core::GameEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, strum::Display)]
pub enum Topic {
    /// Battle phases, casts and rewards
    Battle,
    /// Level-ups
    Progression,
    /// Attribute initialization and changes
    Attribute,
}

impl Topic {
    pub fn of(event: &GameEvent) -> Self {
        match event {
            GameEvent::SystemInitialized { .. } | GameEvent::AttributeChanged { .. } => {
                Self::Attribute
            }
            GameEvent::LevelUp { .. } => Self::Progression,
            GameEvent::BattleStarted
            | GameEvent::SkillCast { .. }
            | GameEvent::BattleEnded { .. }
            | GameEvent::BattleReward { .. }
            | GameEvent::BattleResultConfirmed { .. } => Self::Battle,
        }
    }
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&GameEvent) + Send>;

/// Synchronous topic-based event bus.
///
/// Every subscriber of a topic sees each event published to it, in
/// registration order, before `publish` returns.
#[derive(Default)]
pub struct EventBus {
    subscribers: HashMap<Topic, Vec<(SubscriptionId, Handler)>>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a specific topic
    pub fn subscribe(
        &mut self,
        topic: Topic,
        handler: impl FnMut(&GameEvent) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers
            .entry(topic)
            .or_default()
            .push((id, Box::new(handler)));
        tracing::trace!(%topic, ?id, "subscribed");
        id
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for handlers in self.subscribers.values_mut() {
            if let Some(position) = handlers.iter().position(|(sid, _)| *sid == id) {
                handlers.remove(position);
                return true;
            }
        }
        false
    }

    /// Publish an event to its topic. Returns the number of subscribers
    /// that received it.
    pub fn publish(&mut self, event: &GameEvent) -> usize {
        let topic = Topic::of(event);
        let Some(handlers) = self.subscribers.get_mut(&topic) else {
            tracing::trace!("No subscribers for topic {}", topic);
            return 0;
        };
        for (_, handler) in handlers.iter_mut() {
            handler(event);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.subscribers.get(&topic).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<Topic, usize> = self
            .subscribers
            .iter()
            .map(|(topic, handlers)| (*topic, handlers.len()))
            .collect();
        f.debug_struct("EventBus").field("subscribers", &counts).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder(log: &Arc<Mutex<Vec<String>>>, tag: &'static str) -> impl FnMut(&GameEvent) + Send + 'static {
        let log = Arc::clone(log);
        move |event| log.lock().unwrap().push(format!("{tag}:{}", event.kind()))
    }

    #[test]
    fn delivers_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe(Topic::Battle, recorder(&log, "a"));
        bus.subscribe(Topic::Battle, recorder(&log, "b"));

        assert_eq!(bus.publish(&GameEvent::BattleStarted), 2);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["a:BattleStarted".to_owned(), "b:BattleStarted".to_owned()]
        );
    }

    #[test]
    fn routes_by_topic() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe(Topic::Progression, recorder(&log, "p"));

        assert_eq!(bus.publish(&GameEvent::BattleStarted), 0);
        bus.publish(&GameEvent::LevelUp {
            level: 2,
            changed: Default::default(),
        });
        assert_eq!(*log.lock().unwrap(), vec!["p:LevelUp".to_owned()]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        let first = bus.subscribe(Topic::Battle, recorder(&log, "a"));
        bus.subscribe(Topic::Battle, recorder(&log, "b"));

        assert!(bus.unsubscribe(first));
        assert!(!bus.unsubscribe(first));
        bus.publish(&GameEvent::BattleEnded { victory: true });
        assert_eq!(*log.lock().unwrap(), vec!["b:BattleEnded".to_owned()]);
        assert_eq!(bus.subscriber_count(Topic::Battle), 1);
    }
}
