//! Topic-routed delivery of core events to presentation layers.

mod bus;

pub use bus::{EventBus, SubscriptionId, Topic};
