//! Session orchestration around the xiuxian-core rules.
//!
//! This crate wires the core components into a [`Session`] that owns the
//! player's character and inventory, runs battles, applies hooks, and routes
//! events to subscribers.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator
//! - [`events`] provides the topic-based event bus
//! - [`hooks`] provides the post-event hook system
pub mod error;
pub mod events;
pub mod hooks;
pub mod session;

mod inventory;

pub use error::{Result, RuntimeError};
pub use events::{EventBus, SubscriptionId, Topic};
pub use hooks::{HookContext, HookCriticality, HookRegistry, RewardHook, SessionHook};
pub use inventory::Inventory;
pub use session::Session;
