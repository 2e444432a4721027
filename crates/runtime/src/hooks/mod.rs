//! Post-event hook system for session orchestration.
//!
//! Hooks react to core events before they are published, applying their
//! consequences to session state (e.g. granting battle rewards). Effects a
//! hook causes are queued by the core components and published right after
//! the event that caused them.
//!
//! # Architecture
//!
//! - Hooks are registered with the session and sorted by priority
//! - Every drained event is offered to each hook in priority order
//! - Failures are handled according to [`HookCriticality`]

mod registry;
mod reward;

pub use registry::HookRegistry;
pub use reward::RewardHook;

use xiuxian_core::{Character, GameEvent};

use crate::{Inventory, Result};

/// Defines the criticality level of a hook for error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookCriticality {
    /// Hook failure aborts event dispatch and is returned to the caller.
    Critical,
    /// Hook failure is logged as an error, dispatch continues.
    Important,
    /// Hook failure is logged at debug level.
    Optional,
}

/// Session state a hook may read and change.
pub struct HookContext<'a> {
    pub event: &'a GameEvent,
    pub character: &'a mut Character,
    pub inventory: &'a mut Inventory,
}

/// Reaction to a core event.
///
/// # Execution Order
///
/// Lower priorities run first:
/// - Negative priorities: state-keeping hooks
/// - Zero: default
/// - Positive priorities: cosmetic hooks
pub trait SessionHook: Send + Sync {
    /// Human-readable name used in logs.
    fn name(&self) -> &'static str;

    fn priority(&self) -> i32 {
        0
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Important
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool;

    fn apply(&self, ctx: &mut HookContext<'_>) -> Result<()>;
}
