//! Hook registry for managing and running session hooks.

use tracing::{debug, error};

use super::{HookContext, HookCriticality, RewardHook, SessionHook};
use crate::{Result, RuntimeError};

/// Priority-ordered set of session hooks.
pub struct HookRegistry {
    hooks: Vec<Box<dyn SessionHook>>,
}

impl HookRegistry {
    /// Creates a registry; hooks are sorted by priority (lower first, stable).
    pub fn new(mut hooks: Vec<Box<dyn SessionHook>>) -> Self {
        hooks.sort_by_key(|h| h.priority());
        Self { hooks }
    }

    pub fn empty() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Creates a registry with the default set of hooks.
    ///
    /// Default hooks include:
    /// - RewardHook: applies battle rewards to the player
    pub fn default_hooks() -> Self {
        Self::new(vec![Box::new(RewardHook)])
    }

    /// Adds a hook, keeping priority order.
    pub fn register(&mut self, hook: Box<dyn SessionHook>) {
        self.hooks.push(hook);
        self.hooks.sort_by_key(|h| h.priority());
    }

    /// Offers the event in `ctx` to every hook.
    ///
    /// Returns the error of the first failing critical hook; other failures
    /// are logged.
    pub fn run(&self, ctx: &mut HookContext<'_>) -> Result<()> {
        for hook in &self.hooks {
            if !hook.should_trigger(ctx) {
                continue;
            }
            if let Err(e) = hook.apply(ctx) {
                self.handle_hook_error(hook.as_ref(), e)?;
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over hook names and priorities (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.hooks.iter().map(|h| (h.name(), h.priority()))
    }

    fn handle_hook_error(&self, hook: &dyn SessionHook, error: RuntimeError) -> Result<()> {
        match hook.criticality() {
            HookCriticality::Critical => {
                error!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "critical",
                    error = %error,
                    "Critical hook failed, aborting dispatch"
                );
                Err(RuntimeError::Hook {
                    hook: hook.name(),
                    reason: error.to_string(),
                })
            }
            HookCriticality::Important => {
                error!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "important",
                    error = %error,
                    "Hook failed, continuing"
                );
                Ok(())
            }
            HookCriticality::Optional => {
                debug!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "optional",
                    error = %error,
                    "Optional hook failed"
                );
                Ok(())
            }
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::default_hooks()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.hooks()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Inventory;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use xiuxian_core::{Character, GameEvent};

    struct Probe {
        name: &'static str,
        priority: i32,
        criticality: HookCriticality,
        fail: bool,
        order: Arc<std::sync::Mutex<Vec<&'static str>>>,
        calls: Arc<AtomicUsize>,
    }

    impl SessionHook for Probe {
        fn name(&self) -> &'static str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn criticality(&self) -> HookCriticality {
            self.criticality
        }

        fn should_trigger(&self, _ctx: &HookContext<'_>) -> bool {
            true
        }

        fn apply(&self, _ctx: &mut HookContext<'_>) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.order.lock().unwrap().push(self.name);
            if self.fail {
                Err(RuntimeError::NoBattle)
            } else {
                Ok(())
            }
        }
    }

    fn probe(
        name: &'static str,
        priority: i32,
        criticality: HookCriticality,
        fail: bool,
        order: &Arc<std::sync::Mutex<Vec<&'static str>>>,
    ) -> Box<dyn SessionHook> {
        Box::new(Probe {
            name,
            priority,
            criticality,
            fail,
            order: Arc::clone(order),
            calls: Arc::new(AtomicUsize::new(0)),
        })
    }

    fn run(registry: &HookRegistry) -> Result<()> {
        let mut character = Character::default();
        let mut inventory = Inventory::default();
        let mut ctx = HookContext {
            event: &GameEvent::BattleStarted,
            character: &mut character,
            inventory: &mut inventory,
        };
        registry.run(&mut ctx)
    }

    #[test]
    fn runs_in_priority_order() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let registry = HookRegistry::new(vec![
            probe("late", 5, HookCriticality::Important, false, &order),
            probe("early", -5, HookCriticality::Important, false, &order),
            probe("default", 0, HookCriticality::Important, false, &order),
        ]);
        run(&registry).unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["early", "default", "late"]);
    }

    #[test]
    fn non_critical_failures_continue() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let registry = HookRegistry::new(vec![
            probe("flaky", 0, HookCriticality::Important, true, &order),
            probe("cosmetic", 1, HookCriticality::Optional, true, &order),
            probe("after", 2, HookCriticality::Important, false, &order),
        ]);
        assert!(run(&registry).is_ok());
        assert_eq!(order.lock().unwrap().len(), 3);
    }

    #[test]
    fn critical_failure_aborts() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let registry = HookRegistry::new(vec![
            probe("guard", 0, HookCriticality::Critical, true, &order),
            probe("after", 1, HookCriticality::Important, false, &order),
        ]);
        let err = run(&registry).unwrap_err();
        assert_eq!(
            err,
            RuntimeError::Hook {
                hook: "guard",
                reason: "no battle is running".into()
            }
        );
        assert_eq!(*order.lock().unwrap(), vec!["guard"]);
    }

    #[test]
    fn default_hooks_contain_reward() {
        let registry = HookRegistry::default();
        assert_eq!(registry.hooks().collect::<Vec<_>>(), vec![("reward", -10)]);
    }
}
