use tracing::info;
use xiuxian_core::GameEvent;

use super::{HookContext, HookCriticality, SessionHook};
use crate::Result;

/// Applies `BattleReward` experience and items to the player.
#[derive(Debug, Default, Clone, Copy)]
pub struct RewardHook;

impl SessionHook for RewardHook {
    fn name(&self) -> &'static str {
        "reward"
    }

    fn priority(&self) -> i32 {
        -10
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Critical
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        matches!(ctx.event, GameEvent::BattleReward { .. })
    }

    fn apply(&self, ctx: &mut HookContext<'_>) -> Result<()> {
        let GameEvent::BattleReward {
            recipient,
            experience,
            items,
        } = ctx.event
        else {
            return Ok(());
        };

        let amount = i64::try_from(*experience).unwrap_or(i64::MAX);
        let levels = ctx.character.add_experience(amount)?;
        for item in items {
            ctx.inventory.add(item.as_str(), 1);
        }
        info!(
            recipient = ?recipient,
            experience,
            items = items.len(),
            levels,
            "battle reward applied"
        );
        Ok(())
    }
}
