use core::fmt::Debug;

use super::Roster;

/// Picks the target of a player-initiated cast.
pub trait TargetingStrategy: Debug + Send + Sync {
    fn select(&self, roster: &Roster, caster: usize) -> Option<usize>;
}

/// First living participant on the opposing side, in roster order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLivingOpponent;

impl TargetingStrategy for FirstLivingOpponent {
    fn select(&self, roster: &Roster, caster: usize) -> Option<usize> {
        let caster = roster.get(caster)?;
        roster.living(!caster.is_player).next()
    }
}

/// Living opponent with the least hp; ties go to the earlier one.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeakestOpponent;

impl TargetingStrategy for WeakestOpponent {
    fn select(&self, roster: &Roster, caster: usize) -> Option<usize> {
        let caster = roster.get(caster)?;
        weakest(roster, !caster.is_player)
    }
}

/// Living member of a side with the least hp; the first one wins ties.
pub fn weakest(roster: &Roster, players: bool) -> Option<usize> {
    roster.living(players).fold(None, |best: Option<usize>, index| match best {
        Some(current) if hp(roster, current) <= hp(roster, index) => Some(current),
        _ => Some(index),
    })
}

fn hp(roster: &Roster, index: usize) -> f32 {
    roster.get(index).map_or(f32::INFINITY, |p| p.stats.hp)
}
