/// Phase of the battle state machine.
///
/// `Idle -> Preparing -> Fighting -> Victory | Defeat`. The last two are
/// terminal until the battle is initialized again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatState {
    #[default]
    Idle,
    Preparing,
    Fighting,
    Victory,
    Defeat,
}

impl CombatState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}
