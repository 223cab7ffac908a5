/// Turn-cost class a decision declares to the scheduler.
///
/// The concrete amounts live in [`crate::EnergyTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnergyTier {
    Rest,
    Pickup,
    Move,
    Attack,
    Run,
}
