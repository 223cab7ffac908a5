use super::{EntityId, Position};

/// Type tag of an actor.
///
/// Memories register whole kinds as hostile ("every human is an enemy"), so
/// the tag is compared by value rather than by identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActorKind {
    Player,
    Human,
    Demon,
    Animal,
    Zombie,
    Spirit,
    Summoner,
    Summoned,
    #[strum(to_string = "custom")]
    Custom(u16),
}

/// Read-only snapshot of an actor, as seen by a deciding brain.
///
/// Produced by [`crate::WorldView::actor`]; it never outlives one decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorView {
    pub id: EntityId,
    pub name: String,
    pub kind: ActorKind,
    pub position: Position,
    /// Maximum Chebyshev distance at which the actor can attack.
    pub combat_range: u32,
    pub speed: u32,
    pub sight_range: u32,
    /// True while a received communication waits to be processed.
    pub has_pending_communication: bool,
}

impl ActorView {
    pub fn is_player(&self) -> bool {
        self.kind == ActorKind::Player
    }
}
