//! Reference grid world the brains are exercised against.
//!
//! [`GridWorld`] owns terrain, tile flags, occupancy and the actor registry,
//! and implements [`game_core::WorldView`] for the decision core. It only
//! changes through the scheduler applying actions and outbox requests.
mod grid;
mod sight;

pub use grid::GridWorld;

use game_core::{
    ActorKind, ActorView, Communication, EntityId, ErrorSeverity, GameError, Position,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("position {0} lies outside the map")]
    OutOfBounds(Position),

    #[error("position {0} is not walkable")]
    Blocked(Position),

    #[error("tile {0} has no free occupant slot")]
    TileFull(Position),

    #[error("actor {0} does not exist")]
    UnknownActor(EntityId),
}

impl GameError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfBounds(_) | Self::Blocked(_) | Self::TileFull(_) => {
                ErrorSeverity::Validation
            }
            Self::UnknownActor(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds(_) => "world.out_of_bounds",
            Self::Blocked(_) => "world.blocked",
            Self::TileFull(_) => "world.tile_full",
            Self::UnknownActor(_) => "world.unknown_actor",
        }
    }
}

/// Mutable state of one actor in the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorRecord {
    pub id: EntityId,
    pub name: String,
    pub kind: ActorKind,
    pub position: Position,
    pub combat_range: u32,
    pub speed: u32,
    pub sight_range: u32,
    /// Received intelligence not yet digested by the actor's brain.
    pub pending_communication: Option<Communication>,
}

impl ActorRecord {
    pub fn view(&self) -> ActorView {
        ActorView {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind,
            position: self.position,
            combat_range: self.combat_range,
            speed: self.speed,
            sight_range: self.sight_range,
            has_pending_communication: self.pending_communication.is_some(),
        }
    }
}
