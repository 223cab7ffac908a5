//! Value types describing what an actor can observe.
//!
//! Everything here is a read-only snapshot: the world hands out copies and
//! decision code never mutates them.
pub mod actor;
pub mod cell;
pub mod common;

pub use actor::{ActorKind, ActorView};
pub use cell::{CellFlags, CellView, MAX_OCCUPANTS_PER_TILE, OccupantSlots, TerrainKind};
pub use common::{Direction, EntityId, Position, Tick};
