//! Shared vocabulary for the turn-based decision core.
//!
//! `game-core` defines the types every other crate speaks: grid positions and
//! cells, read-only actor snapshots, the [`WorldView`] query trait, the
//! data-only [`Action`] protocol with its energy tiers, and [`GameConfig`].
//! It contains no decision logic; brains live in `runtime` and only consume
//! the interfaces re-exported here.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Action, Communication, EnergyTier};
pub use config::{EnergyTable, GameConfig};
pub use env::{BrainKind, LayoutError, MapDimensions, MapLayout, SpawnSpec, WorldView};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    ActorKind, ActorView, CellFlags, CellView, Direction, EntityId, MAX_OCCUPANTS_PER_TILE,
    OccupantSlots, Position, TerrainKind, Tick,
};
