//! Traits describing the world a brain perceives.
//!
//! The decision core never owns the grid or the actors. It asks a
//! [`WorldView`] for visible cells and actor snapshots, and the answers stay
//! valid for exactly one decision.
mod map;

pub use map::{BrainKind, LayoutError, MapDimensions, MapLayout, SpawnSpec};

use crate::state::{ActorView, CellView, EntityId, Position};

/// Read-only grid and actor queries consumed by brains.
///
/// Implementations must return [`visible_cells`](WorldView::visible_cells) in
/// an order that is stable within one decision: brains break ties by scan
/// order, not by distance.
pub trait WorldView {
    fn dimensions(&self) -> MapDimensions;

    /// Returns the cell at `position`, or `None` outside the grid.
    fn cell(&self, position: Position) -> Option<CellView>;

    /// Cells the viewer currently perceives.
    fn visible_cells(&self, viewer: EntityId) -> Vec<CellView>;

    /// Snapshot of a live actor.
    fn actor(&self, id: EntityId) -> Option<ActorView>;

    /// Whether `observer` regards `other` as hostile, according to the
    /// observer's own memory. Worlds without memories know no hostility.
    fn considers_enemy(&self, _observer: EntityId, _other: EntityId) -> bool {
        false
    }

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Terrain is walkable and the tile is unoccupied.
    fn is_passable(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|cell| cell.is_passable())
    }
}
