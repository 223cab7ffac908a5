use arrayvec::ArrayVec;
use bitflags::bitflags;

use super::{EntityId, Position};

/// Maximum number of actors sharing one tile.
pub const MAX_OCCUPANTS_PER_TILE: usize = 4;

pub type OccupantSlots = ArrayVec<EntityId, MAX_OCCUPANTS_PER_TILE>;

/// Canonical terrain classes for grid tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Floor,
    Wall,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }

    /// Walls block line of sight; floor never does.
    pub fn blocks_sight(self) -> bool {
        matches!(self, TerrainKind::Wall)
    }
}

bitflags! {
    /// Static features of a tile that gate player commands.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CellFlags: u8 {
        const STAIRS = 0b0000_0001;
        const ITEMS = 0b0000_0010;
    }
}

/// Perceived cell: position, occupants and passability at query time.
///
/// Occupants keep insertion order; the first one is the cell's "primary"
/// occupant used by every classification rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    position: Position,
    terrain: TerrainKind,
    flags: CellFlags,
    occupants: OccupantSlots,
}

impl CellView {
    pub fn new(
        position: Position,
        terrain: TerrainKind,
        flags: CellFlags,
        occupants: OccupantSlots,
    ) -> Self {
        Self {
            position,
            terrain,
            flags,
            occupants,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    pub fn occupants(&self) -> &[EntityId] {
        &self.occupants
    }

    pub fn first_occupant(&self) -> Option<EntityId> {
        self.occupants.first().copied()
    }

    pub fn has_actors(&self) -> bool {
        !self.occupants.is_empty()
    }

    /// Terrain allows walking and nobody stands here.
    pub fn is_passable(&self) -> bool {
        self.terrain.is_passable() && self.occupants.is_empty()
    }

    pub fn is_free(&self) -> bool {
        self.is_passable()
    }

    pub fn has_stairs(&self) -> bool {
        self.flags.contains(CellFlags::STAIRS)
    }

    pub fn has_items(&self) -> bool {
        self.flags.contains(CellFlags::ITEMS)
    }
}
