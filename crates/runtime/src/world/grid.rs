use std::collections::BTreeMap;

use game_core::{
    ActorView, CellFlags, CellView, Communication, EntityId, GameConfig, MapDimensions, MapLayout,
    OccupantSlots, Position, SpawnSpec, TerrainKind, WorldView,
};

use super::sight::has_line_of_sight;
use super::{ActorRecord, WorldError};

/// Rectangular grid with an actor registry.
#[derive(Clone, Debug)]
pub struct GridWorld {
    dimensions: MapDimensions,
    terrain: Vec<TerrainKind>,
    flags: Vec<CellFlags>,
    occupancy: BTreeMap<Position, OccupantSlots>,
    actors: BTreeMap<EntityId, ActorRecord>,
    next_id: u32,
    default_sight_range: u32,
}

impl GridWorld {
    /// Open floor of the given size.
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            terrain: vec![TerrainKind::Floor; dimensions.area()],
            flags: vec![CellFlags::empty(); dimensions.area()],
            occupancy: BTreeMap::new(),
            actors: BTreeMap::new(),
            next_id: 1,
            default_sight_range: GameConfig::DEFAULT_SIGHT_RANGE,
        }
    }

    /// Terrain and tile flags of `layout`. Spawns are left to the caller.
    pub fn from_layout(layout: &MapLayout) -> Self {
        let dimensions = layout.dimensions();
        let mut world = Self::new(dimensions);
        for y in 0..dimensions.height as i32 {
            for x in 0..dimensions.width as i32 {
                let position = Position::new(x, y);
                if let Some(index) = dimensions.index(position) {
                    world.terrain[index] = layout.terrain(position).unwrap_or_default();
                    world.flags[index] = layout.flags(position).unwrap_or_default();
                }
            }
        }
        world
    }

    pub fn with_default_sight_range(mut self, sight_range: u32) -> Self {
        self.default_sight_range = sight_range;
        self
    }

    pub fn set_terrain(&mut self, position: Position, terrain: TerrainKind) {
        if let Some(index) = self.dimensions.index(position) {
            self.terrain[index] = terrain;
        }
    }

    pub fn set_flags(&mut self, position: Position, flags: CellFlags) {
        if let Some(index) = self.dimensions.index(position) {
            self.flags[index] = flags;
        }
    }

    /// Items are gone once picked up.
    pub fn clear_items(&mut self, position: Position) {
        if let Some(index) = self.dimensions.index(position) {
            self.flags[index].remove(CellFlags::ITEMS);
        }
    }

    /// Registers a new actor and places it on the grid.
    ///
    /// # Errors
    ///
    /// Fails if the position is off the map, not walkable, or its tile has
    /// no free occupant slot.
    pub fn spawn(&mut self, spec: &SpawnSpec) -> Result<EntityId, WorldError> {
        let position = spec.position;
        let index = self
            .dimensions
            .index(position)
            .ok_or(WorldError::OutOfBounds(position))?;
        if !self.terrain[index].is_passable() {
            return Err(WorldError::Blocked(position));
        }

        let id = EntityId(self.next_id);
        self.add_occupant(position, id)?;
        self.next_id += 1;
        self.actors.insert(
            id,
            ActorRecord {
                id,
                name: spec.name.clone(),
                kind: spec.kind,
                position,
                combat_range: spec.combat_range,
                speed: spec.speed,
                sight_range: spec.sight_range.unwrap_or(self.default_sight_range),
                pending_communication: None,
            },
        );
        tracing::debug!("spawned {} {} at {}", spec.kind, id, position);
        Ok(id)
    }

    /// Moves an actor onto a free cell.
    pub fn move_actor(&mut self, id: EntityId, to: Position) -> Result<(), WorldError> {
        let from = self.record(id).ok_or(WorldError::UnknownActor(id))?.position;
        if !self.dimensions.contains(to) {
            return Err(WorldError::OutOfBounds(to));
        }
        if !self.is_passable(to) {
            return Err(WorldError::Blocked(to));
        }

        self.add_occupant(to, id)?;
        self.remove_occupant(from, id);
        if let Some(record) = self.actors.get_mut(&id) {
            record.position = to;
        }
        Ok(())
    }

    pub fn remove_actor(&mut self, id: EntityId) -> Option<ActorRecord> {
        let record = self.actors.remove(&id)?;
        self.remove_occupant(record.position, id);
        Some(record)
    }

    pub fn set_speed(&mut self, id: EntityId, speed: u32) -> Result<(), WorldError> {
        let record = self.actors.get_mut(&id).ok_or(WorldError::UnknownActor(id))?;
        record.speed = speed;
        Ok(())
    }

    /// Attaches `message` unless the target already holds one.
    ///
    /// Returns whether the message was attached.
    pub fn deliver(&mut self, target: EntityId, message: Communication) -> Result<bool, WorldError> {
        let record = self
            .actors
            .get_mut(&target)
            .ok_or(WorldError::UnknownActor(target))?;
        if record.pending_communication.is_some() {
            return Ok(false);
        }
        record.pending_communication = Some(message);
        Ok(true)
    }

    pub fn take_communication(&mut self, id: EntityId) -> Option<Communication> {
        self.actors.get_mut(&id)?.pending_communication.take()
    }

    pub fn record(&self, id: EntityId) -> Option<&ActorRecord> {
        self.actors.get(&id)
    }

    /// Registered actors in id order.
    pub fn actor_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.actors.keys().copied()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    fn add_occupant(&mut self, position: Position, id: EntityId) -> Result<(), WorldError> {
        let slots = self.occupancy.entry(position).or_default();
        if slots.contains(&id) {
            return Ok(());
        }
        slots
            .try_push(id)
            .map_err(|_| WorldError::TileFull(position))
    }

    fn remove_occupant(&mut self, position: Position, id: EntityId) {
        if let Some(slots) = self.occupancy.get_mut(&position) {
            // Order matters: the first occupant is the tile's primary one.
            slots.retain(|occupant| *occupant != id);
            if slots.is_empty() {
                self.occupancy.remove(&position);
            }
        }
    }

    fn blocks_sight(&self, position: Position) -> bool {
        self.dimensions
            .index(position)
            .is_none_or(|index| self.terrain[index].blocks_sight())
    }
}

impl WorldView for GridWorld {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn cell(&self, position: Position) -> Option<CellView> {
        let index = self.dimensions.index(position)?;
        let occupants = self.occupancy.get(&position).cloned().unwrap_or_default();
        Some(CellView::new(
            position,
            self.terrain[index],
            self.flags[index],
            occupants,
        ))
    }

    /// Row-major scan of the cells within sight range and line of sight.
    fn visible_cells(&self, viewer: EntityId) -> Vec<CellView> {
        let Some(record) = self.record(viewer) else {
            return Vec::new();
        };
        let origin = record.position;
        let range = i64::from(record.sight_range);
        let width = i64::from(self.dimensions.width);
        let height = i64::from(self.dimensions.height);
        // Window clipped to the grid, so any sight range stays in bounds.
        let window = |centre: i32, extent: i64| {
            let centre = i64::from(centre);
            (centre - range).max(0)..=(centre + range).min(extent - 1)
        };

        let mut cells = Vec::new();
        for y in window(origin.y, height) {
            for x in window(origin.x, width) {
                // Both coordinates lie inside the grid, which fits in i32.
                let position = Position::new(x as i32, y as i32);
                if has_line_of_sight(origin, position, |p| self.blocks_sight(p)) {
                    cells.extend(self.cell(position));
                }
            }
        }
        cells
    }

    fn actor(&self, id: EntityId) -> Option<ActorView> {
        self.record(id).map(ActorRecord::view)
    }
}
