//! In-memory world and scripted dice for brain unit tests.

use std::collections::{HashMap, HashSet, VecDeque};

use game_core::{
    ActorKind, ActorView, CellFlags, CellView, EntityId, MapDimensions, OccupantSlots, Position,
    TerrainKind, WorldView,
};

use super::Dice;

/// Dice that replays queued draws, falling back to `0.0` / index `0`.
#[derive(Debug, Default)]
pub(crate) struct ScriptedDice {
    units: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedDice {
    pub(crate) fn units(units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            units: units.into_iter().collect(),
            indices: VecDeque::new(),
        }
    }

    pub(crate) fn indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            units: VecDeque::new(),
            indices: indices.into_iter().collect(),
        }
    }

    pub(crate) fn remaining_units(&self) -> usize {
        self.units.len()
    }
}

impl Dice for ScriptedDice {
    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }

    fn below(&mut self, upper: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % upper
    }
}

/// Open grid where every actor sees every cell within its sight range.
#[derive(Debug)]
pub(crate) struct StubWorld {
    dimensions: MapDimensions,
    walls: HashSet<Position>,
    flags: HashMap<Position, CellFlags>,
    actors: Vec<ActorView>,
    hostility: Vec<(EntityId, EntityId)>,
    blind: HashSet<EntityId>,
}

impl StubWorld {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            dimensions: MapDimensions::new(width, height),
            walls: HashSet::new(),
            flags: HashMap::new(),
            actors: Vec::new(),
            hostility: Vec::new(),
            blind: HashSet::new(),
        }
    }

    pub(crate) fn with_actor(mut self, actor: ActorView) -> Self {
        self.actors.push(actor);
        self
    }

    pub(crate) fn with_wall(mut self, position: Position) -> Self {
        self.walls.insert(position);
        self
    }

    pub(crate) fn with_flags(mut self, position: Position, flags: CellFlags) -> Self {
        self.flags.insert(position, flags);
        self
    }

    /// `observer` remembers `other` as an enemy.
    pub(crate) fn with_hostility(mut self, observer: EntityId, other: EntityId) -> Self {
        self.hostility.push((observer, other));
        self
    }

    pub(crate) fn blind(mut self, viewer: EntityId) -> Self {
        self.blind.insert(viewer);
        self
    }
}

impl WorldView for StubWorld {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn cell(&self, position: Position) -> Option<CellView> {
        if !self.dimensions.contains(position) {
            return None;
        }
        let terrain = if self.walls.contains(&position) {
            TerrainKind::Wall
        } else {
            TerrainKind::Floor
        };
        let flags = self.flags.get(&position).copied().unwrap_or_default();
        let occupants: OccupantSlots = self
            .actors
            .iter()
            .filter(|actor| actor.position == position)
            .map(|actor| actor.id)
            .take(game_core::MAX_OCCUPANTS_PER_TILE)
            .collect();
        Some(CellView::new(position, terrain, flags, occupants))
    }

    fn visible_cells(&self, viewer: EntityId) -> Vec<CellView> {
        let Some(me) = self.actor(viewer) else {
            return Vec::new();
        };
        if self.blind.contains(&viewer) {
            return Vec::new();
        }
        let mut cells = Vec::new();
        for y in 0..self.dimensions.height as i32 {
            for x in 0..self.dimensions.width as i32 {
                let position = Position::new(x, y);
                if position.chebyshev_distance(me.position) <= me.sight_range {
                    cells.extend(self.cell(position));
                }
            }
        }
        cells
    }

    fn actor(&self, id: EntityId) -> Option<ActorView> {
        self.actors.iter().find(|actor| actor.id == id).cloned()
    }

    fn considers_enemy(&self, observer: EntityId, other: EntityId) -> bool {
        self.hostility.contains(&(observer, other))
    }
}

pub(crate) fn actor(id: u32, kind: ActorKind, x: i32, y: i32) -> ActorView {
    ActorView {
        id: EntityId(id),
        name: format!("{kind}-{id}"),
        kind,
        position: Position::new(x, y),
        combat_range: 1,
        speed: 100,
        sight_range: 5,
        has_pending_communication: false,
    }
}
