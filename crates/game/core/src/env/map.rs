use crate::state::{ActorKind, CellFlags, Position, TerrainKind};

/// Width and height of a rectangular grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Row-major index of an in-bounds position.
    pub fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Which decision strategy drives a spawned actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BrainKind {
    Player,
    #[default]
    Rogue,
    Animal,
    Demon,
    Zombie,
    Summoner,
    Human,
    Spirit,
}

/// Blueprint for an actor that exists when a session starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnSpec {
    pub name: String,
    pub kind: ActorKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub brain: BrainKind,
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(default = "SpawnSpec::default_combat_range"))]
    pub combat_range: u32,
    #[cfg_attr(feature = "serde", serde(default = "SpawnSpec::default_speed"))]
    pub speed: u32,
    /// Falls back to [`crate::GameConfig::default_sight_range`] when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sight_range: Option<u32>,
}

impl SpawnSpec {
    pub const DEFAULT_COMBAT_RANGE: u32 = 1;
    pub const DEFAULT_SPEED: u32 = 100;

    pub fn new(name: impl Into<String>, kind: ActorKind, brain: BrainKind, position: Position) -> Self {
        Self {
            name: name.into(),
            kind,
            brain,
            position,
            combat_range: Self::DEFAULT_COMBAT_RANGE,
            speed: Self::DEFAULT_SPEED,
            sight_range: None,
        }
    }

    pub fn with_combat_range(mut self, combat_range: u32) -> Self {
        self.combat_range = combat_range;
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_sight_range(mut self, sight_range: u32) -> Self {
        self.sight_range = Some(sight_range);
        self
    }

    #[cfg(feature = "serde")]
    fn default_combat_range() -> u32 {
        Self::DEFAULT_COMBAT_RANGE
    }

    #[cfg(feature = "serde")]
    fn default_speed() -> u32 {
        Self::DEFAULT_SPEED
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("map layout has no rows")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },
}

/// Terrain, tile features and initial actors of one level.
///
/// Glyphs: `#` wall, `.` floor, `>` floor with stairs, `*` floor with items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapLayout {
    dimensions: MapDimensions,
    terrain: Vec<TerrainKind>,
    flags: Vec<CellFlags>,
    spawns: Vec<SpawnSpec>,
}

impl MapLayout {
    /// Fully open floor of the given size.
    pub fn open(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            terrain: vec![TerrainKind::Floor; dimensions.area()],
            flags: vec![CellFlags::empty(); dimensions.area()],
            spawns: Vec::new(),
        }
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        let width = rows.first().ok_or(LayoutError::Empty)?.as_ref().chars().count();
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut terrain = Vec::with_capacity(width * rows.len());
        let mut flags = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let (kind, flag) = match glyph {
                    '#' => (TerrainKind::Wall, CellFlags::empty()),
                    '.' => (TerrainKind::Floor, CellFlags::empty()),
                    '>' => (TerrainKind::Floor, CellFlags::STAIRS),
                    '*' => (TerrainKind::Floor, CellFlags::ITEMS),
                    glyph => {
                        return Err(LayoutError::UnknownGlyph {
                            glyph,
                            position: Position::new(x as i32, y as i32),
                        });
                    }
                };
                terrain.push(kind);
                flags.push(flag);
            }
        }

        Ok(Self {
            dimensions: MapDimensions::new(width as u32, rows.len() as u32),
            terrain,
            flags,
            spawns: Vec::new(),
        })
    }

    pub fn with_spawns(mut self, spawns: Vec<SpawnSpec>) -> Self {
        self.spawns = spawns;
        self
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.dimensions
            .index(position)
            .and_then(|index| self.terrain.get(index).copied())
    }

    pub fn flags(&self, position: Position) -> Option<CellFlags> {
        self.dimensions
            .index(position)
            .and_then(|index| self.flags.get(index).copied())
    }

    pub fn set_terrain(&mut self, position: Position, kind: TerrainKind) {
        if let Some(slot) = self
            .dimensions
            .index(position)
            .and_then(|index| self.terrain.get_mut(index))
        {
            *slot = kind;
        }
    }

    pub fn set_flags(&mut self, position: Position, flags: CellFlags) {
        if let Some(slot) = self
            .dimensions
            .index(position)
            .and_then(|index| self.flags.get_mut(index))
        {
            *slot = flags;
        }
    }

    pub fn spawns(&self) -> &[SpawnSpec] {
        &self.spawns
    }
}
