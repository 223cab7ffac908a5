//! Map data loader.
//!
//! Loads terrain rows and initial actors from map RON files:
//!
//! ```ron
//! (
//!     rows: [
//!         "#####",
//!         "#.>*#",
//!         "#####",
//!     ],
//!     actors: [
//!         (name: "wolf", kind: animal, brain: animal, position: (x: 1, y: 1)),
//!     ],
//! )
//! ```

use std::path::Path;

use game_core::{MapLayout, SpawnSpec};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// On-disk shape of a map file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapFile {
    pub rows: Vec<String>,
    #[serde(default)]
    pub actors: Vec<SpawnSpec>,
}

/// Loader for map layouts from RON files.
pub struct MapLoader;

impl MapLoader {
    pub fn load(path: &Path) -> LoadResult<MapLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load map {}: {}", path.display(), e))
    }

    /// Parses a map and checks that every actor starts on walkable ground.
    pub fn parse(content: &str) -> LoadResult<MapLayout> {
        let data: MapFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let layout = MapLayout::from_rows(&data.rows)
            .map_err(|e| anyhow::anyhow!("Invalid map layout: {}", e))?;

        for actor in &data.actors {
            match layout.terrain(actor.position) {
                None => anyhow::bail!("actor {:?} starts outside the map at {}", actor.name, actor.position),
                Some(terrain) if !terrain.is_passable() => {
                    anyhow::bail!("actor {:?} starts inside a wall at {}", actor.name, actor.position)
                }
                Some(_) => {}
            }
        }

        Ok(layout.with_spawns(data.actors))
    }
}

#[cfg(test)]
mod tests {
    use game_core::{ActorKind, BrainKind, CellFlags, Position, TerrainKind};

    use super::*;

    const ARENA: &str = r########"(
        rows: [
            "#####",
            "#.>*#",
            "#####",
        ],
        actors: [
            (name: "wolf", kind: animal, brain: animal, position: (x: 1, y: 1)),
            (name: "hero", kind: player, brain: player, position: (x: 3, y: 1), speed: 120, sight_range: Some(8)),
        ],
    )"########;

    #[test]
    fn rows_and_actors_are_loaded() {
        let layout = MapLoader::parse(ARENA).unwrap();

        assert_eq!(layout.dimensions().width, 5);
        assert_eq!(layout.terrain(Position::new(0, 0)), Some(TerrainKind::Wall));
        assert_eq!(layout.flags(Position::new(2, 1)), Some(CellFlags::STAIRS));
        assert_eq!(layout.flags(Position::new(3, 1)), Some(CellFlags::ITEMS));

        let spawns = layout.spawns();
        assert_eq!(spawns.len(), 2);
        assert_eq!(spawns[0].brain, BrainKind::Animal);
        assert_eq!(spawns[0].combat_range, SpawnSpec::DEFAULT_COMBAT_RANGE);
        assert_eq!(spawns[1].kind, ActorKind::Player);
        assert_eq!(spawns[1].speed, 120);
        assert_eq!(spawns[1].sight_range, Some(8));
    }

    #[test]
    fn actors_inside_walls_are_rejected() {
        let err = MapLoader::parse(
            r########"(rows: ["##", ".."], actors: [(name: "mole", kind: animal, position: (x: 0, y: 0))])"########,
        )
        .unwrap_err();
        assert!(err.to_string().contains("inside a wall"));
    }

    #[test]
    fn actors_default_to_the_base_brain() {
        let layout =
            MapLoader::parse(r#"(rows: [".."], actors: [(name: "rat", kind: animal, position: (x: 1, y: 0))])"#)
                .unwrap();
        assert_eq!(layout.spawns()[0].brain, BrainKind::Rogue);
    }

    #[test]
    fn ragged_rows_are_reported() {
        let err = MapLoader::parse(r#"(rows: ["...", ".."])"#).unwrap_err();
        assert!(err.to_string().contains("Invalid map layout"));
    }
}
