//! Uniform-cost shortest paths over 8-directional grid adjacency.
//!
//! The search is rooted at the *target* and expands outwards until it reaches
//! the source, so the target cell itself (usually occupied by the enemy being
//! approached) never has to satisfy the passability predicate. Passability is
//! asked through a closure on every call; nothing is cached between calls.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use game_core::{ErrorSeverity, GameError, MapDimensions, Position};

/// Path endpoints outside the grid are a caller bug, never a runtime state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("path endpoint {position} lies outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },
}

impl GameError for PathError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "path.out_of_bounds"
    }
}

/// Dijkstra search bounded by the grid dimensions.
#[derive(Clone, Copy, Debug)]
pub struct Pathfinder {
    dimensions: MapDimensions,
}

impl Pathfinder {
    /// Cost of a single step, orthogonal or diagonal.
    const STEP_COST: u32 = 1;

    pub fn new(dimensions: MapDimensions) -> Self {
        Self { dimensions }
    }

    /// Returns the cells from `from` to `to`, both inclusive, nearest to
    /// `from` first.
    ///
    /// When `to` is unreachable the result holds only `from`. Cells other
    /// than `to` are entered only if `passable` accepts them, so callers that
    /// stand on `from` must accept their own cell.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::OutOfBounds`] if either endpoint is off the grid.
    pub fn shortest_path<F>(
        &self,
        from: Position,
        to: Position,
        passable: F,
    ) -> Result<Vec<Position>, PathError>
    where
        F: Fn(Position) -> bool,
    {
        self.check_bounds(from)?;
        self.check_bounds(to)?;

        if from == to {
            return Ok(vec![from]);
        }

        let area = self.dimensions.area();
        let mut cost: Vec<Option<u32>> = vec![None; area];
        // Next hop towards `to` for every settled cell.
        let mut toward_target: Vec<Option<Position>> = vec![None; area];
        let mut frontier = BinaryHeap::new();
        // Sequence number keeps pops FIFO among equal costs.
        let mut sequence: u64 = 0;

        if let Some(index) = self.dimensions.index(to) {
            cost[index] = Some(0);
        }
        frontier.push(Reverse((0u32, sequence, to)));

        while let Some(Reverse((current_cost, _, current))) = frontier.pop() {
            if current == from {
                break;
            }
            let Some(current_index) = self.dimensions.index(current) else {
                continue;
            };
            if cost[current_index].is_some_and(|settled| settled < current_cost) {
                continue;
            }

            for neighbor in current.neighbors() {
                let Some(index) = self.dimensions.index(neighbor) else {
                    continue;
                };
                if !passable(neighbor) {
                    continue;
                }

                let candidate = current_cost + Self::STEP_COST;
                if cost[index].is_none_or(|known| candidate < known) {
                    cost[index] = Some(candidate);
                    toward_target[index] = Some(current);
                    sequence += 1;
                    frontier.push(Reverse((candidate, sequence, neighbor)));
                }
            }
        }

        let mut path = vec![from];
        let mut cursor = from;
        while cursor != to {
            let next = self
                .dimensions
                .index(cursor)
                .and_then(|index| toward_target[index]);
            match next {
                Some(next) => {
                    path.push(next);
                    cursor = next;
                }
                None => return Ok(vec![from]),
            }
        }
        Ok(path)
    }

    fn check_bounds(&self, position: Position) -> Result<(), PathError> {
        if self.dimensions.contains(position) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                position,
                width: self.dimensions.width,
                height: self.dimensions.height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn open(_: Position) -> bool {
        true
    }

    #[test]
    fn straight_path_on_open_grid() {
        let finder = Pathfinder::new(MapDimensions::new(10, 10));
        let from = Position::new(0, 0);
        let to = Position::new(3, 0);

        let path = finder.shortest_path(from, to, open).unwrap();

        assert_eq!(path.len(), 4);
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
        let distances: Vec<u32> = path.iter().map(|p| p.chebyshev_distance(to)).collect();
        assert!(distances.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn diagonal_moves_shorten_paths() {
        let finder = Pathfinder::new(MapDimensions::new(10, 10));
        let path = finder
            .shortest_path(Position::new(0, 0), Position::new(4, 4), open)
            .unwrap();
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn routes_around_walls() {
        let finder = Pathfinder::new(MapDimensions::new(7, 7));
        // Vertical wall at x = 3 with a single gap at y = 6.
        let walls: HashSet<Position> = (0..6).map(|y| Position::new(3, y)).collect();
        let from = Position::new(1, 1);
        let to = Position::new(5, 1);

        let path = finder
            .shortest_path(from, to, |p| !walls.contains(&p))
            .unwrap();

        assert_eq!(path.last(), Some(&to));
        assert!(path.iter().all(|p| !walls.contains(p)));
        assert!(path.contains(&Position::new(3, 6)));
    }

    #[test]
    fn unreachable_target_yields_source_only() {
        let finder = Pathfinder::new(MapDimensions::new(5, 5));
        let to = Position::new(4, 4);
        let from = Position::new(0, 0);
        // Only the source and the target are walkable.
        let path = finder
            .shortest_path(from, to, |p| p == from || p == to)
            .unwrap();
        assert_eq!(path, vec![from]);
    }

    #[test]
    fn target_cell_need_not_be_passable() {
        let finder = Pathfinder::new(MapDimensions::new(5, 5));
        let from = Position::new(0, 0);
        let to = Position::new(2, 0);
        let path = finder.shortest_path(from, to, |p| p != to).unwrap();
        assert_eq!(path.last(), Some(&to));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn source_must_be_accepted_by_the_predicate() {
        let finder = Pathfinder::new(MapDimensions::new(5, 5));
        let from = Position::new(0, 0);
        let to = Position::new(3, 3);
        let path = finder.shortest_path(from, to, |p| p != from).unwrap();
        assert_eq!(path, vec![from]);
    }

    #[test]
    fn same_cell_is_a_single_step_path() {
        let finder = Pathfinder::new(MapDimensions::new(3, 3));
        let here = Position::new(1, 1);
        assert_eq!(finder.shortest_path(here, here, open).unwrap(), vec![here]);
    }

    #[test]
    fn out_of_bounds_endpoints_are_reported() {
        let finder = Pathfinder::new(MapDimensions::new(3, 3));
        let err = finder
            .shortest_path(Position::new(0, 0), Position::new(-1, 2), open)
            .unwrap_err();
        assert_eq!(
            err,
            PathError::OutOfBounds {
                position: Position::new(-1, 2),
                width: 3,
                height: 3
            }
        );
        assert!(err.severity().is_internal());
    }
}
