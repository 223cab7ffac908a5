use std::fmt;

/// Unique identifier for any actor tracked by the world registry.
///
/// Brains hold an `EntityId` instead of a reference to their actor, so the
/// actor is always resolved through the world at decision time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// `y` grows downwards (screen coordinates), so [`Direction::North`] is `-y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance, the metric of 8-directional movement.
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// Returns the neighbouring position one step in `direction`.
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Returns the 3×3 block centred on this position, row by row.
    pub fn block_3x3(self) -> impl Iterator<Item = Position> {
        (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| Position::new(self.x + dx, self.y + dy)))
    }

    /// Returns the 8 neighbouring positions in [`Direction::ALL`] order.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Direction::ALL.into_iter().map(move |direction| self.step(direction))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the eight compass directions used for movement and adjacency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Direction of a single king-move from `from` towards `to`, if they differ.
    pub fn towards(from: Position, to: Position) -> Option<Direction> {
        let dx = (to.x - from.x).signum();
        let dy = (to.y - from.y).signum();
        Direction::ALL
            .into_iter()
            .find(|direction| direction.delta() == (dx, dy))
    }
}

/// Discrete time unit of the turn scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_distance_uses_the_larger_axis() {
        let a = Position::new(5, 5);
        assert_eq!(a.chebyshev_distance(Position::new(5, 6)), 1);
        assert_eq!(a.chebyshev_distance(Position::new(7, 6)), 2);
        assert_eq!(a.chebyshev_distance(Position::new(2, 9)), 4);
        assert_eq!(a.chebyshev_distance(a), 0);
    }

    #[test]
    fn towards_picks_the_diagonal_when_both_axes_differ() {
        let from = Position::new(0, 0);
        assert_eq!(
            Direction::towards(from, Position::new(3, 4)),
            Some(Direction::SouthEast)
        );
        assert_eq!(
            Direction::towards(from, Position::new(0, -2)),
            Some(Direction::North)
        );
        assert_eq!(Direction::towards(from, from), None);
    }

    #[test]
    fn block_3x3_contains_centre_and_neighbours() {
        let centre = Position::new(2, 2);
        let block: Vec<_> = centre.block_3x3().collect();
        assert_eq!(block.len(), 9);
        assert_eq!(block[0], Position::new(1, 1));
        assert_eq!(block[4], centre);
        assert_eq!(block[8], Position::new(3, 3));
    }
}
