use crate::core::coord::Coord;

/// Compass directions on the board. North points towards row 0 (Black's side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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
    /// Unit step for this direction.
    #[inline]
    pub const fn delta(self) -> Coord {
        use Direction::*;
        match self {
            North => Coord::new(0, -1),
            NorthEast => Coord::new(1, -1),
            East => Coord::new(1, 0),
            SouthEast => Coord::new(1, 1),
            South => Coord::new(0, 1),
            SouthWest => Coord::new(-1, 1),
            West => Coord::new(-1, 0),
            NorthWest => Coord::new(-1, -1),
        }
    }
}

pub const ORTHOGONAL: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

pub const DIAGONAL: [Direction; 4] = [
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthWest,
];

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

/// Knight offsets. Knights jump, so these are never walked as rays.
pub const KNIGHT_JUMPS: [Coord; 8] = [
    Coord { x: 1, y: -2 },
    Coord { x: 2, y: -1 },
    Coord { x: 2, y: 1 },
    Coord { x: 1, y: 2 },
    Coord { x: -1, y: 2 },
    Coord { x: -2, y: 1 },
    Coord { x: -2, y: -1 },
    Coord { x: -1, y: -2 },
];
