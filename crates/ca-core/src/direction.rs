//! The six canonical movement directions.
//!
//! Agents move strictly orthogonally, one cell at a time, so every legal step
//! maps to exactly one of six codes.  The numeric code doubles as the index
//! into a scenery's per-direction connectivity mask (`Scenery::tube`).
//!
//! | Code | Variant | Displacement |
//! |------|---------|--------------|
//! | 0    | North   | −Y           |
//! | 1    | East    | +X           |
//! | 2    | South   | +Y           |
//! | 3    | West    | −X           |
//! | 4    | Up      | +Z           |
//! | 5    | Down    | −Z           |

use crate::TileCoord;

/// One of the six axis-aligned unit displacements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East  = 1,
    South = 2,
    West  = 3,
    Up    = 4,
    Down  = 5,
}

impl Direction {
    /// All directions in code order.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Map a displacement to its direction code.
    ///
    /// Exactly one component must be nonzero and equal to ±1; any other
    /// displacement (zero, diagonal, multi-cell) has no code and yields
    /// `None`.
    pub fn from_displacement(dx: i32, dy: i32, dz: i32) -> Option<Direction> {
        match (dx, dy, dz) {
            (0, -1, 0) => Some(Direction::North),
            (1, 0, 0)  => Some(Direction::East),
            (0, 1, 0)  => Some(Direction::South),
            (-1, 0, 0) => Some(Direction::West),
            (0, 0, 1)  => Some(Direction::Up),
            (0, 0, -1) => Some(Direction::Down),
            _          => None,
        }
    }

    /// Direction of the single step `from → to`, if it is one.
    #[inline]
    pub fn between(from: TileCoord, to: TileCoord) -> Option<Direction> {
        let (dx, dy, dz) = from.delta_to(to);
        Self::from_displacement(dx, dy, dz)
    }

    /// Look up a direction by its numeric code.
    pub fn from_code(code: u8) -> Option<Direction> {
        Self::ALL.get(code as usize).copied()
    }

    /// Numeric code in `[0, 5]`.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Code as an index into per-direction arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit displacement `(dx, dy, dz)`.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, -1, 0),
            Direction::East  => (1, 0, 0),
            Direction::South => (0, 1, 0),
            Direction::West  => (-1, 0, 0),
            Direction::Up    => (0, 0, 1),
            Direction::Down  => (0, 0, -1),
        }
    }

    /// The reverse direction (the direction seen from the destination).
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East  => Direction::West,
            Direction::South => Direction::North,
            Direction::West  => Direction::East,
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
        }
    }

    /// `true` for `Up` and `Down`.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Short lowercase label for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East  => "east",
            Direction::South => "south",
            Direction::West  => "west",
            Direction::Up    => "up",
            Direction::Down  => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
