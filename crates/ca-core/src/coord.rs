//! Grid coordinates and world-space points.
//!
//! The city is a 3-D grid of unit cells.  `TileCoord` names a cell by its
//! integer corner; `Vec3f` is a continuous world position (agents move
//! between cell centers).  Axis conventions:
//!
//! - X: east  (positive) / west  (negative)
//! - Y: south (positive) / north (negative)
//! - Z: up    (positive) / down  (negative)

use std::fmt;
use std::ops::{Add, Sub};

// ── TileCoord ─────────────────────────────────────────────────────────────────

/// Integer grid cell `(x, y, z)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl TileCoord {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell shifted by `(dx, dy, dz)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Component-wise displacement `other - self`.
    #[inline]
    pub const fn delta_to(self, other: Self) -> (i32, i32, i32) {
        (other.x - self.x, other.y - self.y, other.z - self.z)
    }

    /// Sum of absolute per-axis differences.
    pub fn manhattan_distance(self, other: Self) -> u32 {
        (self.x - other.x).unsigned_abs()
            + (self.y - other.y).unsigned_abs()
            + (self.z - other.z).unsigned_abs()
    }

    /// `true` if `other` differs by at most one cell on every axis
    /// (includes `other == self`).
    #[inline]
    pub fn is_within_one(self, other: Self) -> bool {
        (self.x - other.x).abs() <= 1
            && (self.y - other.y).abs() <= 1
            && (self.z - other.z).abs() <= 1
    }

    /// Center of the cell in world space.
    #[inline]
    pub fn center(self) -> Vec3f {
        Vec3f::new(self.x as f32 + 0.5, self.y as f32 + 0.5, self.z as f32 + 0.5)
    }

    /// Integer corner of the cell as a world-space point.
    #[inline]
    pub fn to_vec3f(self) -> Vec3f {
        Vec3f::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ── Vec3f ─────────────────────────────────────────────────────────────────────

/// Continuous world-space position, single precision.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3f {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec3f) -> f32 {
        (other - self).length()
    }

    /// `self` scaled by `k`.
    #[inline]
    pub fn scale(self, k: f32) -> Vec3f {
        Vec3f::new(self.x * k, self.y * k, self.z * k)
    }

    /// The cell containing this point (floor on every axis).
    #[inline]
    pub fn tile(self) -> TileCoord {
        TileCoord::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}

impl Add for Vec3f {
    type Output = Vec3f;
    #[inline]
    fn add(self, rhs: Vec3f) -> Vec3f {
        Vec3f::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3f {
    type Output = Vec3f;
    #[inline]
    fn sub(self, rhs: Vec3f) -> Vec3f {
        Vec3f::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Vec3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
