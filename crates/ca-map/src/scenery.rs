//! Scenery: the static structure occupying a tile.

use ca_core::{BuildingId, Direction, TileCoord};

/// Structural category of a scenery tile.
///
/// Marked `#[non_exhaustive]`: new categories may be added, and code outside
/// this crate must decide what an unknown category means.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum TileType {
    /// Building fabric (floors, interiors).
    General,
    /// Street surface.
    Road,
    /// Pedestrian tube; passable only along its connection mask.
    PeopleTube,
    /// Tube junction; vertical shaft access plus masked lateral exits.
    PeopleTubeJunction,
    /// Impassable city boundary.
    CityWall,
}

impl TileType {
    pub fn as_str(self) -> &'static str {
        match self {
            TileType::General            => "general",
            TileType::Road               => "road",
            TileType::PeopleTube         => "people_tube",
            TileType::PeopleTubeJunction => "people_tube_junction",
            TileType::CityWall           => "city_wall",
        }
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scenery instance placed on the map.
///
/// `damaged` and `falling` are mutated by the structural/combat layers; the
/// navigation code only observes them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenery {
    pub tile_type: TileType,

    /// Per-direction connectivity, indexed by `Direction::index()`.  Only
    /// meaningful for tubes and junctions.
    pub tube: [bool; 6],

    pub damaged: bool,
    pub falling: bool,

    /// Owning building, if any.  General and Road tiles are passable only
    /// when this is set.
    pub building: Option<BuildingId>,

    /// Current grid position.
    pub position: TileCoord,
}

impl Scenery {
    /// Undamaged scenery of `tile_type` at `position` with no connections
    /// and no owner.
    pub fn new(tile_type: TileType, position: TileCoord) -> Self {
        Self {
            tile_type,
            tube: [false; 6],
            damaged: false,
            falling: false,
            building: None,
            position,
        }
    }

    /// A people tube open towards `connections`.
    pub fn tube(position: TileCoord, connections: &[Direction]) -> Self {
        Self::new(TileType::PeopleTube, position).with_connections(connections)
    }

    /// A tube junction open laterally towards `connections`.
    pub fn junction(position: TileCoord, connections: &[Direction]) -> Self {
        Self::new(TileType::PeopleTubeJunction, position).with_connections(connections)
    }

    /// Building fabric owned by `building`.
    pub fn building_floor(position: TileCoord, building: BuildingId) -> Self {
        Self::new(TileType::General, position).with_building(building)
    }

    pub fn with_connections(mut self, connections: &[Direction]) -> Self {
        for dir in connections {
            self.tube[dir.index()] = true;
        }
        self
    }

    pub fn with_building(mut self, building: BuildingId) -> Self {
        self.building = Some(building);
        self
    }

    /// `true` if the connection mask is open towards `dir`.
    #[inline]
    pub fn connects(&self, dir: Direction) -> bool {
        self.tube[dir.index()]
    }

    /// Neither damaged nor falling.
    #[inline]
    pub fn is_stable(&self) -> bool {
        !self.damaged && !self.falling
    }
}
