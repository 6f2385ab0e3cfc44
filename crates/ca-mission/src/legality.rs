//! Direction conversion and per-scenery traversal rules.

use tracing::error;

use ca_core::Direction;
use ca_map::{Scenery, TileType};

/// Direction of a single-axis unit step.
///
/// Any other displacement is a caller bug: it is logged and yields `None`.
pub fn displacement_to_direction_code(dx: i32, dy: i32, dz: i32) -> Option<Direction> {
    let dir = Direction::from_displacement(dx, dy, dz);
    if dir.is_none() {
        error!(dx, dy, dz, "displacement is not a single-axis unit step");
    }
    dir
}

/// Whether `scenery` lets an agent cross its boundary in `direction`.
///
/// | Type                 | Allowed when                               |
/// |----------------------|--------------------------------------------|
/// | `PeopleTube`         | `tube[direction]`                          |
/// | `PeopleTubeJunction` | `tube[direction]` or direction is vertical |
/// | `General`, `Road`    | the scenery belongs to a building          |
/// | `CityWall`           | never                                      |
pub fn is_traversal_allowed(scenery: &Scenery, direction: Direction) -> bool {
    match scenery.tile_type {
        TileType::PeopleTube => scenery.connects(direction),
        TileType::PeopleTubeJunction => scenery.connects(direction) || direction.is_vertical(),
        TileType::General | TileType::Road => scenery.building.is_some(),
        TileType::CityWall => false,
        other => {
            error!(tile_type = %other, position = %scenery.position, "unhandled scenery type");
            false
        }
    }
}
