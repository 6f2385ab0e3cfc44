//! Synthetic downtown: one east-west tube avenue with buildings on short
//! spurs to the north, plus a tower reached through a junction shaft.
//!
//! ```text
//! y = 0    B     B     B     B   ...        (building floors, z = 2)
//! y = 1    |     |     |     |              (spur tubes)
//! y = 2  ==+=====+=====+=====+=== ... ==J   (avenue; J = junction)
//! ```
//!
//! The junction at the east end of the avenue opens a shaft up to the
//! tower lobby at z = 4.

use anyhow::{Context, Result};

use ca_city::{CityState, Footprint};
use ca_core::{BuildingId, Direction, NavConfig, SampleId, TileCoord};
use ca_map::{Scenery, TileMap};

/// Avenue height above ground.
const STREET_Z: i32 = 2;
/// Columns between neighbouring spurs.
const SPACING: i32 = 3;

pub const TELEPORT_SAMPLE: SampleId = SampleId(1);

pub struct Downtown {
    pub city:      CityState,
    pub buildings: Vec<BuildingId>,
}

pub fn build_downtown(building_count: i32, nav: NavConfig) -> Result<Downtown> {
    let width = building_count * SPACING + 2;
    let map = TileMap::new(TileCoord::new(width, 3, 6)).context("map size")?;
    let mut city = CityState::new(map, nav).with_teleport_sample(TELEPORT_SAMPLE);
    let mut buildings = Vec::new();

    // Avenue.
    for x in 0..width - 1 {
        let pos = TileCoord::new(x, 2, STREET_Z);
        let scenery = if x % SPACING == 1 && x / SPACING < building_count {
            Scenery::tube(pos, &[Direction::East, Direction::West, Direction::North])
        } else {
            Scenery::tube(pos, &[Direction::East, Direction::West])
        };
        city.map.place_scenery(scenery)?;
    }

    // Spurs and building floors.
    for i in 0..building_count {
        let x = i * SPACING + 1;
        let floor = TileCoord::new(x, 0, STREET_Z);
        let id = city.add_building(format!("Block {i}"), Footprint::new(x, 0, x + 1, 1), floor)?;
        city.map
            .place_scenery(Scenery::tube(TileCoord::new(x, 1, STREET_Z), &[Direction::North, Direction::South]))?;
        city.map.place_scenery(Scenery::building_floor(floor, id))?;
        buildings.push(id);
    }

    // Tower: junction at the avenue's east end, shaft up to the lobby, and
    // a cap junction above the lobby so it can be entered from below.
    let shaft_x = width - 1;
    let lobby = TileCoord::new(shaft_x, 2, STREET_Z + 2);
    let tower = city.add_building("Tower", Footprint::new(shaft_x, 2, shaft_x + 1, 3), lobby)?;
    city.map
        .place_scenery(Scenery::junction(TileCoord::new(shaft_x, 2, STREET_Z), &[Direction::West]))?;
    city.map
        .place_scenery(Scenery::junction(TileCoord::new(shaft_x, 2, STREET_Z + 1), &[]))?;
    city.map.place_scenery(Scenery::building_floor(lobby, tower))?;
    city.map
        .place_scenery(Scenery::junction(TileCoord::new(shaft_x, 2, STREET_Z + 3), &[]))?;
    buildings.push(tower);

    Ok(Downtown { city, buildings })
}
