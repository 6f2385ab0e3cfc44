//! `AgentTileHelper`: the legality and cost oracle for pedestrian agents.
//!
//! Built per query from borrowed state; holds nothing of its own beyond a
//! copy of the navigation tunables.

use tracing::error;

use ca_city::CityState;
use ca_core::{Direction, NavConfig, TileCoord, Vec3f};
use ca_map::{Tile, TileCostModel, TileMap, TileType, UnitFilter};

use crate::agent::Agent;
use crate::legality::{displacement_to_direction_code, is_traversal_allowed};

pub struct AgentTileHelper<'a> {
    map:   &'a TileMap,
    agent: &'a Agent,
    nav:   NavConfig,
}

impl<'a> AgentTileHelper<'a> {
    /// Helper with default navigation tunables.
    pub fn new(map: &'a TileMap, agent: &'a Agent) -> Self {
        Self { map, agent, nav: NavConfig::default() }
    }

    /// Helper bound to the city's map and tunables.
    pub fn for_city(city: &'a CityState, agent: &'a Agent) -> Self {
        Self { map: &city.map, agent, nav: city.nav }
    }

    pub fn with_nav(mut self, nav: NavConfig) -> Self {
        self.nav = nav;
        self
    }

    /// `true` if a `PeopleTubeJunction` sits somewhere above `pos` in the
    /// same column, below the map ceiling.
    fn junction_above(&self, pos: TileCoord) -> bool {
        ((pos.z + 1)..self.map.size().z).any(|z| {
            self.map
                .scenery_at(TileCoord::new(pos.x, pos.y, z))
                .is_some_and(|s| s.tile_type == TileType::PeopleTubeJunction)
        })
    }
}

impl TileCostModel for AgentTileHelper<'_> {
    fn cost_to_enter(&self, from: Option<&Tile>, to: Option<&Tile>, _units: UnitFilter) -> Option<f32> {
        let Some(from) = from else {
            error!(agent = %self.agent.id, "no 'from' tile supplied");
            return None;
        };
        let Some(to) = to else {
            error!(agent = %self.agent.id, "no 'to' tile supplied");
            return None;
        };
        let (from_pos, to_pos) = (from.position, to.position);
        if from_pos == to_pos {
            error!(agent = %self.agent.id, position = %to_pos, "'from' and 'to' are the same tile");
            return None;
        }
        if !self.map.tile_is_valid(to_pos) {
            error!(agent = %self.agent.id, position = %to_pos, "'to' tile is not on the map");
            return None;
        }

        // One axis, one cell.
        if from_pos.manhattan_distance(to_pos) > 1 {
            return None;
        }

        let scenery_from = self.map.scenery_on(from)?;
        let scenery_to = self.map.scenery_on(to)?;
        if !scenery_from.is_stable() || !scenery_to.is_stable() {
            return None;
        }

        let (dx, dy, dz) = from_pos.delta_to(to_pos);
        let forward = displacement_to_direction_code(dx, dy, dz)?;
        let reverse = displacement_to_direction_code(-dx, -dy, -dz)?;
        if !is_traversal_allowed(scenery_from, forward) || !is_traversal_allowed(scenery_to, reverse) {
            return None;
        }

        // Junctions only open sideways into other tube pieces.
        if !forward.is_vertical()
            && scenery_from.tile_type == TileType::PeopleTubeJunction
            && !matches!(scenery_to.tile_type, TileType::PeopleTubeJunction | TileType::PeopleTube)
        {
            return None;
        }

        // Surfacing into a building floor needs a shaft above it.
        if forward == Direction::Up
            && scenery_to.tile_type == TileType::General
            && !self.junction_above(scenery_to.position)
        {
            return None;
        }

        Some(from_pos.to_vec3f().distance(to_pos.to_vec3f()))
    }

    fn path_overhead_allowance(&self) -> f32 {
        self.nav.path_overhead_allowance
    }

    fn distance(&self, from: Vec3f, to: Vec3f) -> f32 {
        from.distance(to)
    }

    /// Point-to-box distance; the box covers `[min, max)` on each axis.
    fn distance_to_region(&self, from: Vec3f, min: Vec3f, max: Vec3f) -> f32 {
        fn axis(p: f32, lo: f32, hi: f32) -> f32 {
            if p >= lo && p < hi {
                0.0
            } else {
                (lo - p).abs().min((hi - p - 1.0).abs())
            }
        }
        let dx = axis(from.x, min.x, max.x);
        let dy = axis(from.y, min.y, max.y);
        let dz = axis(from.z, min.z, max.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    fn adjust_cost(&self, next: TileCoord, dz: i32) -> f32 {
        if next.z < self.nav.min_reasonable_height && dz == -1 {
            self.nav.deep_descent_bonus
        } else {
            0.0
        }
    }
}
