//! Planning a walk to a building and consuming it one tile at a time.

use std::collections::VecDeque;

use tracing::{debug, error};

use ca_city::CityState;
use ca_core::{BuildingId, TileCoord, Vec3f};
use ca_map::TileCostModel;

use crate::agent::Agent;
use crate::helper::AgentTileHelper;

/// Outcome of one [`advance_along_path`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Advance {
    /// Head for the center of this tile.
    Destination(Vec3f),
    /// Nothing left to walk.
    Exhausted,
    /// The next waypoint can no longer be entered; the path was cleared.
    Invalidated,
}

/// Search from the agent's tile to `target`'s crew quarters.
///
/// On success the path starts with the agent's own tile followed by every
/// returned waypoint.  `None` covers an unknown building, a failed search,
/// and an empty result alike.
pub fn plan_path(city: &CityState, agent: &Agent, target: BuildingId) -> Option<VecDeque<TileCoord>> {
    let quarters = match city.building(target) {
        Ok(b) => b.crew_quarters,
        Err(err) => {
            error!(agent = %agent.id, %err, "cannot plan a path to a missing building");
            return None;
        }
    };
    let start = agent.tile();
    let helper = AgentTileHelper::for_city(city, agent);

    let waypoints = match city.map.find_shortest_path(
        start,
        quarters,
        city.nav.max_path_iterations,
        &helper,
    ) {
        Ok(w) if !w.is_empty() => w,
        Ok(_) => return None,
        Err(err) => {
            debug!(agent = %agent.id, %err, "path search failed");
            return None;
        }
    };

    debug!(agent = %agent.id, %start, %quarters, steps = waypoints.len(), "path planned");
    let mut path = VecDeque::with_capacity(waypoints.len() + 1);
    path.push_back(start);
    path.extend(waypoints);
    Some(path)
}

/// Drop the departed head of `path` and pick the next tile to walk to.
///
/// The new head must be the agent's tile or enterable from it.  Later
/// waypoints that are also the agent's tile or directly enterable are
/// skipped, so a detour that is no longer needed collapses.  An empty path
/// is left untouched.
pub fn advance_along_path(path: &mut VecDeque<TileCoord>, city: &CityState, agent: &Agent) -> Advance {
    if path.is_empty() {
        return Advance::Exhausted;
    }
    path.pop_front();
    let Some(&head) = path.front() else {
        return Advance::Exhausted;
    };

    let current = agent.tile();
    let from = city.map.tile(current);
    let helper = AgentTileHelper::for_city(city, agent);
    let reachable = |pos: TileCoord| {
        pos == current
            || (current.is_within_one(pos) && helper.can_enter_tile(from, city.map.tile(pos)))
    };

    if !reachable(head) {
        path.clear();
        return Advance::Invalidated;
    }
    while path.get(1).is_some_and(|&next| reachable(next)) {
        path.pop_front();
    }

    match path.front() {
        Some(pos) => Advance::Destination(pos.center()),
        None => Advance::Exhausted,
    }
}
