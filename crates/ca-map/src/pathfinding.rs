//! Cost-model trait and the iteration-capped A* search over the tile grid.
//!
//! # Pluggability
//!
//! The search knows nothing about who is moving.  Every legality and cost
//! question goes through a [`TileCostModel`] supplied by the caller, so a
//! pedestrian, a vehicle, or a test double can share one search routine.
//!
//! # Budget
//!
//! `max_iterations` bounds the number of tiles expanded.  A search that runs
//! out returns [`MapError::BudgetExhausted`] instead of looping on a large or
//! disconnected map.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use ca_core::{Direction, TileCoord, Vec3f};

use crate::map::{Tile, TileMap};
use crate::{MapError, MapResult};

// ── UnitFilter ────────────────────────────────────────────────────────────────

/// Which units on a tile a cost query should disregard.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitFilter {
    pub ignore_static_units: bool,
    pub ignore_all_units:    bool,
}

// ── TileCostModel ─────────────────────────────────────────────────────────────

/// Legality and cost oracle consulted by the path search.
pub trait TileCostModel {
    /// Cost of stepping from `from` into `to`, or `None` if the step is
    /// not allowed.
    fn cost_to_enter(&self, from: Option<&Tile>, to: Option<&Tile>, units: UnitFilter) -> Option<f32>;

    /// Legacy form without unit filtering.
    fn can_enter_tile(&self, from: Option<&Tile>, to: Option<&Tile>) -> bool {
        self.cost_to_enter(from, to, UnitFilter::default()).is_some()
    }

    /// Weight applied to the heuristic (`f = g + allowance * h`).
    fn path_overhead_allowance(&self) -> f32;

    /// Heuristic distance between two points.
    fn distance(&self, from: Vec3f, to: Vec3f) -> f32;

    /// Heuristic distance from a point to the box `[min, max)`.
    fn distance_to_region(&self, from: Vec3f, min: Vec3f, max: Vec3f) -> f32;

    /// Additive cost adjustment for stepping into `next` with vertical
    /// displacement `dz`.
    fn adjust_cost(&self, _next: TileCoord, _dz: i32) -> f32 {
        0.0
    }
}

// ── PathGoal ──────────────────────────────────────────────────────────────────

/// Search target: one tile, or any tile inside a box (`max` exclusive).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathGoal {
    Tile(TileCoord),
    Region { min: TileCoord, max: TileCoord },
}

impl PathGoal {
    pub fn contains(&self, pos: TileCoord) -> bool {
        match *self {
            PathGoal::Tile(goal) => pos == goal,
            PathGoal::Region { min, max } => {
                pos.x >= min.x && pos.x < max.x
                    && pos.y >= min.y && pos.y < max.y
                    && pos.z >= min.z && pos.z < max.z
            }
        }
    }

    /// Representative tile for error reporting.
    pub fn anchor(&self) -> TileCoord {
        match *self {
            PathGoal::Tile(goal) => goal,
            PathGoal::Region { min, .. } => min,
        }
    }

    fn heuristic(&self, model: &dyn TileCostModel, pos: TileCoord) -> f32 {
        match *self {
            PathGoal::Tile(goal) => model.distance(pos.to_vec3f(), goal.to_vec3f()),
            PathGoal::Region { min, max } => {
                model.distance_to_region(pos.to_vec3f(), min.to_vec3f(), max.to_vec3f())
            }
        }
    }
}

impl From<TileCoord> for PathGoal {
    fn from(goal: TileCoord) -> Self {
        PathGoal::Tile(goal)
    }
}

// ── Open-set entry ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct OpenEntry {
    f_score: f32,
    g_score: f32,
    pos:     TileCoord,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we want the smallest f.
        // Ties prefer the deeper node, then the smaller coordinate.
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| self.g_score.total_cmp(&other.g_score))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

// ── A* ────────────────────────────────────────────────────────────────────────

/// Weighted A* over the 6-neighbour grid.
///
/// - `start` off the map → `Err(OutOfBounds)`.
/// - `start` already inside `goal` → `Ok(vec![start])`.
/// - otherwise the waypoints after `start`, ending on a goal tile.
/// - open set drained → `Err(NoPath)`; budget spent → `Err(BudgetExhausted)`.
///
/// Edge weight is `cost_to_enter + adjust_cost`.  Once a tile is expanded
/// it is closed and never reopened, so negative adjustments cannot cause
/// cycles.
pub fn astar(
    map: &TileMap,
    start: TileCoord,
    goal: PathGoal,
    max_iterations: u32,
    model: &dyn TileCostModel,
) -> MapResult<Vec<TileCoord>> {
    if !map.tile_is_valid(start) {
        return Err(MapError::OutOfBounds(start));
    }
    if goal.contains(start) {
        return Ok(vec![start]);
    }

    let allowance = model.path_overhead_allowance();

    let mut g_score:   FxHashMap<TileCoord, f32>       = FxHashMap::default();
    let mut came_from: FxHashMap<TileCoord, TileCoord> = FxHashMap::default();
    let mut closed:    FxHashSet<TileCoord>            = FxHashSet::default();
    let mut open:      BinaryHeap<OpenEntry>           = BinaryHeap::new();

    g_score.insert(start, 0.0);
    open.push(OpenEntry {
        f_score: allowance * goal.heuristic(model, start),
        g_score: 0.0,
        pos:     start,
    });

    let mut iterations = 0u32;

    while let Some(OpenEntry { g_score: g, pos, .. }) = open.pop() {
        if goal.contains(pos) {
            trace!(%start, end = %pos, iterations, "path found");
            return Ok(reconstruct(&came_from, start, pos));
        }
        // Stale entry: a cheaper route to `pos` was already expanded.
        if !closed.insert(pos) {
            continue;
        }
        if iterations >= max_iterations {
            return Err(MapError::BudgetExhausted {
                from:       start,
                to:         goal.anchor(),
                iterations: max_iterations,
            });
        }
        iterations += 1;

        let from_tile = map.tile(pos);
        for dir in Direction::ALL {
            let (dx, dy, dz) = dir.offset();
            let next = pos.offset(dx, dy, dz);
            if closed.contains(&next) || !map.tile_is_valid(next) {
                continue;
            }
            let Some(cost) = model.cost_to_enter(from_tile, map.tile(next), UnitFilter::default())
            else {
                continue;
            };

            let tentative = g + cost + model.adjust_cost(next, dz);
            let better = g_score.get(&next).is_none_or(|&known| tentative < known);
            if better {
                g_score.insert(next, tentative);
                came_from.insert(next, pos);
                open.push(OpenEntry {
                    f_score: tentative + allowance * goal.heuristic(model, next),
                    g_score: tentative,
                    pos:     next,
                });
            }
        }
    }

    Err(MapError::NoPath { from: start, to: goal.anchor() })
}

fn reconstruct(
    came_from: &FxHashMap<TileCoord, TileCoord>,
    start: TileCoord,
    end: TileCoord,
) -> Vec<TileCoord> {
    let mut path = vec![end];
    let mut cur = end;
    while let Some(&prev) = came_from.get(&cur) {
        if prev == start {
            break;
        }
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
