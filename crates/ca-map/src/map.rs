//! The tile grid and the scenery arena it indexes into.

use ca_core::{AgentId, SceneryId, TileCoord};
use tracing::debug;

use crate::pathfinding::{PathGoal, TileCostModel, astar};
use crate::scenery::Scenery;
use crate::{MapError, MapResult};

// ── TileObject ────────────────────────────────────────────────────────────────

/// Something occupying a tile, referenced by arena id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileObject {
    Scenery(SceneryId),
    Agent(AgentId),
}

// ── Tile ──────────────────────────────────────────────────────────────────────

/// One grid cell and the objects on it.
#[derive(Clone, Debug)]
pub struct Tile {
    pub position: TileCoord,
    pub objects:  Vec<TileObject>,
}

impl Tile {
    fn new(position: TileCoord) -> Self {
        Self { position, objects: Vec::new() }
    }

    /// Id of the first scenery object on this tile, if any.
    pub fn scenery_id(&self) -> Option<SceneryId> {
        self.objects.iter().find_map(|obj| match obj {
            TileObject::Scenery(id) => Some(*id),
            _ => None,
        })
    }
}

// ── TileMap ───────────────────────────────────────────────────────────────────

/// Dense 3-D grid of tiles plus the scenery arena.
///
/// Tiles are stored x-fastest: `index = (z * size_y + y) * size_x + x`.
/// Scenery slots are never reused; a destroyed scenery leaves `None` behind
/// so stale ids resolve to "no scenery" instead of to a different object.
#[derive(Debug)]
pub struct TileMap {
    size:    TileCoord,
    tiles:   Vec<Tile>,
    scenery: Vec<Option<Scenery>>,
}

impl TileMap {
    /// An empty map with `size` cells along each axis.
    pub fn new(size: TileCoord) -> MapResult<Self> {
        if size.x <= 0 || size.y <= 0 || size.z <= 0 {
            return Err(MapError::InvalidSize(size));
        }
        let mut tiles = Vec::with_capacity((size.x * size.y * size.z) as usize);
        for z in 0..size.z {
            for y in 0..size.y {
                for x in 0..size.x {
                    tiles.push(Tile::new(TileCoord::new(x, y, z)));
                }
            }
        }
        Ok(Self { size, tiles, scenery: Vec::new() })
    }

    /// Grid extent; valid coordinates satisfy `0 <= c < size` per axis.
    #[inline]
    pub fn size(&self) -> TileCoord {
        self.size
    }

    #[inline]
    pub fn tile_is_valid(&self, pos: TileCoord) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.z >= 0
            && pos.x < self.size.x
            && pos.y < self.size.y
            && pos.z < self.size.z
    }

    #[inline]
    fn index_of(&self, pos: TileCoord) -> Option<usize> {
        self.tile_is_valid(pos).then(|| {
            ((pos.z * self.size.y + pos.y) * self.size.x + pos.x) as usize
        })
    }

    pub fn tile(&self, pos: TileCoord) -> Option<&Tile> {
        self.index_of(pos).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, pos: TileCoord) -> Option<&mut Tile> {
        self.index_of(pos).map(move |i| &mut self.tiles[i])
    }

    // ── Scenery arena ─────────────────────────────────────────────────────

    /// Add `scenery` to the arena and link it into the tile at its position.
    ///
    /// Fails if the position is off-map or the tile already has scenery.
    pub fn place_scenery(&mut self, scenery: Scenery) -> MapResult<SceneryId> {
        let pos = scenery.position;
        let tile = self.tile(pos).ok_or(MapError::OutOfBounds(pos))?;
        if tile.scenery_id().and_then(|id| self.scenery(id)).is_some() {
            return Err(MapError::TileOccupied(pos));
        }

        let id = SceneryId(self.scenery.len() as u32);
        self.scenery.push(Some(scenery));
        self.add_object(pos, TileObject::Scenery(id))?;
        Ok(id)
    }

    pub fn scenery(&self, id: SceneryId) -> Option<&Scenery> {
        self.scenery.get(id.index()).and_then(Option::as_ref)
    }

    pub fn scenery_mut(&mut self, id: SceneryId) -> Option<&mut Scenery> {
        self.scenery.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Scenery resolved through `tile`'s object list.
    pub fn scenery_on(&self, tile: &Tile) -> Option<&Scenery> {
        tile.scenery_id().and_then(|id| self.scenery(id))
    }

    pub fn scenery_at(&self, pos: TileCoord) -> Option<&Scenery> {
        self.tile(pos).and_then(|t| self.scenery_on(t))
    }

    /// Scenery id stored on the tile at `pos`, live or not.
    pub fn scenery_id_at(&self, pos: TileCoord) -> Option<SceneryId> {
        self.tile(pos).and_then(Tile::scenery_id)
    }

    /// Remove a scenery from the world, returning it.
    ///
    /// The arena slot is emptied and the tile link removed.
    pub fn destroy_scenery(&mut self, id: SceneryId) -> MapResult<Scenery> {
        let scenery = self
            .scenery
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(MapError::SceneryNotFound(id))?;
        self.remove_object(scenery.position, TileObject::Scenery(id));
        debug!(scenery = %id, position = %scenery.position, "scenery destroyed");
        Ok(scenery)
    }

    /// Iterator over live scenery.
    pub fn scenery_iter(&self) -> impl Iterator<Item = (SceneryId, &Scenery)> {
        self.scenery
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (SceneryId(i as u32), s)))
    }

    // ── Tile objects ──────────────────────────────────────────────────────

    pub fn add_object(&mut self, pos: TileCoord, object: TileObject) -> MapResult<()> {
        let tile = self.tile_mut(pos).ok_or(MapError::OutOfBounds(pos))?;
        tile.objects.push(object);
        Ok(())
    }

    /// Remove one occurrence of `object` from the tile at `pos`.  Returns
    /// `false` if it was not there.
    pub fn remove_object(&mut self, pos: TileCoord, object: TileObject) -> bool {
        let Some(tile) = self.tile_mut(pos) else {
            return false;
        };
        match tile.objects.iter().position(|o| *o == object) {
            Some(i) => {
                tile.objects.remove(i);
                true
            }
            None => false,
        }
    }

    /// Move an agent's tile object.  `None` on either side means "not on
    /// the grid" (inside a building, or not yet placed).
    pub fn relocate_agent(
        &mut self,
        agent: AgentId,
        from: Option<TileCoord>,
        to: Option<TileCoord>,
    ) {
        if from == to {
            return;
        }
        if let Some(from) = from {
            self.remove_object(from, TileObject::Agent(agent));
        }
        if let Some(to) = to {
            if let Err(err) = self.add_object(to, TileObject::Agent(agent)) {
                debug!(%agent, %err, "agent left the grid, no longer tracked");
            }
        }
    }

    // ── Path search ───────────────────────────────────────────────────────

    /// Weighted A* from `start` to `goal` under `oracle`, expanding at most
    /// `max_iterations` tiles.
    ///
    /// The returned waypoints exclude `start` and end on a goal tile.  See
    /// [`astar`] for the exact contract.
    pub fn find_shortest_path(
        &self,
        start: TileCoord,
        goal: impl Into<PathGoal>,
        max_iterations: u32,
        oracle: &dyn TileCostModel,
    ) -> MapResult<Vec<TileCoord>> {
        astar(self, start, goal.into(), max_iterations, oracle)
    }
}
