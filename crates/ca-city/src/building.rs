//! Buildings: footprint, crew quarters, and occupants.

use ca_core::{AgentId, BuildingId, TileCoord, Vec3f};

// ── Footprint ─────────────────────────────────────────────────────────────────

/// Ground-plane rectangle `[min_x, max_x) × [min_y, max_y)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Footprint {
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// `true` if the integer cell `(x, y)` lies inside.
    #[inline]
    pub fn within(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// Test a world-space point by the cell it falls in.
    pub fn within_point(&self, p: Vec3f) -> bool {
        let t = p.tile();
        self.within(t.x, t.y)
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    pub id:   BuildingId,
    pub name: String,
    pub footprint: Footprint,
    /// Cell agents path to when travelling to this building.
    pub crew_quarters: TileCoord,
    /// Agents currently inside.
    pub occupants: Vec<AgentId>,
}

impl Building {
    pub fn is_occupied_by(&self, agent: AgentId) -> bool {
        self.occupants.contains(&agent)
    }

    pub(crate) fn admit(&mut self, agent: AgentId) {
        if !self.is_occupied_by(agent) {
            self.occupants.push(agent);
        }
    }

    pub(crate) fn release(&mut self, agent: AgentId) -> bool {
        match self.occupants.iter().position(|a| *a == agent) {
            Some(i) => {
                self.occupants.swap_remove(i);
                true
            }
            None => false,
        }
    }
}

// ── BuildingStore ─────────────────────────────────────────────────────────────

/// Dense building storage indexed by `BuildingId`.
#[derive(Clone, Debug, Default)]
pub struct BuildingStore {
    inner: Vec<Building>,
}

impl BuildingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a building and return its id.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        footprint: Footprint,
        crew_quarters: TileCoord,
    ) -> BuildingId {
        let id = BuildingId(self.inner.len() as u32);
        self.inner.push(Building {
            id,
            name: name.into(),
            footprint,
            crew_quarters,
            occupants: Vec::new(),
        });
        id
    }

    #[inline]
    pub fn get(&self, id: BuildingId) -> Option<&Building> {
        self.inner.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: BuildingId) -> Option<&mut Building> {
        self.inner.get_mut(id.index())
    }

    /// First building whose footprint contains the point's cell.
    pub fn at_point(&self, p: Vec3f) -> Option<&Building> {
        self.inner.iter().find(|b| b.footprint.within_point(p))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Building> {
        self.inner.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = BuildingId> + '_ {
        self.inner.iter().map(|b| b.id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
