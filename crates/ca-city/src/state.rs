//! Shared city state: map, buildings, tunables, and pending sound cues.

use tracing::{debug, trace};

use ca_core::{AgentId, BuildingId, NavConfig, SampleId, TileCoord, Vec3f};
use ca_map::TileMap;

use crate::building::{Building, BuildingStore, Footprint};
use crate::{CityError, CityResult};

/// A request for the host to play `sample` at `position`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundCue {
    pub sample:   SampleId,
    pub position: Vec3f,
}

/// Everything a mission may read or mutate outside its own agent.
#[derive(Debug)]
pub struct CityState {
    pub map:       TileMap,
    pub buildings: BuildingStore,
    pub nav:       NavConfig,

    /// Sample played when an agent teleports.  `None` leaves teleports
    /// silent.
    pub teleport_sample: Option<SampleId>,

    sounds: Vec<SoundCue>,
}

impl CityState {
    pub fn new(map: TileMap, nav: NavConfig) -> Self {
        Self {
            map,
            buildings: BuildingStore::new(),
            nav,
            teleport_sample: None,
            sounds: Vec::new(),
        }
    }

    pub fn with_teleport_sample(mut self, sample: SampleId) -> Self {
        self.teleport_sample = Some(sample);
        self
    }

    // ── Buildings ─────────────────────────────────────────────────────────

    /// Register a building.  Its crew quarters must lie on the map.
    pub fn add_building(
        &mut self,
        name: impl Into<String>,
        footprint: Footprint,
        crew_quarters: TileCoord,
    ) -> CityResult<BuildingId> {
        if !self.map.tile_is_valid(crew_quarters) {
            return Err(CityError::CrewQuartersOffMap {
                building: BuildingId(self.buildings.len() as u32),
                crew_quarters,
            });
        }
        let id = self.buildings.add(name, footprint, crew_quarters);
        debug!(building = %id, %crew_quarters, "building added");
        Ok(id)
    }

    pub fn building(&self, id: BuildingId) -> CityResult<&Building> {
        self.buildings.get(id).ok_or(CityError::BuildingNotFound(id))
    }

    pub fn building_mut(&mut self, id: BuildingId) -> CityResult<&mut Building> {
        self.buildings.get_mut(id).ok_or(CityError::BuildingNotFound(id))
    }

    /// Record `agent` as inside `building`.
    pub fn admit_agent(&mut self, building: BuildingId, agent: AgentId) -> CityResult<()> {
        self.building_mut(building)?.admit(agent);
        Ok(())
    }

    /// Remove `agent` from `building`'s occupants; `false` if it was not
    /// listed.
    pub fn release_agent(&mut self, building: BuildingId, agent: AgentId) -> CityResult<bool> {
        Ok(self.building_mut(building)?.release(agent))
    }

    // ── Sound cues ────────────────────────────────────────────────────────

    pub fn play_sample(&mut self, sample: SampleId, position: Vec3f) {
        trace!(sample = %sample, %position, "sound cue queued");
        self.sounds.push(SoundCue { sample, position });
    }

    /// Cues queued since the last drain, oldest first.
    pub fn pending_sounds(&self) -> &[SoundCue] {
        &self.sounds
    }

    pub fn drain_sounds(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sounds)
    }
}
