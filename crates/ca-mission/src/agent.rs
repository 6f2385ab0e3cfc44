//! The agent: where it is, which building it is in, and its mission queue.

use std::collections::VecDeque;

use tracing::{debug, info};

use ca_city::CityState;
use ca_core::{AgentId, BuildingId, TileCoord, Vec3f};

use crate::mission::Mission;
use crate::{MissionError, MissionResult};

#[derive(Clone, Debug)]
pub struct Agent {
    pub id:   AgentId,
    pub name: String,

    /// World position; a cell center while standing still.
    pub position: Vec3f,

    /// Building the agent is inside, if any.  Agents in a building are not
    /// on the street grid.
    pub current_building: Option<BuildingId>,

    /// Carries a working teleporter.
    pub teleporter: bool,

    /// Point the agent is currently walking to.
    pub goal: Option<Vec3f>,

    /// Front is the active mission.
    missions: VecDeque<Mission>,
}

impl Agent {
    pub fn new(id: AgentId, name: impl Into<String>, position: Vec3f) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            current_building: None,
            teleporter: false,
            goal: None,
            missions: VecDeque::new(),
        }
    }

    pub fn with_teleporter(mut self) -> Self {
        self.teleporter = true;
        self
    }

    #[inline]
    pub fn tile(&self) -> TileCoord {
        self.position.tile()
    }

    #[inline]
    pub fn can_teleport(&self) -> bool {
        self.teleporter
    }

    pub fn missions(&self) -> &VecDeque<Mission> {
        &self.missions
    }

    pub fn current_mission(&self) -> Option<&Mission> {
        self.missions.front()
    }

    // ── Buildings ─────────────────────────────────────────────────────────

    /// Move inside `building`, standing on its crew-quarters cell.
    pub fn enter_building(&mut self, city: &mut CityState, building: BuildingId) -> MissionResult<()> {
        let quarters = city.building(building)?.crew_quarters;
        if let Some(previous) = self.current_building {
            city.release_agent(previous, self.id)?;
        }
        city.admit_agent(building, self.id)?;
        self.current_building = Some(building);
        self.position = quarters.center();
        self.goal = None;
        info!(agent = %self.id, %building, "entered building");
        Ok(())
    }

    /// Step out onto the grid at the current position.
    pub fn leave_building(&mut self, city: &mut CityState) -> MissionResult<()> {
        let Some(building) = self.current_building else {
            return Ok(());
        };
        if !city.release_agent(building, self.id)? {
            return Err(MissionError::NotInBuilding { agent: self.id, building });
        }
        self.current_building = None;
        debug!(agent = %self.id, %building, "left building");
        Ok(())
    }

    // ── Mission queue ─────────────────────────────────────────────────────

    /// Run `f` on the front mission with the mission taken out of the queue.
    ///
    /// Missions pushed by `f` end up ahead of it, so the reinsertion index is
    /// the number of missions that appeared meanwhile.
    fn with_front<R>(
        &mut self,
        city: &mut CityState,
        f: impl FnOnce(&mut Mission, &mut CityState, &mut Agent) -> R,
    ) -> Option<R> {
        let mut mission = self.missions.pop_front()?;
        let before = self.missions.len();
        let out = f(&mut mission, city, self);
        let pushed = self.missions.len().saturating_sub(before);
        self.missions.insert(pushed, mission);
        Some(out)
    }

    /// Push `mission` to the front of the queue and start it.
    pub fn add_mission(&mut self, city: &mut CityState, mission: Mission) {
        info!(agent = %self.id, %mission, "mission added");
        self.missions.push_front(mission);
        self.with_front(city, |m, city, agent| m.start(city, agent));
    }

    /// Append `mission` to the back of the queue without starting it.  It
    /// starts when it reaches the front.
    pub fn enqueue_mission(&mut self, mission: Mission) {
        debug!(agent = %self.id, %mission, "mission queued");
        self.missions.push_back(mission);
    }

    /// Start the front mission.  For queues filled with
    /// [`enqueue_mission`][Self::enqueue_mission].
    pub fn start_current_mission(&mut self, city: &mut CityState) {
        self.with_front(city, |m, city, agent| m.start(city, agent));
    }

    /// Update the front mission with `ticks` elapsed.
    pub fn update_missions(&mut self, city: &mut CityState, ticks: u32) {
        self.with_front(city, |m, city, agent| m.update(city, agent, ticks, false));
    }

    /// Retire finished missions from the front, starting each successor.
    /// Returns the retired missions, oldest first.
    pub fn pop_finished_missions(&mut self, city: &mut CityState) -> Vec<Mission> {
        let mut retired = Vec::new();
        while self.with_front(city, |m, city, agent| m.is_finished(city, agent, true)) == Some(true) {
            let Some(done) = self.missions.pop_front() else {
                break;
            };
            info!(agent = %self.id, mission = %done, "mission finished");
            retired.push(done);
            if self.missions.is_empty() {
                debug!(agent = %self.id, "no missions left");
            } else {
                self.with_front(city, |m, city, agent| m.start(city, agent));
            }
        }
        retired
    }

    /// Retire finished missions and ask the new front one for a destination,
    /// repeating while retiring keeps exposing new missions.
    ///
    /// Sets `goal` and returns it.  Retired missions are appended to
    /// `retired`.
    pub fn acquire_goal(&mut self, city: &mut CityState, retired: &mut Vec<Mission>) -> Option<Vec3f> {
        loop {
            let popped = self.pop_finished_missions(city);
            let any_popped = !popped.is_empty();
            retired.extend(popped);

            if self.missions.is_empty() {
                self.goal = None;
                return None;
            }
            self.goal = self
                .with_front(city, |m, city, agent| m.next_destination(city, agent))
                .flatten();
            if self.goal.is_some() || !any_popped {
                return self.goal;
            }
        }
    }
}
