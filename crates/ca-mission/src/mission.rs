//! The mission state machine.
//!
//! One `Mission` is one unit of agent behavior.  Its variant-specific data
//! lives in [`MissionKind`]; the shared `cancelled` latch lives beside it
//! and only ever goes from `false` to `true`.
//!
//! Every method takes the city and the agent explicitly.  While a method
//! runs, the mission is out of the agent's queue (see
//! [`Agent::add_mission`]), so pushing new missions from inside is safe.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, error, info, warn};

use ca_city::CityState;
use ca_core::{BuildingId, TileCoord, Vec3f};

use crate::agent::Agent;
use crate::path::{Advance, advance_along_path, plan_path};

// ── MissionType ───────────────────────────────────────────────────────────────

/// Discriminant of a [`MissionKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissionType {
    GotoBuilding,
    Snooze,
    AwaitPickup,
    RestartNextMission,
    Teleport,
}

impl MissionType {
    pub fn as_str(self) -> &'static str {
        match self {
            MissionType::GotoBuilding       => "GotoBuilding",
            MissionType::Snooze             => "Snooze",
            MissionType::AwaitPickup        => "AwaitPickup",
            MissionType::RestartNextMission => "RestartNextMission",
            MissionType::Teleport           => "Teleport",
        }
    }
}

impl fmt::Display for MissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── MissionKind ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissionKind {
    /// Walk to `target` and enter it.
    GotoBuilding {
        target:           BuildingId,
        allow_teleporter: bool,
        /// Front is the tile most recently departed from (or about to be).
        planned_path:     VecDeque<TileCoord>,
    },
    /// Idle for a number of ticks.
    Snooze { remaining_ticks: u32 },
    /// Wait for a vehicle.  Pickup ordering is not implemented.
    AwaitPickup,
    /// Finishes at once so the mission beneath it restarts.
    RestartNextMission,
    /// Enter `target` immediately.
    Teleport { target: BuildingId },
}

impl MissionKind {
    pub fn mission_type(&self) -> MissionType {
        match self {
            MissionKind::GotoBuilding { .. }  => MissionType::GotoBuilding,
            MissionKind::Snooze { .. }        => MissionType::Snooze,
            MissionKind::AwaitPickup          => MissionType::AwaitPickup,
            MissionKind::RestartNextMission   => MissionType::RestartNextMission,
            MissionKind::Teleport { .. }      => MissionType::Teleport,
        }
    }
}

// ── Mission ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mission {
    pub(crate) kind:      MissionKind,
    pub(crate) cancelled: bool,
}

impl Mission {
    fn from_kind(kind: MissionKind) -> Self {
        Self { kind, cancelled: false }
    }

    pub fn goto_building(target: BuildingId, allow_teleporter: bool) -> Self {
        Self::from_kind(MissionKind::GotoBuilding {
            target,
            allow_teleporter,
            planned_path: VecDeque::new(),
        })
    }

    pub fn snooze(ticks: u32) -> Self {
        Self::from_kind(MissionKind::Snooze { remaining_ticks: ticks })
    }

    pub fn restart_next_mission() -> Self {
        Self::from_kind(MissionKind::RestartNextMission)
    }

    pub fn await_pickup() -> Self {
        Self::from_kind(MissionKind::AwaitPickup)
    }

    pub fn teleport(target: BuildingId) -> Self {
        Self::from_kind(MissionKind::Teleport { target })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn kind(&self) -> &MissionKind {
        &self.kind
    }

    pub fn mission_type(&self) -> MissionType {
        self.kind.mission_type()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Latch the mission as cancelled.  There is no way back.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn target_building(&self) -> Option<BuildingId> {
        match self.kind {
            MissionKind::GotoBuilding { target, .. } | MissionKind::Teleport { target } => Some(target),
            _ => None,
        }
    }

    /// Planned waypoints of a `GotoBuilding` mission.
    pub fn planned_path(&self) -> Option<&VecDeque<TileCoord>> {
        match &self.kind {
            MissionKind::GotoBuilding { planned_path, .. } => Some(planned_path),
            _ => None,
        }
    }

    pub fn remaining_ticks(&self) -> Option<u32> {
        match self.kind {
            MissionKind::Snooze { remaining_ticks } => Some(remaining_ticks),
            _ => None,
        }
    }

    /// Type label plus the interesting detail, for logs and UIs.
    pub fn name(&self) -> String {
        let label = self.mission_type().as_str();
        match &self.kind {
            MissionKind::GotoBuilding { target, .. } | MissionKind::Teleport { target } => {
                format!("{label} {target}")
            }
            MissionKind::Snooze { remaining_ticks } => format!("{label} for {remaining_ticks} ticks"),
            MissionKind::AwaitPickup | MissionKind::RestartNextMission => label.to_owned(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// One-time setup when the mission reaches the front of the queue.
    ///
    /// A `GotoBuilding` whose target is unknown is cancelled before anything
    /// else.  One whose agent already stands inside the target does nothing,
    /// and this check deliberately comes before the teleport check so a
    /// restarted goto never teleports the agent a second time.
    pub fn start(&mut self, city: &mut CityState, agent: &mut Agent) {
        debug!(agent = %agent.id, mission = %self, "mission started");
        match self.kind {
            MissionKind::GotoBuilding { target, .. } => {
                let footprint = match city.building(target) {
                    Ok(b) => b.footprint,
                    Err(err) => {
                        error!(agent = %agent.id, %err, "goto target does not exist");
                        self.cancel();
                        return;
                    }
                };
                if agent.current_building == Some(target) {
                    return;
                }
                if self.teleport_check(city, agent) {
                    return;
                }
                let tile = agent.tile();
                if footprint.within(tile.x, tile.y) {
                    if let Err(err) = agent.enter_building(city, target) {
                        error!(agent = %agent.id, %err, "failed to enter building");
                    }
                } else if self.planned_path().is_some_and(VecDeque::is_empty) {
                    self.set_path_to(city, agent);
                }
            }
            MissionKind::Teleport { target } => {
                if !agent.can_teleport() {
                    error!(agent = %agent.id, "teleport mission for an agent that cannot teleport");
                    return;
                }
                if let Err(err) = agent.enter_building(city, target) {
                    error!(agent = %agent.id, %err, "teleport failed");
                    return;
                }
                if let Some(sample) = city.teleport_sample {
                    city.play_sample(sample, agent.position);
                }
            }
            MissionKind::Snooze { .. } | MissionKind::RestartNextMission => {}
            MissionKind::AwaitPickup => {
                error!(agent = %agent.id, "await pickup start is not implemented");
            }
        }
    }

    /// Per-tick update.  `finished` is OR-ed with the mission's own check.
    pub fn update(&mut self, city: &mut CityState, agent: &mut Agent, ticks: u32, finished: bool) {
        let finished = finished || self.is_finished_internal(agent);
        match &mut self.kind {
            MissionKind::GotoBuilding { target, planned_path, .. } => {
                if finished || !planned_path.is_empty() {
                    return;
                }
                let target = *target;
                let quarters = match city.building(target) {
                    Ok(b) => b.crew_quarters,
                    Err(err) => {
                        error!(agent = %agent.id, %err, "goto target does not exist");
                        self.cancel();
                        return;
                    }
                };
                if agent.tile() == quarters {
                    if let Err(err) = agent.enter_building(city, target) {
                        error!(agent = %agent.id, %err, "failed to enter building");
                    }
                } else {
                    warn!(agent = %agent.id, building = %target, "no path to follow, replanning");
                    self.set_path_to(city, agent);
                }
            }
            MissionKind::Snooze { remaining_ticks } => {
                *remaining_ticks = remaining_ticks.saturating_sub(ticks);
            }
            MissionKind::RestartNextMission => {}
            MissionKind::AwaitPickup => {
                error!(agent = %agent.id, "await pickup must check for or order a pickup");
            }
            MissionKind::Teleport { .. } => {
                if !finished {
                    warn!(agent = %agent.id, "teleport has nothing to update");
                }
            }
        }
    }

    /// Finished check; with `call_update_if_finished` a finished mission
    /// gets one last `update(0, finished = true)`.
    pub fn is_finished(
        &mut self,
        city: &mut CityState,
        agent: &mut Agent,
        call_update_if_finished: bool,
    ) -> bool {
        if !self.is_finished_internal(agent) {
            return false;
        }
        if call_update_if_finished {
            self.update(city, agent, 0, true);
        }
        true
    }

    pub fn is_finished_internal(&self, agent: &Agent) -> bool {
        if self.cancelled {
            return true;
        }
        match self.kind {
            MissionKind::GotoBuilding { target, .. } => agent.current_building == Some(target),
            MissionKind::Snooze { remaining_ticks } => remaining_ticks == 0,
            MissionKind::AwaitPickup => {
                error!(agent = %agent.id, "await pickup completion is not implemented");
                true
            }
            MissionKind::RestartNextMission | MissionKind::Teleport { .. } => true,
        }
    }

    /// Where the agent should head next, if anywhere.
    pub fn next_destination(&mut self, city: &mut CityState, agent: &mut Agent) -> Option<Vec3f> {
        if self.cancelled {
            return None;
        }
        match &mut self.kind {
            MissionKind::GotoBuilding { planned_path, .. } => {
                match advance_along_path(planned_path, city, agent) {
                    Advance::Destination(dest) => Some(dest),
                    Advance::Exhausted => None,
                    Advance::Invalidated => {
                        info!(agent = %agent.id, "next tile became impassable, restarting");
                        agent.add_mission(city, Mission::restart_next_mission());
                        None
                    }
                }
            }
            MissionKind::Snooze { .. }
            | MissionKind::RestartNextMission
            | MissionKind::AwaitPickup => None,
            MissionKind::Teleport { .. } => {
                warn!(agent = %agent.id, "teleport has no destination");
                None
            }
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Push and start a teleport if both the agent and the mission allow it.
    fn teleport_check(&self, city: &mut CityState, agent: &mut Agent) -> bool {
        let MissionKind::GotoBuilding { target, allow_teleporter: true, .. } = self.kind else {
            return false;
        };
        if !agent.can_teleport() {
            return false;
        }
        agent.add_mission(city, Mission::teleport(target));
        true
    }

    /// Replace the planned path with a fresh search to the target's crew
    /// quarters.  No path cancels the mission.
    pub(crate) fn set_path_to(&mut self, city: &CityState, agent: &Agent) {
        let MissionKind::GotoBuilding { target, planned_path, .. } = &mut self.kind else {
            error!(agent = %agent.id, "only goto missions plan paths");
            return;
        };
        planned_path.clear();
        match plan_path(city, agent, *target) {
            Some(path) => *planned_path = path,
            None => {
                info!(agent = %agent.id, building = %target, "no path to building, cancelling");
                self.cancelled = true;
            }
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
