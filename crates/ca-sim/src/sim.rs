//! The `Sim` struct and its step loop.

use tracing::trace;

use ca_city::CityState;
use ca_core::{AgentId, SimClock, SimConfig, Tick, TileCoord, Vec3f};
use ca_mission::{Agent, Mission};

use crate::{SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// Holds the city and every agent, and drives them one step at a time.
/// Agents are processed sequentially in ascending `AgentId` order, so a run
/// is fully deterministic.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    /// Advances by `config.ticks_per_step` per step.
    pub clock: SimClock,

    pub city: CityState,

    /// Indexed by `AgentId`.
    pub agents: Vec<Agent>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Tick at which [`run`][Self::run] stops.
    pub fn end_tick(&self) -> Tick {
        Tick(self.config.total_steps * u64::from(self.config.ticks_per_step))
    }

    /// Run from the current tick to [`end_tick`][Self::end_tick].
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores `end_tick`).
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// One step for every agent.  Returns how many agents walked.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let ticks = self.config.ticks_per_step;
        let reach = self.config.agent_speed * ticks as f32;
        let mut moving = 0;

        for agent in &mut self.agents {
            let before = grid_tile(agent);
            let mut retired = Vec::new();

            if agent.goal.is_none() {
                agent.acquire_goal(&mut self.city, &mut retired);
            }
            if let Some(goal) = agent.goal {
                if agent.current_building.is_some() {
                    agent.leave_building(&mut self.city)?;
                }
                if walk_towards(agent, goal, reach) {
                    trace!(agent = %agent.id, position = %agent.position, "reached waypoint");
                    agent.goal = None;
                }
                moving += 1;
            }

            agent.update_missions(&mut self.city, ticks);
            retired.extend(agent.pop_finished_missions(&mut self.city));

            self.city.map.relocate_agent(agent.id, before, grid_tile(agent));
            for mission in &retired {
                observer.on_mission_finished(now, agent.id, mission);
            }
        }

        for cue in self.city.drain_sounds() {
            observer.on_sound(now, &cue);
        }

        observer.on_tick_end(now, moving);
        self.clock.advance();
        Ok(moving)
    }

    pub fn agent(&self, id: AgentId) -> SimResult<&Agent> {
        self.agents.get(id.index()).ok_or(SimError::AgentNotFound(id))
    }

    /// Push `mission` to the front of `id`'s queue and start it.
    pub fn add_mission(&mut self, id: AgentId, mission: Mission) -> SimResult<()> {
        let agent = self
            .agents
            .get_mut(id.index())
            .ok_or(SimError::AgentNotFound(id))?;
        let before = grid_tile(agent);
        agent.add_mission(&mut self.city, mission);
        self.city.map.relocate_agent(id, before, grid_tile(agent));
        Ok(())
    }

    /// `true` once no agent has anything left to do.
    pub fn is_idle(&self) -> bool {
        self.agents.iter().all(|a| a.missions().is_empty())
    }
}

// ── Movement helpers ──────────────────────────────────────────────────────────

/// Tile the agent occupies on the street grid; `None` inside a building.
fn grid_tile(agent: &Agent) -> Option<TileCoord> {
    agent.current_building.is_none().then(|| agent.tile())
}

/// Move up to `reach` tiles straight towards `goal`.  Returns `true` on
/// arrival.
fn walk_towards(agent: &mut Agent, goal: Vec3f, reach: f32) -> bool {
    let delta = goal - agent.position;
    let dist = delta.length();
    if dist <= reach {
        agent.position = goal;
        return true;
    }
    agent.position = agent.position + delta.scale(reach / dist);
    trace!(agent = %agent.id, remaining = dist - reach, "walking");
    false
}
