//! Fluent builder for constructing a [`Sim`].

use ca_city::CityState;
use ca_core::{AgentId, SimClock, SimConfig};
use ca_mission::{Agent, Mission};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: steps, ticks per step, agent speed, navigation tunables
/// - [`CityState`]: map, buildings, teleport sample
///
/// # Optional inputs
///
/// | Method               | Default        |
/// |----------------------|----------------|
/// | `.agent(a)`          | no agents      |
/// | `.mission(id, m)`    | empty queues   |
///
/// Agents must be added in `AgentId` order starting at 0.  Missions given
/// for one agent run in the order they were added.
pub struct SimBuilder {
    config:   SimConfig,
    city:     CityState,
    agents:   Vec<Agent>,
    missions: Vec<(AgentId, Mission)>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, city: CityState) -> Self {
        Self { config, city, agents: Vec::new(), missions: Vec::new() }
    }

    pub fn agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn agents(mut self, agents: impl IntoIterator<Item = Agent>) -> Self {
        self.agents.extend(agents);
        self
    }

    /// Queue `mission` behind any missions already given for `agent`.
    pub fn mission(mut self, agent: AgentId, mission: Mission) -> Self {
        self.missions.push((agent, mission));
        self
    }

    /// Validate inputs, place agents on the grid, start their missions, and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        for (index, agent) in self.agents.iter().enumerate() {
            if agent.id.index() != index {
                return Err(SimError::AgentIdMismatch { index, id: agent.id });
            }
        }
        if let Some((id, _)) = self.missions.iter().find(|(id, _)| id.index() >= self.agents.len()) {
            return Err(SimError::AgentNotFound(*id));
        }

        let mut city = self.city;
        city.nav = self.config.nav;
        let mut agents = self.agents;

        for agent in &agents {
            if agent.current_building.is_none() {
                city.map.relocate_agent(agent.id, None, Some(agent.tile()));
            }
        }

        // Agents that arrive with missions already started keep their front.
        let idle: Vec<bool> = agents.iter().map(|a| a.missions().is_empty()).collect();
        for (id, mission) in self.missions {
            agents[id.index()].enqueue_mission(mission);
        }
        for (agent, idle) in agents.iter_mut().zip(idle) {
            if idle {
                agent.start_current_mission(&mut city);
            }
        }

        Ok(Sim {
            clock: SimClock::new(self.config.ticks_per_step),
            config: self.config,
            city,
            agents,
        })
    }
}
