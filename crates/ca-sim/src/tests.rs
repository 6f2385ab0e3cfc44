//! Integration tests for ca-sim.

use ca_city::{CityState, Footprint, SoundCue};
use ca_core::{AgentId, BuildingId, Direction, NavConfig, SampleId, SceneryId, SimConfig, Tick, TileCoord};
use ca_map::{Scenery, TileMap, TileObject};
use ca_mission::{Agent, Mission, MissionType};

use crate::{NoopObserver, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

const ALPHA_QUARTERS: TileCoord = TileCoord::new(0, 1, 2);
const BETA_QUARTERS: TileCoord = TileCoord::new(7, 1, 2);

fn test_config(total_steps: u64) -> SimConfig {
    SimConfig {
        total_steps,
        ticks_per_step: 1,
        agent_speed:    1.0,
        seed:           42,
        nav:            NavConfig::default(),
    }
}

/// Alpha at x = 0 and Beta at x = 7, joined by an east-west tube at
/// y = 1, z = 2.
fn tube_street() -> (CityState, BuildingId, BuildingId, Vec<SceneryId>) {
    let map = TileMap::new(TileCoord::new(8, 3, 4)).unwrap();
    let mut city = CityState::new(map, NavConfig::default());
    let alpha = city
        .add_building("Alpha", Footprint::new(0, 0, 1, 3), ALPHA_QUARTERS)
        .unwrap();
    let beta = city
        .add_building("Beta", Footprint::new(7, 0, 8, 3), BETA_QUARTERS)
        .unwrap();

    city.map.place_scenery(Scenery::building_floor(ALPHA_QUARTERS, alpha)).unwrap();
    let mut tubes = Vec::new();
    for x in 1..=6 {
        let tube = Scenery::tube(TileCoord::new(x, 1, 2), &[Direction::East, Direction::West]);
        tubes.push(city.map.place_scenery(tube).unwrap());
    }
    city.map.place_scenery(Scenery::building_floor(BETA_QUARTERS, beta)).unwrap();
    (city, alpha, beta, tubes)
}

fn resident_of(city: &mut CityState, building: BuildingId) -> Agent {
    let mut agent = Agent::new(AgentId(0), "resident", ALPHA_QUARTERS.center());
    agent.enter_building(city, building).unwrap();
    agent
}

#[derive(Default)]
struct Recorder {
    started:  u64,
    finished: Vec<(Tick, AgentId, MissionType, bool)>,
    sounds:   Vec<SoundCue>,
    ended:    Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.started += 1;
    }

    fn on_mission_finished(&mut self, tick: Tick, agent: AgentId, mission: &Mission) {
        self.finished.push((tick, agent, mission.mission_type(), mission.is_cancelled()));
    }

    fn on_sound(&mut self, _tick: Tick, cue: &SoundCue) {
        self.sounds.push(*cue);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn invalid_config_is_rejected() {
        let (city, ..) = tube_street();
        let mut config = test_config(10);
        config.agent_speed = 0.0;
        assert!(matches!(
            SimBuilder::new(config, city).build(),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn agent_ids_must_match_positions() {
        let (city, ..) = tube_street();
        let agent = Agent::new(AgentId(3), "stray", ALPHA_QUARTERS.center());
        assert!(matches!(
            SimBuilder::new(test_config(10), city).agent(agent).build(),
            Err(SimError::AgentIdMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn missions_for_unknown_agents_are_rejected() {
        let (city, _, beta, _) = tube_street();
        assert!(matches!(
            SimBuilder::new(test_config(10), city)
                .mission(AgentId(0), Mission::goto_building(beta, false))
                .build(),
            Err(SimError::AgentNotFound(AgentId(0)))
        ));
    }

    #[test]
    fn street_agents_are_placed_on_the_grid() {
        let (city, ..) = tube_street();
        let start = TileCoord::new(3, 1, 2);
        let agent = Agent::new(AgentId(0), "walker", start.center());
        let sim = SimBuilder::new(test_config(10), city).agent(agent).build().unwrap();
        let tile = sim.city.map.tile(start).unwrap();
        assert!(tile.objects.contains(&TileObject::Agent(AgentId(0))));
    }

    #[test]
    fn queued_missions_keep_their_order() {
        let (mut city, alpha, beta, _) = tube_street();
        let agent = resident_of(&mut city, alpha).with_teleporter();
        let sim = SimBuilder::new(test_config(10), city)
            .agent(agent)
            .mission(AgentId(0), Mission::snooze(3))
            .mission(AgentId(0), Mission::goto_building(beta, true))
            .build()
            .unwrap();

        let kinds: Vec<_> = sim.agents[0].missions().iter().map(Mission::mission_type).collect();
        assert_eq!(kinds, vec![MissionType::Snooze, MissionType::GotoBuilding]);
        // The goto has not started, so nobody teleported yet.
        assert_eq!(sim.agents[0].current_building, Some(alpha));
    }
}

// ── Step loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sim_tests {
    use super::*;

    #[test]
    fn run_stops_at_end_tick() {
        let (city, ..) = tube_street();
        let mut sim = SimBuilder::new(test_config(5), city).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(5));
        assert_eq!(rec.started, 5);
        assert_eq!(rec.ended, Some(Tick(5)));
        assert!(sim.is_idle());
    }

    #[test]
    fn walks_through_the_tube_into_the_building() {
        let (mut city, alpha, beta, _) = tube_street();
        let agent = resident_of(&mut city, alpha);
        let mut sim = SimBuilder::new(test_config(20), city)
            .agent(agent)
            .mission(AgentId(0), Mission::goto_building(beta, false))
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        sim.run_steps(7, &mut rec).unwrap();
        assert_eq!(sim.agents[0].position, BETA_QUARTERS.center());
        assert_eq!(sim.agents[0].current_building, None);
        assert!(sim.city.building(alpha).unwrap().occupants.is_empty());

        sim.run_steps(1, &mut rec).unwrap();
        assert_eq!(sim.agents[0].current_building, Some(beta));
        assert_eq!(rec.finished, vec![(Tick(7), AgentId(0), MissionType::GotoBuilding, false)]);
        // Inside a building the agent is off the grid.
        assert!(sim.city.map.tile(BETA_QUARTERS).unwrap().objects.iter().all(|o| {
            !matches!(o, TileObject::Agent(_))
        }));
        assert!(sim.is_idle());
    }

    #[test]
    fn slower_agents_take_longer() {
        let (mut city, alpha, beta, _) = tube_street();
        let agent = resident_of(&mut city, alpha);
        let mut config = test_config(40);
        config.agent_speed = 0.5;
        let mut sim = SimBuilder::new(config, city)
            .agent(agent)
            .mission(AgentId(0), Mission::goto_building(beta, false))
            .build()
            .unwrap();

        sim.run_steps(8, &mut NoopObserver).unwrap();
        assert_eq!(sim.agents[0].current_building, None);
        assert_eq!(sim.agents[0].position, TileCoord::new(4, 1, 2).center());

        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.agents[0].current_building, Some(beta));
    }

    #[test]
    fn teleport_plays_its_sample() {
        let (city, alpha, beta, _) = tube_street();
        let mut city = city.with_teleport_sample(SampleId(5));
        let agent = resident_of(&mut city, alpha).with_teleporter();
        let mut sim = SimBuilder::new(test_config(3), city)
            .agent(agent)
            .mission(AgentId(0), Mission::goto_building(beta, true))
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(sim.agents[0].current_building, Some(beta));
        assert_eq!(
            rec.sounds,
            vec![SoundCue { sample: SampleId(5), position: BETA_QUARTERS.center() }]
        );
        let kinds: Vec<_> = rec.finished.iter().map(|f| f.2).collect();
        assert_eq!(kinds, vec![MissionType::Teleport, MissionType::GotoBuilding]);
    }

    #[test]
    fn snooze_runs_before_the_walk() {
        let (mut city, alpha, beta, _) = tube_street();
        let agent = resident_of(&mut city, alpha);
        let mut sim = SimBuilder::new(test_config(30), city)
            .agent(agent)
            .mission(AgentId(0), Mission::snooze(3))
            .mission(AgentId(0), Mission::goto_building(beta, false))
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.finished.len(), 2);
        assert_eq!(rec.finished[0].2, MissionType::Snooze);
        assert_eq!(rec.finished[0].0, Tick(2));
        assert_eq!(rec.finished[1].2, MissionType::GotoBuilding);
        assert_eq!(sim.agents[0].current_building, Some(beta));
    }

    #[test]
    fn destroyed_tube_cancels_the_walk() {
        let (mut city, alpha, beta, tubes) = tube_street();
        let agent = resident_of(&mut city, alpha);
        let mut sim = SimBuilder::new(test_config(30), city)
            .agent(agent)
            .mission(AgentId(0), Mission::goto_building(beta, false))
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        sim.run_steps(3, &mut rec).unwrap();
        assert_eq!(sim.agents[0].tile(), TileCoord::new(3, 1, 2));

        sim.city.map.destroy_scenery(tubes[4]).unwrap();
        sim.run_steps(5, &mut rec).unwrap();

        let kinds: Vec<_> = rec.finished.iter().map(|f| (f.2, f.3)).collect();
        assert_eq!(
            kinds,
            vec![
                (MissionType::RestartNextMission, false),
                (MissionType::GotoBuilding, true),
            ]
        );
        assert_eq!(sim.agents[0].current_building, None);
        assert!(sim.is_idle());
        let stranded = sim.agents[0].tile();
        assert!(sim.city.map.tile(stranded).unwrap().objects.contains(&TileObject::Agent(AgentId(0))));
    }

    #[test]
    fn add_mission_at_runtime() {
        let (mut city, alpha, beta, _) = tube_street();
        let agent = resident_of(&mut city, alpha);
        let mut sim = SimBuilder::new(test_config(20), city).agent(agent).build().unwrap();
        sim.run_steps(2, &mut NoopObserver).unwrap();
        assert!(sim.is_idle());

        sim.add_mission(AgentId(0), Mission::goto_building(beta, false)).unwrap();
        assert!(sim.add_mission(AgentId(4), Mission::snooze(1)).is_err());
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.agent(AgentId(0)).unwrap().current_building, Some(beta));
    }
}
