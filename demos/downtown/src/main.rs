//! `downtown` — pedestrians commuting between blocks through people tubes.
//!
//! Every agent starts inside a random block and gets a short day plan:
//! walk (or teleport) somewhere, snooze, then head somewhere else.  Every
//! fifth agent carries a teleporter.
//!
//! Run with:
//!   cargo run -p downtown --release [config.json]
//!
//! The optional JSON file holds a `SimConfig`; missing fields keep their
//! defaults.  Set `RUST_LOG=debug` for per-mission detail.

mod city;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ca_city::SoundCue;
use ca_core::{AgentId, BuildingId, SimConfig, Tick};
use ca_mission::{Agent, Mission, MissionType};
use ca_sim::{SimBuilder, SimObserver};

use city::build_downtown;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:    usize = 40;
const BLOCK_COUNT:    i32   = 8;
const DEFAULT_STEPS:  u64   = 300;
const TELEPORT_EVERY: usize = 5;

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tally {
    arrived:   usize,
    cancelled: usize,
    snoozed:   usize,
    teleports: usize,
    walking_peak: usize,
}

impl SimObserver for Tally {
    fn on_tick_end(&mut self, tick: Tick, moving: usize) {
        self.walking_peak = self.walking_peak.max(moving);
        if tick.0 % 50 == 0 {
            info!(%tick, moving, arrived = self.arrived, "progress");
        }
    }

    fn on_mission_finished(&mut self, tick: Tick, agent: AgentId, mission: &Mission) {
        debug!(%tick, %agent, %mission, cancelled = mission.is_cancelled(), "mission done");
        if mission.is_cancelled() {
            self.cancelled += 1;
            return;
        }
        match mission.mission_type() {
            MissionType::GotoBuilding => self.arrived += 1,
            MissionType::Snooze => self.snoozed += 1,
            _ => {}
        }
    }

    fn on_sound(&mut self, _tick: Tick, _cue: &SoundCue) {
        self.teleports += 1;
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig { total_steps: DEFAULT_STEPS, ..SimConfig::default() });
    };
    let text = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("reading config {path}"))?;
    let config: SimConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

fn pick_other(rng: &mut SmallRng, buildings: &[BuildingId], not: BuildingId) -> BuildingId {
    loop {
        let b = buildings[rng.gen_range(0..buildings.len())];
        if b != not {
            return b;
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;
    info!(?config, "configuration loaded");

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut downtown = build_downtown(BLOCK_COUNT, config.nav)?;
    let buildings = downtown.buildings.clone();

    let mut builder_agents = Vec::with_capacity(AGENT_COUNT);
    let mut plans = Vec::with_capacity(AGENT_COUNT);
    for i in 0..AGENT_COUNT {
        let id = AgentId(i as u32);
        let home = buildings[rng.gen_range(0..buildings.len())];
        let mut agent = Agent::new(id, format!("citizen-{i}"), Default::default());
        if i % TELEPORT_EVERY == 0 {
            agent = agent.with_teleporter();
        }
        agent.enter_building(&mut downtown.city, home)?;

        let first = pick_other(&mut rng, &buildings, home);
        let second = pick_other(&mut rng, &buildings, first);
        let teleporter = agent.can_teleport();
        plans.push((id, vec![
            Mission::goto_building(first, teleporter),
            Mission::snooze(rng.gen_range(5..30)),
            Mission::goto_building(second, false),
        ]));
        builder_agents.push(agent);
    }

    let mut builder = SimBuilder::new(config, downtown.city).agents(builder_agents);
    for (id, missions) in plans {
        for mission in missions {
            builder = builder.mission(id, mission);
        }
    }
    let mut sim = builder.build()?;

    let started = Instant::now();
    let mut tally = Tally::default();
    sim.run(&mut tally)?;

    let still_busy = sim.agents.iter().filter(|a| !a.missions().is_empty()).count();
    println!(
        "{} steps in {:.2?}: {} arrivals, {} snoozes, {} teleports, {} cancelled, \
         {} agents still busy, peak {} walking",
        sim.config.total_steps,
        started.elapsed(),
        tally.arrived,
        tally.snoozed,
        tally.teleports,
        tally.cancelled,
        still_busy,
        tally.walking_peak,
    );
    Ok(())
}
