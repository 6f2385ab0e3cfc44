//! Simulation observer trait for progress reporting and host integration.

use ca_city::SoundCue;
use ca_core::{AgentId, Tick};
use ca_mission::Mission;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called at the very start of each step, before any agent moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each step.  `moving` is the number of agents
    /// that walked this step.
    fn on_tick_end(&mut self, _tick: Tick, _moving: usize) {}

    /// A mission left the front of `agent`'s queue, finished or cancelled.
    fn on_mission_finished(&mut self, _tick: Tick, _agent: AgentId, _mission: &Mission) {}

    /// A sound cue queued during this step, for the host's audio layer.
    fn on_sound(&mut self, _tick: Tick, _cue: &SoundCue) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
