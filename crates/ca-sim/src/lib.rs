//! `ca-sim` — the step loop for the city agent mission core.
//!
//! # Step loop
//!
//! ```text
//! for step in 0..config.total_steps:
//!   for agent in ascending AgentId order:
//!     ① Goal    : no current goal → retire finished missions and ask the
//!                  front mission for its next destination.
//!     ② Move    : leave the building if inside; walk towards the goal at
//!                  agent_speed × ticks_per_step tiles.
//!     ③ Update  : update the front mission with ticks_per_step.
//!     ④ Retire  : pop finished missions, starting each successor.
//!   report queued sound cues, advance the clock.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut sim = SimBuilder::new(SimConfig::default(), city)
//!     .agent(Agent::new(AgentId(0), "courier", start.center()))
//!     .mission(AgentId(0), Mission::goto_building(target, false))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
