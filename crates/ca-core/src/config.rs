//! Tunable parameters for navigation and the simulation loop.
//!
//! Both structs have `Default`s that reproduce the stock game behavior and
//! derive serde traits behind the `serde` feature so applications can load
//! them from JSON/TOML.  Call [`SimConfig::validate`] after loading.

use crate::{CoreError, CoreResult};

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Path-search tunables consumed by the traversal helper and planner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Acceptable-suboptimality multiplier for the path search: paths up to
    /// this factor longer than the lower-bound estimate are accepted.
    pub path_overhead_allowance: f32,

    /// Node-expansion budget for one path search.
    pub max_path_iterations: u32,

    /// Below this z level, downward steps receive `deep_descent_bonus`.
    pub min_reasonable_height: i32,

    /// Cost added to a downward step below `min_reasonable_height`.
    /// Negative, i.e. a bonus.
    pub deep_descent_bonus: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            path_overhead_allowance: 1.25,
            max_path_iterations:     1000,
            min_reasonable_height:   2,
            deep_descent_bonus:      -50.0,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total steps `Sim::run` performs.
    pub total_steps: u64,

    /// Ticks elapsed per step (passed to `Mission::update`).
    pub ticks_per_step: u32,

    /// Agent walking speed in tiles per tick.
    pub agent_speed: f32,

    /// Master RNG seed for applications that randomise agent placement.
    pub seed: u64,

    /// Navigation tunables.
    pub nav: NavConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_steps:    1_000,
            ticks_per_step: 1,
            agent_speed:    1.0,
            seed:           42,
            nav:            NavConfig::default(),
        }
    }
}

impl SimConfig {
    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ticks_per_step == 0 {
            return Err(CoreError::Config("ticks_per_step must be at least 1".into()));
        }
        if !(self.agent_speed > 0.0) {
            return Err(CoreError::Config(format!(
                "agent_speed must be positive, got {}",
                self.agent_speed
            )));
        }
        if self.nav.max_path_iterations == 0 {
            return Err(CoreError::Config("nav.max_path_iterations must be at least 1".into()));
        }
        if !(self.nav.path_overhead_allowance >= 1.0) {
            return Err(CoreError::Config(format!(
                "nav.path_overhead_allowance must be >= 1.0, got {}",
                self.nav.path_overhead_allowance
            )));
        }
        Ok(())
    }
}
