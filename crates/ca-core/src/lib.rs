//! `ca-core` — foundational types for the city agent mission core.
//!
//! This crate is a dependency of every other `ca-*` crate.  It has no
//! `ca-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `BuildingId`, `SceneryId`, `SampleId`      |
//! | [`coord`]       | `TileCoord` (grid cell), `Vec3f` (world point)        |
//! | [`direction`]   | `Direction`: the six canonical direction codes        |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `NavConfig`, `SimConfig`                              |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod direction;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{NavConfig, SimConfig};
pub use coord::{TileCoord, Vec3f};
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, BuildingId, SampleId, SceneryId};
pub use time::{SimClock, Tick};
