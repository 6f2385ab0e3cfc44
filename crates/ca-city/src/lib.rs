//! `ca-city` — buildings and the shared city state the missions act on.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`building`] | `Footprint`, `Building`, `BuildingStore`          |
//! | [`state`]    | `CityState`, `SoundCue`                           |
//! | [`error`]    | `CityError`, `CityResult<T>`                      |
//!
//! `CityState` bundles the tile map, the buildings, the navigation tunables,
//! and a queue of sound cues the host drains after each step.  Missions get
//! `&mut CityState`; nothing in here holds a reference to an agent.

pub mod building;
pub mod error;
pub mod state;

#[cfg(test)]
mod tests;

pub use building::{Building, BuildingStore, Footprint};
pub use error::{CityError, CityResult};
pub use state::{CityState, SoundCue};
