//! `ca-mission` — how agents decide where to go and whether they may go
//! there.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`legality`] | `displacement_to_direction_code`, `is_traversal_allowed`     |
//! | [`helper`]   | `AgentTileHelper`, the `TileCostModel` agents path with      |
//! | [`mission`]  | `Mission`, `MissionKind`, `MissionType`                      |
//! | [`path`]     | path planning and incremental path consumption               |
//! | [`agent`]    | `Agent`: position, building, and the mission queue           |
//! | [`error`]    | `MissionError`, `MissionResult<T>`                           |
//!
//! # Lifecycle
//!
//! A mission is built by one of the `Mission::*` factories and handed to
//! [`Agent::add_mission`], which pushes it to the front of the queue and
//! starts it.  Each tick the driver asks the front mission for the next
//! destination, moves the agent, updates the mission, and pops it once it
//! reports finished.
//!
//! Per-tick operations never return `Err`.  Contract violations are logged
//! through `tracing` and degrade to "nothing happened this tick".

pub mod agent;
pub mod error;
pub mod helper;
pub mod legality;
pub mod mission;
pub mod path;


pub use agent::Agent;
pub use error::{MissionError, MissionResult};
pub use helper::AgentTileHelper;
pub use legality::{displacement_to_direction_code, is_traversal_allowed};
pub use mission::{Mission, MissionKind, MissionType};
