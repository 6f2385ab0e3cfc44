//! `ca-map` — the city tile grid, scenery, and path search.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`scenery`]     | `TileType`, `Scenery`                                     |
//! | [`map`]         | `Tile`, `TileObject`, `TileMap` (grid + scenery arena)    |
//! | [`pathfinding`] | `TileCostModel` trait, `PathGoal`, `UnitFilter`, `astar`  |
//! | [`error`]       | `MapError`, `MapResult<T>`                                |
//!
//! # Ownership
//!
//! `TileMap` owns every `Tile` and every `Scenery`.  Tiles refer to scenery
//! by `SceneryId` only; resolving the id goes back through the map, so a
//! destroyed scenery simply stops resolving.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod map;
pub mod pathfinding;
pub mod scenery;


pub use error::{MapError, MapResult};
pub use map::{Tile, TileMap, TileObject};
pub use pathfinding::{PathGoal, TileCostModel, UnitFilter, astar};
pub use scenery::{Scenery, TileType};
