//! Map-subsystem error type.

use thiserror::Error;

use ca_core::{SceneryId, TileCoord};

/// Errors produced by `ca-map`.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("invalid map size {0}: every dimension must be positive")]
    InvalidSize(TileCoord),

    #[error("tile {0} is outside the map")]
    OutOfBounds(TileCoord),

    #[error("tile {0} already holds scenery")]
    TileOccupied(TileCoord),

    #[error("scenery {0} does not exist")]
    SceneryNotFound(SceneryId),

    #[error("no path from {from} to {to}")]
    NoPath { from: TileCoord, to: TileCoord },

    #[error("path search from {from} to {to} exhausted its budget of {iterations} iterations")]
    BudgetExhausted {
        from:       TileCoord,
        to:         TileCoord,
        iterations: u32,
    },
}

pub type MapResult<T> = Result<T, MapError>;
