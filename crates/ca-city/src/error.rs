//! City-subsystem error type.

use thiserror::Error;

use ca_core::BuildingId;
use ca_map::MapError;

#[derive(Debug, Error)]
pub enum CityError {
    #[error("building {0} not found")]
    BuildingNotFound(BuildingId),

    #[error("crew quarters {crew_quarters} of building {building} are off the map")]
    CrewQuartersOffMap {
        building:      BuildingId,
        crew_quarters: ca_core::TileCoord,
    },

    #[error("map error: {0}")]
    Map(#[from] MapError),
}

pub type CityResult<T> = Result<T, CityError>;
