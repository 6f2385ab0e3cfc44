//! Mission-subsystem error type.

use thiserror::Error;

use ca_city::CityError;
use ca_core::{AgentId, BuildingId};

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("agent {agent} is not inside building {building}")]
    NotInBuilding { agent: AgentId, building: BuildingId },

    #[error("city error: {0}")]
    City(#[from] CityError),
}

pub type MissionResult<T> = Result<T, MissionError>;
