use ca_core::{AgentId, CoreError};
use ca_mission::MissionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("agent at index {index} has id {id}; ids must match their position")]
    AgentIdMismatch { index: usize, id: AgentId },

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("mission error: {0}")]
    Mission(#[from] MissionError),
}

pub type SimResult<T> = Result<T, SimError>;
