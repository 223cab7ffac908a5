//! Unified error type surfaced by the simulation API.
//!
//! Wraps failures from brains and the world so clients can bubble them up
//! with consistent context.
use game_core::{EntityId, ErrorSeverity, GameError};
use thiserror::Error;

use crate::brain::BrainError;
use crate::world::WorldError;

pub type Result<T> = std::result::Result<T, SimulationError>;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("no actors available for turn scheduling")]
    NoActors,

    #[error("actor {0} has no brain attached")]
    BrainMissing(EntityId),

    #[error(transparent)]
    Brain(#[from] BrainError),

    #[error(transparent)]
    World(#[from] WorldError),
}

impl GameError for SimulationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoActors => ErrorSeverity::Recoverable,
            Self::BrainMissing(_) => ErrorSeverity::Internal,
            Self::Brain(err) => err.severity(),
            Self::World(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoActors => "simulation.no_actors",
            Self::BrainMissing(_) => "simulation.brain_missing",
            Self::Brain(err) => err.error_code(),
            Self::World(err) => err.error_code(),
        }
    }
}
