use game_core::{EntityId, ErrorSeverity, GameError};

use super::PathError;

/// Programming errors that abort a decision.
///
/// Expected conditions (nothing to pick up, unreachable target, nobody in
/// sight) never surface here; brains absorb them as no-ops or exploration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BrainError {
    #[error("actor {0} not found in the world")]
    ActorNotFound(EntityId),

    #[error(transparent)]
    Path(#[from] PathError),
}

impl GameError for BrainError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "brain.actor_not_found",
            Self::Path(_) => "brain.path",
        }
    }
}
