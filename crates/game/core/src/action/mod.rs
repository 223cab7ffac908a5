//! Deferred action protocol.
//!
//! A brain decides; the scheduler executes. The decision is captured as a
//! data-only [`Action`] (no closures, no hidden captured state) so the
//! scheduler can pattern-match on it, tests can compare it by equality, and a
//! log can serialize it. The energy the scheduler charges is declared
//! separately by the brain as an [`EnergyTier`] cost.
mod energy;

pub use energy::EnergyTier;

use crate::state::{EntityId, Position};

/// Intelligence handed from one actor to another.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Communication {
    /// Actors the sender knows to be hostile, in the order it learned them.
    pub enemies: Vec<EntityId>,
}

impl Communication {
    pub fn enemies(enemies: Vec<EntityId>) -> Self {
        Self { enemies }
    }
}

/// A committed decision, consumed exactly once by the scheduler.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Move towards `to`; the movement collaborator resolves the actual step.
    Move { actor: EntityId, to: Position },

    /// Attach an attack intent against `target`.
    Attack { actor: EntityId, target: EntityId },

    /// Attach `message` to `target` as a pending communication.
    Communicate {
        actor: EntityId,
        target: EntityId,
        message: Communication,
    },

    /// Pick up the items lying at `at`.
    PickUp { actor: EntityId, at: Position },

    UseStairs { actor: EntityId },

    Rest { actor: EntityId },

    /// Spend the turn without touching the world.
    NoOp { actor: EntityId },
}

impl Action {
    /// Returns the entity performing this action.
    pub fn actor(&self) -> EntityId {
        match self {
            Action::Move { actor, .. }
            | Action::Attack { actor, .. }
            | Action::Communicate { actor, .. }
            | Action::PickUp { actor, .. }
            | Action::UseStairs { actor }
            | Action::Rest { actor }
            | Action::NoOp { actor } => *actor,
        }
    }

    pub fn is_movement(&self) -> bool {
        matches!(self, Action::Move { .. })
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, Action::Attack { .. })
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Action::NoOp { .. })
    }
}
