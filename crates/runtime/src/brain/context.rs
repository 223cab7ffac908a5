//! Per-decision context handed to every brain.
//!
//! The [`DecisionContext`] bundles what a single decision may touch: a
//! read-only [`WorldView`], the [`GameConfig`], the injected [`Dice`], and an
//! [`Outbox`] for side effects that are not actions (messages, speed changes,
//! summons). The scheduler drains the outbox once the decision returns, so the
//! world itself is never mutated mid-decision.

use game_core::{ActorView, CellView, EntityId, GameConfig, Position, WorldView};

use super::{BrainError, Dice};

/// User-visible message produced while deciding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameMessage {
    Info(String),
    Warning(String),
}

impl GameMessage {
    pub fn text(&self) -> &str {
        match self {
            GameMessage::Info(text) | GameMessage::Warning(text) => text,
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, GameMessage::Warning(_))
    }
}

/// World mutation a brain asks the scheduler to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldRequest {
    /// Overwrite the actor's speed stat.
    SetSpeed { actor: EntityId, speed: u32 },

    /// Spawn an ally of `summoner` at `at`.
    Summon { summoner: EntityId, at: Position },
}

/// Side effects collected during one decision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outbox {
    messages: Vec<GameMessage>,
    requests: Vec<WorldRequest>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.messages.push(GameMessage::Info(text.into()));
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.messages.push(GameMessage::Warning(text.into()));
    }

    pub fn request(&mut self, request: WorldRequest) {
        self.requests.push(request);
    }

    pub fn messages(&self) -> &[GameMessage] {
        &self.messages
    }

    pub fn requests(&self) -> &[WorldRequest] {
        &self.requests
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.requests.is_empty()
    }

    /// Consumes the outbox, yielding messages and requests in emission order.
    pub fn into_parts(self) -> (Vec<GameMessage>, Vec<WorldRequest>) {
        (self.messages, self.requests)
    }
}

/// Everything one decision may read or emit.
///
/// # Lifetime
///
/// The `'a` lifetime ties the context to the world snapshot it reads. A
/// decision runs to completion synchronously, so nothing in the context is
/// retained once the brain returns.
pub struct DecisionContext<'a> {
    pub world: &'a dyn WorldView,
    pub config: &'a GameConfig,
    pub dice: &'a mut dyn Dice,
    pub outbox: &'a mut Outbox,
}

impl<'a> DecisionContext<'a> {
    pub fn new(
        world: &'a dyn WorldView,
        config: &'a GameConfig,
        dice: &'a mut dyn Dice,
        outbox: &'a mut Outbox,
    ) -> Self {
        Self {
            world,
            config,
            dice,
            outbox,
        }
    }

    /// Resolves an actor through the world registry.
    ///
    /// # Errors
    ///
    /// Returns [`BrainError::ActorNotFound`] if the id is dangling.
    pub fn actor(&self, id: EntityId) -> Result<ActorView, BrainError> {
        self.world.actor(id).ok_or(BrainError::ActorNotFound(id))
    }

    /// Primary occupant of `cell`, if it still resolves to a live actor.
    pub fn primary_occupant(&self, cell: &CellView) -> Option<ActorView> {
        cell.first_occupant().and_then(|id| self.world.actor(id))
    }

    /// Energy amount of a tier under the active configuration.
    pub fn energy(&self, tier: game_core::EnergyTier) -> u32 {
        self.config.energy.cost(tier)
    }
}
