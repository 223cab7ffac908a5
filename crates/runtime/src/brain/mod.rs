//! Brain family: one decision per actor per turn.
//!
//! Every non-player brain follows the same loop, perceive → classify → act:
//!
//! 1. **Perceive**: ask the [`game_core::WorldView`] for visible cells
//! 2. **Classify**: find the first cell (scan order) whose primary occupant
//!    the variant regards as hostile
//! 3. **Act**: attack when in range, otherwise step along the shortest path;
//!    with nobody to fight, explore
//!
//! Variants differ only in classification and sequencing, expressed by
//! overriding [`BrainStrategy`] hooks. The shared machinery lives in the
//! trait's default methods and in [`BrainCore`], which each variant embeds by
//! value.
//!
//! [`PlayerBrain`] is not a perception loop at all: it is a small state
//! machine that turns input codes into the same [`game_core::Action`]s.
//!
//! # Core Components
//!
//! - [`Brain`]: owned per actor, dispatches to the concrete variant
//! - [`Memory`]: enemies, enemy kinds and communication history
//! - [`Pathfinder`]: uniform-cost shortest paths over 8-way adjacency
//! - [`DecisionContext`]: world view, config, dice and outbox for one decision
mod animal;
mod context;
mod dice;
mod error;
mod human;
mod memory;
mod pathfinder;
mod player;
mod rogue;
mod spirit;
mod strategy;
mod summoner;
#[cfg(test)]
pub(crate) mod testing;

pub use animal::{AnimalBrain, DemonBrain};
pub use context::{DecisionContext, GameMessage, Outbox, WorldRequest};
pub use dice::Dice;
pub use error::BrainError;
pub use human::HumanBrain;
pub use memory::Memory;
pub use pathfinder::{PathError, Pathfinder};
pub use player::{GuiCallback, InputState, KeyBindings, PlayerBrain, PlayerCommand, PlayerInput};
pub use rogue::{RogueBrain, ZombieBrain};
pub use spirit::SpiritBrain;
pub use strategy::{BrainCore, BrainStrategy};
pub use summoner::SummonerBrain;

use game_core::{Action, ActorView, BrainKind, EntityId, GameConfig};

/// The decision strategy owned by one actor.
#[derive(Debug)]
pub enum Brain {
    Player(PlayerBrain),
    Rogue(RogueBrain),
    Animal(AnimalBrain),
    Demon(DemonBrain),
    Zombie(ZombieBrain),
    Summoner(SummonerBrain),
    Human(HumanBrain),
    Spirit(SpiritBrain),
}

impl Brain {
    pub fn new(kind: BrainKind, actor: EntityId, config: &GameConfig) -> Self {
        match kind {
            BrainKind::Player => Brain::Player(PlayerBrain::new(actor)),
            BrainKind::Rogue => Brain::Rogue(RogueBrain::new(actor)),
            BrainKind::Animal => Brain::Animal(AnimalBrain::new(actor)),
            BrainKind::Demon => Brain::Demon(DemonBrain::new(actor)),
            BrainKind::Zombie => Brain::Zombie(ZombieBrain::new(actor)),
            BrainKind::Summoner => {
                Brain::Summoner(SummonerBrain::new(actor).with_max_summons(config.max_summons))
            }
            BrainKind::Human => Brain::Human(HumanBrain::new(actor)),
            BrainKind::Spirit => Brain::Spirit(SpiritBrain::new(actor)),
        }
    }

    pub fn kind(&self) -> BrainKind {
        match self {
            Brain::Player(_) => BrainKind::Player,
            Brain::Rogue(_) => BrainKind::Rogue,
            Brain::Animal(_) => BrainKind::Animal,
            Brain::Demon(_) => BrainKind::Demon,
            Brain::Zombie(_) => BrainKind::Zombie,
            Brain::Summoner(_) => BrainKind::Summoner,
            Brain::Human(_) => BrainKind::Human,
            Brain::Spirit(_) => BrainKind::Spirit,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Brain::Player(_))
    }

    /// Decides the actor's next action.
    ///
    /// `input` is only consulted by the player brain; perception strategies
    /// ignore it. `Ok(None)` means "no action" and the declared energy cost
    /// tells the scheduler what to charge.
    ///
    /// # Errors
    ///
    /// Returns [`BrainError`] for programming errors only (dangling actor id,
    /// out-of-grid path endpoints). Expected absence conditions are absorbed.
    pub fn decide_next_action(
        &mut self,
        input: Option<PlayerInput>,
        ctx: &mut DecisionContext<'_>,
    ) -> Result<Option<Action>, BrainError> {
        match self {
            Brain::Player(brain) => match input {
                Some(input) => brain.decide_next_action(input, ctx),
                None => Ok(brain.idle()),
            },
            _ => match self.strategy_mut() {
                Some(strategy) => strategy.decide_next_action(ctx),
                None => Ok(None),
            },
        }
    }

    /// Energy the scheduler should charge for the last decision.
    pub fn declared_energy_cost(&self) -> u32 {
        match self {
            Brain::Player(brain) => brain.declared_energy_cost(),
            _ => self
                .strategy()
                .map_or(0, |strategy| strategy.core().declared_energy_cost()),
        }
    }

    pub fn actor(&self) -> EntityId {
        match self {
            Brain::Player(brain) => brain.actor(),
            _ => self
                .strategy()
                .map_or(EntityId::default(), |strategy| strategy.core().actor()),
        }
    }

    /// Rebinds the brain to another actor (e.g. a reused body).
    pub fn set_actor(&mut self, actor: EntityId) {
        match self {
            Brain::Player(brain) => brain.set_actor(actor),
            _ => {
                if let Some(strategy) = self.strategy_mut() {
                    strategy.core_mut().set_actor(actor);
                }
            }
        }
    }

    /// The player keeps no memory; every other brain does.
    pub fn memory(&self) -> Option<&Memory> {
        self.strategy().map(|strategy| strategy.core().memory())
    }

    pub fn memory_mut(&mut self) -> Option<&mut Memory> {
        self.strategy_mut()
            .map(|strategy| strategy.core_mut().memory_mut())
    }

    /// Marks `actor` as a personal enemy. A no-op for the player brain.
    pub fn add_enemy(&mut self, actor: &ActorView) {
        if let Some(memory) = self.memory_mut() {
            memory.add_enemy(actor);
        }
    }

    pub fn is_enemy(&self, actor: &ActorView) -> bool {
        self.memory().is_some_and(|memory| memory.is_enemy(actor))
    }

    pub fn as_player(&self) -> Option<&PlayerBrain> {
        match self {
            Brain::Player(brain) => Some(brain),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerBrain> {
        match self {
            Brain::Player(brain) => Some(brain),
            _ => None,
        }
    }

    fn strategy(&self) -> Option<&dyn BrainStrategy> {
        match self {
            Brain::Player(_) => None,
            Brain::Rogue(brain) => Some(brain),
            Brain::Animal(brain) => Some(brain),
            Brain::Demon(brain) => Some(brain),
            Brain::Zombie(brain) => Some(brain),
            Brain::Summoner(brain) => Some(brain),
            Brain::Human(brain) => Some(brain),
            Brain::Spirit(brain) => Some(brain),
        }
    }

    fn strategy_mut(&mut self) -> Option<&mut dyn BrainStrategy> {
        match self {
            Brain::Player(_) => None,
            Brain::Rogue(brain) => Some(brain),
            Brain::Animal(brain) => Some(brain),
            Brain::Demon(brain) => Some(brain),
            Brain::Zombie(brain) => Some(brain),
            Brain::Summoner(brain) => Some(brain),
            Brain::Human(brain) => Some(brain),
            Brain::Spirit(brain) => Some(brain),
        }
    }
}
