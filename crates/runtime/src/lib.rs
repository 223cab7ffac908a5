//! Per-turn decision core for the roguelike simulation.
//!
//! This crate decides what an actor does next and leaves the doing to a
//! scheduler. Modules are organized by responsibility:
//! - [`brain`] hosts the strategy family (Rogue, Animal, Demon, Zombie,
//!   Summoner, Human, Spirit) and the input-driven [`PlayerBrain`], together
//!   with their [`Memory`], the [`Pathfinder`] and the injected [`Dice`]
//! - [`world`] provides [`GridWorld`], an in-memory grid implementing
//!   [`game_core::WorldView`]
//! - [`simulation`] runs brains against a world on a timeline and applies the
//!   returned actions
//! - [`api`] exposes the runtime-level error type
pub mod api;
pub mod brain;
pub mod simulation;
pub mod world;

pub use api::{Result, SimulationError};
pub use brain::{
    AnimalBrain, Brain, BrainCore, BrainError, BrainStrategy, DecisionContext, DemonBrain, Dice,
    GameMessage, GuiCallback, HumanBrain, InputState, KeyBindings, Memory, Outbox, PathError,
    Pathfinder, PlayerBrain, PlayerCommand, PlayerInput, RogueBrain, SpiritBrain, SummonerBrain,
    WorldRequest, ZombieBrain,
};
pub use simulation::{Simulation, SimulationView, TurnOutcome};
pub use world::{ActorRecord, GridWorld, WorldError};
