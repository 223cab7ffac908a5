//! Timeline scheduler that runs brains against a [`GridWorld`].
//!
//! The scheduler owns every [`Brain`] and the world they perceive. One call
//! to [`Simulation::step`] runs exactly one decision:
//!
//! 1. pick the actor with the smallest `ready_at` (ties broken by id)
//! 2. fold any received communication into that actor's memory
//! 3. ask its brain for an action, then drain the decision's outbox
//! 4. apply the action and charge the declared energy as a delay
//!
//! A declared cost of zero leaves the actor's `ready_at` untouched, so it
//! decides again next step.
use std::collections::BTreeMap;

use game_core::{
    Action, ActorKind, ActorView, BrainKind, CellView, Direction, EntityId, GameConfig,
    MapDimensions, MapLayout, Position, SpawnSpec, Tick, WorldView,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::api::{Result, SimulationError};
use crate::brain::{
    Brain, DecisionContext, Dice, GameMessage, Outbox, PlayerInput, RogueBrain, WorldRequest,
};
use crate::world::GridWorld;

/// Result of one scheduler step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub actor: EntityId,
    pub action: Option<Action>,
    /// Energy the brain declared for the decision.
    pub energy: u32,
    /// Whether the actor's next turn was pushed back.
    pub turn_consumed: bool,
}

/// World view handed to a deciding brain.
///
/// Hostility questions are answered by the other actors' memories; the
/// deciding brain itself is checked out of `brains` for the duration of the
/// decision.
pub struct SimulationView<'a> {
    world: &'a GridWorld,
    brains: &'a BTreeMap<EntityId, Brain>,
}

impl<'a> SimulationView<'a> {
    pub fn new(world: &'a GridWorld, brains: &'a BTreeMap<EntityId, Brain>) -> Self {
        Self { world, brains }
    }
}

impl WorldView for SimulationView<'_> {
    fn dimensions(&self) -> MapDimensions {
        self.world.dimensions()
    }

    fn cell(&self, position: Position) -> Option<CellView> {
        self.world.cell(position)
    }

    fn visible_cells(&self, viewer: EntityId) -> Vec<CellView> {
        self.world.visible_cells(viewer)
    }

    fn actor(&self, id: EntityId) -> Option<ActorView> {
        self.world.actor(id)
    }

    fn considers_enemy(&self, observer: EntityId, other: EntityId) -> bool {
        let Some(other) = self.world.actor(other) else {
            return false;
        };
        self.brains
            .get(&observer)
            .is_some_and(|brain| brain.is_enemy(&other))
    }
}

pub struct Simulation<D: Dice = ChaCha8Rng> {
    world: GridWorld,
    brains: BTreeMap<EntityId, Brain>,
    ready_at: BTreeMap<EntityId, Tick>,
    clock: Tick,
    config: GameConfig,
    dice: D,
    messages: Vec<GameMessage>,
}

impl Simulation<ChaCha8Rng> {
    /// Builds a deterministic simulation from a layout and its spawns.
    ///
    /// # Errors
    ///
    /// Fails if a spawn lands off the map, in a wall or on a full tile.
    pub fn seeded(layout: &MapLayout, config: GameConfig, seed: u64) -> Result<Self> {
        let world = GridWorld::from_layout(layout).with_default_sight_range(config.default_sight_range);
        let mut simulation = Self::new(world, config, ChaCha8Rng::seed_from_u64(seed));
        for spec in layout.spawns() {
            simulation.spawn(spec)?;
        }
        Ok(simulation)
    }
}

impl<D: Dice> Simulation<D> {
    /// Most recent messages kept once they have been logged.
    pub const MESSAGE_LOG_CAPACITY: usize = 64;

    pub fn new(world: GridWorld, config: GameConfig, dice: D) -> Self {
        Self {
            world,
            brains: BTreeMap::new(),
            ready_at: BTreeMap::new(),
            clock: Tick::ZERO,
            config,
            dice,
            messages: Vec::new(),
        }
    }

    /// Places an actor and schedules its first turn one rest-delay from now.
    pub fn spawn(&mut self, spec: &SpawnSpec) -> Result<EntityId> {
        let id = self.world.spawn(spec)?;
        let brain = Brain::new(spec.brain, id, &self.config);
        self.attach(id, brain);
        Ok(id)
    }

    fn attach(&mut self, id: EntityId, brain: Brain) {
        let speed = self.world.record(id).map_or(1, |record| record.speed);
        let delay = delay_for(self.config.energy.rest, speed);
        self.brains.insert(id, brain);
        self.ready_at.insert(id, self.clock + delay);
    }

    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> Tick {
        self.clock
    }

    pub fn brain(&self, id: EntityId) -> Option<&Brain> {
        self.brains.get(&id)
    }

    pub fn brain_mut(&mut self, id: EntityId) -> Option<&mut Brain> {
        self.brains.get_mut(&id)
    }

    /// The most recent messages, oldest first.
    pub fn messages(&self) -> &[GameMessage] {
        &self.messages
    }

    pub fn take_messages(&mut self) -> Vec<GameMessage> {
        std::mem::take(&mut self.messages)
    }

    pub fn ready_at(&self, id: EntityId) -> Option<Tick> {
        self.ready_at.get(&id).copied()
    }

    /// The actor whose turn comes next.
    pub fn next_actor(&self) -> Option<EntityId> {
        self.ready_at
            .iter()
            .map(|(&id, &tick)| (tick, id))
            .min()
            .map(|(_, id)| id)
    }

    /// First actor driven by a player brain.
    pub fn player(&self) -> Option<EntityId> {
        self.brains
            .iter()
            .find(|(_, brain)| brain.is_player())
            .map(|(&id, _)| id)
    }

    /// Runs one decision for the next scheduled actor.
    ///
    /// `input` is forwarded to player brains only.
    ///
    /// # Errors
    ///
    /// Fails when nobody is scheduled, or a brain or world operation reports
    /// a programming error.
    pub fn step(&mut self, input: Option<PlayerInput>) -> Result<TurnOutcome> {
        let actor = self.next_actor().ok_or(SimulationError::NoActors)?;
        if let Some(&tick) = self.ready_at.get(&actor) {
            self.clock = self.clock.max(tick);
        }

        self.receive_communication(actor)?;

        let mut brain = self
            .brains
            .remove(&actor)
            .ok_or(SimulationError::BrainMissing(actor))?;
        let mut outbox = Outbox::new();
        let decision = {
            let view = SimulationView::new(&self.world, &self.brains);
            let mut ctx = DecisionContext::new(&view, &self.config, &mut self.dice, &mut outbox);
            brain.decide_next_action(input, &mut ctx)
        };
        let energy = brain.declared_energy_cost();
        let is_player = brain.is_player();
        self.brains.insert(actor, brain);
        let action = decision?;

        self.drain_outbox(outbox)?;
        if let Some(action) = &action {
            self.apply(action)?;
        }

        let charged = match (&action, is_player) {
            (Some(_), _) => energy,
            (None, true) => 0,
            (None, false) => energy.max(self.config.energy.rest),
        };
        let turn_consumed = charged > 0;
        if turn_consumed {
            let speed = self.world.record(actor).map_or(1, |record| record.speed);
            self.ready_at.insert(actor, self.clock + delay_for(charged, speed));
        }

        tracing::debug!(
            "tick {}: actor {} -> {:?} (energy {}, consumed {})",
            self.clock,
            actor,
            action,
            energy,
            turn_consumed
        );

        Ok(TurnOutcome {
            actor,
            action,
            energy,
            turn_consumed,
        })
    }

    /// Digests a pending communication into the receiver's memory.
    fn receive_communication(&mut self, actor: EntityId) -> Result<()> {
        let Some(message) = self.world.take_communication(actor) else {
            return Ok(());
        };
        let brain = self
            .brains
            .get_mut(&actor)
            .ok_or(SimulationError::BrainMissing(actor))?;
        for enemy in message.enemies {
            if let Some(view) = self.world.actor(enemy) {
                brain.add_enemy(&view);
            }
        }
        Ok(())
    }

    fn drain_outbox(&mut self, outbox: Outbox) -> Result<()> {
        let (messages, requests) = outbox.into_parts();
        for message in &messages {
            match message {
                GameMessage::Info(text) => tracing::info!("{text}"),
                GameMessage::Warning(text) => tracing::warn!("{text}"),
            }
        }
        self.messages.extend(messages);
        let overflow = self
            .messages
            .len()
            .saturating_sub(Self::MESSAGE_LOG_CAPACITY);
        self.messages.drain(..overflow);

        for request in requests {
            match request {
                WorldRequest::SetSpeed { actor, speed } => self.world.set_speed(actor, speed)?,
                WorldRequest::Summon { summoner, at } => {
                    self.summon(summoner, at)?;
                }
            }
        }
        Ok(())
    }

    /// Spawns an ally of `summoner` that hunts the player.
    fn summon(&mut self, summoner: EntityId, at: Position) -> Result<EntityId> {
        let spec = SpawnSpec::new("Summoned", ActorKind::Summoned, BrainKind::Rogue, at);
        let id = self.world.spawn(&spec)?;
        let brain = Brain::Rogue(RogueBrain::new(id).with_enemy_kind(ActorKind::Player));
        self.attach(id, brain);
        tracing::debug!("actor {} summoned {} at {}", summoner, id, at);
        Ok(id)
    }

    fn apply(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Move { actor, to } => {
                let Some(from) = self.world.record(*actor).map(|record| record.position) else {
                    return Ok(());
                };
                // One king-move towards the destination, if that cell is free.
                if let Some(direction) = Direction::towards(from, *to) {
                    let next = from.step(direction);
                    if self.world.is_passable(next) {
                        self.world.move_actor(*actor, next)?;
                    }
                }
            }
            Action::Attack { actor, target } => {
                if let (Some(attacker), Some(brain)) =
                    (self.world.actor(*actor), self.brains.get_mut(target))
                {
                    brain.add_enemy(&attacker);
                }
            }
            Action::Communicate {
                target, message, ..
            } => {
                self.world.deliver(*target, message.clone())?;
            }
            Action::PickUp { at, .. } => self.world.clear_items(*at),
            Action::UseStairs { actor } => {
                tracing::info!("actor {} takes the stairs", actor);
            }
            Action::Rest { .. } | Action::NoOp { .. } => {}
        }
        Ok(())
    }
}

/// Ticks an action of `energy` takes at `speed`; speed 100 is nominal.
fn delay_for(energy: u32, speed: u32) -> u64 {
    let ticks = u64::from(energy) * 100 / u64::from(speed.max(1));
    ticks.max(u64::from(energy > 0))
}
