//! Player input brain.
//!
//! Unlike the perception strategies, the player brain is a small state
//! machine driven by one input per decision:
//!
//! - `Idle` ↔ `AwaitingConfirmation`: bumping into a non-hostile actor parks
//!   the attack until the confirm key arrives. Any other input drops it.
//! - run mode is an orthogonal flag. Toggling it on snapshots the current
//!   speed and scales it up; every non-movement input toggles it back off.
//!
//! Speed changes and user-visible messages go to the [`Outbox`](super::Outbox);
//! the brain never mutates the world itself.

use std::collections::HashMap;
use std::fmt;

use game_core::{Action, ActorView, Direction, EnergyTier, EntityId};

use super::{BrainError, DecisionContext, WorldRequest};

/// Command issued by the GUI rather than by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Missile attacks are targeted and resolved by the GUI.
    Missile,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerInput {
    Key(char),
    Command(PlayerCommand),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputState {
    #[default]
    Idle,
    AwaitingConfirmation,
}

/// Key layout of the player brain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    pub moves: [(char, Direction); 8],
    pub rest: char,
    pub pickup: char,
    pub stairs: char,
    pub toggle_run: char,
    pub confirm: char,
}

impl KeyBindings {
    pub fn direction(&self, key: char) -> Option<Direction> {
        self.moves
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|&(_, direction)| direction)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            moves: [
                ('q', Direction::NorthWest),
                ('w', Direction::North),
                ('e', Direction::NorthEast),
                ('a', Direction::West),
                ('d', Direction::East),
                ('z', Direction::SouthWest),
                ('x', Direction::South),
                ('c', Direction::SouthEast),
            ],
            rest: 's',
            pickup: '.',
            stairs: ',',
            toggle_run: 'r',
            confirm: 'y',
        }
    }
}

/// Hook invoked instead of the brain for a bound key.
pub type GuiCallback = Box<dyn FnMut(char)>;

pub struct PlayerBrain {
    actor: EntityId,
    bindings: KeyBindings,
    gui_callbacks: HashMap<char, GuiCallback>,
    energy: u32,
    state: InputState,
    /// Parked attack and the energy it costs once confirmed.
    pending: Option<(Action, u32)>,
    run_mode: bool,
    base_speed: u32,
}

impl fmt::Debug for PlayerBrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerBrain")
            .field("actor", &self.actor)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("run_mode", &self.run_mode)
            .field("base_speed", &self.base_speed)
            .field("gui_callbacks", &self.gui_callbacks.len())
            .finish_non_exhaustive()
    }
}

impl PlayerBrain {
    pub fn new(actor: EntityId) -> Self {
        Self::with_bindings(actor, KeyBindings::default())
    }

    pub fn with_bindings(actor: EntityId, bindings: KeyBindings) -> Self {
        Self {
            actor,
            bindings,
            gui_callbacks: HashMap::new(),
            energy: 0,
            state: InputState::Idle,
            pending: None,
            run_mode: false,
            base_speed: 0,
        }
    }

    pub fn actor(&self) -> EntityId {
        self.actor
    }

    pub fn set_actor(&mut self, actor: EntityId) {
        self.actor = actor;
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn is_run_mode_enabled(&self) -> bool {
        self.run_mode
    }

    pub fn declared_energy_cost(&self) -> u32 {
        self.energy
    }

    /// Routes `key` to `callback`; the brain then performs nothing itself.
    pub fn add_gui_callback(&mut self, key: char, callback: GuiCallback) {
        self.gui_callbacks.insert(key, callback);
    }

    /// Decision made while no input is available: nothing, at no cost.
    pub fn idle(&mut self) -> Option<Action> {
        self.energy = 0;
        None
    }

    /// Translates one input into an action.
    ///
    /// `Ok(None)` never consumes the turn; the declared cost then tells
    /// whether anything was spent (it is `0` for refused moves and missing
    /// items or stairs).
    ///
    /// # Errors
    ///
    /// Returns [`BrainError::ActorNotFound`] if the player's actor is gone.
    pub fn decide_next_action(
        &mut self,
        input: PlayerInput,
        ctx: &mut DecisionContext<'_>,
    ) -> Result<Option<Action>, BrainError> {
        self.energy = ctx.energy(EnergyTier::Rest);

        let key = match input {
            PlayerInput::Command(command) => {
                self.leave_run_mode(ctx);
                if command == PlayerCommand::Missile {
                    self.energy = ctx.energy(EnergyTier::Move);
                }
                return Ok(Some(Action::NoOp { actor: self.actor }));
            }
            PlayerInput::Key(key) => key,
        };

        if self.state == InputState::AwaitingConfirmation {
            self.state = InputState::Idle;
            let pending = self.pending.take();
            if key == self.bindings.confirm {
                if let Some((action, energy)) = pending {
                    self.energy = energy;
                    return Ok(Some(action));
                }
            }
        }

        if let Some(callback) = self.gui_callbacks.get_mut(&key) {
            callback(key);
            return Ok(None);
        }

        if key == self.bindings.toggle_run {
            self.toggle_run_mode(ctx)?;
            return Ok(None);
        }

        let me = ctx.actor(self.actor)?;
        let direction = self.bindings.direction(key);
        if direction.is_none() {
            self.leave_run_mode(ctx);
        }

        if let Some(direction) = direction {
            return Ok(self.move_or_attack(ctx, &me, direction));
        }

        let here = ctx.world.cell(me.position);
        if key == self.bindings.pickup {
            if here.is_some_and(|cell| cell.has_items()) {
                self.energy = ctx.energy(EnergyTier::Pickup);
                return Ok(Some(Action::PickUp {
                    actor: me.id,
                    at: me.position,
                }));
            }
            self.energy = 0;
            ctx.outbox.warn("There are no items to pick up.");
            return Ok(None);
        }

        if key == self.bindings.stairs {
            if here.is_some_and(|cell| cell.has_stairs()) {
                return Ok(Some(Action::UseStairs { actor: me.id }));
            }
            self.energy = 0;
            ctx.outbox.warn("There are no stairs here.");
            return Ok(None);
        }

        if key == self.bindings.rest {
            return Ok(Some(Action::Rest { actor: me.id }));
        }

        tracing::debug!("player {} pressed unbound key {:?}", me.id, key);
        Ok(None)
    }

    fn move_or_attack(
        &mut self,
        ctx: &mut DecisionContext<'_>,
        me: &ActorView,
        direction: Direction,
    ) -> Option<Action> {
        let to = me.position.step(direction);
        let Some(cell) = ctx.world.cell(to) else {
            self.refuse_move(ctx);
            return None;
        };

        if cell.is_passable() {
            self.energy = ctx.energy(EnergyTier::Move);
            return Some(Action::Move { actor: me.id, to });
        }

        let Some(target) = cell.first_occupant() else {
            self.refuse_move(ctx);
            return None;
        };

        self.leave_run_mode(ctx);
        let attack = Action::Attack {
            actor: me.id,
            target,
        };
        let attack_energy = ctx.energy(EnergyTier::Attack);
        if ctx.world.considers_enemy(target, me.id) {
            self.energy = attack_energy;
            return Some(attack);
        }

        tracing::debug!("player {} asked to confirm attacking {}", me.id, target);
        self.state = InputState::AwaitingConfirmation;
        self.pending = Some((attack, attack_energy));
        self.energy = 0;
        ctx.outbox.info(format!(
            "Press '{}' to attack non-hostile actor.",
            self.bindings.confirm
        ));
        None
    }

    fn refuse_move(&mut self, ctx: &mut DecisionContext<'_>) {
        self.energy = 0;
        ctx.outbox.info("You cannot move that way.");
    }

    fn toggle_run_mode(&mut self, ctx: &mut DecisionContext<'_>) -> Result<(), BrainError> {
        if self.run_mode {
            self.leave_run_mode(ctx);
            return Ok(());
        }

        let me = ctx.actor(self.actor)?;
        self.run_mode = true;
        self.base_speed = me.speed;
        self.energy = ctx.energy(EnergyTier::Run);
        let speed = ctx.config.run_speed(me.speed);
        tracing::debug!("player {} starts running at speed {}", me.id, speed);
        ctx.outbox.request(WorldRequest::SetSpeed {
            actor: me.id,
            speed,
        });
        Ok(())
    }

    /// Restores the snapshotted speed if running, and the default cost.
    fn leave_run_mode(&mut self, ctx: &mut DecisionContext<'_>) {
        if self.run_mode {
            self.run_mode = false;
            ctx.outbox.request(WorldRequest::SetSpeed {
                actor: self.actor,
                speed: self.base_speed,
            });
        }
        self.energy = ctx.energy(EnergyTier::Rest);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use game_core::{ActorKind, CellFlags, GameConfig, Position};

    use super::*;
    use crate::brain::testing::{ScriptedDice, StubWorld, actor};
    use crate::brain::{GameMessage, Outbox};

    struct Turn {
        action: Option<Action>,
        energy: u32,
        outbox: Outbox,
    }

    fn press(brain: &mut PlayerBrain, world: &StubWorld, input: PlayerInput) -> Turn {
        let config = GameConfig::default();
        let mut dice = ScriptedDice::default();
        let mut outbox = Outbox::new();
        let mut ctx = DecisionContext::new(world, &config, &mut dice, &mut outbox);
        let action = brain.decide_next_action(input, &mut ctx).unwrap();
        Turn {
            action,
            energy: brain.declared_energy_cost(),
            outbox,
        }
    }

    fn hero_world() -> StubWorld {
        StubWorld::new(6, 6)
            .with_actor(actor(1, ActorKind::Player, 2, 2))
            .with_actor(actor(2, ActorKind::Human, 3, 2))
            .with_actor(actor(3, ActorKind::Demon, 2, 3))
            .with_hostility(EntityId(3), EntityId(1))
            .with_wall(Position::new(1, 1))
    }

    #[test]
    fn free_direction_moves() {
        let world = hero_world();
        let mut brain = PlayerBrain::new(EntityId(1));

        let turn = press(&mut brain, &world, PlayerInput::Key('w'));

        assert_eq!(
            turn.action,
            Some(Action::Move {
                actor: EntityId(1),
                to: Position::new(2, 1)
            })
        );
        assert_eq!(turn.energy, 2);
    }

    #[test]
    fn hostile_neighbour_is_attacked_at_once() {
        let world = hero_world();
        let mut brain = PlayerBrain::new(EntityId(1));

        let turn = press(&mut brain, &world, PlayerInput::Key('x'));

        assert_eq!(
            turn.action,
            Some(Action::Attack {
                actor: EntityId(1),
                target: EntityId(3)
            })
        );
        assert_eq!(turn.energy, 3);
        assert_eq!(brain.state(), InputState::Idle);
    }

    #[test]
    fn peaceful_neighbour_needs_confirmation() {
        let world = hero_world();
        let mut brain = PlayerBrain::new(EntityId(1));

        let prompt = press(&mut brain, &world, PlayerInput::Key('d'));
        assert_eq!(prompt.action, None);
        assert_eq!(prompt.energy, 0);
        assert_eq!(brain.state(), InputState::AwaitingConfirmation);
        assert_eq!(
            prompt.outbox.messages(),
            &[GameMessage::Info(
                "Press 'y' to attack non-hostile actor.".into()
            )]
        );

        let confirmed = press(&mut brain, &world, PlayerInput::Key('y'));
        assert_eq!(
            confirmed.action,
            Some(Action::Attack {
                actor: EntityId(1),
                target: EntityId(2)
            })
        );
        assert_eq!(confirmed.energy, 3);
        assert_eq!(brain.state(), InputState::Idle);
    }

    #[test]
    fn other_key_cancels_confirmation() {
        let world = hero_world();
        let mut brain = PlayerBrain::new(EntityId(1));
        press(&mut brain, &world, PlayerInput::Key('d'));

        let turn = press(&mut brain, &world, PlayerInput::Key('s'));
        assert_eq!(turn.action, Some(Action::Rest { actor: EntityId(1) }));
        assert_eq!(brain.state(), InputState::Idle);

        let stale = press(&mut brain, &world, PlayerInput::Key('y'));
        assert_eq!(stale.action, None);
    }

    #[test]
    fn walls_refuse_movement_for_free() {
        let world = hero_world();
        let mut brain = PlayerBrain::new(EntityId(1));

        let turn = press(&mut brain, &world, PlayerInput::Key('q'));

        assert_eq!(turn.action, None);
        assert_eq!(turn.energy, 0);
        assert_eq!(
            turn.outbox.messages(),
            &[GameMessage::Info("You cannot move that way.".into())]
        );
    }

    #[test]
    fn map_edge_refuses_movement() {
        let world = StubWorld::new(3, 3).with_actor(actor(1, ActorKind::Player, 0, 0));
        let mut brain = PlayerBrain::new(EntityId(1));

        let turn = press(&mut brain, &world, PlayerInput::Key('a'));

        assert_eq!(turn.action, None);
        assert_eq!(turn.energy, 0);
    }

    #[test]
    fn pickup_and_stairs_need_something_underfoot() {
        let world = hero_world();
        let mut brain = PlayerBrain::new(EntityId(1));

        let pickup = press(&mut brain, &world, PlayerInput::Key('.'));
        assert_eq!(pickup.action, None);
        assert_eq!(pickup.energy, 0);
        assert_eq!(
            pickup.outbox.messages(),
            &[GameMessage::Warning("There are no items to pick up.".into())]
        );

        let stairs = press(&mut brain, &world, PlayerInput::Key(','));
        assert_eq!(stairs.action, None);
        assert_eq!(
            stairs.outbox.messages(),
            &[GameMessage::Warning("There are no stairs here.".into())]
        );
    }

    #[test]
    fn items_and_stairs_underfoot_are_used() {
        let world = StubWorld::new(3, 3)
            .with_actor(actor(1, ActorKind::Player, 1, 1))
            .with_flags(Position::new(1, 1), CellFlags::ITEMS | CellFlags::STAIRS);
        let mut brain = PlayerBrain::new(EntityId(1));

        let pickup = press(&mut brain, &world, PlayerInput::Key('.'));
        assert_eq!(
            pickup.action,
            Some(Action::PickUp {
                actor: EntityId(1),
                at: Position::new(1, 1)
            })
        );
        assert_eq!(pickup.energy, 1);

        let stairs = press(&mut brain, &world, PlayerInput::Key(','));
        assert_eq!(stairs.action, Some(Action::UseStairs { actor: EntityId(1) }));
    }

    #[test]
    fn run_mode_scales_and_restores_speed() {
        let world = hero_world();
        let mut brain = PlayerBrain::new(EntityId(1));

        let on = press(&mut brain, &world, PlayerInput::Key('r'));
        assert_eq!(on.action, None);
        assert_eq!(on.energy, 4);
        assert!(brain.is_run_mode_enabled());
        assert_eq!(
            on.outbox.requests(),
            &[WorldRequest::SetSpeed {
                actor: EntityId(1),
                speed: 150
            }]
        );

        // Movement keeps running.
        let step = press(&mut brain, &world, PlayerInput::Key('w'));
        assert!(step.outbox.requests().is_empty());
        assert!(brain.is_run_mode_enabled());

        let rest = press(&mut brain, &world, PlayerInput::Key('s'));
        assert!(!brain.is_run_mode_enabled());
        assert_eq!(
            rest.outbox.requests(),
            &[WorldRequest::SetSpeed {
                actor: EntityId(1),
                speed: 100
            }]
        );
    }

    #[test]
    fn toggling_twice_restores_speed() {
        let world = hero_world();
        let mut brain = PlayerBrain::new(EntityId(1));
        press(&mut brain, &world, PlayerInput::Key('r'));

        let off = press(&mut brain, &world, PlayerInput::Key('r'));

        assert!(!brain.is_run_mode_enabled());
        assert_eq!(off.energy, 1);
        assert_eq!(off.outbox.requests().len(), 1);
    }

    #[test]
    fn gui_commands_end_running() {
        let world = hero_world();
        let mut brain = PlayerBrain::new(EntityId(1));
        press(&mut brain, &world, PlayerInput::Key('r'));

        let missile = press(&mut brain, &world, PlayerInput::Command(PlayerCommand::Missile));
        assert_eq!(missile.action, Some(Action::NoOp { actor: EntityId(1) }));
        assert_eq!(missile.energy, 2);
        assert!(!brain.is_run_mode_enabled());

        let other = press(&mut brain, &world, PlayerInput::Command(PlayerCommand::Other));
        assert_eq!(other.energy, 1);
    }

    #[test]
    fn bound_gui_callback_takes_over_the_key() {
        let world = hero_world();
        let mut brain = PlayerBrain::new(EntityId(1));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        brain.add_gui_callback('i', Box::new(move |key| sink.borrow_mut().push(key)));

        let turn = press(&mut brain, &world, PlayerInput::Key('i'));

        assert_eq!(turn.action, None);
        assert!(turn.outbox.is_empty());
        assert_eq!(*seen.borrow(), vec!['i']);
    }

    #[test]
    fn unbound_key_does_nothing() {
        let world = hero_world();
        let mut brain = PlayerBrain::new(EntityId(1));
        let turn = press(&mut brain, &world, PlayerInput::Key('?'));
        assert_eq!(turn.action, None);
        assert!(turn.outbox.is_empty());
    }
}
