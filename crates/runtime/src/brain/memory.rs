//! Per-actor memory of hostility and communication.
//!
//! Hostility is monotonic: there is no way to forget an enemy. Learning a new
//! personal enemy invalidates every past communication, since the intel
//! shared earlier no longer covers it.

use game_core::{ActorKind, ActorView, EntityId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    /// Personal enemies, in the order they were learned.
    enemies: Vec<EntityId>,
    /// Kinds that are hostile as a whole.
    enemy_kinds: Vec<ActorKind>,
    /// Actors this memory's owner has already briefed.
    communications: Vec<EntityId>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a whole kind as hostile. Idempotent.
    pub fn add_enemy_kind(&mut self, kind: ActorKind) {
        if !self.enemy_kinds.contains(&kind) {
            self.enemy_kinds.push(kind);
        }
    }

    /// Marks `actor` as a personal enemy.
    ///
    /// Does nothing when the actor is already hostile, by id or by kind.
    /// Otherwise the communication history is cleared. Returns whether the
    /// actor was newly added.
    pub fn add_enemy(&mut self, actor: &ActorView) -> bool {
        if self.is_enemy(actor) {
            return false;
        }
        self.enemies.push(actor.id);
        self.communications.clear();
        true
    }

    pub fn is_enemy(&self, actor: &ActorView) -> bool {
        self.enemies.contains(&actor.id) || self.enemy_kinds.contains(&actor.kind)
    }

    pub fn enemies(&self) -> &[EntityId] {
        &self.enemies
    }

    pub fn enemy_kinds(&self) -> &[ActorKind] {
        &self.enemy_kinds
    }

    /// Records that `actor` was briefed. Idempotent.
    pub fn add_communication_with(&mut self, actor: EntityId) {
        if !self.has_communicated_with(actor) {
            self.communications.push(actor);
        }
    }

    pub fn has_communicated_with(&self, actor: EntityId) -> bool {
        self.communications.contains(&actor)
    }
}
