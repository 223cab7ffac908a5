//! Shared perceive → classify → act machinery.
//!
//! [`BrainStrategy`] carries the whole base behaviour in default methods; a
//! variant embeds a [`BrainCore`] and overrides only the hooks it changes
//! (usually [`BrainStrategy::is_hostile`], occasionally
//! [`BrainStrategy::decide_next_action`]).

use std::collections::HashSet;

use game_core::{Action, ActorKind, ActorView, CellView, EnergyTier, EntityId, Position};

use super::{BrainError, DecisionContext, Memory, PathError, Pathfinder};

/// State every perception brain carries: its actor handle, its memory, the
/// cells it already explored and the energy declared by its last decision.
#[derive(Clone, Debug, Default)]
pub struct BrainCore {
    actor: EntityId,
    memory: Memory,
    explored: HashSet<Position>,
    energy: u32,
}

impl BrainCore {
    pub fn new(actor: EntityId) -> Self {
        Self {
            actor,
            ..Self::default()
        }
    }

    /// Seeds the memory with kinds the brain is born hostile to.
    pub fn with_enemy_kinds(mut self, kinds: impl IntoIterator<Item = ActorKind>) -> Self {
        for kind in kinds {
            self.memory.add_enemy_kind(kind);
        }
        self
    }

    pub fn actor(&self) -> EntityId {
        self.actor
    }

    pub fn set_actor(&mut self, actor: EntityId) {
        self.actor = actor;
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn declared_energy_cost(&self) -> u32 {
        self.energy
    }

    pub fn declare(&mut self, energy: u32) {
        self.energy = energy;
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.explored.contains(&position)
    }

    /// Returns `false` if the cell was already explored.
    pub fn mark_explored(&mut self, position: Position) -> bool {
        self.explored.insert(position)
    }
}

/// Capability set of a perception-driven brain.
pub trait BrainStrategy {
    fn core(&self) -> &BrainCore;

    fn core_mut(&mut self) -> &mut BrainCore;

    /// Picks this turn's action. `Ok(None)` only when nothing is perceived.
    fn decide_next_action(
        &mut self,
        ctx: &mut DecisionContext<'_>,
    ) -> Result<Option<Action>, BrainError> {
        let seen = self.seen_cells(ctx);
        if seen.is_empty() {
            tracing::warn!("actor {} perceives no cells", self.core().actor());
            self.core_mut().declare(0);
            return Ok(None);
        }

        match self.find_enemy_cell(ctx, &seen) {
            Some(enemy_cell) => self.action_toward_enemy(ctx, enemy_cell),
            None => self.explore(ctx, &seen),
        }
    }

    fn seen_cells(&self, ctx: &DecisionContext<'_>) -> Vec<CellView> {
        ctx.world.visible_cells(self.core().actor())
    }

    /// Default rule: the player is always hostile, others only if remembered.
    fn is_hostile(&self, occupant: &ActorView) -> bool {
        occupant.is_player() || self.core().memory().is_enemy(occupant)
    }

    /// First cell in scan order whose primary occupant is hostile.
    fn find_enemy_cell<'c>(
        &self,
        ctx: &DecisionContext<'_>,
        seen: &'c [CellView],
    ) -> Option<&'c CellView> {
        let own = self.core().actor();
        seen.iter().find(|cell| {
            ctx.primary_occupant(cell)
                .is_some_and(|occupant| occupant.id != own && self.is_hostile(&occupant))
        })
    }

    /// Attacks when the target is within combat range, otherwise steps along
    /// the shortest path. A blocked approach still spends a move.
    fn action_toward_enemy(
        &mut self,
        ctx: &mut DecisionContext<'_>,
        enemy_cell: &CellView,
    ) -> Result<Option<Action>, BrainError> {
        let me = ctx.actor(self.core().actor())?;
        let target_position = enemy_cell.position();

        if me.position.chebyshev_distance(target_position) <= me.combat_range {
            if let Some(target) = enemy_cell.first_occupant() {
                tracing::debug!("actor {} attacks {} at {}", me.id, target, target_position);
                self.core_mut().declare(ctx.energy(EnergyTier::Attack));
                return Ok(Some(Action::Attack {
                    actor: me.id,
                    target,
                }));
            }
        }

        let path = self.shortest_path_to(ctx, &me, target_position)?;
        self.core_mut().declare(ctx.energy(EnergyTier::Move));
        match path.get(1) {
            Some(&next) => {
                tracing::debug!("actor {} approaches {} via {}", me.id, target_position, next);
                Ok(Some(Action::Move {
                    actor: me.id,
                    to: next,
                }))
            }
            None => {
                tracing::debug!("actor {} has no path to {}", me.id, target_position);
                Ok(Some(Action::NoOp { actor: me.id }))
            }
        }
    }

    /// Heads for the first unexplored free cell, or wanders to a random seen
    /// cell once everything in sight has been visited.
    fn explore(
        &mut self,
        ctx: &mut DecisionContext<'_>,
        seen: &[CellView],
    ) -> Result<Option<Action>, BrainError> {
        let actor = self.core().actor();
        let fresh = seen
            .iter()
            .find(|cell| cell.is_free() && !self.core().is_explored(cell.position()))
            .map(CellView::position);

        let target = match fresh {
            Some(position) => {
                self.core_mut().mark_explored(position);
                position
            }
            None if seen.is_empty() => {
                self.core_mut().declare(0);
                return Ok(None);
            }
            None => {
                let index = ctx.dice.below(seen.len());
                match seen.get(index) {
                    Some(cell) => cell.position(),
                    None => return Ok(None),
                }
            }
        };

        tracing::debug!("actor {} explores towards {}", actor, target);
        self.core_mut().declare(ctx.energy(EnergyTier::Move));
        Ok(Some(Action::Move { actor, to: target }))
    }

    /// Path from the actor to `to`. The actor's own cell counts as passable.
    fn shortest_path_to(
        &self,
        ctx: &DecisionContext<'_>,
        me: &ActorView,
        to: Position,
    ) -> Result<Vec<Position>, PathError> {
        let own = me.position;
        Pathfinder::new(ctx.world.dimensions())
            .shortest_path(own, to, |position| position == own || ctx.world.is_passable(position))
    }
}
