//! Summoner: calls for help before engaging.
//!
//! Each turn an enemy is in sight, the summoner first tries to summon. A
//! successful summon preempts the attack or approach for that turn. Summons
//! are capped per brain; once the quota is spent the summoner fights like the
//! base strategy.

use game_core::{Action, ActorKind, EnergyTier, EntityId, GameConfig, Position};

use super::{BrainCore, BrainError, BrainStrategy, DecisionContext, WorldRequest};

#[derive(Clone, Debug)]
pub struct SummonerBrain {
    core: BrainCore,
    num_summoned: u32,
    max_summons: u32,
}

impl SummonerBrain {
    pub fn new(actor: EntityId) -> Self {
        Self {
            core: BrainCore::new(actor).with_enemy_kinds([ActorKind::Player]),
            num_summoned: 0,
            max_summons: GameConfig::DEFAULT_MAX_SUMMONS,
        }
    }

    pub fn with_max_summons(mut self, max_summons: u32) -> Self {
        self.max_summons = max_summons;
        self
    }

    pub fn num_summoned(&self) -> u32 {
        self.num_summoned
    }

    pub fn max_summons(&self) -> u32 {
        self.max_summons
    }

    /// Rolls for a summon and, on success, requests an ally in the first free
    /// cell of the surrounding 3×3 block.
    ///
    /// Returns `false` without rolling once the quota is spent.
    pub fn summoned_monster(&mut self, ctx: &mut DecisionContext<'_>) -> Result<bool, BrainError> {
        if self.num_summoned >= self.max_summons {
            return Ok(false);
        }

        let draw = ctx.dice.unit();
        if draw <= 1.0 - ctx.config.summon_probability {
            return Ok(false);
        }

        let me = ctx.actor(self.core.actor())?;
        let Some(at) = first_free_cell_around(ctx, me.position) else {
            tracing::debug!("summoner {} found no room to summon", me.id);
            ctx.outbox
                .info(format!("{} screamed incantation but nothing happened", me.name));
            return Ok(false);
        };

        self.num_summoned += 1;
        tracing::info!(
            "summoner {} summons at {} ({}/{})",
            me.id,
            at,
            self.num_summoned,
            self.max_summons
        );
        ctx.outbox.request(WorldRequest::Summon {
            summoner: me.id,
            at,
        });
        ctx.outbox.info(format!("{} summons some help", me.name));
        Ok(true)
    }
}

fn first_free_cell_around(ctx: &DecisionContext<'_>, center: Position) -> Option<Position> {
    center
        .block_3x3()
        .find(|&position| ctx.world.cell(position).is_some_and(|cell| cell.is_free()))
}

impl BrainStrategy for SummonerBrain {
    fn core(&self) -> &BrainCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BrainCore {
        &mut self.core
    }

    fn decide_next_action(
        &mut self,
        ctx: &mut DecisionContext<'_>,
    ) -> Result<Option<Action>, BrainError> {
        let seen = self.seen_cells(ctx);
        if seen.is_empty() {
            self.core.declare(0);
            return Ok(None);
        }

        match self.find_enemy_cell(ctx, &seen) {
            Some(enemy_cell) => {
                if self.summoned_monster(ctx)? {
                    self.core.declare(ctx.energy(EnergyTier::Rest));
                    Ok(Some(Action::NoOp {
                        actor: self.core.actor(),
                    }))
                } else {
                    self.action_toward_enemy(ctx, enemy_cell)
                }
            }
            None => self.explore(ctx, &seen),
        }
    }
}
