//! Human: fights demons, but first tells its friends about them.
//!
//! Every turn the human draws once. A high draw (or having nobody new to talk
//! to) favours the fight; a low draw sends the human's enemy list to the first
//! friendly actor in sight. Each friend is briefed at most once until the
//! human learns a new enemy, which resets its communication history.

use game_core::{Action, ActorKind, ActorView, CellView, Communication, EnergyTier, EntityId};

use super::{BrainCore, BrainError, BrainStrategy, DecisionContext};

#[derive(Clone, Debug)]
pub struct HumanBrain {
    core: BrainCore,
}

impl HumanBrain {
    pub fn new(actor: EntityId) -> Self {
        Self {
            core: BrainCore::new(actor).with_enemy_kinds([ActorKind::Demon]),
        }
    }

    /// First visible actor, other than this one, not regarded as hostile.
    pub fn find_friend(&self, ctx: &DecisionContext<'_>, seen: &[CellView]) -> Option<ActorView> {
        let own = self.core.actor();
        seen.iter()
            .filter_map(|cell| ctx.primary_occupant(cell))
            .find(|occupant| occupant.id != own && !self.is_hostile(occupant))
    }
}

impl BrainStrategy for HumanBrain {
    fn core(&self) -> &BrainCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BrainCore {
        &mut self.core
    }

    /// Humans are not born hostile to the player; only memory counts.
    fn is_hostile(&self, occupant: &ActorView) -> bool {
        self.core.memory().is_enemy(occupant)
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

        let enemy_cell = self.find_enemy_cell(ctx, &seen);
        let friend = self.find_friend(ctx, &seen);

        let mut draw = ctx.dice.unit();
        let untold_friend = friend
            .filter(|friend| !self.core.memory().has_communicated_with(friend.id));
        if untold_friend.is_none() {
            draw = 1.0;
        }

        if let Some(enemy_cell) = enemy_cell {
            if draw > ctx.config.communicate_threshold {
                return self.action_toward_enemy(ctx, enemy_cell);
            }
        }

        // An already pending message means the friend has news to digest; the
        // briefing is retried on a later turn.
        if let Some(friend) = untold_friend.filter(|friend| !friend.has_pending_communication) {
            let me = self.core.actor();
            let message = Communication::enemies(self.core.memory().enemies().to_vec());
            self.core.memory_mut().add_communication_with(friend.id);
            self.core.declare(ctx.energy(EnergyTier::Rest));
            tracing::info!(
                "actor {} briefs {} about {} enemies",
                me,
                friend.id,
                message.enemies.len()
            );
            return Ok(Some(Action::Communicate {
                actor: me,
                target: friend.id,
                message,
            }));
        }

        self.explore(ctx, &seen)
    }
}

#[cfg(test)]
mod tests {
    use game_core::GameConfig;

    use super::*;
    use crate::brain::Outbox;
    use crate::brain::testing::{ScriptedDice, StubWorld, actor};

    fn decide(brain: &mut HumanBrain, world: &StubWorld, draws: &[f64]) -> Option<Action> {
        let config = GameConfig::default();
        let mut dice = ScriptedDice::units(draws.iter().copied());
        let mut outbox = Outbox::new();
        let mut ctx = DecisionContext::new(world, &config, &mut dice, &mut outbox);
        brain.decide_next_action(&mut ctx).unwrap()
    }

    fn village() -> StubWorld {
        StubWorld::new(10, 10)
            .with_actor(actor(1, ActorKind::Human, 4, 4))
            .with_actor(actor(2, ActorKind::Human, 2, 2))
            .with_actor(actor(3, ActorKind::Demon, 5, 4))
    }

    #[test]
    fn low_draw_briefs_the_friend() {
        let world = village();
        let mut brain = HumanBrain::new(EntityId(1));
        let goblin = actor(9, ActorKind::Animal, 0, 0);
        brain.core_mut().memory_mut().add_enemy(&goblin);

        let action = decide(&mut brain, &world, &[0.2]);

        assert_eq!(
            action,
            Some(Action::Communicate {
                actor: EntityId(1),
                target: EntityId(2),
                message: Communication::enemies(vec![EntityId(9)]),
            })
        );
        assert!(brain.core().memory().has_communicated_with(EntityId(2)));
        assert_eq!(brain.core().declared_energy_cost(), 1);
    }

    #[test]
    fn high_draw_attacks_the_demon() {
        let world = village();
        let mut brain = HumanBrain::new(EntityId(1));

        assert_eq!(
            decide(&mut brain, &world, &[0.7]),
            Some(Action::Attack {
                actor: EntityId(1),
                target: EntityId(3)
            })
        );
    }

    #[test]
    fn briefed_friend_forces_the_attack() {
        let world = village();
        let mut brain = HumanBrain::new(EntityId(1));
        brain.core_mut().memory_mut().add_communication_with(EntityId(2));

        let action = decide(&mut brain, &world, &[0.1]);

        assert!(action.is_some_and(|action| action.is_attack()));
    }

    #[test]
    fn lone_human_attacks_regardless_of_draw() {
        let world = StubWorld::new(6, 6)
            .with_actor(actor(1, ActorKind::Human, 2, 2))
            .with_actor(actor(3, ActorKind::Demon, 3, 3));
        let mut brain = HumanBrain::new(EntityId(1));

        let action = decide(&mut brain, &world, &[0.0]);

        assert!(action.is_some_and(|action| action.is_attack()));
    }

    #[test]
    fn friend_with_pending_news_is_not_marked() {
        let mut busy = actor(2, ActorKind::Human, 2, 2);
        busy.has_pending_communication = true;
        let world = StubWorld::new(10, 10)
            .with_actor(actor(1, ActorKind::Human, 4, 4))
            .with_actor(busy);
        let mut brain = HumanBrain::new(EntityId(1));

        let action = decide(&mut brain, &world, &[0.1]);

        assert!(action.is_some_and(|action| action.is_movement()));
        assert!(!brain.core().memory().has_communicated_with(EntityId(2)));
    }

    #[test]
    fn briefed_friend_without_enemy_means_exploring() {
        let world = StubWorld::new(10, 10)
            .with_actor(actor(1, ActorKind::Human, 4, 4))
            .with_actor(actor(2, ActorKind::Human, 2, 2));
        let mut brain = HumanBrain::new(EntityId(1));
        brain.core_mut().memory_mut().add_communication_with(EntityId(2));

        let action = decide(&mut brain, &world, &[0.9]);

        assert!(action.is_some_and(|action| action.is_movement()));
    }

    #[test]
    fn fresh_human_leaves_an_adjacent_player_alone() {
        let world = StubWorld::new(8, 8)
            .with_actor(actor(1, ActorKind::Human, 3, 3))
            .with_actor(actor(2, ActorKind::Player, 3, 4));
        let mut brain = HumanBrain::new(EntityId(1));

        let action = decide(&mut brain, &world, &[0.9]);

        assert!(!action.as_ref().is_some_and(Action::is_attack));
    }

    #[test]
    fn player_can_be_briefed_as_a_friend() {
        let world = StubWorld::new(10, 10)
            .with_actor(actor(1, ActorKind::Human, 4, 4))
            .with_actor(actor(2, ActorKind::Player, 1, 1));
        let brain = HumanBrain::new(EntityId(1));
        let config = GameConfig::default();
        let mut dice = ScriptedDice::default();
        let mut outbox = Outbox::new();
        let ctx = DecisionContext::new(&world, &config, &mut dice, &mut outbox);
        let seen = brain.seen_cells(&ctx);

        assert_eq!(brain.find_friend(&ctx, &seen).map(|friend| friend.id), Some(EntityId(2)));
    }

    #[test]
    fn remembered_player_is_attacked() {
        let player = actor(2, ActorKind::Player, 3, 4);
        let world = StubWorld::new(8, 8)
            .with_actor(actor(1, ActorKind::Human, 3, 3))
            .with_actor(player.clone());
        let mut brain = HumanBrain::new(EntityId(1));
        brain.core_mut().memory_mut().add_enemy(&player);

        assert_eq!(
            decide(&mut brain, &world, &[0.9]),
            Some(Action::Attack {
                actor: EntityId(1),
                target: EntityId(2)
            })
        );
    }
}
