use game_core::{Action, CellView, EntityId};

use super::{BrainCore, BrainError, BrainStrategy, DecisionContext};

/// Drifts around forever: never classifies, never fights.
#[derive(Clone, Debug)]
pub struct SpiritBrain {
    core: BrainCore,
}

impl SpiritBrain {
    pub fn new(actor: EntityId) -> Self {
        Self {
            core: BrainCore::new(actor),
        }
    }
}

impl BrainStrategy for SpiritBrain {
    fn core(&self) -> &BrainCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BrainCore {
        &mut self.core
    }

    fn find_enemy_cell<'c>(
        &self,
        _ctx: &DecisionContext<'_>,
        _seen: &'c [CellView],
    ) -> Option<&'c CellView> {
        None
    }

    fn decide_next_action(
        &mut self,
        ctx: &mut DecisionContext<'_>,
    ) -> Result<Option<Action>, BrainError> {
        let seen = self.seen_cells(ctx);
        self.explore(ctx, &seen)
    }
}
