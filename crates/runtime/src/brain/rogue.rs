use game_core::{ActorKind, EntityId};

use super::{BrainCore, BrainStrategy};

/// The base strategy: hunts the player and remembered enemies, explores
/// otherwise.
#[derive(Clone, Debug)]
pub struct RogueBrain {
    core: BrainCore,
}

impl RogueBrain {
    pub fn new(actor: EntityId) -> Self {
        Self {
            core: BrainCore::new(actor),
        }
    }

    pub fn with_enemy_kind(mut self, kind: ActorKind) -> Self {
        self.core.memory_mut().add_enemy_kind(kind);
        self
    }
}

impl BrainStrategy for RogueBrain {
    fn core(&self) -> &BrainCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BrainCore {
        &mut self.core
    }
}

/// Behaves exactly like [`RogueBrain`].
#[derive(Clone, Debug)]
pub struct ZombieBrain {
    core: BrainCore,
}

impl ZombieBrain {
    pub fn new(actor: EntityId) -> Self {
        Self {
            core: BrainCore::new(actor),
        }
    }
}

impl BrainStrategy for ZombieBrain {
    fn core(&self) -> &BrainCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BrainCore {
        &mut self.core
    }
}
