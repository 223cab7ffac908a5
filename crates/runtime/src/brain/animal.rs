use game_core::{ActorKind, ActorView, EntityId};

use super::{BrainCore, BrainStrategy};

/// Kinds animals and demons are born hostile to.
const INNATE_ENEMIES: [ActorKind; 2] = [ActorKind::Player, ActorKind::Human];

/// Hostility comes from memory alone; the player is hostile only through its
/// kind tag.
#[derive(Clone, Debug)]
pub struct AnimalBrain {
    core: BrainCore,
}

impl AnimalBrain {
    pub fn new(actor: EntityId) -> Self {
        Self {
            core: BrainCore::new(actor).with_enemy_kinds(INNATE_ENEMIES),
        }
    }
}

impl BrainStrategy for AnimalBrain {
    fn core(&self) -> &BrainCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BrainCore {
        &mut self.core
    }

    fn is_hostile(&self, occupant: &ActorView) -> bool {
        self.core.memory().is_enemy(occupant)
    }
}

#[derive(Clone, Debug)]
pub struct DemonBrain {
    core: BrainCore,
}

impl DemonBrain {
    pub fn new(actor: EntityId) -> Self {
        Self {
            core: BrainCore::new(actor).with_enemy_kinds(INNATE_ENEMIES),
        }
    }
}

impl BrainStrategy for DemonBrain {
    fn core(&self) -> &BrainCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BrainCore {
        &mut self.core
    }

    fn is_hostile(&self, occupant: &ActorView) -> bool {
        self.core.memory().is_enemy(occupant)
    }
}
