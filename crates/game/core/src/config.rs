use crate::action::EnergyTier;

/// Game configuration constants and tunable parameters.
///
/// Every field has a default, so a config file only needs to name what it
/// changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Energy charged per decision tier.
    pub energy: EnergyTable,

    /// Speed while running, as a percentage of the snapshotted base speed.
    pub run_speed_percent: u32,

    /// Per-turn chance that a summoner with quota left calls for help.
    pub summon_probability: f64,

    /// Summons a single summoner may perform over its lifetime.
    pub max_summons: u32,

    /// A human attacks when its draw exceeds this value, otherwise it talks.
    pub communicate_threshold: f64,

    /// Sight range for actors spawned without one.
    pub default_sight_range: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RUN_SPEED_PERCENT: u32 = 150;
    pub const DEFAULT_SUMMON_PROBABILITY: f64 = 0.2;
    pub const DEFAULT_MAX_SUMMONS: u32 = 20;
    pub const DEFAULT_COMMUNICATE_THRESHOLD: f64 = 0.5;
    pub const DEFAULT_SIGHT_RANGE: u32 = 5;

    pub fn new() -> Self {
        Self {
            energy: EnergyTable::default(),
            run_speed_percent: Self::DEFAULT_RUN_SPEED_PERCENT,
            summon_probability: Self::DEFAULT_SUMMON_PROBABILITY,
            max_summons: Self::DEFAULT_MAX_SUMMONS,
            communicate_threshold: Self::DEFAULT_COMMUNICATE_THRESHOLD,
            default_sight_range: Self::DEFAULT_SIGHT_RANGE,
        }
    }

    pub fn with_max_summons(mut self, max_summons: u32) -> Self {
        self.max_summons = max_summons;
        self
    }

    pub fn with_summon_probability(mut self, summon_probability: f64) -> Self {
        self.summon_probability = summon_probability;
        self
    }

    /// Scales a base speed into the running speed (rounded down).
    pub fn run_speed(&self, base_speed: u32) -> u32 {
        base_speed.saturating_mul(self.run_speed_percent) / 100
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Energy cost of each [`EnergyTier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnergyTable {
    pub rest: u32,
    pub pickup: u32,
    pub movement: u32,
    pub attack: u32,
    pub run: u32,
}

impl EnergyTable {
    pub fn cost(&self, tier: EnergyTier) -> u32 {
        match tier {
            EnergyTier::Rest => self.rest,
            EnergyTier::Pickup => self.pickup,
            EnergyTier::Move => self.movement,
            EnergyTier::Attack => self.attack,
            EnergyTier::Run => self.run,
        }
    }
}

impl Default for EnergyTable {
    fn default() -> Self {
        Self {
            rest: 1,
            pickup: 1,
            movement: 2,
            attack: 3,
            run: 4,
        }
    }
}
