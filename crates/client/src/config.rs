//! Environment-driven settings for the headless simulation.
use std::env;
use std::path::PathBuf;

/// Settings read from `SIM_*` environment variables.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// TOML tuning file; built-in defaults when unset.
    pub config_path: Option<PathBuf>,
    /// RON map file; a small built-in arena when unset.
    pub map_path: Option<PathBuf>,
    pub turns: usize,
    pub seed: u64,
    /// Keys fed to the player brain, cycled.
    pub keys: String,
}

impl SimConfig {
    pub const DEFAULT_TURNS: usize = 50;
    pub const DEFAULT_SEED: u64 = 7;
    pub const DEFAULT_KEYS: &'static str = "ddxxaaww";

    pub fn from_env() -> Self {
        Self {
            config_path: env::var_os("SIM_CONFIG").map(PathBuf::from),
            map_path: env::var_os("SIM_MAP").map(PathBuf::from),
            turns: read_env("SIM_TURNS").unwrap_or(Self::DEFAULT_TURNS),
            seed: read_env("SIM_SEED").unwrap_or(Self::DEFAULT_SEED),
            keys: env::var("SIM_KEYS")
                .ok()
                .filter(|keys| !keys.is_empty())
                .unwrap_or_else(|| Self::DEFAULT_KEYS.to_string()),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
