//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Fields missing from the file keep their [`GameConfig::default`] value.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(0.0..=1.0).contains(&config.summon_probability) {
            anyhow::bail!(
                "summon_probability must lie in [0, 1], got {}",
                config.summon_probability
            );
        }
        if config.run_speed_percent == 0 {
            anyhow::bail!("run_speed_percent must be positive");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_energy_table_keeps_other_tiers() {
        let config = ConfigLoader::parse(
            r#"
            max_summons = 3

            [energy]
            attack = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.max_summons, 3);
        assert_eq!(config.energy.attack, 5);
        assert_eq!(config.energy.movement, 2);
        assert_eq!(config.run_speed_percent, 150);
    }

    #[test]
    fn probabilities_out_of_range_are_rejected() {
        let err = ConfigLoader::parse("summon_probability = 1.5").unwrap_err();
        assert!(err.to_string().contains("summon_probability"));
    }
}
