//! Combat configuration loader.

use std::path::Path;

use polycalc_core::{CombatConfig, fraction_in_bounds};

use crate::loaders::{LoadResult, read_file, reduced};

/// Loader for [`CombatConfig`] from TOML files.
///
/// Fractions are written as `[numerator, denominator]`; missing keys keep
/// their defaults.
///
/// ```toml
/// damage_scale = [9, 2]
/// tentacle_multiplier = [2, 1]
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let raw: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        for (key, value) in [
            ("damage_scale", raw.damage_scale),
            ("tentacle_multiplier", raw.tentacle_multiplier),
        ] {
            if !fraction_in_bounds(value) {
                anyhow::bail!(
                    "{} must be non-negative with terms up to {}",
                    key,
                    CombatConfig::MAX_FRACTION_TERM
                );
            }
        }

        Ok(CombatConfig::new()
            .with_damage_scale(reduced(raw.damage_scale))
            .with_tentacle_multiplier(reduced(raw.tentacle_multiplier)))
    }
}
