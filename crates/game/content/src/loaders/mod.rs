//! Content loaders for reading unit data and combat settings from files.
//!
//! - [`CatalogLoader`]: custom unit kinds from RON
//! - [`ConfigLoader`]: [`CombatConfig`](polycalc_core::CombatConfig) from TOML

pub mod catalog;
pub mod config;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;

use std::path::Path;

use polycalc_core::Fraction;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Normalises a deserialized fraction.
///
/// Deserialized ratios are not reduced and may carry the sign on the
/// denominator.
pub(crate) fn reduced(value: Fraction) -> Fraction {
    Fraction::new(*value.numer(), *value.denom())
}
