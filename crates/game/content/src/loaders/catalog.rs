//! Custom unit catalog loader.

use std::path::Path;

use polycalc_core::{Unit, UnitStats};
use ron::extensions::Extensions;

use crate::catalog::UnitCatalog;
use crate::loaders::{LoadResult, read_file, reduced};

/// Loader for custom unit kinds from RON files.
///
/// RON format: `Vec<(String, UnitStats)>`. Fractions are `(numer, denom)`
/// tuples and traits use the bitflags text form. Newtype wrappers are
/// unwrapped, so `traits` is written as a bare string.
///
/// ```ron
/// [
///     ("brute", (
///         cost: 4,
///         max_hp: 25,
///         attack: (3, 1),
///         defense: (5, 2),
///         traits: "DASH | FORTIFY",
///     )),
/// ]
/// ```
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load custom units into a catalog that also knows every built-in kind.
    pub fn load(path: &Path) -> LoadResult<UnitCatalog> {
        let mut catalog = UnitCatalog::new();
        Self::load_into(path, &mut catalog)?;
        Ok(catalog)
    }

    /// Load custom units into an existing catalog.
    ///
    /// Returns the number of entries registered.
    pub fn load_into(path: &Path, catalog: &mut UnitCatalog) -> LoadResult<usize> {
        let content = read_file(path)?;
        let entries: Vec<(String, UnitStats)> = ron::Options::default()
            .with_default_extension(Extensions::UNWRAP_NEWTYPES)
            .from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        let count = entries.len();
        for (name, mut stats) in entries {
            // Reject entries that could never become a unit.
            Unit::new(stats.clone())
                .map_err(|e| anyhow::anyhow!("Invalid unit '{}': {}", name, e))?;
            stats.attack = reduced(stats.attack);
            stats.defense = reduced(stats.defense);
            catalog.register(name, stats);
        }

        tracing::debug!(count, path = %path.display(), "loaded custom units");
        Ok(count)
    }
}
