//! Unit catalog, abbreviation parser and data loaders.
//!
//! This crate supplies the data side of combat calculations:
//! - Every unit kind of the reference game with its stats ([`UnitKind`])
//! - Naval units composed with their cargo ([`naval`])
//! - A name → stats registry extensible with custom kinds ([`UnitCatalog`])
//! - The compact unit notation used on the command line ([`parse_unit`])
//! - RON/TOML loaders for custom units and combat settings (`loaders` feature)
//!
//! Combat itself lives in `polycalc-core`.

pub mod catalog;
pub mod parse;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{UnitCatalog, UnitKind, naval};
pub use parse::{ParseError, flag_effect, parse_unit, parse_units};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, LoadResult};
