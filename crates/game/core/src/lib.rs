//! Deterministic combat rules for The Battle of Polytopia.
//!
//! `polycalc-core` models units (stats, traits, status effects) and resolves
//! attacks between them with exact rational arithmetic. It performs no I/O;
//! unit catalogs, abbreviation parsing and file loading live in
//! `polycalc-content`.
//!
//! ```
//! use polycalc_core::{Fraction, Trait, Unit, UnitStats, single_combat};
//!
//! let warrior = UnitStats::new(2, 10, Fraction::from_integer(2), Fraction::from_integer(2))
//!     .with_traits([Trait::Dash, Trait::Fortify]);
//! let attacker = Unit::new(warrior.clone()).unwrap();
//! let defender = Unit::builder(warrior).fortified().build().unwrap();
//!
//! let result = single_combat(&attacker, &defender);
//! assert_eq!(result.damage.to_defender, 4);
//! assert_eq!(result.damage.to_attacker, 5);
//! ```
pub mod combat;
pub mod config;
pub mod error;
pub mod unit;

pub use combat::{
    CombatResult, DamageResult, MultiCombatResult, StatusEffectResult, UnitResult,
    apply_tentacle_damage, calculate_damage, calculate_status_effects, multi_combat,
    multi_combat_with, single_combat, single_combat_with,
};
pub use config::{CombatConfig, Fraction, fraction_in_bounds};
pub use error::{CalcError, ErrorSeverity};
pub use unit::{
    StatusEffect, StatusEffects, Trait, TraitSet, Unit, UnitBuilder, UnitError, UnitStats,
};
