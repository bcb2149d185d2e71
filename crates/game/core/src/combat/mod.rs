//! Combat resolution system.
//!
//! Pure functions over unit snapshots. Everything is deterministic and exact:
//! forces are [`Fraction`](crate::Fraction)s and only the final damage is
//! rounded.
//!
//! # Core Functions
//!
//! - `calculate_damage`: the force-share formula for one exchange
//! - `apply_tentacle_damage`: pre-emptive strike of a TENTACLES defender
//! - `calculate_status_effects`: effects inflicted by an exchange
//! - `single_combat`: one complete exchange, retaliation included
//! - `multi_combat`: attackers folded over defenders, defenders mutated
//!
//! The `*_with` variants take an explicit [`CombatConfig`](crate::CombatConfig).

pub mod damage;
pub mod multi;
pub mod result;
pub mod single;
pub mod status;
pub mod tentacle;

#[cfg(test)]
pub(crate) mod fixtures;

pub use damage::{calculate_damage, round_away_from_zero};
pub use multi::{multi_combat, multi_combat_with};
pub use result::{CombatResult, DamageResult, MultiCombatResult, StatusEffectResult, UnitResult};
pub use single::{single_combat, single_combat_with, takes_retaliation};
pub use status::calculate_status_effects;
pub use tentacle::apply_tentacle_damage;
