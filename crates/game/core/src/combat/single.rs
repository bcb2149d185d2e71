//! One attacker against one defender.

use crate::config::CombatConfig;
use crate::unit::{StatusEffect, Trait, Unit};

use super::damage::calculate_damage;
use super::result::{CombatResult, DamageResult};
use super::status::calculate_status_effects;
use super::tentacle::apply_tentacle_damage;

/// Resolve one exchange with the default [`CombatConfig`].
pub fn single_combat(attacker: &Unit, defender: &Unit) -> CombatResult {
    single_combat_with(attacker, defender, &CombatConfig::default())
}

/// Resolve one exchange.
///
/// Steps, in order:
/// 1. Tentacle pre-strike against the attacker.
/// 2. Main damage from the (possibly struck) attacker.
/// 3. Retaliation check.
/// 4. Inflicted status effects.
/// 5. Damage to the attacker: tentacle damage plus the counter-strike when
///    retaliation happens. An EXPLODING attacker loses all its hit points
///    instead.
///
/// Neither unit is modified; apply the result to persistent state as needed.
pub fn single_combat_with(attacker: &Unit, defender: &Unit, config: &CombatConfig) -> CombatResult {
    let (striker, tentacle_damage) = apply_tentacle_damage(attacker, defender, config);

    let damage = calculate_damage(&striker, defender, config);
    let retaliates = takes_retaliation(&striker, defender, damage.to_defender);
    let status_effects = calculate_status_effects(&striker, defender, retaliates);

    let to_attacker = if striker.has_status(StatusEffect::Exploding) {
        attacker.current_hp()
    } else if retaliates {
        tentacle_damage + damage.to_attacker
    } else {
        tentacle_damage
    };

    tracing::trace!(
        to_attacker,
        to_defender = damage.to_defender,
        tentacle_damage,
        retaliates,
        "resolved exchange"
    );

    CombatResult {
        damage: DamageResult::new(to_attacker, damage.to_defender),
        status_effects,
    }
}

/// Whether the defender strikes back after taking `to_defender` damage.
///
/// TAKES_RETALIATION forces it. Otherwise the defender must reach the
/// attacker, survive the hit, be able to strike (not STIFF, not FROZEN), and
/// the attacker must not avoid it (SURPRISE, CONVERT, FREEZE).
pub fn takes_retaliation(attacker: &Unit, defender: &Unit, to_defender: u32) -> bool {
    if attacker.has_status(StatusEffect::TakesRetaliation) {
        return true;
    }

    attacker.range() <= defender.range()
        && defender.current_hp() > to_defender
        && !defender.has_trait(Trait::Stiff)
        && !defender.has_status(StatusEffect::Frozen)
        && !attacker.has_trait(Trait::Surprise)
        && !attacker.has_trait(Trait::Convert)
        && !attacker.has_trait(Trait::Freeze)
}
