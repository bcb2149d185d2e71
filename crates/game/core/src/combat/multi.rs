//! Sequences of attackers against sequences of defenders.

use crate::config::CombatConfig;
use crate::unit::Unit;

use super::result::{MultiCombatResult, UnitResult};
use super::single::single_combat_with;

/// Resolve a multi-combat with the default [`CombatConfig`].
pub fn multi_combat(attackers: &[Unit], defenders: &mut [Unit]) -> MultiCombatResult {
    multi_combat_with(attackers, defenders, &CombatConfig::default())
}

/// Resolve attackers in order against the first defender still standing.
///
/// Each exchange is a [`single_combat_with`]; its damage and inflicted
/// effects are applied to the live defender before the next attacker
/// strikes. Once a defender is down the next one is engaged. Attackers left
/// without a defender get an empty [`UnitResult`].
///
/// Attackers are read-only; defenders are mutated in place.
pub fn multi_combat_with(
    attackers: &[Unit],
    defenders: &mut [Unit],
    config: &CombatConfig,
) -> MultiCombatResult {
    let mut result = MultiCombatResult {
        attackers: Vec::with_capacity(attackers.len()),
        defenders: Vec::new(),
    };

    let mut remaining = defenders.iter_mut().enumerate();
    let Some((_, mut defender)) = remaining.next() else {
        result
            .attackers
            .resize(attackers.len(), UnitResult::default());
        return result;
    };
    let mut engaged = UnitResult::default();

    for attacker in attackers {
        if !defender.is_alive() {
            let Some((index, next)) = remaining.next() else {
                break;
            };
            tracing::debug!(defender = index, "engaging next defender");
            result.defenders.push(std::mem::take(&mut engaged));
            defender = next;
        }

        let exchange = single_combat_with(attacker, defender, config);

        result.attackers.push(UnitResult::new(
            exchange.damage.to_attacker,
            exchange.status_effects.to_attacker,
        ));
        engaged.accumulate(
            exchange.damage.to_defender,
            exchange.status_effects.to_defender,
        );

        defender.take_damage(exchange.damage.to_defender);
        defender.absorb_status_effects(exchange.status_effects.to_defender);
    }

    result.defenders.push(engaged);
    result
        .attackers
        .resize(attackers.len(), UnitResult::default());
    result
}
