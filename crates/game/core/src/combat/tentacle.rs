//! Tentacle pre-strike.
//!
//! A TENTACLES defender hits an adjacent attacker before the main exchange,
//! using its defense as attack. The strike never draws retaliation.

use std::borrow::Cow;

use crate::config::CombatConfig;
use crate::unit::{StatusEffects, Trait, Unit};

use super::damage::exchange;

/// Resolve the tentacle strike, returning the attacker as it enters the main
/// exchange and the damage the strike dealt.
///
/// - Defender without TENTACLES: unchanged attacker, 0 damage.
/// - Both sides with TENTACLES: no damage, but the attacker is marked
///   TAKES_RETALIATION so the main exchange always counter-strikes.
/// - Attacker out-ranging the defender: unchanged attacker, 0 damage.
/// - Otherwise the defender strikes with `defense * tentacle_multiplier` as
///   attack and the attacker copy loses that many hit points.
pub fn apply_tentacle_damage<'a>(
    attacker: &'a Unit,
    defender: &Unit,
    config: &CombatConfig,
) -> (Cow<'a, Unit>, u32) {
    if !defender.has_trait(Trait::Tentacles) {
        return (Cow::Borrowed(attacker), 0);
    }

    if attacker.has_trait(Trait::Tentacles) {
        let mut marked = attacker.clone();
        marked.absorb_status_effects(StatusEffects::TAKES_RETALIATION);
        return (Cow::Owned(marked), 0);
    }

    if attacker.range() > defender.range() {
        return (Cow::Borrowed(attacker), 0);
    }

    let strike = exchange(
        defender.defense() * config.tentacle_multiplier,
        defender.health_ratio(),
        attacker,
        config,
    );
    let damage = strike.to_defender;

    let mut struck = attacker.clone();
    struck.take_damage(damage);
    (Cow::Owned(struck), damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Fraction;
    use crate::unit::{StatusEffect, UnitStats};

    fn warrior() -> Unit {
        Unit::new(
            UnitStats::new(2, 10, Fraction::from_integer(2), Fraction::from_integer(2))
                .with_traits([Trait::Dash, Trait::Fortify]),
        )
        .unwrap()
    }

    fn archer() -> Unit {
        Unit::new(
            UnitStats::new(3, 10, Fraction::from_integer(2), Fraction::from_integer(1))
                .with_range(2)
                .with_traits([Trait::Dash, Trait::Fortify]),
        )
        .unwrap()
    }

    fn jelly() -> Unit {
        Unit::new(
            UnitStats::new(8, 20, Fraction::from_integer(2), Fraction::from_integer(2))
                .with_movement(2)
                .with_traits([Trait::Tentacles, Trait::Stiff, Trait::Static]),
        )
        .unwrap()
    }

    #[test]
    fn no_tentacles_no_strike() {
        let attacker = warrior();
        let (after, damage) =
            apply_tentacle_damage(&attacker, &warrior(), &CombatConfig::default());
        assert!(matches!(after, Cow::Borrowed(_)));
        assert_eq!(damage, 0);
    }

    #[test]
    fn warrior_is_struck_by_jelly() {
        let attacker = warrior();
        let (after, damage) = apply_tentacle_damage(&attacker, &jelly(), &CombatConfig::default());
        assert_eq!(damage, 5);
        assert_eq!(after.current_hp(), 5);
        assert_eq!(attacker.current_hp(), 10);
    }

    #[test]
    fn jelly_against_jelly_forces_retaliation() {
        let attacker = jelly();
        let (after, damage) = apply_tentacle_damage(&attacker, &jelly(), &CombatConfig::default());
        assert_eq!(damage, 0);
        assert!(after.has_status(StatusEffect::TakesRetaliation));
        assert_eq!(after.current_hp(), 20);
    }

    #[test]
    fn archer_out_of_reach() {
        let attacker = archer();
        let (after, damage) = apply_tentacle_damage(&attacker, &jelly(), &CombatConfig::default());
        assert_eq!(damage, 0);
        assert_eq!(*after, attacker);
    }

    #[test]
    fn multiplier_scales_the_strike() {
        let config = CombatConfig::default().with_tentacle_multiplier(Fraction::from_integer(2));
        let attacker = warrior();
        // 4 / (4 + 2) * 4 * 4.5 = 12, capped by the warrior's 10 hp
        let (after, damage) = apply_tentacle_damage(&attacker, &jelly(), &config);
        assert_eq!(damage, 12);
        assert_eq!(after.current_hp(), 0);
    }
}
