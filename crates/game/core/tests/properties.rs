use polycalc_core::{
    Fraction, StatusEffect, StatusEffects, TraitSet, Unit, UnitStats, multi_combat, single_combat,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn fraction() -> impl Strategy<Value = Fraction> {
    (0i64..=10, 1i64..=2).prop_map(|(numer, denom)| Fraction::new(numer, denom))
}

fn effects() -> impl Strategy<Value = Vec<StatusEffect>> {
    prop::collection::vec(prop::sample::select(StatusEffect::iter().collect::<Vec<_>>()), 0..6)
}

prop_compose! {
    fn unit()(
        cost in 0u32..20,
        max_hp in 1u32..=40,
        attack in fraction(),
        defense in fraction(),
        range in 0u32..=3,
        trait_bits in any::<u32>(),
        effects in effects(),
        damage in 0u32..=45,
    ) -> Unit {
        let stats = UnitStats::new(cost, max_hp, attack, defense)
            .with_range(range)
            .with_traits(TraitSet::from_bits_truncate(trait_bits));
        let mut unit = Unit::new(stats).unwrap();
        for effect in effects {
            // Effects the traits forbid are simply not applied.
            let _ = unit.add_status_effect(effect);
        }
        unit.take_damage(damage.min(unit.current_hp().saturating_sub(1)));
        unit
    }
}

proptest! {
    #[test]
    fn single_combat_is_deterministic(attacker in unit(), defender in unit()) {
        let first = single_combat(&attacker, &defender);
        let second = single_combat(&attacker.clone(), &defender.clone());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn at_most_one_defense_bonus(mut target in unit(), more in effects()) {
        for effect in more {
            let _ = target.add_status_effect(effect);
        }
        let bonuses = target.status_effects()
            & (StatusEffects::POISONED | StatusEffects::WALLED | StatusEffects::FORTIFIED);
        prop_assert!(bonuses.bits().count_ones() <= 1);
    }

    #[test]
    fn hit_points_stay_in_range(mut target in unit(), hp in 0u32..100, damage in 0u32..100) {
        target.set_current_hp(hp);
        prop_assert!(target.current_hp() <= target.max_hp());

        target.take_damage(damage);
        prop_assert!(target.current_hp() <= target.max_hp());
        prop_assert_eq!(target.is_alive(), target.current_hp() > 0);
    }

    #[test]
    fn multi_combat_applies_exactly_the_reported_damage(
        attackers in prop::collection::vec(unit(), 0..5),
        defenders in prop::collection::vec(unit(), 0..4),
    ) {
        let before: Vec<u32> = defenders.iter().map(Unit::current_hp).collect();
        let mut live = defenders.clone();

        let result = multi_combat(&attackers, &mut live);

        prop_assert_eq!(result.attackers.len(), attackers.len());
        prop_assert!(result.defenders.len() <= defenders.len());
        if !defenders.is_empty() {
            prop_assert!(!result.defenders.is_empty());
        }

        for (index, engaged) in result.defenders.iter().enumerate() {
            prop_assert_eq!(
                live[index].current_hp(),
                before[index].saturating_sub(engaged.damage)
            );
        }
        for index in result.defenders.len()..defenders.len() {
            prop_assert_eq!(&live[index], &defenders[index]);
        }
    }
}
