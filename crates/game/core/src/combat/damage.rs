//! Damage formula for one exchange.

use num_rational::Ratio;

use crate::config::{CombatConfig, Fraction};
use crate::unit::{StatusEffects, Unit};

use super::result::DamageResult;

/// Calculate the damage both sides deal in one exchange.
///
/// # Formula
///
/// ```text
/// attack_force  = attacker.attack * attacker.health_ratio
/// defense_force = defender.defense * defender.health_ratio * defender.defense_bonus
/// total         = attack_force + defense_force
///
/// to_defender = round(attack_force  / total * attacker.attack  * damage_scale)
/// to_attacker = round(defense_force / total * defender.defense * damage_scale)
/// ```
///
/// `round` sends exact halves away from zero. A SPLASHING or EXPLODING
/// attacker deals half of its rounded damage (floor division).
///
/// Retaliation is not considered here: `to_attacker` is what the defender
/// *would* deal if it strikes back.
pub fn calculate_damage(attacker: &Unit, defender: &Unit, config: &CombatConfig) -> DamageResult {
    let mut damage = exchange(
        attacker.attack(),
        attacker.health_ratio(),
        defender,
        config,
    );

    if attacker
        .status_effects()
        .intersects(StatusEffects::SPLASHING | StatusEffects::EXPLODING)
    {
        damage.to_defender /= 2;
    }

    damage
}

/// Evaluates the formula with an explicit attack value for the striking side.
///
/// The tentacle pre-strike uses this with the defender's defense standing in
/// as attack.
pub(crate) fn exchange(
    attack: Fraction,
    health_ratio: Fraction,
    defender: &Unit,
    config: &CombatConfig,
) -> DamageResult {
    let defense = widen(defender.defense());
    let attack = widen(attack);
    let scale = widen(config.damage_scale);

    let attack_force = attack * widen(health_ratio);
    let defense_force = defense * widen(defender.health_ratio()) * widen(defender.defense_bonus());
    let total = attack_force + defense_force;

    if total == Wide::from_integer(0) {
        return DamageResult::default();
    }

    let to_defender = attack_force / total * attack * scale;
    let to_attacker = defense_force / total * defense * scale;

    DamageResult::new(round_wide(to_attacker), round_wide(to_defender))
}

/// Intermediate products of two bounded units need more than 64 bits.
type Wide = Ratio<i128>;

fn widen(value: Fraction) -> Wide {
    Ratio::new_raw(i128::from(*value.numer()), i128::from(*value.denom()))
}

fn round_wide(value: Wide) -> u32 {
    let rounded = value.round().to_integer();
    u32::try_from(rounded.max(0)).unwrap_or(u32::MAX)
}

/// Round to the nearest integer; exact halves go away from zero.
///
/// Negative values cannot come out of well-formed units and clamp to zero.
pub fn round_away_from_zero(value: Fraction) -> u32 {
    round_wide(widen(value))
}
