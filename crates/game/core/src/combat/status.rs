//! Status effects inflicted by an exchange.

use crate::unit::{StatusEffect, StatusEffects, Trait, Unit};

use super::result::StatusEffectResult;

/// Determine which status effects an exchange inflicts.
///
/// Each rule is independent:
/// - retaliating POISON defender poisons the attacker
/// - POISON attacker poisons the defender
/// - FREEZE attacker freezes the defender
/// - CONVERT attacker converts the defender
/// - EXPLODING attacker poisons the defender
///
/// Only the first rule depends on `takes_retaliation`; freezing and
/// converting never happen on the counter-strike.
pub fn calculate_status_effects(
    attacker: &Unit,
    defender: &Unit,
    takes_retaliation: bool,
) -> StatusEffectResult {
    let mut result = StatusEffectResult::default();

    if takes_retaliation && defender.has_trait(Trait::Poison) {
        result.to_attacker |= StatusEffects::POISONED;
    }

    if attacker.has_trait(Trait::Poison) || attacker.has_status(StatusEffect::Exploding) {
        result.to_defender |= StatusEffects::POISONED;
    }

    if attacker.has_trait(Trait::Freeze) {
        result.to_defender |= StatusEffects::FROZEN;
    }

    if attacker.has_trait(Trait::Convert) {
        result.to_defender |= StatusEffects::CONVERTED;
    }

    result
}
