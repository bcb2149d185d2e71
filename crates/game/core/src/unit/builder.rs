//! Fluent construction of customized units.

use super::{StatusEffect, Trait, TraitSet, Unit, UnitError, UnitStats};
use crate::config::Fraction;

/// Builder for constructing units.
///
/// Stat and trait edits change the underlying [`UnitStats`]. Status effects
/// are recorded in call order and applied through
/// [`Unit::add_status_effect`] on [`build`](Self::build), so the exclusion
/// rules behave exactly as on a live unit. An explicit current hit point value
/// is applied last, after any veteran promotion.
#[derive(Clone, Debug)]
pub struct UnitBuilder {
    stats: UnitStats,
    effects: Vec<StatusEffect>,
    current_hp: Option<u32>,
}

impl UnitBuilder {
    /// Starts from a catalog record.
    pub fn from_stats(stats: UnitStats) -> Self {
        Self {
            stats,
            effects: Vec::new(),
            current_hp: None,
        }
    }

    // ========================================================================
    // Stats
    // ========================================================================

    pub fn cost(mut self, cost: u32) -> Self {
        self.stats.cost = cost;
        self
    }

    /// Sets the base max hit points. Does not touch an explicit current hp.
    pub fn max_hp(mut self, max_hp: u32) -> Self {
        self.stats.max_hp = max_hp;
        self
    }

    /// Sets current hit points; defaults to max hit points when never called.
    pub fn current_hp(mut self, hp: u32) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn attack(mut self, attack: impl Into<Fraction>) -> Self {
        self.stats.attack = attack.into();
        self
    }

    pub fn defense(mut self, defense: impl Into<Fraction>) -> Self {
        self.stats.defense = defense.into();
        self
    }

    pub fn movement(mut self, movement: u32) -> Self {
        self.stats.movement = movement;
        self
    }

    pub fn range(mut self, range: u32) -> Self {
        self.stats.range = range;
        self
    }

    // ========================================================================
    // Traits
    // ========================================================================

    pub fn add_trait(mut self, trait_kind: Trait) -> Self {
        self.stats.traits.insert(trait_kind.flag());
        self
    }

    pub fn add_traits(mut self, traits: impl Into<TraitSet>) -> Self {
        self.stats.traits.insert(traits.into());
        self
    }

    pub fn remove_trait(mut self, trait_kind: Trait) -> Self {
        self.stats.traits.remove(trait_kind.flag());
        self
    }

    // ========================================================================
    // Status effects
    // ========================================================================

    pub fn add_status_effect(mut self, effect: StatusEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn add_status_effects(mut self, effects: impl IntoIterator<Item = StatusEffect>) -> Self {
        self.effects.extend(effects);
        self
    }

    /// Drops every pending occurrence of an effect.
    pub fn remove_status_effect(mut self, effect: StatusEffect) -> Self {
        self.effects.retain(|e| *e != effect);
        self
    }

    pub fn veteran(self) -> Self {
        self.add_status_effect(StatusEffect::Veteran)
    }

    pub fn boosted(self) -> Self {
        self.add_status_effect(StatusEffect::Boosted)
    }

    pub fn poisoned(self) -> Self {
        self.add_status_effect(StatusEffect::Poisoned)
    }

    pub fn fortified(self) -> Self {
        self.add_status_effect(StatusEffect::Fortified)
    }

    pub fn walled(self) -> Self {
        self.add_status_effect(StatusEffect::Walled)
    }

    pub fn frozen(self) -> Self {
        self.add_status_effect(StatusEffect::Frozen)
    }

    pub fn takes_retaliation(self) -> Self {
        self.add_status_effect(StatusEffect::TakesRetaliation)
    }

    pub fn splashing(self) -> Self {
        self.add_status_effect(StatusEffect::Splashing)
    }

    pub fn exploding(self) -> Self {
        self.add_status_effect(StatusEffect::Exploding)
    }

    /// Builds the unit.
    ///
    /// # Errors
    ///
    /// - [`UnitError::InvalidState`] for zero max hit points or an explicit
    ///   current hit point value of zero
    /// - [`UnitError::InvalidEffect`] for an effect the unit's traits forbid
    pub fn build(self) -> Result<Unit, UnitError> {
        let mut unit = Unit::new(self.stats)?;

        for effect in self.effects {
            unit.add_status_effect(effect)?;
        }

        if let Some(hp) = self.current_hp {
            if hp == 0 {
                return Err(UnitError::InvalidState {
                    reason: "current hit points must be positive",
                });
            }
            unit.set_current_hp(hp);
        }

        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::StatusEffects;

    fn warrior() -> UnitBuilder {
        UnitBuilder::from_stats(
            UnitStats::new(2, 10, Fraction::from_integer(2), Fraction::from_integer(2))
                .with_traits([Trait::Dash, Trait::Fortify]),
        )
    }

    #[test]
    fn modifications_apply_to_stats() {
        let unit = warrior()
            .cost(0)
            .attack(Fraction::from_integer(3))
            .defense(Fraction::from_integer(1))
            .movement(2)
            .range(2)
            .poisoned()
            .add_status_effects([StatusEffect::Frozen, StatusEffect::Veteran])
            .add_trait(Trait::Freeze)
            .add_traits([Trait::Stiff, Trait::Drench])
            .remove_trait(Trait::Dash)
            .build()
            .unwrap();

        assert_eq!(unit.cost(), 0);
        assert_eq!(unit.attack(), Fraction::from_integer(3));
        assert_eq!(unit.defense(), Fraction::from_integer(1));
        assert_eq!(unit.movement(), 2);
        assert_eq!(unit.range(), 2);
        assert_eq!(
            unit.status_effects(),
            StatusEffects::POISONED | StatusEffects::FROZEN | StatusEffects::VETERAN
        );
        assert_eq!(
            unit.traits(),
            TraitSet::from([Trait::Freeze, Trait::Stiff, Trait::Drench, Trait::Fortify])
        );
    }

    #[test]
    fn max_hp_resets_default_current_hp() {
        let unit = warrior().max_hp(8).build().unwrap();
        assert_eq!(unit.max_hp(), 8);
        assert_eq!(unit.current_hp(), 8);
    }

    #[test]
    fn explicit_current_hp() {
        let unit = warrior().current_hp(8).build().unwrap();
        assert_eq!(unit.max_hp(), 10);
        assert_eq!(unit.current_hp(), 8);
    }

    #[test]
    fn current_hp_above_max_promotes() {
        let unit = warrior().current_hp(15).build().unwrap();
        assert_eq!(unit.max_hp(), 15);
        assert!(unit.has_status(StatusEffect::Veteran));
        assert_eq!(unit.current_hp(), 15);
    }

    #[test]
    fn veteran_heals_unless_hp_given() {
        let unit = warrior().veteran().build().unwrap();
        assert_eq!(unit.current_hp(), 15);

        let unit = warrior().current_hp(8).veteran().build().unwrap();
        assert_eq!(unit.max_hp(), 15);
        assert_eq!(unit.current_hp(), 8);
    }

    #[test]
    fn veteran_twice_is_idempotent() {
        let unit = warrior().current_hp(15).veteran().build().unwrap();
        assert_eq!(unit.max_hp(), 15);
        assert_eq!(unit.current_hp(), 15);
    }

    #[test]
    fn removed_effects_are_never_applied() {
        let unit = warrior()
            .veteran()
            .remove_status_effect(StatusEffect::Veteran)
            .build()
            .unwrap();
        assert_eq!(unit.max_hp(), 10);
        assert!(unit.status_effects().is_empty());
    }

    #[test]
    fn zero_current_hp_is_rejected() {
        assert!(matches!(
            warrior().current_hp(0).build(),
            Err(UnitError::InvalidState { .. })
        ));
    }

    #[test]
    fn forbidden_effect_fails_the_build() {
        let result = warrior().add_trait(Trait::Static).veteran().build();
        assert!(matches!(result, Err(UnitError::InvalidEffect { .. })));
    }
}
