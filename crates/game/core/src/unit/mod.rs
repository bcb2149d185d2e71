//! Unit model: stats, hit points, traits and status effects.
//!
//! This module contains all types specific to combatants:
//! - UnitStats: Catalog record for one unit kind
//! - Unit: Mutable combatant built from a UnitStats
//! - UnitBuilder: Fluent configuration of a Unit before combat
//! - Traits and status effects
//!
//! # Invariants
//!
//! - `max_hp()` is always positive (checked on construction)
//! - `current_hp()` never exceeds `max_hp()` and never goes below zero
//! - At most one of POISONED / WALLED / FORTIFIED is active

pub mod builder;
pub mod error;
pub mod status;
pub mod traits;

pub use builder::UnitBuilder;
pub use error::UnitError;
pub use status::{StatusEffect, StatusEffects};
pub use traits::{Trait, TraitSet};

use crate::config::{CombatConfig, Fraction, fraction_in_bounds};

/// Stats of one unit kind, as supplied by a unit catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStats {
    /// Cost in stars. Informational only.
    pub cost: u32,
    /// Maximum hit points before veteran promotion.
    pub max_hp: u32,
    pub attack: Fraction,
    pub defense: Fraction,
    #[cfg_attr(feature = "serde", serde(default = "UnitStats::default_movement"))]
    pub movement: u32,
    #[cfg_attr(feature = "serde", serde(default = "UnitStats::default_range"))]
    pub range: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: TraitSet,
}

impl UnitStats {
    /// Create stats with movement 1, range 1 and no traits.
    pub fn new(cost: u32, max_hp: u32, attack: Fraction, defense: Fraction) -> Self {
        Self {
            cost,
            max_hp,
            attack,
            defense,
            movement: Self::default_movement(),
            range: Self::default_range(),
            traits: TraitSet::empty(),
        }
    }

    #[must_use]
    pub fn with_movement(mut self, movement: u32) -> Self {
        self.movement = movement;
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: u32) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_traits(mut self, traits: impl Into<TraitSet>) -> Self {
        self.traits = traits.into();
        self
    }

    const fn default_movement() -> u32 {
        1
    }

    const fn default_range() -> u32 {
        1
    }
}

/// A combatant.
///
/// Stats come from a [`UnitStats`] record and never change; hit points and
/// status effects are the mutable part. Veteran and boost bonuses are derived
/// from the status effects on every read rather than folded into the stats,
/// so removing an effect restores the base value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    stats: UnitStats,
    current_hp: u32,
    status_effects: StatusEffects,
}

impl Unit {
    /// Create a unit at full health with no status effects.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::InvalidState`] if `stats.max_hp` is zero or above
    /// [`CombatConfig::MAX_HIT_POINTS`], or if attack or defense is negative or
    /// has a term above [`CombatConfig::MAX_FRACTION_TERM`].
    pub fn new(stats: UnitStats) -> Result<Self, UnitError> {
        if stats.max_hp == 0 {
            return Err(UnitError::InvalidState {
                reason: "max hit points must be positive",
            });
        }
        if stats.max_hp > CombatConfig::MAX_HIT_POINTS {
            return Err(UnitError::InvalidState {
                reason: "max hit points exceed 1000000",
            });
        }
        if !fraction_in_bounds(stats.attack) || !fraction_in_bounds(stats.defense) {
            return Err(UnitError::InvalidState {
                reason: "attack and defense must be non-negative with terms up to 10000",
            });
        }

        Ok(Self {
            current_hp: stats.max_hp,
            stats,
            status_effects: StatusEffects::empty(),
        })
    }

    /// Returns a builder seeded with the given stats.
    pub fn builder(stats: UnitStats) -> UnitBuilder {
        UnitBuilder::from_stats(stats)
    }

    // ========================================================================
    // Stat accessors
    // ========================================================================

    pub fn stats(&self) -> &UnitStats {
        &self.stats
    }

    pub fn cost(&self) -> u32 {
        self.stats.cost
    }

    /// Max hit points without the veteran bonus.
    pub fn base_max_hp(&self) -> u32 {
        self.stats.max_hp
    }

    /// Max hit points, including the veteran bonus when promoted.
    pub fn max_hp(&self) -> u32 {
        if self.has_status(StatusEffect::Veteran) {
            self.stats.max_hp.saturating_add(CombatConfig::VETERAN_HP_BONUS)
        } else {
            self.stats.max_hp
        }
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Attack, including the boost bonus.
    pub fn attack(&self) -> Fraction {
        if self.has_status(StatusEffect::Boosted) {
            self.stats.attack + CombatConfig::BOOST_ATTACK
        } else {
            self.stats.attack
        }
    }

    pub fn defense(&self) -> Fraction {
        self.stats.defense
    }

    /// Movement, including the boost bonus.
    pub fn movement(&self) -> u32 {
        if self.has_status(StatusEffect::Boosted) {
            self.stats.movement + CombatConfig::BOOST_MOVEMENT
        } else {
            self.stats.movement
        }
    }

    pub fn range(&self) -> u32 {
        self.stats.range
    }

    pub fn traits(&self) -> TraitSet {
        self.stats.traits
    }

    pub fn status_effects(&self) -> StatusEffects {
        self.status_effects
    }

    #[inline]
    pub fn has_trait(&self, trait_kind: Trait) -> bool {
        self.stats.traits.has(trait_kind)
    }

    #[inline]
    pub fn has_status(&self, effect: StatusEffect) -> bool {
        self.status_effects.has(effect)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    // ========================================================================
    // Derived combat values
    // ========================================================================

    /// Defense multiplier from the active defense-bonus effect.
    ///
    /// Priority: POISONED > WALLED > FORTIFIED > none. The mutual exclusion
    /// rules keep at most one of them active, but the priority is applied
    /// regardless.
    pub fn defense_bonus(&self) -> Fraction {
        if self.has_status(StatusEffect::Poisoned) {
            CombatConfig::POISONED_DEFENSE
        } else if self.has_status(StatusEffect::Walled) {
            CombatConfig::WALLED_DEFENSE
        } else if self.has_status(StatusEffect::Fortified) {
            CombatConfig::FORTIFIED_DEFENSE
        } else {
            CombatConfig::NO_DEFENSE_BONUS
        }
    }

    /// `current_hp / max_hp` as an exact fraction.
    pub fn health_ratio(&self) -> Fraction {
        Fraction::new(i64::from(self.current_hp), i64::from(self.max_hp()))
    }

    // ========================================================================
    // Hit point mutation
    // ========================================================================

    /// Set current hit points.
    ///
    /// A value above `max_hp()` promotes the unit to veteran when it can
    /// become one (not STATIC, not already a veteran); the value is then
    /// clamped to the resulting maximum.
    pub fn set_current_hp(&mut self, hp: u32) {
        if hp > self.max_hp() && self.can_promote() {
            self.status_effects.insert(StatusEffects::VETERAN);
        }
        self.current_hp = hp.min(self.max_hp());
    }

    /// Subtract damage from current hit points, stopping at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    fn can_promote(&self) -> bool {
        !self.has_trait(Trait::Static) && !self.has_status(StatusEffect::Veteran)
    }

    // ========================================================================
    // Status effect mutation
    // ========================================================================

    /// Apply a status effect, enforcing the exclusion and trait rules.
    ///
    /// - POISONED strips FORTIFIED and WALLED.
    /// - WALLED strips FORTIFIED; ignored while POISONED.
    /// - FORTIFIED is ignored while POISONED or WALLED.
    /// - VETERAN raises max hit points and heals to the new maximum.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::InvalidEffect`] for VETERAN on a STATIC unit,
    /// SPLASHING without SPLASH, and EXPLODING without EXPLODE.
    pub fn add_status_effect(&mut self, effect: StatusEffect) -> Result<(), UnitError> {
        self.check_effect_allowed(effect)?;

        let effects = &mut self.status_effects;
        match effect {
            StatusEffect::Poisoned => {
                effects.remove(StatusEffects::FORTIFIED | StatusEffects::WALLED);
                effects.insert(StatusEffects::POISONED);
            }
            StatusEffect::Walled => {
                if !effects.has(StatusEffect::Poisoned) {
                    effects.remove(StatusEffects::FORTIFIED);
                    effects.insert(StatusEffects::WALLED);
                }
            }
            StatusEffect::Fortified => {
                if !effects.intersects(StatusEffects::POISONED | StatusEffects::WALLED) {
                    effects.insert(StatusEffects::FORTIFIED);
                }
            }
            StatusEffect::Veteran => {
                if !effects.has(StatusEffect::Veteran) {
                    effects.insert(StatusEffects::VETERAN);
                    self.current_hp = self.max_hp();
                }
            }
            other => effects.insert(other.flag()),
        }

        Ok(())
    }

    /// Apply several status effects in declaration order.
    ///
    /// Stops at the first rejected effect; effects applied before it stay.
    pub fn add_status_effects(
        &mut self,
        effects: impl Into<StatusEffects>,
    ) -> Result<(), UnitError> {
        effects
            .into()
            .effects()
            .try_for_each(|effect| self.add_status_effect(effect))
    }

    /// Remove a status effect.
    ///
    /// Removing VETERAN clamps current hit points to the reduced maximum.
    pub fn remove_status_effect(&mut self, effect: StatusEffect) {
        self.status_effects.remove(effect.flag());
        self.current_hp = self.current_hp.min(self.max_hp());
    }

    /// Merge effects inflicted by combat into this unit.
    ///
    /// Combat only inflicts effects without trait requirements, so nothing
    /// should be rejected here; a rejected effect is skipped.
    pub(crate) fn absorb_status_effects(&mut self, effects: StatusEffects) {
        for effect in effects.effects() {
            if let Err(err) = self.add_status_effect(effect) {
                tracing::debug!("skipping inflicted effect: {}", err);
            }
        }
    }

    fn check_effect_allowed(&self, effect: StatusEffect) -> Result<(), UnitError> {
        let reason = match effect {
            StatusEffect::Veteran if self.has_trait(Trait::Static) => {
                "static units cannot become veterans"
            }
            StatusEffect::Splashing if !self.has_trait(Trait::Splash) => {
                "unit lacks the splash trait"
            }
            StatusEffect::Exploding if !self.has_trait(Trait::Explode) => {
                "unit lacks the explode trait"
            }
            _ => return Ok(()),
        };

        Err(UnitError::InvalidEffect { effect, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warrior() -> Unit {
        Unit::new(
            UnitStats::new(2, 10, Fraction::from_integer(2), Fraction::from_integer(2))
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
    fn new_unit_starts_at_full_health() {
        let unit = warrior();
        assert_eq!(unit.current_hp(), 10);
        assert_eq!(unit.max_hp(), 10);
        assert_eq!(unit.movement(), 1);
        assert_eq!(unit.range(), 1);
        assert!(unit.status_effects().is_empty());
        assert_eq!(unit.defense_bonus(), Fraction::from_integer(1));
        assert_eq!(unit.health_ratio(), Fraction::from_integer(1));
    }

    #[test]
    fn zero_max_hp_is_rejected() {
        let stats = UnitStats::new(0, 0, Fraction::from_integer(0), Fraction::from_integer(0));
        assert!(matches!(
            Unit::new(stats),
            Err(UnitError::InvalidState { .. })
        ));
    }

    #[test]
    fn out_of_bounds_stats_are_rejected() {
        let two = Fraction::from_integer(2);
        let too_many_hp = UnitStats::new(1, CombatConfig::MAX_HIT_POINTS + 1, two, two);
        assert!(matches!(
            Unit::new(too_many_hp),
            Err(UnitError::InvalidState { .. })
        ));

        let negative = UnitStats::new(1, 10, Fraction::new(-1, 2), two);
        assert!(Unit::new(negative).is_err());

        let huge = UnitStats::new(1, 10, two, Fraction::from_integer(1_000_000));
        assert!(Unit::new(huge).is_err());

        let fine = UnitStats::new(1, 10, two, Fraction::new(CombatConfig::MAX_FRACTION_TERM, 3));
        assert!(Unit::new(fine).is_ok());
    }

    #[test]
    fn veteran_at_hit_point_bound() {
        let two = Fraction::from_integer(2);
        let mut unit =
            Unit::new(UnitStats::new(1, CombatConfig::MAX_HIT_POINTS, two, two)).unwrap();
        unit.add_status_effect(StatusEffect::Veteran).unwrap();
        assert_eq!(unit.max_hp(), CombatConfig::MAX_HIT_POINTS + 5);
        assert_eq!(unit.current_hp(), unit.max_hp());
    }

    #[test]
    fn defense_bonus_per_effect() {
        let mut unit = warrior();
        unit.add_status_effect(StatusEffect::Fortified).unwrap();
        assert_eq!(unit.defense_bonus(), Fraction::new(3, 2));

        let mut unit = warrior();
        unit.add_status_effect(StatusEffect::Walled).unwrap();
        assert_eq!(unit.defense_bonus(), Fraction::from_integer(4));

        let mut unit = warrior();
        unit.add_status_effect(StatusEffect::Poisoned).unwrap();
        assert_eq!(unit.defense_bonus(), Fraction::new(7, 10));
    }

    #[test]
    fn poison_blocks_later_defense_bonuses() {
        let mut unit = warrior();
        unit.add_status_effect(StatusEffect::Poisoned).unwrap();
        unit.add_status_effect(StatusEffect::Walled).unwrap();
        unit.add_status_effect(StatusEffect::Fortified).unwrap();

        assert_eq!(unit.status_effects(), StatusEffects::POISONED);
        assert_eq!(unit.defense_bonus(), Fraction::new(7, 10));
    }

    #[test]
    fn poison_strips_existing_bonuses() {
        let mut unit = warrior();
        unit.add_status_effect(StatusEffect::Fortified).unwrap();
        unit.add_status_effect(StatusEffect::Poisoned).unwrap();
        assert_eq!(unit.status_effects(), StatusEffects::POISONED);
    }

    #[test]
    fn walls_replace_fortification() {
        let mut unit = warrior();
        unit.add_status_effect(StatusEffect::Fortified).unwrap();
        unit.add_status_effect(StatusEffect::Walled).unwrap();
        assert_eq!(unit.status_effects(), StatusEffects::WALLED);

        unit.add_status_effect(StatusEffect::Fortified).unwrap();
        assert_eq!(unit.status_effects(), StatusEffects::WALLED);
    }

    #[test]
    fn removing_poison_allows_bonuses_again() {
        let mut unit = warrior();
        unit.add_status_effect(StatusEffect::Poisoned).unwrap();
        unit.remove_status_effect(StatusEffect::Poisoned);
        unit.add_status_effect(StatusEffect::Fortified).unwrap();
        assert_eq!(unit.defense_bonus(), Fraction::new(3, 2));
    }

    #[test]
    fn veteran_raises_max_hp_and_heals() {
        let mut unit = warrior();
        unit.take_damage(4);
        unit.add_status_effect(StatusEffect::Veteran).unwrap();
        assert_eq!(unit.max_hp(), 15);
        assert_eq!(unit.current_hp(), 15);

        // A second promotion is a no-op.
        unit.take_damage(5);
        unit.add_status_effect(StatusEffect::Veteran).unwrap();
        assert_eq!(unit.max_hp(), 15);
        assert_eq!(unit.current_hp(), 10);
    }

    #[test]
    fn static_units_cannot_become_veterans() {
        let mut unit = jelly();
        let err = unit.add_status_effect(StatusEffect::Veteran).unwrap_err();
        assert!(matches!(
            err,
            UnitError::InvalidEffect {
                effect: StatusEffect::Veteran,
                ..
            }
        ));
        assert_eq!(unit.max_hp(), 20);
    }

    #[test]
    fn splash_and_explode_require_traits() {
        let mut unit = warrior();
        assert!(unit.add_status_effect(StatusEffect::Splashing).is_err());
        assert!(unit.add_status_effect(StatusEffect::Exploding).is_err());
        assert!(unit.status_effects().is_empty());
    }

    #[test]
    fn excess_hp_promotes_to_veteran() {
        let mut unit = warrior();
        unit.set_current_hp(12);
        assert!(unit.has_status(StatusEffect::Veteran));
        assert_eq!(unit.max_hp(), 15);
        assert_eq!(unit.current_hp(), 12);

        unit.set_current_hp(40);
        assert_eq!(unit.current_hp(), 15);
    }

    #[test]
    fn excess_hp_on_static_unit_is_clamped() {
        let mut unit = jelly();
        unit.set_current_hp(25);
        assert!(!unit.has_status(StatusEffect::Veteran));
        assert_eq!(unit.current_hp(), 20);
    }

    #[test]
    fn removing_veteran_clamps_hp() {
        let mut unit = warrior();
        unit.add_status_effect(StatusEffect::Veteran).unwrap();
        unit.remove_status_effect(StatusEffect::Veteran);
        assert_eq!(unit.max_hp(), 10);
        assert_eq!(unit.current_hp(), 10);
    }

    #[test]
    fn lethal_damage_clamps_to_zero() {
        let mut unit = warrior();
        unit.take_damage(25);
        assert_eq!(unit.current_hp(), 0);
        assert!(!unit.is_alive());
        assert_eq!(unit.health_ratio(), Fraction::from_integer(0));
    }

    #[test]
    fn boost_adds_attack_and_movement() {
        let mut unit = warrior();
        unit.add_status_effect(StatusEffect::Boosted).unwrap();
        assert_eq!(unit.attack(), Fraction::new(5, 2));
        assert_eq!(unit.movement(), 2);
    }

    #[test]
    fn add_status_effects_applies_a_set() {
        let mut unit = warrior();
        unit.add_status_effects([StatusEffect::Fortified, StatusEffect::Frozen])
            .unwrap();
        assert_eq!(
            unit.status_effects(),
            StatusEffects::FORTIFIED | StatusEffects::FROZEN
        );
    }
}
