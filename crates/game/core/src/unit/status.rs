//! Status effect system for units.
//!
//! Status effects are transient conditions on one unit instance. Three of them
//! (POISONED, WALLED, FORTIFIED) are alternative sources of the defense
//! multiplier and exclude each other; the exclusion rules live in
//! [`Unit::add_status_effect`](crate::Unit::add_status_effect).

use bitflags::bitflags;
use strum::IntoEnumIterator;

/// A single status effect.
///
/// The discriminant is the bit position inside [`StatusEffects`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum StatusEffect {
    /// Attack +0.5 and movement +1 until the next action.
    Boosted = 0,
    /// Switched to the enemy's side.
    Converted,
    /// Blowing itself up; the attack kills the unit.
    Exploding,
    /// Defense x1.5.
    Fortified,
    /// Cannot act, and cannot retaliate.
    Frozen,
    /// Defense x0.7, overriding every other defense bonus.
    Poisoned,
    /// Attacking the tiles around the target.
    Splashing,
    /// Takes retaliation even when out of range or surprising.
    TakesRetaliation,
    /// Max hit points +5.
    Veteran,
    /// Defense x4.
    Walled,
}

impl StatusEffect {
    /// Returns the single-member set for this effect.
    #[inline]
    pub const fn flag(self) -> StatusEffects {
        StatusEffects::from_bits_retain(1 << self as u16)
    }

    /// Returns true if the effect is one of the defense-bonus sources.
    pub const fn is_defense_bonus(self) -> bool {
        matches!(self, Self::Poisoned | Self::Walled | Self::Fortified)
    }
}

bitflags! {
    /// Set of [`StatusEffect`]s active on a unit or inflicted by an exchange.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StatusEffects: u16 {
        const BOOSTED           = 1 << StatusEffect::Boosted as u16;
        const CONVERTED         = 1 << StatusEffect::Converted as u16;
        const EXPLODING         = 1 << StatusEffect::Exploding as u16;
        const FORTIFIED         = 1 << StatusEffect::Fortified as u16;
        const FROZEN            = 1 << StatusEffect::Frozen as u16;
        const POISONED          = 1 << StatusEffect::Poisoned as u16;
        const SPLASHING         = 1 << StatusEffect::Splashing as u16;
        const TAKES_RETALIATION = 1 << StatusEffect::TakesRetaliation as u16;
        const VETERAN           = 1 << StatusEffect::Veteran as u16;
        const WALLED            = 1 << StatusEffect::Walled as u16;
    }
}

impl StatusEffects {
    /// Checks whether an effect is present.
    #[inline]
    pub const fn has(&self, effect: StatusEffect) -> bool {
        self.contains(effect.flag())
    }

    /// Iterates over the effects in the set, in declaration order.
    pub fn effects(&self) -> impl Iterator<Item = StatusEffect> + '_ {
        StatusEffect::iter().filter(move |e| self.has(*e))
    }
}

impl From<StatusEffect> for StatusEffects {
    fn from(effect: StatusEffect) -> Self {
        effect.flag()
    }
}

impl FromIterator<StatusEffect> for StatusEffects {
    fn from_iter<I: IntoIterator<Item = StatusEffect>>(iter: I) -> Self {
        iter.into_iter()
            .fold(StatusEffects::empty(), |set, e| set | e.flag())
    }
}

impl<const N: usize> From<[StatusEffect; N]> for StatusEffects {
    fn from(effects: [StatusEffect; N]) -> Self {
        effects.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_effect_has_a_distinct_bit() {
        let all: StatusEffects = StatusEffect::iter().collect();
        assert_eq!(all, StatusEffects::all());
    }

    #[test]
    fn defense_bonus_sources() {
        let sources: Vec<_> = StatusEffect::iter()
            .filter(|e| e.is_defense_bonus())
            .collect();
        assert_eq!(
            sources,
            vec![
                StatusEffect::Fortified,
                StatusEffect::Poisoned,
                StatusEffect::Walled
            ]
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for effect in StatusEffect::iter() {
            assert_eq!(effect.to_string().parse::<StatusEffect>(), Ok(effect));
        }
        assert_eq!(StatusEffect::TakesRetaliation.as_ref(), "takes_retaliation");
    }
}
