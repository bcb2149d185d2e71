//! Combat configuration constants and tunable parameters.

use num_rational::Ratio;

/// Exact fraction used for every attack, defense and force value.
///
/// Floating point cannot represent the `.5` boundaries the damage formula
/// rounds on, so all combat arithmetic stays in rationals until the final
/// rounding step.
pub type Fraction = Ratio<i64>;

/// Combat constants and runtime-tunable parameters.
///
/// Values fixed by the game rules are associated constants. The two scaling
/// factors that differ between releases of the reference game are runtime
/// fields so they can be loaded from a TOML file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Multiplier applied to each side's force share (`attack * 4.5`).
    pub damage_scale: Fraction,

    /// Multiplier turning a tentacle defender's defense into the attack value
    /// of its pre-emptive strike.
    pub tentacle_multiplier: Fraction,
}

impl CombatConfig {
    // ===== defense multipliers, in priority order =====
    /// Defense multiplier of a POISONED unit. Overrides every other bonus.
    pub const POISONED_DEFENSE: Fraction = Ratio::new_raw(7, 10);
    /// Defense multiplier of a unit behind city walls.
    pub const WALLED_DEFENSE: Fraction = Ratio::new_raw(4, 1);
    /// Defense multiplier of a fortified unit.
    pub const FORTIFIED_DEFENSE: Fraction = Ratio::new_raw(3, 2);
    /// Defense multiplier without any bonus.
    pub const NO_DEFENSE_BONUS: Fraction = Ratio::new_raw(1, 1);

    // ===== status effect stat changes =====
    /// Max hit points gained on promotion to veteran.
    pub const VETERAN_HP_BONUS: u32 = 5;
    /// Attack added while BOOSTED.
    pub const BOOST_ATTACK: Fraction = Ratio::new_raw(1, 2);
    /// Movement added while BOOSTED.
    pub const BOOST_MOVEMENT: u32 = 1;

    // ===== input bounds =====
    /// Largest accepted base max hit points.
    pub const MAX_HIT_POINTS: u32 = 1_000_000;
    /// Largest accepted numerator or denominator of attack, defense and the
    /// tunable multipliers, in lowest terms.
    pub const MAX_FRACTION_TERM: i64 = 10_000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DAMAGE_SCALE: Fraction = Ratio::new_raw(9, 2);
    pub const DEFAULT_TENTACLE_MULTIPLIER: Fraction = Ratio::new_raw(1, 1);

    pub fn new() -> Self {
        Self {
            damage_scale: Self::DEFAULT_DAMAGE_SCALE,
            tentacle_multiplier: Self::DEFAULT_TENTACLE_MULTIPLIER,
        }
    }

    /// Overrides the tentacle multiplier (builder pattern).
    #[must_use]
    pub fn with_tentacle_multiplier(mut self, multiplier: Fraction) -> Self {
        self.tentacle_multiplier = multiplier;
        self
    }

    /// Overrides the damage scale (builder pattern).
    #[must_use]
    pub fn with_damage_scale(mut self, scale: Fraction) -> Self {
        self.damage_scale = scale;
        self
    }
}

/// Returns true if `value` is non-negative and both of its terms, in lowest
/// terms, are at most [`CombatConfig::MAX_FRACTION_TERM`].
pub fn fraction_in_bounds(value: Fraction) -> bool {
    let (numer, denom) = (*value.numer(), *value.denom());
    if denom == 0 || numer == i64::MIN || denom == i64::MIN {
        return false;
    }
    if numer.signum() * denom.signum() < 0 {
        return false;
    }
    let value = value.reduced();
    let limit = CombatConfig::MAX_FRACTION_TERM.unsigned_abs();
    value.numer().unsigned_abs() <= limit && value.denom().unsigned_abs() <= limit
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
