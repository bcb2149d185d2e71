//! Combat result types.

use crate::unit::StatusEffects;

/// Hit points each side loses in one exchange.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageResult {
    pub to_attacker: u32,
    pub to_defender: u32,
}

impl DamageResult {
    pub const fn new(to_attacker: u32, to_defender: u32) -> Self {
        Self {
            to_attacker,
            to_defender,
        }
    }
}

/// Status effects newly inflicted by one exchange.
///
/// The sets are not merged into either unit; callers decide when to apply
/// them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffectResult {
    pub to_attacker: StatusEffects,
    pub to_defender: StatusEffects,
}

/// Full outcome of one attacker/defender exchange.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatResult {
    pub damage: DamageResult,
    pub status_effects: StatusEffectResult,
}

/// Outcome for one unit, accumulated over a multi-combat sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitResult {
    pub damage: u32,
    pub status_effects: StatusEffects,
}

impl UnitResult {
    pub const fn new(damage: u32, status_effects: StatusEffects) -> Self {
        Self {
            damage,
            status_effects,
        }
    }

    /// Folds one more exchange into the running total.
    pub fn accumulate(&mut self, damage: u32, status_effects: StatusEffects) {
        self.damage += damage;
        self.status_effects |= status_effects;
    }
}

/// Per-unit outcomes of a multi-combat.
///
/// `attackers` is index-aligned with the attacker input. `defenders` holds
/// one entry per defender that was engaged, in engagement order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiCombatResult {
    pub attackers: Vec<UnitResult>,
    pub defenders: Vec<UnitResult>,
}
