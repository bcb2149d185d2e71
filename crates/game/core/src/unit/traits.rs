//! Permanent unit capabilities.
//!
//! A trait belongs to a unit *kind*: every warrior can dash and fortify, every
//! jelly has tentacles. Combat only consults a handful of them (POISON, FREEZE,
//! CONVERT, TENTACLES, STIFF, SURPRISE, STATIC, SPLASH, EXPLODE); the rest are
//! carried so catalog entries are complete.

use bitflags::bitflags;
use strum::IntoEnumIterator;

/// A single unit trait.
///
/// The discriminant is the bit position of the trait inside [`TraitSet`].
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
pub enum Trait {
    // ========================================================================
    // Base units
    // ========================================================================
    /// Carries another unit; moving onto land next to water releases it.
    Carry = 0,
    /// Attacks convert the target to the attacker's side.
    Convert,
    /// May attack after moving in the same turn.
    Dash,
    /// May move after attacking in the same turn.
    Escape,
    /// Gains the fortify defense bonus inside a city.
    Fortify,
    /// Heals adjacent friendly units.
    Heal,
    /// May attack again after a kill.
    Persist,
    /// Explores a 5x5 area instead of 3x3.
    Scout,
    /// Damages or poisons units adjacent to the target.
    Splash,
    /// Never becomes a veteran.
    Static,
    /// Never retaliates.
    Stiff,
    /// Damages all adjacent enemies when it moves.
    Stomp,
    /// Attacks never trigger retaliation.
    Surprise,

    // ========================================================================
    // Cloak
    // ========================================================================
    /// Ignores terrain movement barriers.
    Creep,
    /// Becomes invisible after moving.
    Hide,
    /// Incites a revolt by entering an enemy city.
    Infiltrate,

    // ========================================================================
    // Aquarion
    // ========================================================================
    /// Floods every tile it moves onto.
    Autoflood,
    /// Floods the tile it attacks.
    Drench,
    /// Strikes any enemy that ends up adjacent, before that enemy attacks.
    Tentacles,

    // ========================================================================
    // Elyrion
    // ========================================================================
    /// Grows into a different unit after some turns.
    Grow,
    /// Takes no population slot and belongs to no city.
    Independent,

    // ========================================================================
    // Polaris
    // ========================================================================
    /// Freezes adjacent enemies and water as it moves.
    AutoFreeze,
    /// Attacks freeze the target.
    Freeze,
    /// Freezes everything adjacent as a unit action.
    FreezeArea,
    /// Doubled movement on ice, limited on land.
    Skate,

    // ========================================================================
    // Cymanti
    // ========================================================================
    /// Boosts adjacent friendly units as a unit action.
    Boost,
    /// Grows longer with every kill.
    Eat,
    /// Explodes, damaging and poisoning adjacent enemies and killing itself.
    Explode,
    /// Moves through ocean without the required technology.
    Navigate,
    /// Attacks poison the target.
    Poison,
    /// Ignores movement barriers imposed by enemy units.
    Sneak,
}

impl Trait {
    /// Number of distinct traits.
    pub const COUNT: usize = 31;

    /// Returns the single-member set for this trait.
    #[inline]
    pub const fn flag(self) -> TraitSet {
        TraitSet::from_bits_retain(1 << self as u32)
    }
}

bitflags! {
    /// Set of [`Trait`]s owned by a unit kind.
    ///
    /// Each bit is `1 << Trait as u32`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TraitSet: u32 {
        const CARRY       = 1 << Trait::Carry as u32;
        const CONVERT     = 1 << Trait::Convert as u32;
        const DASH        = 1 << Trait::Dash as u32;
        const ESCAPE      = 1 << Trait::Escape as u32;
        const FORTIFY     = 1 << Trait::Fortify as u32;
        const HEAL        = 1 << Trait::Heal as u32;
        const PERSIST     = 1 << Trait::Persist as u32;
        const SCOUT       = 1 << Trait::Scout as u32;
        const SPLASH      = 1 << Trait::Splash as u32;
        const STATIC      = 1 << Trait::Static as u32;
        const STIFF       = 1 << Trait::Stiff as u32;
        const STOMP       = 1 << Trait::Stomp as u32;
        const SURPRISE    = 1 << Trait::Surprise as u32;
        const CREEP       = 1 << Trait::Creep as u32;
        const HIDE        = 1 << Trait::Hide as u32;
        const INFILTRATE  = 1 << Trait::Infiltrate as u32;
        const AUTOFLOOD   = 1 << Trait::Autoflood as u32;
        const DRENCH      = 1 << Trait::Drench as u32;
        const TENTACLES   = 1 << Trait::Tentacles as u32;
        const GROW        = 1 << Trait::Grow as u32;
        const INDEPENDENT = 1 << Trait::Independent as u32;
        const AUTO_FREEZE = 1 << Trait::AutoFreeze as u32;
        const FREEZE      = 1 << Trait::Freeze as u32;
        const FREEZE_AREA = 1 << Trait::FreezeArea as u32;
        const SKATE       = 1 << Trait::Skate as u32;
        const BOOST       = 1 << Trait::Boost as u32;
        const EAT         = 1 << Trait::Eat as u32;
        const EXPLODE     = 1 << Trait::Explode as u32;
        const NAVIGATE    = 1 << Trait::Navigate as u32;
        const POISON      = 1 << Trait::Poison as u32;
        const SNEAK       = 1 << Trait::Sneak as u32;
    }
}

impl TraitSet {
    /// Checks whether the set contains a trait.
    #[inline]
    pub const fn has(&self, trait_kind: Trait) -> bool {
        self.contains(trait_kind.flag())
    }

    /// Iterates over the traits in the set, in declaration order.
    pub fn traits(&self) -> impl Iterator<Item = Trait> + '_ {
        Trait::iter().filter(move |t| self.has(*t))
    }
}

impl From<Trait> for TraitSet {
    fn from(trait_kind: Trait) -> Self {
        trait_kind.flag()
    }
}

impl FromIterator<Trait> for TraitSet {
    fn from_iter<I: IntoIterator<Item = Trait>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TraitSet::empty(), |set, t| set | t.flag())
    }
}

impl<const N: usize> From<[Trait; N]> for TraitSet {
    fn from(traits: [Trait; N]) -> Self {
        traits.into_iter().collect()
    }
}
