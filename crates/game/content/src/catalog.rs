//! Built-in unit kinds and the unit catalog.
//!
//! [`UnitKind`] enumerates every unit of the reference game with its stats.
//! [`UnitCatalog`] resolves names and abbreviations to [`UnitStats`] and can be
//! extended with custom kinds (see `loaders::CatalogLoader`).

use std::collections::BTreeMap;

use polycalc_core::{Fraction, Trait, TraitSet, UnitStats};
use strum::IntoEnumIterator;

/// Every unit kind of the reference game.
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
pub enum UnitKind {
    // ========================================================================
    // Base
    // ========================================================================
    Warrior,
    Archer,
    Rider,
    Catapult,
    Knight,
    Swordsman,
    Defender,
    Cloak,
    Dagger,
    MindBender,
    Giant,

    // ========================================================================
    // Naval
    // ========================================================================
    Raft,
    Scout,
    Rammer,
    Bomber,
    Juggernaut,
    Pirate,

    // ========================================================================
    // Aquarion
    // ========================================================================
    Tridention,
    Shark,
    Jelly,
    Puffer,
    Crab,

    // ========================================================================
    // Elyrion
    // ========================================================================
    Polytaur,
    Egg,
    BabyDragon,
    FireDragon,

    // ========================================================================
    // Polaris
    // ========================================================================
    Mooni,
    IceArcher,
    BattleSled,
    IceFortress,
    Gaami,

    // ========================================================================
    // Cymanti
    // ========================================================================
    Hexapod,
    Doomux,
    Kiton,
    Phychi,
    Shaman,
    Exida,
    Centipede,
    Segment,
}

/// Shorthand for a stats record; movement and range default to 1.
fn record(
    cost: u32,
    max_hp: u32,
    attack: Fraction,
    defense: Fraction,
    traits: impl Into<TraitSet>,
) -> UnitStats {
    UnitStats::new(cost, max_hp, attack, defense).with_traits(traits)
}

fn int(value: i64) -> Fraction {
    Fraction::from_integer(value)
}

fn half(numer: i64) -> Fraction {
    Fraction::new(numer, 2)
}

impl UnitKind {
    /// Stats of a freshly trained unit of this kind.
    ///
    /// Raft, Scout, Rammer and Bomber report the hit points of a carried
    /// warrior; use [`naval`] for other cargo.
    pub fn stats(self) -> UnitStats {
        use Trait::*;
        use UnitKind as K;

        match self {
            K::Warrior => record(2, 10, int(2), int(2), [Dash, Fortify]),
            K::Archer => record(3, 10, int(2), int(1), [Dash, Fortify]).with_range(2),
            K::Rider => record(3, 10, int(2), int(1), [Dash, Escape, Fortify]).with_movement(2),
            K::Catapult => record(8, 10, int(4), int(0), [Stiff]).with_range(3),
            K::Knight => {
                record(8, 10, half(7), int(1), [Dash, Persist, Fortify]).with_movement(3)
            }
            K::Swordsman => record(5, 15, int(3), int(3), [Dash]),
            K::Defender => record(3, 15, int(1), int(3), [Fortify]),
            K::Cloak => record(
                8,
                5,
                int(2),
                half(1),
                [Hide, Infiltrate, Dash, Scout, Creep, Static, Stiff],
            )
            .with_movement(2),
            K::Dagger => record(2, 10, int(2), int(1), [Surprise, Dash, Independent, Static]),
            K::MindBender => record(5, 10, int(0), int(1), [Heal, Convert, Stiff]),
            K::Giant => record(10, 40, int(5), int(4), [Static]),

            K::Raft => record(2, 10, int(0), int(2), [Carry, Static, Stiff])
                .with_movement(2)
                .with_range(0),
            K::Scout => record(7, 10, int(2), int(1), [Dash, Carry, Scout, Static])
                .with_movement(3)
                .with_range(2),
            K::Rammer => record(7, 10, int(3), int(3), [Dash, Carry, Static]).with_movement(3),
            K::Bomber => record(17, 10, int(3), int(2), [Carry, Splash, Static, Stiff])
                .with_movement(2)
                .with_range(3),
            K::Juggernaut => {
                record(10, 40, int(4), int(4), [Carry, Static, Stiff, Stomp]).with_movement(2)
            }
            K::Pirate => record(2, 10, int(2), int(1), [Surprise, Dash, Independent, Static])
                .with_movement(2),

            K::Tridention => record(8, 10, half(5), int(1), [Dash, Persist])
                .with_movement(2)
                .with_range(2),
            K::Shark => record(8, 10, half(7), int(2), [Dash, Surprise]).with_movement(3),
            K::Jelly => record(8, 20, int(2), int(2), [Tentacles, Stiff, Static]).with_movement(2),
            K::Puffer => record(8, 10, int(4), int(0), [Drench])
                .with_movement(2)
                .with_range(3),
            K::Crab => record(10, 40, int(4), int(4), [Escape, Autoflood, Static]).with_movement(2),

            K::Polytaur => record(3, 15, int(3), int(1), [Dash, Independent, Fortify, Static]),
            K::Egg => record(10, 10, int(0), int(2), [Grow, Fortify, Stiff, Static]),
            K::BabyDragon => record(10, 15, int(3), int(3), [Grow, Dash, Escape, Scout, Static])
                .with_movement(2),
            K::FireDragon => record(10, 20, int(4), int(3), [Dash, Splash, Scout, Static])
                .with_movement(3)
                .with_range(2),

            K::Mooni => record(5, 10, int(0), int(1), [AutoFreeze, Skate, Stiff, Static]),
            K::IceArcher => {
                record(3, 10, int(0), int(1), [Dash, Freeze, Fortify, Stiff]).with_range(2)
            }
            K::BattleSled => record(5, 15, int(3), int(2), [Dash, Escape, Skate]).with_movement(2),
            K::IceFortress => record(15, 20, int(4), int(3), [Skate, Scout]).with_range(2),
            K::Gaami => record(10, 30, int(4), int(3), [AutoFreeze, FreezeArea, Static]),

            K::Hexapod => {
                record(3, 5, int(3), int(1), [Dash, Escape, Sneak, Creep]).with_movement(2)
            }
            K::Doomux => record(10, 20, int(4), int(2), [Dash, Creep, Explode]).with_movement(3),
            K::Kiton => record(3, 15, int(1), int(3), [Poison]),
            K::Phychi => record(3, 15, int(1), int(1), [Dash, Poison, Surprise])
                .with_movement(2)
                .with_range(2),
            K::Shaman => record(5, 10, int(1), int(1), [Convert, Boost, Static]),
            K::Exida => record(8, 10, int(3), int(1), [Poison, Splash]).with_range(3),
            K::Centipede => {
                record(10, 20, int(4), int(3), [Dash, Eat, Creep, Static]).with_movement(2)
            }
            K::Segment => {
                record(1, 10, int(4), int(3), [Dash, Eat, Creep, Static]).with_movement(2)
            }
        }
    }

    /// Two-letter code used by the abbreviation parser.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Warrior => "wa",
            Self::Archer => "ar",
            Self::Rider => "ri",
            Self::Catapult => "ca",
            Self::Knight => "kn",
            Self::Swordsman => "sw",
            Self::Defender => "de",
            Self::Cloak => "cl",
            Self::Dagger => "da",
            Self::MindBender => "mb",
            Self::Giant => "gi",
            Self::Raft => "ra",
            Self::Scout => "sc",
            Self::Rammer => "rm",
            Self::Bomber => "bo",
            Self::Juggernaut => "ju",
            Self::Pirate => "pi",
            Self::Tridention => "tr",
            Self::Shark => "sh",
            Self::Jelly => "je",
            Self::Puffer => "pu",
            Self::Crab => "cr",
            Self::Polytaur => "po",
            Self::Egg => "eg",
            Self::BabyDragon => "bd",
            Self::FireDragon => "fd",
            Self::Mooni => "mo",
            Self::IceArcher => "ia",
            Self::BattleSled => "bs",
            Self::IceFortress => "if",
            Self::Gaami => "ga",
            Self::Hexapod => "hx",
            Self::Doomux => "do",
            Self::Kiton => "ki",
            Self::Phychi => "ph",
            Self::Shaman => "sm",
            Self::Exida => "ex",
            Self::Centipede => "ce",
            Self::Segment => "se",
        }
    }

    /// Looks a kind up by its abbreviation (case-insensitive).
    pub fn from_abbreviation(code: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.abbreviation().eq_ignore_ascii_case(code))
    }

    /// Looks a kind up by abbreviation or snake_case name.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::from_abbreviation(name).or_else(|| name.parse().ok())
    }

    /// Whether the kind is a boat whose hit points come from its cargo.
    pub const fn is_naval(self) -> bool {
        matches!(self, Self::Raft | Self::Scout | Self::Rammer | Self::Bomber)
    }
}

/// Stats of a naval unit carrying `carried`.
///
/// The boat keeps its own stats and takes the cargo's max hit points.
/// Returns `None` when `kind` is not a carrying boat or `carried` is one.
pub fn naval(kind: UnitKind, carried: UnitKind) -> Option<UnitStats> {
    if !kind.is_naval() || carried.is_naval() {
        return None;
    }

    let mut stats = kind.stats();
    stats.max_hp = carried.stats().max_hp;
    Some(stats)
}

/// Name → stats registry over the built-in kinds plus custom entries.
///
/// Custom entries shadow built-in names. Lookup is case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct UnitCatalog {
    custom: BTreeMap<String, UnitStats>,
}

impl UnitCatalog {
    /// Catalog with the built-in kinds only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a custom unit kind.
    pub fn register(&mut self, name: impl Into<String>, stats: UnitStats) {
        let name = name.into().to_ascii_lowercase();
        if self.custom.insert(name.clone(), stats).is_some() {
            tracing::debug!(unit = %name, "replaced custom unit");
        }
    }

    /// Resolves a custom name, built-in abbreviation or built-in name.
    pub fn get(&self, name: &str) -> Option<UnitStats> {
        let key = name.to_ascii_lowercase();
        self.custom
            .get(&key)
            .cloned()
            .or_else(|| UnitKind::lookup(&key).map(UnitKind::stats))
    }

    /// Custom entries in name order.
    pub fn custom(&self) -> impl Iterator<Item = (&str, &UnitStats)> {
        self.custom.iter().map(|(name, stats)| (name.as_str(), stats))
    }
}
