//! Reference-game units for combat tests.

use crate::config::Fraction;
use crate::unit::{Trait, TraitSet, Unit, UnitBuilder, UnitStats};

fn stats(
    cost: u32,
    hp: u32,
    attack: Fraction,
    defense: i64,
    traits: impl Into<TraitSet>,
) -> UnitStats {
    UnitStats::new(cost, hp, attack, Fraction::from_integer(defense)).with_traits(traits)
}

fn int(value: i64) -> Fraction {
    Fraction::from_integer(value)
}

pub fn warrior() -> UnitBuilder {
    Unit::builder(stats(2, 10, int(2), 2, [Trait::Dash, Trait::Fortify]))
}

pub fn archer() -> UnitBuilder {
    Unit::builder(stats(3, 10, int(2), 1, [Trait::Dash, Trait::Fortify]).with_range(2))
}

pub fn jelly() -> UnitBuilder {
    Unit::builder(
        stats(8, 20, int(2), 2, [Trait::Tentacles, Trait::Stiff, Trait::Static]).with_movement(2),
    )
}

pub fn kiton() -> UnitBuilder {
    Unit::builder(stats(3, 15, int(1), 3, [Trait::Poison]))
}

pub fn phychi() -> UnitBuilder {
    Unit::builder(
        stats(3, 15, int(1), 1, [Trait::Dash, Trait::Poison, Trait::Surprise])
            .with_movement(2)
            .with_range(2),
    )
}

pub fn ice_archer() -> UnitBuilder {
    Unit::builder(
        stats(3, 10, int(0), 1, [Trait::Dash, Trait::Freeze, Trait::Fortify, Trait::Stiff])
            .with_range(2),
    )
}

pub fn mind_bender() -> UnitBuilder {
    Unit::builder(stats(5, 10, int(0), 1, [Trait::Heal, Trait::Convert, Trait::Stiff]))
}

pub fn shaman() -> UnitBuilder {
    Unit::builder(stats(5, 10, int(1), 1, [Trait::Convert, Trait::Boost, Trait::Static]))
}

pub fn dagger() -> UnitBuilder {
    Unit::builder(stats(
        2,
        10,
        int(2),
        1,
        [Trait::Surprise, Trait::Dash, Trait::Independent, Trait::Static],
    ))
}

pub fn doomux() -> UnitBuilder {
    Unit::builder(
        stats(10, 20, int(4), 2, [Trait::Dash, Trait::Creep, Trait::Explode]).with_movement(3),
    )
}

pub fn exida() -> UnitBuilder {
    Unit::builder(stats(8, 10, int(3), 1, [Trait::Poison, Trait::Splash]).with_range(3))
}

pub fn build(builder: UnitBuilder) -> Unit {
    builder.build().expect("fixture units are valid")
}
