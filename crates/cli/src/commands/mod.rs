//! Subcommands.

mod multi;
mod single;
mod units;

pub use multi::Multi;
pub use single::Single;
pub use units::Units;
