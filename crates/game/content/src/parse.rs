//! Unit abbreviation parser.
//!
//! Grammar:
//!
//! ```text
//! unit   := name [ "(" name ")" ] [ ":" hp ] [ "-" flags ]
//! flags  := flag+
//! units  := unit ( "," unit )*
//! ```
//!
//! `name` is a built-in abbreviation (`wa`), a built-in snake_case name
//! (`mind_bender`) or a custom catalog entry. The parenthesised cargo is only
//! accepted on Raft, Scout, Rammer and Bomber. `hp` sets current hit points.
//!
//! | Flag | Status effect       |
//! |------|---------------------|
//! | `d`  | fortified           |
//! | `w`  | walled              |
//! | `p`  | poisoned            |
//! | `v`  | veteran             |
//! | `b`  | boosted             |
//! | `r`  | takes retaliation   |
//! | `s`  | splashing           |
//! | `x`  | exploding           |
//! | `f`  | frozen              |
//!
//! Examples: `wa`, `ar:5-d`, `wa-v`, `rm(sw):12-b`.

use polycalc_core::{CalcError, ErrorSeverity, StatusEffect, Unit, UnitError};

use crate::catalog::{UnitCatalog, UnitKind, naval};

/// Errors raised while parsing unit abbreviations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty unit description")]
    Empty,

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("unknown status flag '{0}'")]
    UnknownFlag(char),

    #[error("invalid hit points '{0}'")]
    InvalidHp(String),

    #[error("'{0}' cannot carry another unit")]
    NotNaval(String),

    #[error("malformed unit description '{0}'")]
    Malformed(String),

    #[error(transparent)]
    Unit(#[from] UnitError),
}

impl CalcError for ParseError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unit(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "PARSE_EMPTY",
            Self::UnknownUnit(_) => "PARSE_UNKNOWN_UNIT",
            Self::UnknownFlag(_) => "PARSE_UNKNOWN_FLAG",
            Self::InvalidHp(_) => "PARSE_INVALID_HP",
            Self::NotNaval(_) => "PARSE_NOT_NAVAL",
            Self::Malformed(_) => "PARSE_MALFORMED",
            Self::Unit(err) => err.error_code(),
        }
    }
}

/// Maps a flag letter to its status effect.
pub fn flag_effect(flag: char) -> Option<StatusEffect> {
    let effect = match flag.to_ascii_lowercase() {
        'd' => StatusEffect::Fortified,
        'w' => StatusEffect::Walled,
        'p' => StatusEffect::Poisoned,
        'v' => StatusEffect::Veteran,
        'b' => StatusEffect::Boosted,
        'r' => StatusEffect::TakesRetaliation,
        's' => StatusEffect::Splashing,
        'x' => StatusEffect::Exploding,
        'f' => StatusEffect::Frozen,
        _ => return None,
    };
    Some(effect)
}

/// Parses one unit against the built-in catalog.
pub fn parse_unit(input: &str) -> Result<Unit, ParseError> {
    UnitCatalog::new().parse_unit(input)
}

/// Parses a comma-separated list against the built-in catalog.
pub fn parse_units(input: &str) -> Result<Vec<Unit>, ParseError> {
    UnitCatalog::new().parse_units(input)
}

impl UnitCatalog {
    /// Parses one unit description.
    pub fn parse_unit(&self, input: &str) -> Result<Unit, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let (head, flags) = match input.split_once('-') {
            Some((head, flags)) => (head, Some(flags)),
            None => (input, None),
        };
        let (name, hp) = match head.split_once(':') {
            Some((name, hp)) => (name, Some(hp)),
            None => (head, None),
        };

        let mut builder = Unit::builder(self.resolve(name.trim(), input)?);

        for flag in flags.into_iter().flat_map(str::chars) {
            let effect = flag_effect(flag).ok_or(ParseError::UnknownFlag(flag))?;
            builder = builder.add_status_effect(effect);
        }
        if let Some(hp) = hp {
            let hp = hp.trim();
            let value = hp
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidHp(hp.to_string()))?;
            builder = builder.current_hp(value);
        }

        Ok(builder.build()?)
    }

    /// Parses a comma-separated list of unit descriptions.
    ///
    /// Blank entries are skipped, so `"wa, ar,"` yields two units.
    pub fn parse_units(&self, input: &str) -> Result<Vec<Unit>, ParseError> {
        input
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| self.parse_unit(part))
            .collect()
    }

    fn resolve(&self, name: &str, input: &str) -> Result<polycalc_core::UnitStats, ParseError> {
        let Some((boat, rest)) = name.split_once('(') else {
            return self
                .get(name)
                .ok_or_else(|| ParseError::UnknownUnit(name.to_string()));
        };
        let cargo = rest
            .strip_suffix(')')
            .ok_or_else(|| ParseError::Malformed(input.to_string()))?;

        let boat_kind = UnitKind::lookup(boat.trim())
            .ok_or_else(|| ParseError::UnknownUnit(boat.trim().to_string()))?;
        let cargo_kind = UnitKind::lookup(cargo.trim())
            .ok_or_else(|| ParseError::UnknownUnit(cargo.trim().to_string()))?;

        naval(boat_kind, cargo_kind).ok_or_else(|| ParseError::NotNaval(boat.trim().to_string()))
    }
}
