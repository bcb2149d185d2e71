//! Unit construction and mutation errors.

use crate::error::{CalcError, ErrorSeverity};
use crate::unit::StatusEffect;

/// Errors raised when a unit would violate one of its invariants.
///
/// Both variants are local precondition violations surfaced synchronously to
/// the caller; nothing inside the crate retries or recovers from them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// Unit constructed in a state that violates an invariant.
    #[error("invalid unit state: {reason}")]
    InvalidState {
        /// Which invariant was violated.
        reason: &'static str,
    },

    /// Status effect disallowed by the unit's traits.
    #[error("cannot apply {effect}: {reason}")]
    InvalidEffect {
        /// The rejected effect.
        effect: StatusEffect,
        /// Which trait constraint rejected it.
        reason: &'static str,
    },
}

impl CalcError for UnitError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidState { .. } => "UNIT_INVALID_STATE",
            Self::InvalidEffect { .. } => "UNIT_INVALID_EFFECT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_effect() {
        let err = UnitError::InvalidEffect {
            effect: StatusEffect::Veteran,
            reason: "static units cannot become veterans",
        };
        assert_eq!(
            err.to_string(),
            "cannot apply veteran: static units cannot become veterans"
        );
        assert_eq!(err.error_code(), "UNIT_INVALID_EFFECT");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.severity().as_str(), "validation");
    }
}
