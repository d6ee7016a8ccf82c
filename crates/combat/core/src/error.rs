//! Error types shared across the combat crates.
//!
//! The rules themselves never fail. Errors only arise around them: rejecting
//! a configuration, or decoding bytes that do not describe a valid value.

/// Severity level of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input. Retrying without changing it will fail again.
    ///
    /// Examples: inverted hp thresholds, a damage floor below 1
    Validation,

    /// Unexpected failure in a collaborator (encoder, I/O).
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common interface for every error type in the combat crates.
///
/// - Use `#[derive(thiserror::Error)]` for the `Display`/`Error` impls
/// - Classify severity by whether the caller can fix the input
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Rejected configuration value.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("min_damage must be at least {minimum}, got {value}")]
    MinDamageTooLow { value: i32, minimum: i32 },

    #[error("{name} must lie within [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f32 },

    #[error("low hp threshold {low} is above high hp threshold {high}")]
    ThresholdsInverted { low: f32, high: f32 },
}

impl CombatError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MinDamageTooLow { .. } => "CONFIG_MIN_DAMAGE_TOO_LOW",
            Self::ThresholdOutOfRange { .. } => "CONFIG_THRESHOLD_OUT_OF_RANGE",
            Self::ThresholdsInverted { .. } => "CONFIG_THRESHOLDS_INVERTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn config_errors_are_validation_errors() {
        let err = ConfigError::ThresholdsInverted {
            low: 0.8,
            high: 0.2,
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(!err.severity().is_internal());
        assert_eq!(err.error_code(), "CONFIG_THRESHOLDS_INVERTED");
        assert_eq!(
            err.to_string(),
            "low hp threshold 0.8 is above high hp threshold 0.2"
        );
    }
}
