//! Simulator errors.

use combat_core::{CombatError, ConfigError, ErrorSeverity};

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("max_turns must be at least 1")]
    ZeroMaxTurns,

    #[error("failed to serialize report: {0}")]
    Output(#[from] serde_json::Error),
}

impl CombatError for SimError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(_) | Self::ZeroMaxTurns => ErrorSeverity::Validation,
            Self::Output(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "SIM_CONFIG",
            Self::ZeroMaxTurns => "SIM_ZERO_MAX_TURNS",
            Self::Output(_) => "SIM_OUTPUT",
        }
    }
}
