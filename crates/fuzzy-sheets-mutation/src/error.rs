//! Mutation error types

use thiserror::Error;

use crate::config::Axis;

/// Result type for mutation operations
pub type MutationResult<T> = std::result::Result<T, MutationError>;

/// Errors that can occur while configuring or running mutations
#[derive(Debug, Error)]
pub enum MutationError {
    /// Selection fraction outside [0, 1] or not finite
    #[error("{axis}: percentMutated must be within [0, 1], got {value}")]
    InvalidFraction { axis: Axis, value: f64 },

    /// Fraction handed straight to a sampler outside [0, 1]
    #[error("Sampling fraction must be within [0, 1], got {0}")]
    FractionOutOfRange(f64),

    /// Strength outside [0, 1] or not finite
    #[error("{axis}: strength must be within [0, 1], got {value}")]
    InvalidStrength { axis: Axis, value: f64 },

    /// Configuration could not be parsed
    #[error("Invalid mutation config: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
