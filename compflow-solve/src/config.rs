use thiserror::Error;

/// A solver configuration value was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("a solver needs at least one iteration")]
    NoIterations,

    #[error("{name} must be finite and non-negative, got {value}")]
    Tolerance { name: &'static str, value: f64 },
}

/// Accepts finite, non-negative tolerances.
pub(crate) fn tolerance(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Tolerance { name, value })
    }
}
