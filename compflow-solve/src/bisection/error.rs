use thiserror::Error;

/// Reasons bisection cannot start or continue.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("bracket end {value} is not finite")]
    NonFiniteEnd { value: f64 },

    #[error("bracket [{value}, {value}] has no width")]
    EmptyBracket { value: f64 },

    #[error("f({left}) = {left_residual} and f({right}) = {right_residual} share a sign")]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error("f({x}) = {residual} is not finite")]
    NonFiniteResidual { x: f64, residual: f64 },
}
