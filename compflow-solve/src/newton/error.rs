use thiserror::Error;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("starting point is not finite: {x}")]
    NonFiniteStart { x: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("derivative {derivative} at x = {x} cannot produce a step")]
    DegenerateDerivative { x: f64, derivative: f64 },
}
