use crate::Status;

/// The outcome of [`solve`](super::solve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub status: Status,
    /// The converged midpoint, or the lowest-residual point seen when the
    /// iteration ended any other way.
    pub x: f64,
    /// `f(x)`.
    pub residual: f64,
    /// Midpoints evaluated.
    pub iters: usize,
}
