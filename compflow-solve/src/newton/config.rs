use crate::{ConfigError, config::tolerance};

/// Stopping rules for [`solve`](super::solve).
///
/// Convergence is declared when successive iterates, compared on the
/// problem's [`measure`] scale, differ by strictly less than
/// `abs_tol + rel_tol·|m|`, where `m` is the measure of the newer iterate.
/// With both tolerances zero the iteration runs to `max_iters`.
///
/// [`measure`]: super::Problem::measure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    abs_tol: f64,
    rel_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-12, 1e-12).unwrap()
    }
}

impl Config {
    /// Creates a config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoIterations`] if `max_iters` is zero, and
    /// [`ConfigError::Tolerance`] for a negative or non-finite tolerance.
    pub fn new(max_iters: usize, abs_tol: f64, rel_tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::NoIterations);
        }

        Ok(Self {
            max_iters,
            abs_tol: tolerance("abs_tol", abs_tol)?,
            rel_tol: tolerance("rel_tol", rel_tol)?,
        })
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Whether a step of `step` ending at measure `measured` is converged.
    pub(super) fn is_settled(&self, step: f64, measured: f64) -> bool {
        step < self.abs_tol + self.rel_tol * measured.abs()
    }
}
