use crate::{ConfigError, config::tolerance};

/// Stopping rules for [`solve`](super::solve).
///
/// The iteration stops at the first midpoint where either the bracket width
/// is within `abs_width_tol + rel_width_tol·|x|`, or `|f(x)| ≤ residual_tol`.
/// Zero disables a rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    abs_width_tol: f64,
    rel_width_tol: f64,
    residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-12, 1e-12, 1e-12).unwrap()
    }
}

impl Config {
    /// Creates a config, rejecting negative or non-finite tolerances.
    ///
    /// `max_iters` may be zero, in which case only the bracket ends are
    /// evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] naming the offending tolerance.
    pub fn new(
        max_iters: usize,
        abs_width_tol: f64,
        rel_width_tol: f64,
        residual_tol: f64,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            max_iters,
            abs_width_tol: tolerance("abs_width_tol", abs_width_tol)?,
            rel_width_tol: tolerance("rel_width_tol", rel_width_tol)?,
            residual_tol: tolerance("residual_tol", residual_tol)?,
        })
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Whether a bracket of `width` around `x` is narrow enough.
    pub(super) fn is_narrow(&self, width: f64, x: f64) -> bool {
        width <= self.abs_width_tol + self.rel_width_tol * x.abs()
    }

    /// Whether `residual` is small enough to accept as a root.
    pub(super) fn is_root(&self, residual: f64) -> bool {
        residual.abs() <= self.residual_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_rejected_tolerance() {
        assert!(matches!(
            Config::new(10, -1.0, 0.0, 0.0),
            Err(ConfigError::Tolerance { name: "abs_width_tol", .. })
        ));
        assert!(matches!(
            Config::new(10, 0.0, f64::NAN, 0.0),
            Err(ConfigError::Tolerance { name: "rel_width_tol", .. })
        ));
        assert!(matches!(
            Config::new(10, 0.0, 0.0, f64::INFINITY),
            Err(ConfigError::Tolerance { name: "residual_tol", .. })
        ));
    }

    #[test]
    fn width_rule_scales_with_x() {
        let config = Config::new(5, 1e-6, 1e-3, 0.0).expect("valid config");
        assert_eq!(config.max_iters(), 5);
        assert_eq!(config.residual_tol(), 0.0);
        assert!(config.is_narrow(0.5, 1000.0));
        assert!(!config.is_narrow(0.5, 1.0));
    }
}
