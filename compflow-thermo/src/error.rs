use thiserror::Error;

/// Errors that may occur when building or transforming a flow state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The supplied conditions are incomplete or contradictory.
    ///
    /// For example, neither (or both) of velocity and Mach number given.
    #[error("invalid input: {0}")]
    Input(String),

    /// A value lies outside the domain where the relation is physical.
    ///
    /// Covers subsonic flow into a shock, gas constants out of range, and
    /// solver targets outside the searchable bracket.
    #[error("outside physical domain: {0}")]
    Domain(String),

    /// An iterative solver failed to meet its tolerance.
    #[error("{solver} did not converge: {reason}")]
    Convergence {
        solver: &'static str,
        reason: String,
    },
}
