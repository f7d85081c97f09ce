/// How an iteration ended.
///
/// Running out of iterations is reported here rather than as an error, so
/// the caller can decide whether the last estimate is good enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The configured tolerances were met.
    Converged,
    /// `max_iters` was exhausted first.
    MaxIters,
    /// An observer asked the solver to stop.
    StoppedByObserver,
}
