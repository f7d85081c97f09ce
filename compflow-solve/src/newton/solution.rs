use crate::Status;

/// The outcome of [`solve`](super::solve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub status: Status,
    /// Latest iterate.
    pub x: f64,
    /// Size of the last step, on the problem's measure scale.
    pub step: f64,
    /// Newton steps taken.
    pub iters: usize,
}
