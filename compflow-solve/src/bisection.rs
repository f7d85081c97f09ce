//! Bisection on a sign-changing bracket.
//!
//! The residual must be continuous on the bracket and change sign between
//! its ends. Each iteration evaluates the midpoint and keeps the half that
//! still straddles the sign change, so the root is never lost; the cost is
//! linear convergence, one bit per iteration.

mod bracket;
mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::Solution;

pub use crate::Status;

use bracket::{Bracket, Point};

use crate::Observer;

/// Control actions an observer may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the lowest-residual point seen so far.
    StopEarly,
}

/// One bisection iteration, as reported to an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, from 1.
    pub iter: usize,
    /// Bracket before this iteration narrows it, `[low, high]`.
    pub bracket: [f64; 2],
    /// Midpoint evaluated.
    pub x: f64,
    /// Residual at the midpoint.
    pub residual: f64,
}

/// Finds a root of `residual` inside `bracket` by bisection.
///
/// The bracket ends may be given in either order. If an end already
/// satisfies the residual tolerance it is returned without iterating.
///
/// # Errors
///
/// Returns an error if an end is non-finite, the ends are equal, their
/// residuals share a sign, or a residual evaluates to a non-finite value.
pub fn solve<F, Obs>(
    residual: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let (low, high) = Bracket::ends(bracket)?;

    let low = Point::eval(&residual, low)?;
    if config.is_root(low.residual) {
        return Ok(finish(Status::Converged, low, 0));
    }
    let high = Point::eval(&residual, high)?;
    if config.is_root(high.residual) {
        return Ok(finish(Status::Converged, high, 0));
    }

    let mut bracket = Bracket::new(low, high)?;
    let mut best = low.closer(high);

    for iter in 1..=config.max_iters() {
        let mid = Point::eval(&residual, bracket.midpoint())?;
        best = best.closer(mid);

        let event = Event {
            iter,
            bracket: bracket.bounds(),
            x: mid.x,
            residual: mid.residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Status::StoppedByObserver, best, iter));
        }

        if config.is_narrow(bracket.width(), mid.x) || config.is_root(mid.residual) {
            return Ok(finish(Status::Converged, mid, iter));
        }

        bracket.narrow(mid);
    }

    Ok(finish(Status::MaxIters, best, config.max_iters()))
}

/// Runs [`solve`] with no observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(
    residual: F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(residual, bracket, config, ())
}

fn finish(status: Status, point: Point, iters: usize) -> Solution {
    Solution {
        status,
        x: point.x,
        residual: point.residual,
        iters,
    }
}
