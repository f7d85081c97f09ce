//! Newton-Raphson iteration from a single starting point.
//!
//! Unlike [`bisection`](crate::bisection), Newton's method has no bracket to
//! keep it honest: which root it lands on depends on the starting point, and
//! it may wander without converging. The iteration is therefore always
//! bounded by [`Config::max_iters`].

mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::Solution;

pub use crate::Status;

use crate::Observer;

/// A scalar equation `f(x) = 0` with a known derivative.
pub trait Problem {
    /// Evaluates `f(x)`.
    fn residual(&self, x: f64) -> f64;

    /// Evaluates `f'(x)`.
    fn derivative(&self, x: f64) -> f64;

    /// Maps an iterate onto the scale used for the convergence test.
    ///
    /// Defaults to the identity. Override when the natural tolerance lives
    /// on a transformed variable, e.g. an angle recovered from its tangent.
    fn measure(&self, x: f64) -> f64 {
        x
    }
}

/// Control actions supported by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early, returning the latest iterate.
    StopEarly,
}

/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate the step started from.
    pub x: f64,
    /// Residual at `x`.
    pub residual: f64,
    /// Iterate the step produced.
    pub next: f64,
    /// Step size on the problem's measure scale.
    pub step: f64,
}

/// Finds a root of `problem` with Newton-Raphson iteration from `x0`.
///
/// Exhausting `max_iters` is not an error: the last iterate is returned with
/// [`Status::MaxIters`] and the caller decides what that means.
///
/// # Errors
///
/// Returns an error if the start is non-finite, the residual is non-finite,
/// or the derivative is zero or non-finite (no step can be taken).
pub fn solve<P, Obs>(
    problem: &P,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: Problem + ?Sized,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteStart { x: x0 });
    }

    let mut x = x0;
    let mut step = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let residual = problem.residual(x);
        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual { x, residual });
        }

        let derivative = problem.derivative(x);
        #[allow(clippy::float_cmp)]
        if derivative == 0.0 || !derivative.is_finite() {
            return Err(Error::DegenerateDerivative { x, derivative });
        }

        let next = x - residual / derivative;
        if !next.is_finite() {
            return Err(Error::DegenerateDerivative { x, derivative });
        }

        let measured = problem.measure(next);
        step = (measured - problem.measure(x)).abs();

        let event = Event {
            iter,
            x,
            residual,
            next,
            step,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: next,
                step,
                iters: iter,
            });
        }

        x = next;

        if config.is_settled(step, measured) {
            return Ok(Solution {
                status: Status::Converged,
                x,
                step,
                iters: iter,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        x,
        step,
        iters: config.max_iters(),
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if the start is non-finite, the residual is non-finite,
/// or the derivative is zero or non-finite.
pub fn solve_unobserved<P>(problem: &P, x0: f64, config: &Config) -> Result<Solution, Error>
where
    P: Problem + ?Sized,
{
    solve(problem, x0, config, ())
}
