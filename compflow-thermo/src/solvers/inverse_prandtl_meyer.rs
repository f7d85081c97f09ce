use compflow_solve::{
    Observer,
    bisection::{self, Action, Config, Event, Status},
};
use uom::si::{angle::radian, f64::Angle};

use crate::{FlowError, relations::prandtl_meyer_radians};

/// Upper end of the Mach search bracket.
pub const MACH_CEILING: f64 = 50.0;

const SOLVER: &str = "inverse Prandtl-Meyer bisection";

/// Finds the Mach number whose Prandtl-Meyer angle is `nu`.
///
/// Searches `M ∈ [1, 50]`, halving the bracket until it is narrower than
/// `1e-6`.
///
/// # Errors
///
/// Returns [`FlowError::Domain`] if `nu` is negative or exceeds `ν(50)`,
/// and [`FlowError::Convergence`] if the iteration bound is reached.
pub fn inverse_prandtl_meyer(nu: Angle, gamma: f64) -> Result<f64, FlowError> {
    inverse_prandtl_meyer_observed(nu, gamma, ())
}

/// Like [`inverse_prandtl_meyer`], reporting each bisection step to
/// `observer`.
///
/// If the observer stops the iteration, the best Mach number found so far
/// is returned.
///
/// # Errors
///
/// Returns [`FlowError::Domain`] if `nu` is negative or exceeds `ν(50)`,
/// and [`FlowError::Convergence`] if the iteration bound is reached.
pub fn inverse_prandtl_meyer_observed<Obs>(
    nu: Angle,
    gamma: f64,
    observer: Obs,
) -> Result<f64, FlowError>
where
    Obs: Observer<Event, Action>,
{
    let target = nu.get::<radian>();
    let ceiling = prandtl_meyer_radians(MACH_CEILING, gamma);

    if !target.is_finite() || target < 0.0 {
        return Err(FlowError::Domain(format!(
            "Prandtl-Meyer angle must be non-negative, got {target} rad"
        )));
    }
    if target > ceiling {
        return Err(FlowError::Domain(format!(
            "Prandtl-Meyer angle {target} rad exceeds ν({MACH_CEILING}) = {ceiling} rad"
        )));
    }

    let solution = bisection::solve(
        |mach| prandtl_meyer_radians(mach, gamma) - target,
        [1.0, MACH_CEILING],
        &config(),
        observer,
    )
    .map_err(|error| FlowError::Convergence {
        solver: SOLVER,
        reason: error.to_string(),
    })?;

    match solution.status {
        Status::Converged | Status::StoppedByObserver => Ok(solution.x),
        Status::MaxIters => Err(FlowError::Convergence {
            solver: SOLVER,
            reason: format!("bracket still open after {} iterations", solution.iters),
        }),
    }
}

fn config() -> Config {
    // Known-good values, unwrap is safe
    Config::new(100, 1e-6, 0.0, 0.0).unwrap()
}
