use std::f64::consts::FRAC_PI_2;

use compflow_solve::{
    Observer,
    newton::{self, Action, Config, Event, Problem, Status},
};
use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use crate::{
    FlowError,
    relations::{deflection_angle, mach_angle, max_deflection_wave_angle},
};

const SOLVER: &str = "wave-angle Newton-Raphson";

/// Slack allowed when checking a wave angle against the Mach angle, radians.
const MACH_ANGLE_SLACK: f64 = 1e-9;

/// Selects which of the two attached-shock solutions to look for.
///
/// For a deflection below the attached-shock limit, theta-beta-Mach has a
/// weak solution (smaller wave angle, usually supersonic downstream) and a
/// strong one (wave angle near 90°, subsonic downstream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShockBranch {
    #[default]
    Weak,
    Strong,
}

impl ShockBranch {
    /// Starting wave angle for the Newton iteration.
    fn initial_wave_angle(self) -> Angle {
        match self {
            ShockBranch::Weak => Angle::new::<degree>(40.0),
            ShockBranch::Strong => Angle::new::<degree>(80.0),
        }
    }

    /// Classifies an attached shock by its wave angle: strong above the
    /// wave angle of maximum deflection, weak at or below it.
    #[must_use]
    pub fn of_wave_angle(wave_angle: Angle, mach: f64, gamma: f64) -> Self {
        if wave_angle > max_deflection_wave_angle(mach, gamma) {
            ShockBranch::Strong
        } else {
            ShockBranch::Weak
        }
    }
}

/// The angle that specifies an oblique shock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShockAngle {
    /// Wave angle `β` between the shock and the upstream flow.
    Wave(Angle),
    /// Deflection angle `θ` the shock turns the flow through.
    Deflection(Angle),
}

/// A fully resolved oblique shock: both angles and the branch they lie on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockGeometry {
    pub wave_angle: Angle,
    pub deflection: Angle,
    /// The branch of the resolved wave angle, which can differ from the one
    /// requested when the iteration lands on the other root.
    pub branch: ShockBranch,
}

impl ShockGeometry {
    /// Resolves the missing angle for a shock in flow at Mach `mach`.
    ///
    /// A given wave angle yields its deflection directly and `branch` is
    /// ignored; a given deflection is inverted with [`wave_angle`]. Either
    /// way the recorded branch is classified from the wave angle itself.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Domain`] if the flow is subsonic, the wave angle
    /// lies outside `[μ, 90°]`, or the deflection admits no attached shock.
    /// Returns [`FlowError::Convergence`] if the wave-angle solve fails.
    pub fn resolve(
        angle: ShockAngle,
        mach: f64,
        gamma: f64,
        branch: ShockBranch,
    ) -> Result<Self, FlowError> {
        match angle {
            ShockAngle::Wave(beta) => {
                check_wave_angle(beta, mach)?;
                Ok(Self {
                    wave_angle: beta,
                    deflection: deflection_angle(beta, mach, gamma),
                    branch: ShockBranch::of_wave_angle(beta, mach, gamma),
                })
            }
            ShockAngle::Deflection(theta) => {
                let beta = wave_angle(theta, mach, gamma, branch)?;
                Ok(Self {
                    wave_angle: beta,
                    deflection: theta,
                    branch: ShockBranch::of_wave_angle(beta, mach, gamma),
                })
            }
        }
    }
}

/// Theta-beta-Mach rewritten as a cubic in `x = tan β`:
/// `a·x³ − b·x² + c·x + 1 = 0`.
struct WaveAngleCubic {
    a: f64,
    b: f64,
    c: f64,
}

impl WaveAngleCubic {
    fn new(deflection: f64, mach: f64, gamma: f64) -> Self {
        let m_sq = mach * mach;
        let tan_theta = deflection.tan();

        Self {
            a: (1.0 + 0.5 * (gamma - 1.0) * m_sq) * tan_theta,
            b: m_sq - 1.0,
            c: (1.0 + 0.5 * (gamma + 1.0) * m_sq) * tan_theta,
        }
    }
}

impl Problem for WaveAngleCubic {
    fn residual(&self, x: f64) -> f64 {
        ((self.a * x - self.b) * x + self.c) * x + 1.0
    }

    fn derivative(&self, x: f64) -> f64 {
        (3.0 * self.a * x - 2.0 * self.b) * x + self.c
    }

    /// Convergence is judged on the wave angle, not its tangent.
    fn measure(&self, x: f64) -> f64 {
        x.atan()
    }
}

/// Solves theta-beta-Mach for the wave angle of a shock that turns flow at
/// Mach `mach` through `deflection`.
///
/// Newton-Raphson starts from `β = 40°` for the weak branch and `β = 80°`
/// for the strong branch and stops once successive wave angles agree to
/// `1e-6` rad, within 100 iterations.
///
/// The starting points bracket the two physical roots for typical inputs,
/// but nothing forces the iteration onto the requested branch: at high Mach
/// numbers the strong start can fall onto the weak root. Check the result
/// with [`ShockBranch::of_wave_angle`] when it matters.
///
/// # Errors
///
/// Returns [`FlowError::Domain`] if the flow is subsonic, the deflection is
/// outside `[0°, 90°)`, or the iteration settles on a root below the Mach
/// angle (the deflection exceeds the attached-shock limit).
/// Returns [`FlowError::Convergence`] if the iteration fails to settle.
pub fn wave_angle(
    deflection: Angle,
    mach: f64,
    gamma: f64,
    branch: ShockBranch,
) -> Result<Angle, FlowError> {
    wave_angle_observed(deflection, mach, gamma, branch, ())
}

/// Like [`wave_angle`], reporting each Newton step to `observer`.
///
/// If the observer stops the iteration, the latest estimate is returned
/// after the same physical checks.
///
/// # Errors
///
/// See [`wave_angle`].
pub fn wave_angle_observed<Obs>(
    deflection: Angle,
    mach: f64,
    gamma: f64,
    branch: ShockBranch,
    observer: Obs,
) -> Result<Angle, FlowError>
where
    Obs: Observer<Event, Action>,
{
    let mu = mach_angle(mach)?.get::<radian>();

    let theta = deflection.get::<radian>();
    if !theta.is_finite() || !(0.0..FRAC_PI_2).contains(&theta) {
        return Err(FlowError::Domain(format!(
            "deflection must lie in [0°, 90°), got {}°",
            deflection.get::<degree>()
        )));
    }

    let cubic = WaveAngleCubic::new(theta, mach, gamma);
    let x0 = branch.initial_wave_angle().get::<radian>().tan();

    let solution =
        newton::solve(&cubic, x0, &config(), observer).map_err(|error| FlowError::Convergence {
            solver: SOLVER,
            reason: error.to_string(),
        })?;

    if solution.status == Status::MaxIters {
        return Err(FlowError::Convergence {
            solver: SOLVER,
            reason: format!(
                "last step {} rad after {} iterations",
                solution.step, solution.iters
            ),
        });
    }

    let beta = solution.x.atan();
    if beta < mu - MACH_ANGLE_SLACK {
        return Err(FlowError::Domain(format!(
            "no attached shock turns Mach {mach} flow through {}°",
            deflection.get::<degree>()
        )));
    }

    Ok(Angle::new::<radian>(beta))
}

/// Rejects wave angles outside `[μ, 90°]`.
fn check_wave_angle(wave_angle: Angle, mach: f64) -> Result<(), FlowError> {
    let mu = mach_angle(mach)?.get::<radian>();
    let beta = wave_angle.get::<radian>();

    if beta.is_finite() && beta >= mu - MACH_ANGLE_SLACK && beta <= FRAC_PI_2 + MACH_ANGLE_SLACK {
        Ok(())
    } else {
        Err(FlowError::Domain(format!(
            "wave angle must lie between the Mach angle {}° and 90°, got {}°",
            mu.to_degrees(),
            wave_angle.get::<degree>()
        )))
    }
}

fn config() -> Config {
    // Known-good values, unwrap is safe
    Config::new(100, 1e-6, 0.0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn deg(value: f64) -> Angle {
        Angle::new::<degree>(value)
    }

    #[test]
    fn weak_shock_at_mach_two() {
        let beta = wave_angle(deg(20.0), 2.0, 1.4, ShockBranch::Weak).unwrap();
        assert_relative_eq!(beta.get::<degree>(), 53.4229, epsilon = 1e-3);
    }

    #[test]
    fn strong_shock_at_mach_two() {
        let beta = wave_angle(deg(20.0), 2.0, 1.4, ShockBranch::Strong).unwrap();
        assert_relative_eq!(beta.get::<degree>(), 74.2701, epsilon = 1e-3);
    }

    #[test]
    fn weak_shock_at_mach_ten() {
        let beta = wave_angle(deg(18.0), 10.0, 1.4, ShockBranch::Weak).unwrap();
        assert_relative_eq!(beta.get::<degree>(), 23.4308, epsilon = 1e-3);
    }

    #[test]
    fn strong_start_can_fall_onto_weak_root() {
        let beta = wave_angle(deg(18.0), 10.0, 1.4, ShockBranch::Strong).unwrap();
        assert_relative_eq!(beta.get::<degree>(), 23.4308, epsilon = 1e-3);
    }

    #[test]
    fn zero_deflection_is_a_mach_wave() {
        let beta = wave_angle(deg(0.0), 2.0, 1.4, ShockBranch::Weak).unwrap();
        assert_relative_eq!(beta.get::<degree>(), 30.0, epsilon = 1e-4);
    }

    #[test]
    fn solution_satisfies_theta_beta_mach() {
        for (mach, theta) in [(1.8, 5.0), (3.0, 25.0), (6.0, 30.0), (20.0, 40.0)] {
            let beta = wave_angle(deg(theta), mach, 1.4, ShockBranch::Weak).unwrap();
            assert_relative_eq!(
                deflection_angle(beta, mach, 1.4).get::<degree>(),
                theta,
                epsilon = 1e-3
            );
        }
    }

    #[test]
    fn detached_shock_is_a_domain_error() {
        // θ_max ≈ 22.97° at M = 2.
        let result = wave_angle(deg(30.0), 2.0, 1.4, ShockBranch::Weak);
        assert!(matches!(result, Err(FlowError::Domain(_))));
    }

    #[test]
    fn rejects_subsonic_flow_and_bad_deflections() {
        assert!(matches!(
            wave_angle(deg(10.0), 0.8, 1.4, ShockBranch::Weak),
            Err(FlowError::Domain(_))
        ));
        assert!(matches!(
            wave_angle(deg(-5.0), 2.0, 1.4, ShockBranch::Weak),
            Err(FlowError::Domain(_))
        ));
        assert!(matches!(
            wave_angle(deg(90.0), 2.0, 1.4, ShockBranch::Weak),
            Err(FlowError::Domain(_))
        ));
    }

    #[test]
    fn observer_sees_each_newton_step() {
        let mut steps = 0usize;
        let observer = |_: &Event| {
            steps += 1;
            None::<Action>
        };

        wave_angle_observed(deg(20.0), 2.0, 1.4, ShockBranch::Weak, observer).unwrap();
        assert!((2..10).contains(&steps));
    }

    #[test]
    fn resolve_from_wave_angle_classifies_it() {
        let geometry =
            ShockGeometry::resolve(ShockAngle::Wave(deg(53.4229)), 2.0, 1.4, ShockBranch::Strong)
                .unwrap();

        assert_eq!(geometry.branch, ShockBranch::Weak);
        assert_relative_eq!(geometry.deflection.get::<degree>(), 20.0, epsilon = 1e-3);

        let normal =
            ShockGeometry::resolve(ShockAngle::Wave(deg(90.0)), 2.0, 1.4, ShockBranch::Weak)
                .unwrap();
        assert_eq!(normal.branch, ShockBranch::Strong);
    }

    #[test]
    fn resolve_from_deflection_records_branch() {
        let weak =
            ShockGeometry::resolve(ShockAngle::Deflection(deg(20.0)), 2.0, 1.4, ShockBranch::Weak)
                .unwrap();
        assert_eq!(weak.branch, ShockBranch::Weak);
        assert_relative_eq!(weak.wave_angle.get::<degree>(), 53.4229, epsilon = 1e-3);

        let strong = ShockGeometry::resolve(
            ShockAngle::Deflection(deg(20.0)),
            2.0,
            1.4,
            ShockBranch::Strong,
        )
        .unwrap();
        assert_eq!(strong.branch, ShockBranch::Strong);
    }

    #[test]
    fn resolve_reports_the_root_reached_not_the_one_requested() {
        let high_mach = ShockGeometry::resolve(
            ShockAngle::Deflection(deg(18.0)),
            10.0,
            1.4,
            ShockBranch::Strong,
        )
        .unwrap();
        assert_relative_eq!(high_mach.wave_angle.get::<degree>(), 23.4308, epsilon = 1e-3);
        assert_eq!(high_mach.branch, ShockBranch::Weak);

        let mach_wave = ShockGeometry::resolve(
            ShockAngle::Deflection(deg(0.0)),
            2.0,
            1.4,
            ShockBranch::Strong,
        )
        .unwrap();
        assert_relative_eq!(mach_wave.wave_angle.get::<degree>(), 30.0, epsilon = 1e-4);
        assert_eq!(mach_wave.branch, ShockBranch::Weak);
    }

    #[test]
    fn resolve_rejects_wave_angle_below_mach_angle() {
        let result =
            ShockGeometry::resolve(ShockAngle::Wave(deg(25.0)), 2.0, 1.4, ShockBranch::Weak);
        assert!(matches!(result, Err(FlowError::Domain(_))));
    }
}
