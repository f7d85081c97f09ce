//! Newtonian impact theory.

use uom::si::{angle::radian, f64::Angle};

/// Computes the Newtonian pressure coefficient `Cp = 2·sin²θ` for a panel
/// inclined at `theta` to the freestream.
///
/// A panel with `θ ≤ 0` faces away from the flow and sees no impact
/// pressure, so its coefficient is zero.
#[must_use]
pub fn pressure_coefficient(theta: Angle) -> f64 {
    let theta = theta.get::<radian>();
    if theta <= 0.0 {
        return 0.0;
    }
    let s = theta.sin();
    2.0 * s * s
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::angle::degree;

    #[test]
    fn windward_panel() {
        let cp = pressure_coefficient(Angle::new::<degree>(10.0));
        assert_relative_eq!(cp, 0.060_307_379, epsilon = 1e-9);
    }

    #[test]
    fn normal_panel_reaches_stagnation_limit() {
        assert_relative_eq!(pressure_coefficient(Angle::new::<degree>(90.0)), 2.0);
    }

    #[test]
    fn shadowed_panel_is_zero() {
        assert_relative_eq!(pressure_coefficient(Angle::new::<degree>(0.0)), 0.0);
        assert_relative_eq!(pressure_coefficient(Angle::new::<degree>(-15.0)), 0.0);
    }
}
