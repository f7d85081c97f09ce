use uom::si::{angle::radian, f64::Angle};

use crate::FlowError;

use super::{isentropic::stagnation_temperature_ratio, require_supersonic};

/// Downstream-over-upstream ratios across an isentropic expansion fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionRatios {
    /// `T2/T1`.
    pub temperature: f64,
    /// `P2/P1`.
    pub pressure: f64,
    /// `ρ2/ρ1`.
    pub density: f64,
    /// `M2/M1`.
    pub mach: f64,
}

/// Computes the Prandtl-Meyer function `ν(M)`.
///
/// `ν(M) = sqrt((γ+1)/(γ−1))·atan(sqrt((γ−1)(M²−1)/(γ+1))) − atan(sqrt(M²−1))`
///
/// `ν` is zero at `M = 1` and strictly increasing above it.
///
/// # Errors
///
/// Returns [`FlowError::Domain`] if `mach < 1`.
pub fn prandtl_meyer(mach: f64, gamma: f64) -> Result<Angle, FlowError> {
    require_supersonic(mach, "the Prandtl-Meyer function")?;
    Ok(Angle::new::<radian>(prandtl_meyer_radians(mach, gamma)))
}

/// Unchecked `ν(M)` in radians, for callers that already hold `M ≥ 1`.
pub(crate) fn prandtl_meyer_radians(mach: f64, gamma: f64) -> f64 {
    let m_sq_minus_one = mach * mach - 1.0;
    let scale = ((gamma + 1.0) / (gamma - 1.0)).sqrt();

    scale * (m_sq_minus_one / (scale * scale)).sqrt().atan() - m_sq_minus_one.sqrt().atan()
}

/// Computes the ratios across an expansion fan taking the flow from `m1`
/// to `m2`.
///
/// The expansion is isentropic, so `T2/T1 = (T0/T)(M1) / (T0/T)(M2)` and
/// the pressure and density ratios follow from the isentropic exponents.
///
/// # Errors
///
/// Returns [`FlowError::Domain`] if either Mach number is below one.
pub fn expansion_ratios(m1: f64, m2: f64, gamma: f64) -> Result<ExpansionRatios, FlowError> {
    require_supersonic(m1, "an expansion fan")?;
    require_supersonic(m2, "an expansion fan")?;

    let temperature =
        stagnation_temperature_ratio(m1, gamma) / stagnation_temperature_ratio(m2, gamma);

    Ok(ExpansionRatios {
        temperature,
        pressure: temperature.powf(gamma / (gamma - 1.0)),
        density: temperature.powf(1.0 / (gamma - 1.0)),
        mach: m2 / m1,
    })
}

/// Computes the Mach angle `μ = asin(1/M)`.
///
/// # Errors
///
/// Returns [`FlowError::Domain`] if `mach < 1`.
pub fn mach_angle(mach: f64) -> Result<Angle, FlowError> {
    require_supersonic(mach, "a Mach angle")?;
    Ok(Angle::new::<radian>((1.0 / mach).asin()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::angle::degree;

    #[test]
    fn textbook_values() {
        assert_relative_eq!(
            prandtl_meyer(1.0, 1.4).unwrap().get::<degree>(),
            0.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            prandtl_meyer(2.0, 1.4).unwrap().get::<degree>(),
            26.379_76,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            prandtl_meyer(3.0, 1.4).unwrap().get::<degree>(),
            49.757_35,
            epsilon = 1e-5
        );
    }

    #[test]
    fn strictly_increasing_above_mach_one() {
        let mut previous = prandtl_meyer_radians(1.0, 1.4);
        for i in 1..=500 {
            let mach = 1.0 + 0.1 * f64::from(i);
            let nu = prandtl_meyer_radians(mach, 1.4);
            assert!(nu > previous, "ν not increasing at M = {mach}");
            previous = nu;
        }
    }

    #[test]
    fn approaches_maximum_turning_angle() {
        // ν_max = (sqrt((γ+1)/(γ−1)) − 1)·π/2 = 130.454° for γ = 1.4.
        let nu = prandtl_meyer(1e6, 1.4).unwrap().get::<degree>();
        assert_relative_eq!(nu, 130.454_077, epsilon = 1e-3);
    }

    #[test]
    fn subsonic_flow_is_rejected() {
        assert!(matches!(prandtl_meyer(0.9, 1.4), Err(FlowError::Domain(_))));
        assert!(matches!(mach_angle(0.9), Err(FlowError::Domain(_))));
        assert!(matches!(
            expansion_ratios(2.0, 0.9, 1.4),
            Err(FlowError::Domain(_))
        ));
    }

    #[test]
    fn expansion_lowers_pressure_and_temperature() {
        let r = expansion_ratios(2.0, 3.0, 1.4).unwrap();

        // T2/T1 = 1.8 / 2.8
        assert_relative_eq!(r.temperature, 1.8 / 2.8);
        assert_relative_eq!(r.pressure, (1.8_f64 / 2.8).powf(3.5));
        assert_relative_eq!(r.density, (1.8_f64 / 2.8).powf(2.5));
        assert_relative_eq!(r.mach, 1.5);
    }

    #[test]
    fn mach_angle_at_mach_two() {
        assert_relative_eq!(mach_angle(2.0).unwrap().get::<degree>(), 30.0, epsilon = 1e-12);
    }
}
