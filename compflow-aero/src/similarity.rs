//! Hypersonic similarity for thin panels.
//!
//! For slender surfaces at high Mach number, the surface pressure depends on
//! Mach number and inclination only through the similarity parameter
//! `K = M·θ`. The functions [`shock`] and [`expansion`] return the reduced
//! coefficient `Cp/θ²`; multiply by `θ²` (radians) for `Cp`, or use the
//! `*_pressure_coefficient` helpers.

use compflow_thermo::FlowState;
use uom::si::{angle::radian, f64::Angle};

/// Computes the hypersonic similarity parameter `K = M·|θ|`, `θ` in radians.
#[must_use]
pub fn hypersonic_parameter(mach: f64, theta: Angle) -> f64 {
    mach * theta.get::<radian>().abs()
}

/// Reduced pressure coefficient `Cp/θ²` behind an oblique shock:
/// `2·((γ+1)/4 + sqrt(((γ+1)/4)² + 1/K²))`.
///
/// Diverges as `K → 0`; the product with `θ²` still vanishes there.
#[must_use]
pub fn shock(k: f64, gamma: f64) -> f64 {
    let term = 0.25 * (gamma + 1.0);
    2.0 * (term + (term * term + 1.0 / (k * k)).sqrt())
}

/// Reduced pressure coefficient `Cp/θ²` through an expansion:
/// `2/(γK²)·((1 − (γ−1)/2·K)^(2γ/(γ−1)) − 1)`.
///
/// Past the vacuum limit `K ≥ 2/(γ−1)` the surface pressure is zero and the
/// result is `−2/(γK²)`.
#[must_use]
pub fn expansion(k: f64, gamma: f64) -> f64 {
    let factor = 2.0 / (gamma * k * k);
    let base = (1.0 - 0.5 * (gamma - 1.0) * k).max(0.0);
    factor * (base.powf(2.0 * gamma / (gamma - 1.0)) - 1.0)
}

/// Computes `Cp` on a compression panel inclined at `theta`.
#[must_use]
pub fn shock_pressure_coefficient(mach: f64, theta: Angle, gamma: f64) -> f64 {
    reduced_to_cp(theta, |k| shock(k, gamma), mach)
}

/// Computes `Cp` on an expansion panel turned away from the flow by `theta`.
#[must_use]
pub fn expansion_pressure_coefficient(mach: f64, theta: Angle, gamma: f64) -> f64 {
    reduced_to_cp(theta, |k| expansion(k, gamma), mach)
}

/// Shock-similarity `Cp` for a panel at `theta` in the flow `state`.
#[must_use]
pub fn shock_similarity_cp(state: &FlowState, theta: Angle) -> f64 {
    shock_pressure_coefficient(state.mach(), theta, state.gamma())
}

/// Expansion-similarity `Cp` for a panel at `theta` in the flow `state`.
#[must_use]
pub fn expansion_similarity_cp(state: &FlowState, theta: Angle) -> f64 {
    expansion_pressure_coefficient(state.mach(), theta, state.gamma())
}

fn reduced_to_cp(theta: Angle, reduced: impl Fn(f64) -> f64, mach: f64) -> f64 {
    let k = hypersonic_parameter(mach, theta);
    #[allow(clippy::float_cmp)]
    if k == 0.0 {
        return 0.0;
    }
    let theta = theta.get::<radian>();
    reduced(k) * theta * theta
}
