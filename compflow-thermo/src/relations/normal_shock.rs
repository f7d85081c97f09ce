use crate::FlowError;

use super::{isentropic::stagnation_ratios, require_supersonic};

/// Downstream-over-upstream ratios across a normal shock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalShockRatios {
    /// `P2/P1`.
    pub pressure: f64,
    /// `U2/U1`.
    pub velocity: f64,
    /// `ρ2/ρ1`.
    pub density: f64,
    /// `T2/T1`.
    pub temperature: f64,
    /// `M2/M1`.
    pub mach: f64,
    /// `P02/P01`, the stagnation pressure loss through the shock.
    pub stagnation_pressure: f64,
}

/// Computes the ratios across a normal shock with upstream Mach `m1`.
///
/// - `P2/P1 = 1 + 2γ/(γ+1)·(M1² − 1)`
/// - `U2/U1 = (2 + (γ−1)·M1²) / ((γ+1)·M1²)`, and `ρ2/ρ1` is its reciprocal
/// - `T2/T1 = (P2/P1)·(U2/U1)`
/// - `M2² = (1 + (γ−1)/2·M1²) / (γ·M1² − (γ−1)/2)`
///
/// At `M1 = 1` every ratio is one: the shock degenerates to a Mach wave.
///
/// # Errors
///
/// Returns [`FlowError::Domain`] if `m1 < 1`, since no shock exists in
/// subsonic flow.
pub fn normal_shock(m1: f64, gamma: f64) -> Result<NormalShockRatios, FlowError> {
    require_supersonic(m1, "a normal shock")?;

    let m1_sq = m1 * m1;
    let pressure = 1.0 + 2.0 * gamma / (gamma + 1.0) * (m1_sq - 1.0);
    let velocity = (2.0 + (gamma - 1.0) * m1_sq) / ((gamma + 1.0) * m1_sq);
    let temperature = pressure * velocity;

    let m2_sq = (1.0 + 0.5 * (gamma - 1.0) * m1_sq) / (gamma * m1_sq - 0.5 * (gamma - 1.0));
    let m2 = m2_sq.sqrt();

    let stagnation_pressure =
        pressure * stagnation_ratios(m2, gamma).pressure / stagnation_ratios(m1, gamma).pressure;

    Ok(NormalShockRatios {
        pressure,
        velocity,
        density: 1.0 / velocity,
        temperature,
        mach: m2 / m1,
        stagnation_pressure,
    })
}
