//! Pressure coefficient from exact surface pressures.

use uom::si::{f64::Pressure, pressure::pascal};

/// Computes `Cp = 2/(γ·M0²)·(p1/p0 − 1)` for a surface at pressure `p1` in a
/// freestream at Mach `m0` and pressure `p0`.
///
/// [`FlowState::pressure_coefficient`] does the same for two states.
///
/// [`FlowState::pressure_coefficient`]: compflow_thermo::FlowState::pressure_coefficient
#[must_use]
pub fn pressure_coefficient(m0: f64, p0: Pressure, p1: Pressure, gamma: f64) -> f64 {
    2.0 / (gamma * m0 * m0) * (p1.get::<pascal>() / p0.get::<pascal>() - 1.0)
}

/// Computes the pressure coefficient of a surface in vacuum, `−2/(γ·M0²)`,
/// the floor any expansion approaches.
#[must_use]
pub fn vacuum_pressure_coefficient(m0: f64, gamma: f64) -> f64 {
    -2.0 / (gamma * m0 * m0)
}
