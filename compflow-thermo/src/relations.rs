//! Closed-form ratio relations for a calorically-perfect gas.
//!
//! All ratios are downstream over upstream unless noted. Every function
//! takes the specific-heat ratio `gamma` explicitly and assumes `gamma > 1`,
//! which [`PerfectGas`](crate::PerfectGas) guarantees for any state.

mod isentropic;
mod normal_shock;
mod oblique;
mod prandtl_meyer;

pub use isentropic::{StagnationRatios, stagnation_ratios, stagnation_temperature_ratio};
pub use normal_shock::{NormalShockRatios, normal_shock};
pub use oblique::{deflection_angle, max_deflection_wave_angle};
pub use prandtl_meyer::{ExpansionRatios, expansion_ratios, mach_angle, prandtl_meyer};

pub(crate) use prandtl_meyer::prandtl_meyer_radians;

use crate::FlowError;

/// Rejects Mach numbers below one for relations that only exist in
/// supersonic flow.
fn require_supersonic(mach: f64, relation: &str) -> Result<(), FlowError> {
    if mach.is_finite() && mach >= 1.0 {
        Ok(())
    } else {
        Err(FlowError::Domain(format!(
            "{relation} requires a Mach number of at least 1, got {mach}"
        )))
    }
}
