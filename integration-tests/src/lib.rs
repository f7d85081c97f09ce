//! Shared fixtures for the cross-crate tests.

use compflow_thermo::{FlowConditions, FlowState};
use uom::si::{angle::degree, f64::Angle};

/// Builds a sea-level air freestream at Mach `mach`.
///
/// # Panics
///
/// Panics if `mach` is not positive.
#[must_use]
pub fn freestream(mach: f64) -> FlowState {
    FlowState::new(FlowConditions::mach(mach)).expect("positive Mach number")
}

/// Shorthand for an angle in degrees.
#[must_use]
pub fn deg(value: f64) -> Angle {
    Angle::new::<degree>(value)
}
