//! Iterative inversions of the flow relations.
//!
//! - [`wave_angle`] inverts theta-beta-Mach for the shock wave angle using
//!   Newton-Raphson on a cubic in `tan β`.
//! - [`inverse_prandtl_meyer`] inverts `ν(M)` for the Mach number by
//!   bisection on `[1, 50]`.
//!
//! Each has an `_observed` variant that forwards every iteration to an
//! [`Observer`](compflow_solve::Observer), for callers that want to trace
//! or cut short the iteration.

mod inverse_prandtl_meyer;
mod wave_angle;

pub use inverse_prandtl_meyer::{
    MACH_CEILING, inverse_prandtl_meyer, inverse_prandtl_meyer_observed,
};
pub use wave_angle::{ShockAngle, ShockBranch, ShockGeometry, wave_angle, wave_angle_observed};
