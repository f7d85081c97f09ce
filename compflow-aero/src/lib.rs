//! Surface pressure and force coefficients for supersonic and hypersonic
//! panels.
//!
//! Three levels of theory are provided, from cheapest to most faithful:
//!
//! - [`newtonian`]: Newtonian impact theory (`Cp = 2 sin²θ`), windward side only.
//! - [`similarity`]: hypersonic similarity in the parameter `K = M·θ`.
//! - [`exact`]: oblique-shock and Prandtl-Meyer states built with
//!   [`compflow_thermo`].
//!
//! [`FlatPlate`] compares all three for a plate at an angle of attack.

mod error;
mod flat_plate;

pub mod exact;
pub mod newtonian;
pub mod similarity;

pub use error::PanelError;
pub use flat_plate::{FlatPlate, Method, PanelCoefficients, PanelSolution};
