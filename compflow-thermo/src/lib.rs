//! Perfect-gas flow states and their transitions for supersonic aerodynamics.
//!
//! A [`FlowState`] is built from partial [`FlowConditions`], with missing
//! values filled from the defaults in [`gas`]. From there it can be carried
//! across a normal shock, an oblique shock, or a Prandtl-Meyer expansion fan,
//! each producing a new, immutable `FlowState`.
//!
//! The closed-form ratios live in [`relations`]; the two inversions that need
//! iteration (wave angle from deflection, Mach number from Prandtl-Meyer
//! angle) live in [`solvers`].

mod error;
mod state;

pub mod gas;
pub mod relations;
pub mod solvers;
pub mod units;

pub use error::FlowError;
pub use gas::PerfectGas;
pub use solvers::{ShockAngle, ShockBranch, ShockGeometry};
pub use state::{FlowConditions, FlowState, StagnationState, StateId};
