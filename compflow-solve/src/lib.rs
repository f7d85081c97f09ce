//! Bounded iterative root finders for compflow.
//!
//! Both solvers share one shape: a validated `Config` holding tolerances and
//! an iteration ceiling, a `Solution` tagged with a [`Status`], and an
//! [`Observer`] that sees every iteration and may cut it short.
//!
//! - [`newton`]: Newton-Raphson from a single starting point
//! - [`bisection`]: guaranteed convergence on a sign-changing bracket

mod config;
mod observe;
mod status;

pub mod bisection;
pub mod newton;

pub use config::ConfigError;
pub use observe::Observer;
pub use status::Status;
