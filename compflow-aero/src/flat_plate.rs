mod solution;

pub use solution::{PanelCoefficients, PanelSolution};

use std::f64::consts::FRAC_PI_2;

use compflow_thermo::{
    FlowState, ShockAngle, ShockBranch, relations::prandtl_meyer, solvers::MACH_CEILING,
};
use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use crate::{PanelError, exact, newtonian, similarity};

/// The theory used to estimate surface pressures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Oblique shock on the windward side, Prandtl-Meyer fan on the leeward.
    Exact,
    /// Newtonian impact on the windward side, zero on the leeward.
    Newtonian,
    /// Hypersonic shock and expansion similarity.
    Similarity,
}

impl Method {
    /// Every method, in report order.
    pub const ALL: [Method; 3] = [Method::Exact, Method::Newtonian, Method::Similarity];

    /// Column heading used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Method::Exact => "Exact",
            Method::Newtonian => "Newtonian",
            Method::Similarity => "Similarity",
        }
    }
}

/// An infinitely thin flat plate at an angle of attack in a supersonic
/// freestream.
///
/// A positive angle of attack pitches the nose up, so the lower surface
/// turns the flow into itself through an oblique shock and the upper surface
/// turns it away through an expansion fan. A negative angle mirrors this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatPlate {
    freestream: FlowState,
    angle_of_attack: Angle,
}

impl FlatPlate {
    /// Creates a plate in `freestream` at `angle_of_attack`.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Domain`] unless the angle lies strictly
    /// between -90° and 90°.
    pub fn new(freestream: FlowState, angle_of_attack: Angle) -> Result<Self, PanelError> {
        let alpha = angle_of_attack.get::<radian>();
        if !alpha.is_finite() || alpha.abs() >= FRAC_PI_2 {
            return Err(PanelError::Domain(format!(
                "angle of attack must lie strictly between -90° and 90°, got {}°",
                angle_of_attack.get::<degree>()
            )));
        }

        Ok(Self {
            freestream,
            angle_of_attack,
        })
    }

    /// Returns the freestream state.
    #[must_use]
    pub fn freestream(&self) -> &FlowState {
        &self.freestream
    }

    /// Returns the angle of attack.
    #[must_use]
    pub fn angle_of_attack(&self) -> Angle {
        self.angle_of_attack
    }

    /// Computes surface pressures and force coefficients with every
    /// [`Method`].
    ///
    /// # Errors
    ///
    /// When the leeward fan would carry the flow past Mach
    /// [`MACH_CEILING`], no expansion state is built and the exact leeward
    /// surface takes the vacuum limit `Cp = −2/(γM²)`.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Flow`] if the exact surface states cannot be
    /// built: subsonic freestream or a detached shock (angle of attack beyond
    /// the maximum deflection).
    pub fn solve(&self) -> Result<PanelSolution, PanelError> {
        let inclination = self.inclination();
        let mach = self.freestream.mach();
        let gamma = self.freestream.gamma();

        let compression = self
            .freestream
            .oblique_shock(ShockAngle::Deflection(inclination), ShockBranch::Weak)?;
        let expansion = if self.expands_past_ceiling(inclination)? {
            None
        } else {
            Some(self.freestream.expansion_fan(inclination)?)
        };

        let exact_leeward = match &expansion {
            Some(state) => exact::pressure_coefficient(
                mach,
                self.freestream.pressure(),
                state.pressure(),
                gamma,
            ),
            None => exact::vacuum_pressure_coefficient(mach, gamma),
        };
        let exact = self.coefficients(
            exact::pressure_coefficient(
                mach,
                self.freestream.pressure(),
                compression.pressure(),
                gamma,
            ),
            exact_leeward,
        );

        let newtonian = self.coefficients(newtonian::pressure_coefficient(inclination), 0.0);

        let similarity = self.coefficients(
            similarity::shock_pressure_coefficient(mach, inclination, gamma),
            similarity::expansion_pressure_coefficient(mach, inclination, gamma),
        );

        Ok(PanelSolution {
            angle_of_attack: self.angle_of_attack,
            compression,
            expansion,
            exact,
            newtonian,
            similarity,
        })
    }

    /// Whether turning the freestream through `inclination` needs a
    /// Prandtl-Meyer angle beyond `ν(MACH_CEILING)`.
    fn expands_past_ceiling(&self, inclination: Angle) -> Result<bool, PanelError> {
        let gamma = self.freestream.gamma();
        let nu = prandtl_meyer(self.freestream.mach(), gamma)? + inclination;
        Ok(nu > prandtl_meyer(MACH_CEILING, gamma)?)
    }

    /// Magnitude of the plate's inclination to the freestream.
    fn inclination(&self) -> Angle {
        Angle::new::<radian>(self.angle_of_attack.get::<radian>().abs())
    }

    /// Places the windward and leeward coefficients on the lower and upper
    /// surfaces according to the sign of the angle of attack.
    fn coefficients(&self, windward: f64, leeward: f64) -> PanelCoefficients {
        let alpha = self.angle_of_attack.get::<radian>();
        let (cp_lower, cp_upper) = if alpha >= 0.0 {
            (windward, leeward)
        } else {
            (leeward, windward)
        };
        PanelCoefficients::new(cp_lower, cp_upper, alpha)
    }
}
