use std::fmt;

use compflow_thermo::FlowState;
use uom::si::{angle::degree, f64::Angle};

use super::Method;

/// Surface pressures and force coefficients from one [`Method`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelCoefficients {
    /// Pressure coefficient on the lower surface.
    pub cp_lower: f64,
    /// Pressure coefficient on the upper surface.
    pub cp_upper: f64,
    /// Normal-force coefficient, `Cp_lower − Cp_upper`.
    pub normal: f64,
    /// Lift coefficient, `C_N·cos α`.
    pub lift: f64,
    /// Drag coefficient, `C_N·sin α`.
    pub drag: f64,
    /// `|C_L / C_D|`, or `None` when the plate has no drag.
    pub lift_to_drag: Option<f64>,
}

impl PanelCoefficients {
    pub(super) fn new(cp_lower: f64, cp_upper: f64, alpha: f64) -> Self {
        let normal = cp_lower - cp_upper;
        let lift = normal * alpha.cos();
        let drag = normal * alpha.sin();

        #[allow(clippy::float_cmp)]
        let lift_to_drag = if drag == 0.0 {
            None
        } else {
            Some((lift / drag).abs())
        };

        Self {
            cp_lower,
            cp_upper,
            normal,
            lift,
            drag,
            lift_to_drag,
        }
    }
}

/// The result of [`FlatPlate::solve`](super::FlatPlate::solve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSolution {
    pub(super) angle_of_attack: Angle,
    pub(super) compression: FlowState,
    pub(super) expansion: Option<FlowState>,
    pub(super) exact: PanelCoefficients,
    pub(super) newtonian: PanelCoefficients,
    pub(super) similarity: PanelCoefficients,
}

impl PanelSolution {
    /// Returns the coefficients computed with `method`.
    #[must_use]
    pub fn get(&self, method: Method) -> &PanelCoefficients {
        match method {
            Method::Exact => &self.exact,
            Method::Newtonian => &self.newtonian,
            Method::Similarity => &self.similarity,
        }
    }

    /// Returns the angle of attack the plate was solved at.
    #[must_use]
    pub fn angle_of_attack(&self) -> Angle {
        self.angle_of_attack
    }

    /// Returns the state behind the windward oblique shock.
    #[must_use]
    pub fn compression(&self) -> &FlowState {
        &self.compression
    }

    /// Returns the state behind the leeward expansion fan, or `None` when
    /// the fan would pass the inverse Prandtl-Meyer ceiling and the exact
    /// leeward pressure was taken as vacuum.
    #[must_use]
    pub fn expansion(&self) -> Option<&FlowState> {
        self.expansion.as_ref()
    }
}

/// A side-by-side table of every method's coefficients.
impl fmt::Display for PanelSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(42);
        let spacer = "     |    --      |    --      |    --      |";

        writeln!(
            f,
            "flat plate at alpha = {:.3} deg",
            self.angle_of_attack.get::<degree>()
        )?;
        writeln!(f, "      {rule}")?;
        write!(f, "     |")?;
        for method in Method::ALL {
            write!(f, " {:^10} |", method.label())?;
        }
        writeln!(f)?;
        writeln!(f, "{spacer}")?;

        self.row(f, "Cp_l", |c| Some(c.cp_lower))?;
        self.row(f, "Cp_u", |c| Some(c.cp_upper))?;
        writeln!(f, "{spacer}")?;
        self.row(f, "Cd", |c| Some(c.drag))?;
        self.row(f, "Cl", |c| Some(c.lift))?;
        writeln!(f, "{spacer}")?;
        self.row(f, "L/D", |c| c.lift_to_drag)?;
        write!(f, "      {rule}")
    }
}

impl PanelSolution {
    fn row(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        value: impl Fn(&PanelCoefficients) -> Option<f64>,
    ) -> fmt::Result {
        write!(f, " {label:<4}|")?;
        for method in Method::ALL {
            match value(self.get(method)) {
                Some(v) => write!(f, " {v:>10.5} |")?,
                None => write!(f, " {:>10} |", "-")?,
            }
        }
        writeln!(f)
    }
}
