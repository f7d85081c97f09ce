mod conditions;
mod display;
mod id;
mod stagnation;

pub use conditions::FlowConditions;
pub use id::StateId;
pub use stagnation::StagnationState;

use uom::si::{
    angle::radian,
    f64::{Angle, MassDensity, Pressure, ThermodynamicTemperature, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::{
    FlowError, PerfectGas,
    gas::{self, DEFAULT_GAMMA},
    relations,
    solvers::{self, ShockAngle, ShockBranch, ShockGeometry},
};

/// A single aerothermal state of a perfect gas.
///
/// A `FlowState` is immutable. Transitions such as [`normal_shock`],
/// [`oblique_shock`], and [`expansion_fan`] return new states and leave the
/// upstream state untouched; each result carries the upstream id plus one.
///
/// The stagnation state is computed once, at construction.
///
/// [`normal_shock`]: FlowState::normal_shock
/// [`oblique_shock`]: FlowState::oblique_shock
/// [`expansion_fan`]: FlowState::expansion_fan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    id: StateId,
    mach: f64,
    velocity: Velocity,
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    density: MassDensity,
    gas: PerfectGas,
    stagnation: StagnationState,
}

impl FlowState {
    /// Builds a state from partial conditions, filling defaults.
    ///
    /// Temperature and pressure default to the reference values in
    /// [`gas`], `γ` to 1.4, and the gas constant to that of air. Density
    /// defaults to `P/(R·T)`. Whichever of velocity and Mach number is
    /// missing is derived from the other with `U = M·a(T)`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Input`] unless exactly one of velocity and Mach
    /// number is given, and [`FlowError::Domain`] if any value is
    /// non-physical (non-positive Mach, velocity, pressure, temperature, or
    /// density; `γ ≤ 1`; `R ≤ 0`).
    pub fn new(conditions: FlowConditions) -> Result<Self, FlowError> {
        let gas = PerfectGas::new(
            conditions.specific_heat_ratio.unwrap_or(DEFAULT_GAMMA),
            conditions
                .gas_constant
                .unwrap_or_else(gas::air_gas_constant),
        )?;

        let temperature = conditions
            .temperature
            .unwrap_or_else(gas::reference_temperature);
        let pressure = conditions.pressure.unwrap_or_else(gas::reference_pressure);
        check_positive("temperature", temperature.get::<kelvin>())?;
        check_positive("pressure", pressure.get::<pascal>())?;

        let mach = match (conditions.velocity, conditions.mach) {
            (Some(_), Some(_)) => {
                return Err(FlowError::Input(
                    "give either a velocity or a Mach number, not both".into(),
                ));
            }
            (None, None) => {
                return Err(FlowError::Input(
                    "a velocity or a Mach number is required".into(),
                ));
            }
            (Some(velocity), None) => {
                check_positive("velocity", velocity.get::<meter_per_second>())?;
                gas.velocity_to_mach(velocity, temperature)?
            }
            (None, Some(mach)) => mach,
        };

        let density = conditions
            .density
            .unwrap_or_else(|| gas.density(pressure, temperature));

        Self::from_parts(
            conditions.id.unwrap_or_default(),
            mach,
            pressure,
            temperature,
            density,
            gas,
        )
    }

    /// Assembles a state from static values, deriving velocity and the
    /// stagnation state.
    fn from_parts(
        id: StateId,
        mach: f64,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        density: MassDensity,
        gas: PerfectGas,
    ) -> Result<Self, FlowError> {
        check_positive("Mach number", mach)?;
        check_positive("pressure", pressure.get::<pascal>())?;
        check_positive("temperature", temperature.get::<kelvin>())?;
        check_positive("density", density.get::<kilogram_per_cubic_meter>())?;

        let velocity = gas.mach_to_velocity(mach, temperature)?;
        let stagnation =
            StagnationState::from_static(mach, gas.gamma(), pressure, temperature, density);

        Ok(Self {
            id,
            mach,
            velocity,
            pressure,
            temperature,
            density,
            gas,
            stagnation,
        })
    }

    /// Returns the state id.
    #[must_use]
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Returns the Mach number.
    #[must_use]
    pub fn mach(&self) -> f64 {
        self.mach
    }

    /// Returns the flow velocity.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Returns the static pressure.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Returns the static temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the density.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    /// Returns the specific-heat ratio `γ`.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gas.gamma()
    }

    /// Returns the gas model.
    #[must_use]
    pub fn gas(&self) -> PerfectGas {
        self.gas
    }

    /// Returns the stagnation state.
    #[must_use]
    pub fn stagnation(&self) -> &StagnationState {
        &self.stagnation
    }

    /// Returns `P/(ρ·R·T)`: one when the state obeys the ideal-gas law.
    ///
    /// Differs from one only when a density was supplied that disagrees
    /// with pressure and temperature.
    #[must_use]
    pub fn compressibility(&self) -> f64 {
        self.gas
            .compressibility(self.pressure, self.density, self.temperature)
    }

    /// Returns the Mach angle `μ = asin(1/M)`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Domain`] if the flow is subsonic.
    pub fn mach_angle(&self) -> Result<Angle, FlowError> {
        relations::mach_angle(self.mach)
    }

    /// Carries the flow across a normal shock.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Domain`] if the flow is subsonic.
    pub fn normal_shock(&self) -> Result<FlowState, FlowError> {
        self.shocked(self.id.next())
    }

    /// Applies the normal-shock ratios, labelling the result with `id`.
    fn shocked(&self, id: StateId) -> Result<FlowState, FlowError> {
        let ratios = relations::normal_shock(self.mach, self.gamma())?;

        Self::from_parts(
            id,
            self.mach * ratios.mach,
            scale_pressure(self.pressure, ratios.pressure),
            scale_temperature(self.temperature, ratios.temperature),
            scale_density(self.density, ratios.density),
            self.gas,
        )
    }

    /// Resolves both angles of an oblique shock standing in this flow.
    ///
    /// This is the geometry [`oblique_shock`](FlowState::oblique_shock) uses;
    /// call it directly to see the wave angle solved for a deflection, or
    /// the deflection implied by a wave angle.
    ///
    /// # Errors
    ///
    /// See [`ShockGeometry::resolve`].
    pub fn shock_geometry(
        &self,
        angle: ShockAngle,
        branch: ShockBranch,
    ) -> Result<ShockGeometry, FlowError> {
        ShockGeometry::resolve(angle, self.mach, self.gamma(), branch)
    }

    /// Carries the flow across an oblique shock.
    ///
    /// The shock is given by its wave angle or by the deflection it imposes;
    /// for a deflection, `branch` picks the weak or strong solution. The
    /// normal component `M·sin β` passes through a normal shock, and the
    /// downstream Mach number is recovered as `M2n / sin(β − θ)`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Domain`] if no attached shock matches the angle,
    /// and [`FlowError::Convergence`] if the wave-angle solve fails.
    pub fn oblique_shock(
        &self,
        angle: ShockAngle,
        branch: ShockBranch,
    ) -> Result<FlowState, FlowError> {
        let geometry = self.shock_geometry(angle, branch)?;

        let beta = geometry.wave_angle.get::<radian>();
        let theta = geometry.deflection.get::<radian>();

        // A wave angle on the Mach angle can round to just under sonic.
        let normal_mach = (self.mach * beta.sin()).max(1.0);
        let normal = Self::from_parts(
            self.id,
            normal_mach,
            self.pressure,
            self.temperature,
            self.density,
            self.gas,
        )?
        .shocked(self.id)?;

        let turn = (beta - theta).sin();
        if turn <= 0.0 {
            return Err(FlowError::Domain(format!(
                "wave angle {beta} rad does not exceed deflection {theta} rad"
            )));
        }

        Self::from_parts(
            self.id.next(),
            normal.mach / turn,
            normal.pressure,
            normal.temperature,
            normal.density,
            self.gas,
        )
    }

    /// Carries the flow through a Prandtl-Meyer expansion fan that turns it
    /// away from itself by `turning`.
    ///
    /// The downstream Mach number solves `ν(M2) = ν(M1) + θ`; pressure,
    /// temperature, and density follow the isentropic fan ratios.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Domain`] if the flow is subsonic, the turning
    /// angle is negative, or `ν(M1) + θ` exceeds the solver's Mach ceiling.
    pub fn expansion_fan(&self, turning: Angle) -> Result<FlowState, FlowError> {
        let theta = turning.get::<radian>();
        if !theta.is_finite() || theta < 0.0 {
            return Err(FlowError::Domain(format!(
                "expansion turning angle must be non-negative, got {theta} rad"
            )));
        }

        let gamma = self.gamma();
        let nu1 = relations::prandtl_meyer(self.mach, gamma)?;
        let m2 = solvers::inverse_prandtl_meyer(nu1 + turning, gamma)?;
        let ratios = relations::expansion_ratios(self.mach, m2, gamma)?;

        Self::from_parts(
            self.id.next(),
            m2,
            scale_pressure(self.pressure, ratios.pressure),
            scale_temperature(self.temperature, ratios.temperature),
            scale_density(self.density, ratios.density),
            self.gas,
        )
    }

    /// Computes the pressure coefficient of this state against `reference`.
    ///
    /// `Cp = 2/(γ·M_ref²)·(P/P_ref − 1)`, using the reference state's `γ`.
    #[must_use]
    pub fn pressure_coefficient(&self, reference: &FlowState) -> f64 {
        let pressure_ratio = self.pressure.get::<pascal>() / reference.pressure.get::<pascal>();
        2.0 / (reference.gamma() * reference.mach * reference.mach) * (pressure_ratio - 1.0)
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), FlowError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FlowError::Domain(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn scale_pressure(pressure: Pressure, ratio: f64) -> Pressure {
    Pressure::new::<pascal>(pressure.get::<pascal>() * ratio)
}

fn scale_temperature(
    temperature: ThermodynamicTemperature,
    ratio: f64,
) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(temperature.get::<kelvin>() * ratio)
}

fn scale_density(density: MassDensity, ratio: f64) -> MassDensity {
    MassDensity::new::<kilogram_per_cubic_meter>(density.get::<kilogram_per_cubic_meter>() * ratio)
}
