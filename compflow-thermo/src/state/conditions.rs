use uom::si::f64::{MassDensity, Pressure, ThermodynamicTemperature, Velocity};

use crate::units::SpecificGasConstant;

use super::StateId;

/// Partial aerothermal data used to build a [`FlowState`](crate::FlowState).
///
/// Exactly one of `velocity` and `mach` must be set. Every other field is
/// optional and falls back to the defaults in [`gas`](crate::gas) when
/// omitted; `density` falls back to the ideal-gas law.
///
/// # Example
///
/// ```
/// use compflow_thermo::{FlowConditions, FlowState};
/// use uom::si::{f64::Pressure, pressure::kilopascal};
///
/// let conditions = FlowConditions::mach(2.0)
///     .with_pressure(Pressure::new::<kilopascal>(50.0))
///     .with_specific_heat_ratio(1.3);
///
/// let state = FlowState::new(conditions).unwrap();
/// assert_eq!(state.mach(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FlowConditions {
    pub velocity: Option<Velocity>,
    pub mach: Option<f64>,
    pub pressure: Option<Pressure>,
    pub temperature: Option<ThermodynamicTemperature>,
    pub density: Option<MassDensity>,
    pub specific_heat_ratio: Option<f64>,
    pub gas_constant: Option<SpecificGasConstant>,
    pub id: Option<StateId>,
}

impl FlowConditions {
    /// Starts from a Mach number.
    #[must_use]
    pub fn mach(mach: f64) -> Self {
        Self {
            mach: Some(mach),
            ..Self::default()
        }
    }

    /// Starts from a velocity.
    #[must_use]
    pub fn velocity(velocity: Velocity) -> Self {
        Self {
            velocity: Some(velocity),
            ..Self::default()
        }
    }

    /// Returns conditions with the given static pressure.
    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self {
            pressure: Some(pressure),
            ..self
        }
    }

    /// Returns conditions with the given static temperature.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature: Some(temperature),
            ..self
        }
    }

    /// Returns conditions with the given density.
    #[must_use]
    pub fn with_density(self, density: MassDensity) -> Self {
        Self {
            density: Some(density),
            ..self
        }
    }

    /// Returns conditions with the given specific-heat ratio.
    #[must_use]
    pub fn with_specific_heat_ratio(self, gamma: f64) -> Self {
        Self {
            specific_heat_ratio: Some(gamma),
            ..self
        }
    }

    /// Returns conditions with the given specific gas constant.
    #[must_use]
    pub fn with_gas_constant(self, gas_constant: SpecificGasConstant) -> Self {
        Self {
            gas_constant: Some(gas_constant),
            ..self
        }
    }

    /// Returns conditions with the given state id.
    #[must_use]
    pub fn with_id(self, id: StateId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
