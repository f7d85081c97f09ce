use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::relations::stagnation_ratios;

/// The stagnation (total) conditions of a flow state: what the flow would
/// reach if brought isentropically to rest.
///
/// Unlike a [`FlowState`](crate::FlowState), it has no velocity and no
/// stagnation state of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagnationState {
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    density: MassDensity,
}

impl StagnationState {
    /// Applies the isentropic stagnation ratios at `mach` to static values.
    pub(crate) fn from_static(
        mach: f64,
        gamma: f64,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        density: MassDensity,
    ) -> Self {
        let ratios = stagnation_ratios(mach, gamma);

        Self {
            pressure: Pressure::new::<pascal>(pressure.get::<pascal>() * ratios.pressure),
            temperature: ThermodynamicTemperature::new::<kelvin>(
                temperature.get::<kelvin>() * ratios.temperature,
            ),
            density: MassDensity::new::<kilogram_per_cubic_meter>(
                density.get::<kilogram_per_cubic_meter>() * ratios.density,
            ),
        }
    }

    /// Returns the stagnation pressure `P0`.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Returns the stagnation temperature `T0`.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the stagnation density `ρ0`.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }
}
