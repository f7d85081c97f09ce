//! Calorically-perfect gas constants and elementary relations.
//!
//! The defaults describe dry air at sea level and are used whenever a
//! [`FlowState`](crate::FlowState) is built without explicit values.

use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::{FlowError, units::SpecificGasConstant};

/// Universal gas constant, J/(mol·K).
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.314;

/// Molar mass of dry air, kg/mol.
pub const MOLAR_MASS_AIR: f64 = 0.028_964;

/// Default specific-heat ratio `cp/cv`.
pub const DEFAULT_GAMMA: f64 = 1.4;

/// Reference static temperature, K.
pub const REFERENCE_TEMPERATURE: f64 = 288.15;

/// Reference static pressure, Pa.
pub const REFERENCE_PRESSURE: f64 = 101_315.0;

/// Returns the reference static temperature.
#[must_use]
pub fn reference_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(REFERENCE_TEMPERATURE)
}

/// Returns the reference static pressure.
#[must_use]
pub fn reference_pressure() -> Pressure {
    Pressure::new::<pascal>(REFERENCE_PRESSURE)
}

/// Returns the specific gas constant of air, `R = R_u / M_air`.
#[must_use]
pub fn air_gas_constant() -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(UNIVERSAL_GAS_CONSTANT / MOLAR_MASS_AIR)
}

/// Computes the speed of sound in air, `a = sqrt(γ·R·T)`.
///
/// # Errors
///
/// Returns [`FlowError::Domain`] if `gamma ≤ 1` or `T ≤ 0`.
pub fn speed_of_sound(
    gamma: f64,
    temperature: ThermodynamicTemperature,
) -> Result<Velocity, FlowError> {
    PerfectGas::new(gamma, air_gas_constant())?.speed_of_sound(temperature)
}

/// Converts a Mach number to a velocity in air at the given temperature.
///
/// # Errors
///
/// Returns [`FlowError::Domain`] if `gamma ≤ 1` or `T ≤ 0`.
pub fn mach_to_velocity(
    mach: f64,
    gamma: f64,
    temperature: ThermodynamicTemperature,
) -> Result<Velocity, FlowError> {
    PerfectGas::new(gamma, air_gas_constant())?.mach_to_velocity(mach, temperature)
}

/// Converts a velocity to a Mach number in air at the given temperature.
///
/// # Errors
///
/// Returns [`FlowError::Domain`] if `gamma ≤ 1` or `T ≤ 0`.
pub fn velocity_to_mach(
    velocity: Velocity,
    gamma: f64,
    temperature: ThermodynamicTemperature,
) -> Result<f64, FlowError> {
    PerfectGas::new(gamma, air_gas_constant())?.velocity_to_mach(velocity, temperature)
}

/// A calorically-perfect gas: constant `γ` and specific gas constant `R`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas {
    gamma: f64,
    gas_constant: SpecificGasConstant,
}

impl Default for PerfectGas {
    fn default() -> Self {
        Self::air()
    }
}

impl PerfectGas {
    /// Dry air with `γ = 1.4`.
    #[must_use]
    pub fn air() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            gas_constant: air_gas_constant(),
        }
    }

    /// Creates a gas with validated constants.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Domain`] if `gamma ≤ 1` or `R ≤ 0`.
    pub fn new(gamma: f64, gas_constant: SpecificGasConstant) -> Result<Self, FlowError> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(FlowError::Domain(format!(
                "specific-heat ratio must exceed 1, got {gamma}"
            )));
        }

        let r = gas_constant.get::<joule_per_kilogram_kelvin>();
        if !r.is_finite() || r <= 0.0 {
            return Err(FlowError::Domain(format!(
                "gas constant must be positive, got {r} J/(kg·K)"
            )));
        }

        Ok(Self {
            gamma,
            gas_constant,
        })
    }

    /// Returns the specific-heat ratio `γ`.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the specific gas constant `R`.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        self.gas_constant
    }

    /// Computes `a = sqrt(γ·R·T)`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Domain`] if `T ≤ 0`.
    pub fn speed_of_sound(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Velocity, FlowError> {
        let t = positive_kelvin(temperature)?;
        Ok(Velocity::new::<meter_per_second>(
            (self.gamma * self.r() * t).sqrt(),
        ))
    }

    /// Computes `U = M·a(T)`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Domain`] if `T ≤ 0`.
    pub fn mach_to_velocity(
        &self,
        mach: f64,
        temperature: ThermodynamicTemperature,
    ) -> Result<Velocity, FlowError> {
        Ok(self.speed_of_sound(temperature)? * mach)
    }

    /// Computes `M = U / a(T)`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Domain`] if `T ≤ 0`.
    pub fn velocity_to_mach(
        &self,
        velocity: Velocity,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, FlowError> {
        let a = self.speed_of_sound(temperature)?;
        Ok(velocity.get::<meter_per_second>() / a.get::<meter_per_second>())
    }

    /// Computes density from the ideal-gas law, `ρ = P/(R·T)`.
    #[must_use]
    pub fn density(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(
            pressure.get::<pascal>() / (self.r() * temperature.get::<kelvin>()),
        )
    }

    /// Computes `P/(ρ·R·T)`, which is exactly one for a state obeying the
    /// ideal-gas law with this gas constant.
    #[must_use]
    pub fn compressibility(
        &self,
        pressure: Pressure,
        density: MassDensity,
        temperature: ThermodynamicTemperature,
    ) -> f64 {
        pressure.get::<pascal>()
            / (density.get::<kilogram_per_cubic_meter>() * self.r() * temperature.get::<kelvin>())
    }

    fn r(&self) -> f64 {
        self.gas_constant.get::<joule_per_kilogram_kelvin>()
    }
}

fn positive_kelvin(temperature: ThermodynamicTemperature) -> Result<f64, FlowError> {
    let t = temperature.get::<kelvin>();
    if t.is_finite() && t > 0.0 {
        Ok(t)
    } else {
        Err(FlowError::Domain(format!(
            "temperature must be positive, got {t} K"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn air_gas_constant_from_molar_mass() {
        assert_relative_eq!(
            air_gas_constant().get::<joule_per_kilogram_kelvin>(),
            287.046,
            epsilon = 1e-3
        );
    }

    #[test]
    fn speed_of_sound_at_sea_level() {
        let a = speed_of_sound(DEFAULT_GAMMA, reference_temperature()).unwrap();
        assert_relative_eq!(a.get::<meter_per_second>(), 340.29, epsilon = 0.01);
    }

    #[test]
    fn speed_of_sound_accepts_any_temperature_unit() {
        let celsius = ThermodynamicTemperature::new::<degree_celsius>(15.0);
        let a_c = speed_of_sound(DEFAULT_GAMMA, celsius).unwrap();
        let a_k = speed_of_sound(DEFAULT_GAMMA, reference_temperature()).unwrap();
        assert_relative_eq!(
            a_c.get::<meter_per_second>(),
            a_k.get::<meter_per_second>(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn mach_velocity_conversions_are_inverse() {
        let t = ThermodynamicTemperature::new::<kelvin>(220.0);
        let u = mach_to_velocity(3.2, 1.3, t).unwrap();
        assert_relative_eq!(velocity_to_mach(u, 1.3, t).unwrap(), 3.2, epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_physical_constants() {
        assert!(matches!(
            speed_of_sound(1.0, reference_temperature()),
            Err(FlowError::Domain(_))
        ));
        assert!(matches!(
            speed_of_sound(1.4, ThermodynamicTemperature::new::<kelvin>(0.0)),
            Err(FlowError::Domain(_))
        ));
        assert!(matches!(
            PerfectGas::new(1.4, SpecificGasConstant::new::<joule_per_kilogram_kelvin>(-1.0)),
            Err(FlowError::Domain(_))
        ));
    }

    #[test]
    fn ideal_gas_density_is_self_consistent() {
        let gas = PerfectGas::air();
        let p = reference_pressure();
        let t = reference_temperature();
        let rho = gas.density(p, t);

        assert_relative_eq!(rho.get::<kilogram_per_cubic_meter>(), 1.2249, epsilon = 1e-3);
        assert_relative_eq!(gas.compressibility(p, rho, t), 1.0, epsilon = 1e-12);
    }
}
