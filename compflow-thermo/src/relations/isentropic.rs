/// Isentropic stagnation-to-static ratios at a given Mach number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagnationRatios {
    /// `T0/T`.
    pub temperature: f64,
    /// `P0/P`.
    pub pressure: f64,
    /// `ρ0/ρ`.
    pub density: f64,
}

/// Computes `T0/T = 1 + (γ−1)/2·M²`.
#[must_use]
pub fn stagnation_temperature_ratio(mach: f64, gamma: f64) -> f64 {
    1.0 + 0.5 * (gamma - 1.0) * mach * mach
}

/// Computes the stagnation ratios for temperature, pressure, and density.
///
/// `P0/P = (T0/T)^(γ/(γ−1))` and `ρ0/ρ = (T0/T)^(1/(γ−1))`.
#[must_use]
pub fn stagnation_ratios(mach: f64, gamma: f64) -> StagnationRatios {
    let temperature = stagnation_temperature_ratio(mach, gamma);

    StagnationRatios {
        temperature,
        pressure: temperature.powf(gamma / (gamma - 1.0)),
        density: temperature.powf(1.0 / (gamma - 1.0)),
    }
}
