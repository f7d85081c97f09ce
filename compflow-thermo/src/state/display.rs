use std::fmt;

use uom::si::{
    mass_density::kilogram_per_cubic_meter, pressure::pascal, thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use super::FlowState;

/// A multi-line report of the static and stagnation conditions.
///
/// The last line checks the ideal-gas law: `P/(ρRT)` is one unless the
/// density was supplied independently of pressure and temperature.
impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.pressure.get::<pascal>();
        let t = self.temperature.get::<kelvin>();
        let rho = self.density.get::<kilogram_per_cubic_meter>();

        let p0 = self.stagnation.pressure().get::<pascal>();
        let t0 = self.stagnation.temperature().get::<kelvin>();
        let rho0 = self.stagnation.density().get::<kilogram_per_cubic_meter>();

        writeln!(f, "state {}", self.id)?;
        writeln!(f, "  M      = {:.4}", self.mach)?;
        writeln!(
            f,
            "  U      = {:.3} m/s",
            self.velocity.get::<meter_per_second>()
        )?;
        writeln!(f, "  P      = {p:.3} Pa")?;
        writeln!(f, "  T      = {t:.3} K")?;
        writeln!(f, "  rho    = {rho:.5} kg/m^3")?;
        writeln!(f, "  gamma  = {:.3}", self.gamma())?;
        writeln!(f, "  P0     = {p0:.3} Pa  (P0/P = {:.5})", p0 / p)?;
        writeln!(f, "  T0     = {t0:.3} K  (T0/T = {:.5})", t0 / t)?;
        writeln!(f, "  rho0   = {rho0:.5} kg/m^3  (rho0/rho = {:.5})", rho0 / rho)?;
        write!(f, "  P/(rho R T) = {:.6}", self.compressibility())
    }
}
