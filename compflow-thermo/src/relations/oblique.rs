use uom::si::{angle::radian, f64::Angle};

/// Computes the flow deflection angle produced by an oblique shock of the
/// given wave angle (the theta-beta-Mach relation).
///
/// `θ = atan(2·cot β·(M²·sin²β − 1) / (M²·(γ + cos 2β) + 2))`
///
/// The result is negative when `β` is below the Mach angle, where no shock
/// can stand; callers decide whether that is an error.
#[must_use]
pub fn deflection_angle(wave_angle: Angle, mach: f64, gamma: f64) -> Angle {
    let beta = wave_angle.get::<radian>();
    let m_sq = mach * mach;
    let sin_beta = beta.sin();

    let numerator = 2.0 * (m_sq * sin_beta * sin_beta - 1.0) / beta.tan();
    let denominator = m_sq * (gamma + (2.0 * beta).cos()) + 2.0;

    Angle::new::<radian>((numerator / denominator).atan())
}

/// Computes the wave angle at which an oblique shock reaches its largest
/// deflection for flow at Mach `mach`.
///
/// Attached shocks with a smaller wave angle are on the weak branch, those
/// with a larger one on the strong branch.
///
/// `sin²β* = ((γ+1)M²/4 − 1 + sqrt((γ+1)·((γ+1)M⁴/16 + (γ−1)M²/2 + 1))) / (γM²)`
#[must_use]
pub fn max_deflection_wave_angle(mach: f64, gamma: f64) -> Angle {
    let m_sq = mach * mach;
    let root = ((gamma + 1.0)
        * ((gamma + 1.0) * m_sq * m_sq / 16.0 + 0.5 * (gamma - 1.0) * m_sq + 1.0))
        .sqrt();
    let sin_sq = (0.25 * (gamma + 1.0) * m_sq - 1.0 + root) / (gamma * m_sq);

    Angle::new::<radian>(sin_sq.clamp(0.0, 1.0).sqrt().asin())
}
