use approx::assert_relative_eq;
use compflow_thermo::{
    FlowError,
    relations::{normal_shock, prandtl_meyer, stagnation_ratios},
    solvers::inverse_prandtl_meyer,
};
use integration_tests::deg;
use uom::si::angle::radian;

#[test]
fn normal_shock_mach_relation_is_an_involution() {
    for m1 in [1.05, 1.5, 2.0, 3.7, 8.0, 20.0] {
        for gamma in [1.1, 1.3, 1.4, 5.0 / 3.0] {
            let m2 = m1 * normal_shock(m1, gamma).unwrap().mach;

            // Running the downstream Mach number back through the relation
            // (formally, below one) must recover the upstream value.
            let m2_sq = m2 * m2;
            let back = ((1.0 + 0.5 * (gamma - 1.0) * m2_sq)
                / (gamma * m2_sq - 0.5 * (gamma - 1.0)))
                .sqrt();
            assert_relative_eq!(back, m1, max_relative = 1e-9);
        }
    }
}

#[test]
fn stagnation_ratios_never_fall_below_one() {
    for mach in [1.0001, 1.5, 3.0, 10.0, 40.0] {
        for gamma in [1.05, 1.2, 1.4, 1.67] {
            let ratios = stagnation_ratios(mach, gamma);
            assert!(ratios.temperature >= 1.0);
            assert!(ratios.pressure >= 1.0);
            assert!(ratios.density >= 1.0);
        }
    }
}

#[test]
fn prandtl_meyer_is_strictly_increasing() {
    let mut previous = prandtl_meyer(1.0, 1.4).unwrap();
    let mut mach = 1.0;
    while mach < 50.0 {
        mach += 0.25;
        let nu = prandtl_meyer(mach, 1.4).unwrap();
        assert!(nu > previous, "ν must increase at M = {mach}");
        previous = nu;
    }
}

#[test]
fn inverse_prandtl_meyer_recovers_target() {
    for target in [0.5, 10.0, 26.379_76, 49.757_35, 90.0, 120.0] {
        let nu = deg(target);
        let mach = inverse_prandtl_meyer(nu, 1.4).unwrap();
        let recovered = prandtl_meyer(mach, 1.4).unwrap();
        assert!(
            (recovered.get::<radian>() - nu.get::<radian>()).abs() < 1e-4,
            "target {target}° recovered as {mach}"
        );
    }
}

#[test]
fn known_prandtl_meyer_points() {
    assert_relative_eq!(
        inverse_prandtl_meyer(deg(26.379_76), 1.4).unwrap(),
        2.0,
        epsilon = 1e-5
    );
    assert_relative_eq!(
        inverse_prandtl_meyer(deg(49.757_35), 1.4).unwrap(),
        3.0,
        epsilon = 1e-5
    );
}

#[test]
fn inverse_prandtl_meyer_rejects_unreachable_targets() {
    assert!(matches!(
        inverse_prandtl_meyer(deg(-1.0), 1.4),
        Err(FlowError::Domain(_))
    ));
    assert!(matches!(
        inverse_prandtl_meyer(deg(130.0), 1.4),
        Err(FlowError::Domain(_))
    ));
}
