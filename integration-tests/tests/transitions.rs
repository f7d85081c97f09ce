use approx::assert_relative_eq;
use compflow_solve::newton;
use compflow_thermo::{
    FlowConditions, FlowError, FlowState, ShockAngle, ShockBranch, StateId,
    solvers::{wave_angle, wave_angle_observed},
};
use integration_tests::{deg, freestream};
use uom::si::{
    angle::degree,
    f64::{Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

#[test]
fn missing_velocity_and_mach_is_an_input_error() {
    let conditions = FlowConditions::default()
        .with_pressure(Pressure::new::<pascal>(5_000.0))
        .with_temperature(ThermodynamicTemperature::new::<kelvin>(220.0));

    assert!(matches!(
        FlowState::new(conditions),
        Err(FlowError::Input(_))
    ));
}

#[test]
fn normal_shock_in_subsonic_flow_is_a_domain_error() {
    assert!(matches!(
        freestream(0.5).normal_shock(),
        Err(FlowError::Domain(_))
    ));
}

#[test]
fn weak_and_strong_wave_angles_at_mach_two() {
    let weak = wave_angle(deg(20.0), 2.0, 1.4, ShockBranch::Weak).unwrap();
    let strong = wave_angle(deg(20.0), 2.0, 1.4, ShockBranch::Strong).unwrap();

    assert_relative_eq!(weak.get::<degree>(), 53.4, epsilon = 0.1);
    assert_relative_eq!(strong.get::<degree>(), 74.3, epsilon = 0.1);
}

#[test]
fn deflection_beyond_maximum_has_no_attached_shock() {
    let result =
        freestream(2.0).oblique_shock(ShockAngle::Deflection(deg(25.0)), ShockBranch::Weak);
    assert!(matches!(result, Err(FlowError::Domain(_))));
}

#[test]
fn wave_angle_solver_can_be_traced() {
    let mut trace = Vec::new();
    let observer = |event: &newton::Event| {
        trace.push(event.next.atan().to_degrees());
        None::<newton::Action>
    };

    let beta = wave_angle_observed(deg(20.0), 2.0, 1.4, ShockBranch::Weak, observer).unwrap();

    let last = *trace.last().unwrap();
    assert_relative_eq!(last, beta.get::<degree>(), epsilon = 1e-9);
}

#[test]
fn oblique_shock_at_mach_ten_compresses() {
    let upstream = freestream(10.0);
    let downstream = upstream
        .oblique_shock(ShockAngle::Deflection(deg(18.0)), ShockBranch::Weak)
        .unwrap();

    assert!(downstream.pressure_coefficient(&upstream) > 0.0);
    assert!(downstream.mach() < upstream.mach());
    assert_relative_eq!(downstream.mach(), 4.6025, epsilon = 1e-3);
    assert_relative_eq!(
        downstream.pressure().get::<pascal>() / upstream.pressure().get::<pascal>(),
        18.2805,
        epsilon = 1e-3
    );
}

#[test]
fn expansion_fan_at_mach_ten_rarefies() {
    let upstream = freestream(10.0);
    let downstream = upstream.expansion_fan(deg(18.0)).unwrap();

    assert!(downstream.pressure_coefficient(&upstream) < 0.0);
    assert!(downstream.mach() > upstream.mach());
    assert_relative_eq!(downstream.mach(), 28.1935, epsilon = 1e-3);
}

#[test]
fn diamond_airfoil_front_and_rear_faces() {
    // A 10° half-angle diamond: the front face turns the flow 10° through a
    // shock, the shoulder turns it 20° through a fan. The shock's entropy rise
    // is never recovered.
    let upstream = freestream(3.0);
    let front = upstream
        .oblique_shock(ShockAngle::Deflection(deg(10.0)), ShockBranch::Weak)
        .unwrap();
    let rear = front.expansion_fan(deg(20.0)).unwrap();

    assert_eq!(rear.id(), StateId::new(2));
    assert!(front.mach() > 1.0);
    assert!(rear.mach() > front.mach());
    assert!(rear.stagnation().pressure() < upstream.stagnation().pressure());
    assert_relative_eq!(
        rear.stagnation().temperature().get::<kelvin>(),
        upstream.stagnation().temperature().get::<kelvin>(),
        max_relative = 1e-9
    );
}

#[test]
fn custom_gas_flows_through_every_transition() {
    let upstream = FlowState::new(FlowConditions::mach(4.0).with_specific_heat_ratio(5.0 / 3.0))
        .unwrap();

    let shocked = upstream.normal_shock().unwrap();
    let turned = upstream
        .oblique_shock(ShockAngle::Deflection(deg(15.0)), ShockBranch::Weak)
        .unwrap();
    let expanded = upstream.expansion_fan(deg(15.0)).unwrap();

    for state in [shocked, turned, expanded] {
        assert_relative_eq!(state.gamma(), 5.0 / 3.0);
        assert_relative_eq!(state.compressibility(), 1.0, epsilon = 1e-12);
    }

    // Monatomic normal-shock limit: density ratio approaches (γ+1)/(γ−1) = 4.
    let compression = shocked.density().get::<kilogram_per_cubic_meter>()
        / upstream.density().get::<kilogram_per_cubic_meter>();
    assert!(compression > 3.0 && compression < 4.0);
}
