use maglevsim::simulation::forces::{total_magnetic_force, total_magnetic_force_at};
use maglevsim::simulation::dynamics::{net_force, is_levitating, levitation_height, velocity, Dynamics, GRAVITY};
use maglevsim::simulation::stability::stability_factor;
use maglevsim::simulation::engine::{update, initialize};
use maglevsim::simulation::params::{PhysicsVariables, MotorDirection};
use maglevsim::simulation::magnets::MagnetType;
use maglevsim::{Scenario, ScenarioConfig};

use proptest::prelude::*;

/// Default track: 10 neodymium magnets per rail, 4 cm apart, 6 cm rails, 0.5 kg cart
pub fn default_track() -> PhysicsVariables {
    PhysicsVariables::default()
}

/// Dense array with narrow rails, levitates for every mass in range
pub fn dense_track(train_mass: f64) -> PhysicsVariables {
    PhysicsVariables {
        train_mass,
        magnet_distance: 2.0,
        magnet_count: 40,
        rail_separation: 3.0,
        ..Default::default()
    }
}

/// Valid variables inside the control ranges
fn valid_variables() -> impl Strategy<Value = PhysicsVariables> {
    (
        0.1f64..2.0,
        2.0f64..15.0,
        0usize..4,
        1u32..=20,
        3.0f64..12.0,
        any::<bool>(),
    )
        .prop_map(|(train_mass, magnet_distance, t, half_count, rail_separation, fwd)| PhysicsVariables {
            train_mass,
            magnet_distance,
            magnet_type: MagnetType::ALL[t],
            magnet_count: 2 * half_count,
            rail_separation,
            motor_direction: if fwd { MotorDirection::Forward } else { MotorDirection::Backward },
        })
}

// ==================================================================================
// Force tests
// ==================================================================================

#[test]
fn default_track_force_sum() {
    let v = default_track();
    let total = total_magnetic_force(&v);

    // nearest magnet (4 cm, 3 cm) alone gives 2 * 1.2 N
    assert!(total > 2.4 && total < 3.0, "unexpected total {}", total);
    assert!((v.weight() - 4.905).abs() < 1e-12);

    let net = net_force(&v);
    assert!(net < 0.0, "default track should not lift 0.5 kg, net = {}", net);
    assert!(!is_levitating(&v));

    let h = levitation_height(&v);
    assert!((0.0..=2.4).contains(&h));
}

#[test]
fn wider_spacing_weakens_force() {
    // cart over the first magnet: every other magnet moves away as spacing grows
    let mut prev = f64::INFINITY;
    for step in 0..=26 {
        let v = PhysicsVariables {
            magnet_distance: 2.0 + 0.5 * step as f64,
            ..default_track()
        };
        let f = total_magnetic_force_at(&v, 0.0);
        assert!(f < prev, "force did not decrease at spacing {}", v.magnet_distance);
        prev = f;
    }
}

#[test]
fn more_magnets_never_weaken_force() {
    let mut prev = 0.0;
    for count in (2..=40).step_by(2) {
        let v = PhysicsVariables { magnet_count: count, ..default_track() };
        let f = total_magnetic_force(&v);
        assert!(f >= prev);
        prev = f;
    }
}

// ==================================================================================
// Stability tests
// ==================================================================================

#[test]
fn doubling_separation_lowers_stability() {
    for tenth in 60..=120 {
        let s = tenth as f64 / 10.0;
        let a = stability_factor(s);
        let b = stability_factor(2.0 * s);
        assert!(b <= a);
        if a > 0.5 {
            assert!(b < a, "not strictly lower at {}", s);
        }
    }
    assert_eq!(stability_factor(12.0), 0.5);
}

// ==================================================================================
// Levitation tests
// ==================================================================================

#[test]
fn balanced_cart_does_not_levitate() {
    let v = default_track();
    let total = total_magnetic_force(&v);

    // mass whose weight matches the magnetic force, nudged until net <= 0
    let mut mass = total / GRAVITY;
    let mut balanced = PhysicsVariables { train_mass: mass, ..v };
    while net_force(&balanced) > 0.0 {
        mass = f64::from_bits(mass.to_bits() + 1);
        balanced.train_mass = mass;
    }

    assert!(net_force(&balanced).abs() < 1e-12);
    assert!(!is_levitating(&balanced));
    assert_eq!(levitation_height(&balanced), 0.0);
    assert_eq!(velocity(&balanced), 0.0);
}

#[test]
fn light_cart_always_levitates() {
    let v = PhysicsVariables { train_mass: 1e-6, ..default_track() };
    let d = Dynamics::evaluate(&v);
    assert!((d.net_force - d.magnetic_force).abs() < 1e-4);
    assert!(d.is_levitating());

    for t in MagnetType::ALL {
        let v = PhysicsVariables { magnet_type: t, ..v };
        assert!(is_levitating(&v), "{} should lift a 1 mg cart", t);
    }
}

#[test]
fn heavier_cart_floats_lower() {
    let light = levitation_height(&dense_track(0.1));
    let heavy = levitation_height(&dense_track(2.0));
    assert!(heavy <= light);
    assert!(heavy > 0.0);
}

// ==================================================================================
// Updater tests
// ==================================================================================

#[test]
fn update_is_idempotent() {
    let v = dense_track(0.5);
    assert_eq!(update(&v), update(&v));
    assert_eq!(initialize(&v), initialize(&v));
}

#[test]
fn reset_state_is_at_rest() {
    let s = initialize(&default_track());
    assert_eq!(s.actual_speed, 0.0);
    assert_eq!(s.velocity, 0.0);

    let s = initialize(&dense_track(0.1));
    assert!(s.is_levitating);
    assert!(s.levitation_height > 0.0);
    assert_eq!(s.actual_speed, 0.0);
    assert_eq!(s.velocity, 0.0);
}

#[test]
fn update_reports_signed_velocity() {
    let fwd = dense_track(0.5);
    let back = PhysicsVariables { motor_direction: MotorDirection::Backward, ..fwd };
    let a = update(&fwd);
    let b = update(&back);
    assert!(a.velocity > 0.0);
    assert_eq!(a.velocity, -b.velocity);
    assert_eq!(a.actual_speed, b.actual_speed);
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn scenario_from_yaml_runs() {
    let yaml = "
variables:
  train_mass: 0.1
  magnet_distance: 2.0
  magnet_count: 40
  rail_separation: 3.0
  motor_direction: -1
run:
  ticks: 10
";
    let scenario = Scenario::build_scenario(ScenarioConfig::from_yaml_str(yaml).unwrap());
    let states = scenario.run();
    assert_eq!(states.len(), 11);
    assert_eq!(states[0].velocity, 0.0);
    assert!(states[10].is_levitating);
    assert!(states[10].velocity < 0.0);
    assert_eq!(scenario.breakdown(2).top.len(), 2);
}

// ==================================================================================
// Property tests
// ==================================================================================

proptest! {
    #[test]
    fn prop_levitation_gate(v in valid_variables()) {
        prop_assert_eq!(is_levitating(&v), net_force(&v) > 0.0);
        let s = update(&v);
        prop_assert_eq!(s.is_levitating, s.net_force > 0.0);
    }

    #[test]
    fn prop_wider_spacing_weakens_force(
        half_count in 1u32..=20,
        rail_separation in 3.0f64..12.0,
        t in 0usize..4,
        magnet_distance in 2.0f64..14.0,
        widen in 0.01f64..1.0,
    ) {
        // cart over the first magnet: every other magnet moves away
        let v = PhysicsVariables {
            magnet_distance,
            magnet_type: MagnetType::ALL[t],
            magnet_count: 2 * half_count,
            rail_separation,
            ..default_track()
        };
        let wider = PhysicsVariables { magnet_distance: magnet_distance + widen, ..v };
        let near = total_magnetic_force_at(&v, 0.0);
        let far = total_magnetic_force_at(&wider, 0.0);
        prop_assert!(far < near, "spacing {} -> {}: {} !< {}", magnet_distance, wider.magnet_distance, far, near);
    }

    #[test]
    fn prop_height_bound(v in valid_variables()) {
        let h = levitation_height(&v);
        prop_assert!(h >= 0.0);
        prop_assert!(h <= v.rail_separation / 2.5 + 1e-12, "height {} over cap", h);
    }

    #[test]
    fn prop_direction_only_flips_velocity(v in valid_variables()) {
        let r = PhysicsVariables { motor_direction: v.motor_direction.reversed(), ..v };
        let a = update(&v);
        let b = update(&r);
        prop_assert_eq!(a.net_force, b.net_force);
        prop_assert_eq!(a.levitation_height, b.levitation_height);
        prop_assert_eq!(a.actual_speed, b.actual_speed);
        prop_assert_eq!(a.velocity, -b.velocity);
    }

    #[test]
    fn prop_outputs_finite(v in valid_variables()) {
        let s = update(&v);
        prop_assert!(s.net_force.is_finite());
        prop_assert!(s.actual_speed.is_finite() && s.actual_speed >= 0.0);
        prop_assert_eq!(s.platform_angle, 0.0);
    }
}
