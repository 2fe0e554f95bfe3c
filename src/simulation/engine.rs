//! Per-tick state updater
//!
//! `update` is called by the host once per frame; `initialize` once at
//! startup or reset. Both are pure: same variables, same state

use crate::simulation::dynamics::Dynamics;
use crate::simulation::params::PhysicsVariables;
use crate::simulation::states::{SimulationState, DISPLAY_POSITION_X, DISPLAY_POSITION_Y};

/// Fresh snapshot for the current variables
pub fn update(vars: &PhysicsVariables) -> SimulationState {
    let d = Dynamics::evaluate(vars);

    SimulationState {
        levitation_height: d.levitation_height,
        position_x: DISPLAY_POSITION_X,
        position_y: DISPLAY_POSITION_Y,
        velocity: d.velocity,
        platform_angle: 0.0, // linear track, no platform to tilt
        net_force: d.net_force,
        is_levitating: d.is_levitating(),
        actual_speed: d.actual_speed,
    }
}

/// Rest state: static force balance, no motion yet
pub fn initialize(vars: &PhysicsVariables) -> SimulationState {
    SimulationState {
        velocity: 0.0,
        actual_speed: 0.0,
        ..update(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_position_is_fixed() {
        let s = update(&PhysicsVariables::default());
        assert_eq!((s.position_x, s.position_y), (30.0, 15.0));
        assert_eq!(s.platform_angle, 0.0);
    }

    #[test]
    fn initialize_matches_update_except_motion() {
        let v = PhysicsVariables {
            train_mass: 0.1,
            magnet_distance: 2.0,
            magnet_count: 40,
            rail_separation: 3.0,
            ..Default::default()
        };
        let a = update(&v);
        let b = initialize(&v);
        assert!(b.is_levitating);
        assert!(a.actual_speed > 0.0);
        assert_eq!(b.actual_speed, 0.0);
        assert_eq!(b.velocity, 0.0);
        assert_eq!(a.levitation_height, b.levitation_height);
        assert_eq!(a.net_force, b.net_force);
    }
}
