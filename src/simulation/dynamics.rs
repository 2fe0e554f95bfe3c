//! Levitation and speed derived from the force balance on the cart
//!
//! Everything here is a closed-form function of `PhysicsVariables`:
//! - net force = total magnetic force - weight,
//! - levitation gated on a strictly positive net force,
//! - height capped at a fraction of the rail gap,
//! - speed scaled by acceleration, stability, load and magnet strength
//!
//! [`Dynamics::evaluate`] computes the magnetic sum once and derives every
//! quantity from it; the free functions are single-quantity shortcuts for
//! display panels.

use crate::simulation::forces::total_magnetic_force_at;
use crate::simulation::params::PhysicsVariables;
use crate::simulation::stability::stability_factor;
use crate::simulation::states::DEFAULT_CART_POSITION_X;

/// Gravitational acceleration (m/s^2)
pub const GRAVITY: f64 = 9.81;

/// Height never exceeds `rail_separation / HEIGHT_CAP_DIVISOR`
pub const HEIGHT_CAP_DIVISOR: f64 = 2.5;
const HEIGHT_SCALE_DIVISOR: f64 = 3.0;

pub const MIN_LOAD_FACTOR: f64 = 0.3;
pub const MAX_LOAD_FACTOR: f64 = 1.0;

pub const BASE_SPEED: f64 = 15.0; // cm/s
const SPEED_PER_STRENGTH_RATIO: f64 = 10.0; // cm/s
pub const MAX_ACCELERATION_FACTOR: f64 = 3.0;

// positive floor for mass and weight when they divide
const MASS_FLOOR: f64 = 1e-9;

/// All derived quantities for one set of variables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dynamics {
    pub magnetic_force: f64, // N
    pub weight: f64, // N
    pub net_force: f64, // N
    pub stability: f64, // [0.5, 1]
    pub load_factor: f64, // 0 or [0.3, 1]
    pub levitation_height: f64, // cm
    pub actual_speed: f64, // cm/s
    pub velocity: f64, // cm/s, signed
}

impl Dynamics {
    /// Evaluate with the cart at the board center
    pub fn evaluate(vars: &PhysicsVariables) -> Self {
        Self::evaluate_at(vars, DEFAULT_CART_POSITION_X)
    }

    pub fn evaluate_at(vars: &PhysicsVariables, cart_x: f64) -> Self {
        let magnetic_force = total_magnetic_force_at(vars, cart_x);
        let weight = vars.weight();
        let net_force = magnetic_force - weight;
        let stability = stability_factor(vars.rail_separation);

        // Not levitating: resting on the track, nothing moves
        if net_force <= 0.0 {
            return Self {
                magnetic_force,
                weight,
                net_force,
                stability,
                load_factor: 0.0,
                levitation_height: 0.0,
                actual_speed: 0.0,
                velocity: 0.0,
            };
        }

        // surplus force relative to weight
        let force_ratio = net_force / weight.max(MASS_FLOOR * GRAVITY);

        let max_height = (vars.rail_separation / HEIGHT_CAP_DIVISOR) * stability;
        let raw_height = (force_ratio * vars.rail_separation / HEIGHT_SCALE_DIVISOR) * stability;
        let levitation_height = raw_height.min(max_height);

        let load_factor = force_ratio.clamp(MIN_LOAD_FACTOR, MAX_LOAD_FACTOR);

        let acceleration = net_force / vars.train_mass.max(MASS_FLOOR);
        let acceleration_factor = (acceleration / GRAVITY).min(MAX_ACCELERATION_FACTOR);
        let auto_motor_speed = BASE_SPEED + vars.magnet_type.strength_ratio() * SPEED_PER_STRENGTH_RATIO;
        let actual_speed = auto_motor_speed * acceleration_factor * stability * load_factor;

        Self {
            magnetic_force,
            weight,
            net_force,
            stability,
            load_factor,
            levitation_height,
            actual_speed,
            velocity: actual_speed * vars.motor_direction.sign(),
        }
    }

    /// Strict: an exactly balanced cart does not levitate
    pub fn is_levitating(&self) -> bool {
        self.net_force > 0.0
    }
}

pub fn net_force(vars: &PhysicsVariables) -> f64 {
    Dynamics::evaluate(vars).net_force
}

pub fn is_levitating(vars: &PhysicsVariables) -> bool {
    Dynamics::evaluate(vars).is_levitating()
}

pub fn levitation_height(vars: &PhysicsVariables) -> f64 {
    Dynamics::evaluate(vars).levitation_height
}

pub fn load_factor(vars: &PhysicsVariables) -> f64 {
    Dynamics::evaluate(vars).load_factor
}

pub fn actual_speed(vars: &PhysicsVariables) -> f64 {
    Dynamics::evaluate(vars).actual_speed
}

pub fn velocity(vars: &PhysicsVariables) -> f64 {
    Dynamics::evaluate(vars).velocity
}
