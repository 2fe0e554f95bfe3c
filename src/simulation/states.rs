//! Core state types for the maglev simulation.
//!
//! `SimulationState` is the per-tick snapshot handed to renderers. It is
//! recomputed from scratch from `PhysicsVariables` every tick; nothing in it
//! is carried over between ticks.
//!
//! Also holds the board geometry used for the fixed display position and
//! the default cart position along the rails.

use nalgebra::Vector2;
use serde::Serialize;

pub type NVec2 = Vector2<f64>;

pub const BOARD_WIDTH: f64 = 80.0; // cm
pub const BOARD_HEIGHT: f64 = 30.0; // cm

/// Cart position along the rails used for force evaluation (board center)
pub const DEFAULT_CART_POSITION_X: f64 = BOARD_WIDTH / 2.0;

/// Where the cart is drawn; motion is shown by scrolling the background
pub const DISPLAY_POSITION_X: f64 = 30.0;
pub const DISPLAY_POSITION_Y: f64 = BOARD_HEIGHT / 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationState {
    pub levitation_height: f64, // cm, >= 0
    pub position_x: f64, // fixed display coordinate
    pub position_y: f64, // fixed display coordinate
    pub velocity: f64, // cm/s, signed by motor direction
    pub platform_angle: f64, // always 0 on a linear track
    pub net_force: f64, // N, magnetic force minus weight
    pub is_levitating: bool,
    pub actual_speed: f64, // cm/s, unsigned
}
