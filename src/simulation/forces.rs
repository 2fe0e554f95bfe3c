//! Magnetic force contributors for the maglev engine
//!
//! Defines the single-magnet force law (axial dipole-dipole, inverse
//! fourth power in distance) and the aggregate sum over both rails

use std::f64::consts::PI;

use crate::simulation::params::PhysicsVariables;
use crate::simulation::states::{NVec2, DEFAULT_CART_POSITION_X};

/// Vacuum permeability (H/m)
pub const MU_0: f64 = 4.0 * PI * 1e-7;

/// Axial dipole-dipole constant k = 3 mu_0 / (4 pi), about 3e-7
pub const MAGNETIC_CONSTANT: f64 = 3.0 * MU_0 / (4.0 * PI);

/// Calibration factor bringing catalog Newton values into the regime of `k`
pub const SCALING_FACTOR: f64 = 1e9;

/// Distance floor (cm) below which the law is not evaluated
pub const MIN_DISTANCE: f64 = 0.5;

/// Trait for single-magnet force laws
/// Implementations return the force a magnet of nominal strength
/// `strength` exerts on the cart at `distance`
pub trait ForceLaw {
    fn force(&self, strength: f64, distance: f64) -> f64;
}

/// Axial dipole-dipole interaction, F = k * s * M / r^4
pub struct AxialDipole {
    pub k: f64, // magnetic constant
    pub scaling: f64, // nominal strength calibration
    pub min_distance: f64, // singularity floor
}

impl Default for AxialDipole {
    fn default() -> Self {
        Self {
            k: MAGNETIC_CONSTANT,
            scaling: SCALING_FACTOR,
            min_distance: MIN_DISTANCE,
        }
    }
}

impl ForceLaw for AxialDipole {
    fn force(&self, strength: f64, distance: f64) -> f64 {
        // f64::max also discards a NaN distance
        let r = distance.max(self.min_distance);
        let r2 = r * r;
        self.k * strength * self.scaling / (r2 * r2)
    }
}

/// Force of one magnet of nominal strength `nominal_strength` (N) at
/// `distance` (cm), using the default [`AxialDipole`] law
pub fn force_from_one_magnet(nominal_strength: f64, distance: f64) -> f64 {
    AxialDipole::default().force(nominal_strength, distance)
}

/// Position of magnet `index` along a rail, as an offset from the cart
/// (horizontal, vertical). The cart sits midway between the rails
pub fn magnet_offset(vars: &PhysicsVariables, index: u32, cart_x: f64) -> NVec2 {
    let magnet_x = f64::from(index) * vars.magnet_distance;
    NVec2::new((magnet_x - cart_x).abs(), vars.rail_separation / 2.0)
}

/// Total magnetic force on the cart at the board center
pub fn total_magnetic_force(vars: &PhysicsVariables) -> f64 {
    total_magnetic_force_at(vars, DEFAULT_CART_POSITION_X)
}

/// Total magnetic force on the cart at `cart_x`
pub fn total_magnetic_force_at(vars: &PhysicsVariables, cart_x: f64) -> f64 {
    total_magnetic_force_with(&AxialDipole::default(), vars, cart_x)
}

/// Sum `law` over every magnet of both rails, in index order
pub fn total_magnetic_force_with<L: ForceLaw>(law: &L, vars: &PhysicsVariables, cart_x: f64) -> f64 {
    let strength = vars.magnet_type.nominal_force();

    let mut total = 0.0;
    for i in 0..vars.magnet_count {
        let distance = magnet_offset(vars, i, cart_x).norm();
        // upper and lower rail contribute equally
        total += 2.0 * law.force(strength, distance);
    }
    total
}
