//! User-adjustable physical parameters of the maglev track
//!
//! `PhysicsVariables` is the only input of the physics core:
//! - cart mass and motor direction,
//! - magnet material, count and spacing along each rail,
//! - vertical separation between the two rails
//!
//! The host owns and replaces it; the core only reads it

use serde::{Deserialize, Serialize};

use crate::configuration::error::ConfigError;
use crate::simulation::magnets::MagnetType;

pub const MIN_MAGNET_COUNT: u32 = 2;
pub const MAX_MAGNET_COUNT: u32 = 40;

pub const TRAIN_MASS_RANGE: (f64, f64) = (0.1, 2.0); // kg
pub const MAGNET_DISTANCE_RANGE: (f64, f64) = (2.0, 15.0); // cm
pub const RAIL_SEPARATION_RANGE: (f64, f64) = (3.0, 12.0); // cm

/// Direction the linear motor pushes the cart
/// Only the sign of the velocity depends on it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum MotorDirection {
    #[default]
    Forward,
    Backward,
}

impl MotorDirection {
    pub fn sign(self) -> f64 {
        match self {
            MotorDirection::Forward => 1.0,
            MotorDirection::Backward => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            MotorDirection::Forward => MotorDirection::Backward,
            MotorDirection::Backward => MotorDirection::Forward,
        }
    }
}

impl TryFrom<i64> for MotorDirection {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MotorDirection::Forward),
            -1 => Ok(MotorDirection::Backward),
            other => Err(ConfigError::InvalidMotorDirection(other)),
        }
    }
}

impl From<MotorDirection> for i64 {
    fn from(dir: MotorDirection) -> Self {
        match dir {
            MotorDirection::Forward => 1,
            MotorDirection::Backward => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicsVariables {
    pub train_mass: f64, // kg
    pub magnet_distance: f64, // cm between consecutive magnets on a rail
    pub magnet_type: MagnetType,
    pub magnet_count: u32, // magnets per rail, even
    pub rail_separation: f64, // cm between the two rails
    pub motor_direction: MotorDirection,
}

impl Default for PhysicsVariables {
    fn default() -> Self {
        Self {
            train_mass: 0.5,
            magnet_distance: 4.0,
            magnet_type: MagnetType::Neodymium,
            magnet_count: 10,
            rail_separation: 6.0,
            motor_direction: MotorDirection::Forward,
        }
    }
}

impl PhysicsVariables {
    /// Weight of the cart in Newtons
    pub fn weight(&self) -> f64 {
        self.train_mass * crate::simulation::dynamics::GRAVITY
    }

    /// Clamp every field into its valid range
    ///
    /// Odd magnet counts round up to the next even number before the
    /// [2, 40] clamp; non-finite reals fall back to the default value
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();

        let mut count = self.magnet_count;
        if count % 2 != 0 {
            count = count.saturating_add(1);
        }
        let magnet_count = count.clamp(MIN_MAGNET_COUNT, MAX_MAGNET_COUNT);

        Self {
            train_mass: clamp_finite(self.train_mass, TRAIN_MASS_RANGE, defaults.train_mass),
            magnet_distance: clamp_finite(self.magnet_distance, MAGNET_DISTANCE_RANGE, defaults.magnet_distance),
            magnet_type: self.magnet_type,
            magnet_count,
            rail_separation: clamp_finite(self.rail_separation, RAIL_SEPARATION_RANGE, defaults.rail_separation),
            motor_direction: self.motor_direction,
        }
    }
}

fn clamp_finite(value: f64, (lo, hi): (f64, f64), fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(lo, hi)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_count_rounds_up() {
        let v = PhysicsVariables { magnet_count: 7, ..Default::default() }.sanitized();
        assert_eq!(v.magnet_count, 8);

        let v = PhysicsVariables { magnet_count: 41, ..Default::default() }.sanitized();
        assert_eq!(v.magnet_count, 40);

        let v = PhysicsVariables { magnet_count: 0, ..Default::default() }.sanitized();
        assert_eq!(v.magnet_count, 2);
    }

    #[test]
    fn reals_clamped() {
        let v = PhysicsVariables {
            train_mass: -3.0,
            magnet_distance: 100.0,
            rail_separation: f64::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(v.train_mass, 0.1);
        assert_eq!(v.magnet_distance, 15.0);
        assert_eq!(v.rail_separation, 6.0);
    }

    #[test]
    fn defaults_already_valid() {
        let d = PhysicsVariables::default();
        assert_eq!(d.sanitized(), d);
    }

    #[test]
    fn motor_direction_from_int() {
        assert_eq!(MotorDirection::try_from(1i64).unwrap(), MotorDirection::Forward);
        assert_eq!(MotorDirection::try_from(-1i64).unwrap(), MotorDirection::Backward);
        assert!(MotorDirection::try_from(0i64).is_err());
        assert_eq!(MotorDirection::Forward.reversed().sign(), -1.0);
    }
}
