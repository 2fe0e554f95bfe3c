//! Per-magnet force breakdown for display panels
//!
//! Splits the aggregate force into the contribution of every magnet on
//! both rails and summarizes it: how many magnets matter, how efficient
//! the array is compared with a naive linear sum, and which magnets
//! dominate. Also samples the single-magnet law for force/distance graphs.

use serde::Serialize;

use crate::simulation::forces::{force_from_one_magnet, magnet_offset};
use crate::simulation::params::PhysicsVariables;
use crate::simulation::states::DEFAULT_CART_POSITION_X;

/// Contributions above this share (percent) count as active
pub const ACTIVE_THRESHOLD_PERCENT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rail {
    Upper,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MagnetContribution {
    pub index: u32,
    pub rail: Rail,
    pub distance: f64, // cm, magnet to cart
    pub force: f64, // N
    pub percentage: f64, // share of the total force
}

/// Force of every magnet on both rails, upper before lower for each index
pub fn magnet_contributions(vars: &PhysicsVariables) -> Vec<MagnetContribution> {
    magnet_contributions_at(vars, DEFAULT_CART_POSITION_X)
}

pub fn magnet_contributions_at(vars: &PhysicsVariables, cart_x: f64) -> Vec<MagnetContribution> {
    let strength = vars.magnet_type.nominal_force();

    let mut out = Vec::with_capacity(2 * vars.magnet_count as usize);
    for i in 0..vars.magnet_count {
        let distance = magnet_offset(vars, i, cart_x).norm();
        let force = force_from_one_magnet(strength, distance);
        for rail in [Rail::Upper, Rail::Lower] {
            out.push(MagnetContribution { index: i, rail, distance, force, percentage: 0.0 });
        }
    }

    let total: f64 = out.iter().map(|c| c.force).sum();
    if total > 0.0 {
        for c in out.iter_mut() {
            c.percentage = c.force / total * 100.0;
        }
    }
    out
}

/// Summary statistics over [`magnet_contributions`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForceBreakdown {
    pub total_force: f64,
    pub active_magnets: usize,
    pub efficiency: f64, // percent of magnet_count * nominal force
    pub average_distance: f64,
    pub top: Vec<MagnetContribution>, // strongest first
}

impl ForceBreakdown {
    pub fn from_variables(vars: &PhysicsVariables, top_n: usize) -> Self {
        let contributions = magnet_contributions(vars);
        Self::from_contributions(vars, contributions, top_n)
    }

    pub fn from_contributions(vars: &PhysicsVariables, mut contributions: Vec<MagnetContribution>, top_n: usize) -> Self {
        let total_force: f64 = contributions.iter().map(|c| c.force).sum();

        let active_magnets = contributions
            .iter()
            .filter(|c| c.percentage > ACTIVE_THRESHOLD_PERCENT)
            .count();

        let theoretical_max = f64::from(vars.magnet_count) * vars.magnet_type.nominal_force();
        let efficiency = if theoretical_max > 0.0 {
            total_force / theoretical_max * 100.0
        } else {
            0.0
        };

        let average_distance = if contributions.is_empty() {
            0.0
        } else {
            contributions.iter().map(|c| c.distance).sum::<f64>() / contributions.len() as f64
        };

        // stable sort: equal forces keep index order
        contributions.sort_by(|a, b| b.force.total_cmp(&a.force));
        contributions.truncate(top_n);

        Self {
            total_force,
            active_magnets,
            efficiency,
            average_distance,
            top: contributions,
        }
    }
}

/// Sample the single-magnet law at `samples` evenly spaced distances in
/// `[r_min, r_max]`, returning `(distance, force)` pairs
pub fn force_distance_curve(nominal_strength: f64, r_min: f64, r_max: f64, samples: usize) -> Vec<(f64, f64)> {
    match samples {
        0 => Vec::new(),
        1 => vec![(r_min, force_from_one_magnet(nominal_strength, r_min))],
        n => {
            let step = (r_max - r_min) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let r = r_min + step * i as f64;
                    (r, force_from_one_magnet(nominal_strength, r))
                })
                .collect()
        }
    }
}
