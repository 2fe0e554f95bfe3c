//! Rail-separation stability factor

/// Rail separation (cm) at which the track is most stable
pub const OPTIMAL_SEPARATION: f64 = 6.0;

pub const MIN_STABILITY: f64 = 0.5;
pub const MAX_STABILITY: f64 = 1.0;

// keeps the ratio finite for a zero or negative separation
const SEPARATION_FLOOR: f64 = 1e-6;

/// Dimensionless stability in [0.5, 1.0]
/// Wider rails than optimal lose stability; narrower ones are capped at 1
pub fn stability_factor(rail_separation: f64) -> f64 {
    let separation = rail_separation.max(SEPARATION_FLOOR);
    (OPTIMAL_SEPARATION / separation).clamp(MIN_STABILITY, MAX_STABILITY)
}
