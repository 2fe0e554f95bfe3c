use std::hint::black_box;
use std::time::Instant;

use crate::simulation::dynamics::Dynamics;
use crate::simulation::engine::update;
use crate::simulation::forces::total_magnetic_force;
use crate::simulation::params::PhysicsVariables;

/// Time the per-tick update over increasing magnet counts.
/// One frame at 60 Hz leaves ~16 ms; the update should use a tiny fraction
pub fn bench_update() {
    // Magnets per rail to test
    let counts = [2, 10, 20, 40];
    let iters = 100_000;

    for count in counts {
        let vars = PhysicsVariables {
            magnet_count: count,
            ..Default::default()
        };

        // Warm up
        black_box(update(&vars));

        // Time the aggregate sum alone
        let t0 = Instant::now();
        for _ in 0..iters {
            black_box(total_magnetic_force(black_box(&vars)));
        }
        let dt_force = t0.elapsed().as_secs_f64() / iters as f64;

        // Time the full state update
        let t1 = Instant::now();
        for _ in 0..iters {
            black_box(update(black_box(&vars)));
        }
        let dt_update = t1.elapsed().as_secs_f64() / iters as f64;

        println!(
            "magnets = {count:3}, force sum = {:8.3} us, update = {:8.3} us",
            dt_force * 1e6,
            dt_update * 1e6
        );
    }
}

/// Sweep the train mass and print where levitation stops
pub fn bench_mass_sweep() {
    let steps = 20;
    let base = PhysicsVariables {
        magnet_distance: 2.0,
        magnet_count: 40,
        rail_separation: 3.0,
        ..Default::default()
    };

    for i in 0..=steps {
        let train_mass = 0.1 + (2.0 - 0.1) * i as f64 / steps as f64;
        let vars = PhysicsVariables { train_mass, ..base };
        let d = Dynamics::evaluate(&vars);
        println!(
            "m = {train_mass:5.3} kg, net = {:9.3} N, height = {:6.3} cm, speed = {:7.3} cm/s",
            d.net_force, d.levitation_height, d.actual_speed
        );
    }
}
