//! Build runnable scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! `Scenario` containing:
//! - sanitized physical variables (`PhysicsVariables`)
//! - run settings (tick count)
//!
//! The scenario plays the part of the animation host: it owns the
//! variables and feeds an immutable snapshot to the updater every tick.
//! Forces are always evaluated with the cart at the board center, the
//! same position `update` uses

use log::debug;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::analysis::ForceBreakdown;
use crate::simulation::dynamics::Dynamics;
use crate::simulation::engine::{initialize, update};
use crate::simulation::magnets::magnet_type_or_default;
use crate::simulation::params::PhysicsVariables;
use crate::simulation::states::SimulationState;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub variables: PhysicsVariables,
    pub ticks: usize,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Variables: start from the default track, override what the file sets
        let v_cfg = cfg.variables;
        let defaults = PhysicsVariables::default();
        let requested = PhysicsVariables {
            train_mass: v_cfg.train_mass.unwrap_or(defaults.train_mass),
            magnet_distance: v_cfg.magnet_distance.unwrap_or(defaults.magnet_distance),
            magnet_type: v_cfg
                .magnet_type
                .as_deref()
                .map_or(defaults.magnet_type, magnet_type_or_default),
            magnet_count: v_cfg.magnet_count.unwrap_or(defaults.magnet_count),
            rail_separation: v_cfg.rail_separation.unwrap_or(defaults.rail_separation),
            motor_direction: v_cfg.motor_direction.unwrap_or(defaults.motor_direction),
        };

        let variables = requested.sanitized();
        if variables != requested {
            debug!("clamped scenario variables {:?} -> {:?}", requested, variables);
        }

        Self {
            variables,
            ticks: cfg.run.ticks,
        }
    }

    /// Rest state followed by `ticks` updates
    ///
    /// Stands in for the host calling `update` once per frame. The variables
    /// never change during a run, so every state after the first is the same
    pub fn run(&self) -> Vec<SimulationState> {
        let mut states = Vec::with_capacity(self.ticks + 1);
        states.push(initialize(&self.variables));
        for _ in 0..self.ticks {
            states.push(update(&self.variables));
        }
        states
    }

    /// Force balance behind every state of [`Scenario::run`]
    pub fn dynamics(&self) -> Dynamics {
        Dynamics::evaluate(&self.variables)
    }

    pub fn breakdown(&self, top_n: usize) -> ForceBreakdown {
        ForceBreakdown::from_variables(&self.variables, top_n)
    }
}
