//! Configuration types for loading maglev scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`VariablesConfig`] – the physical parameters of the track and cart
//! - [`RunConfig`]       – how long the headless host runs it
//! - [`ScenarioConfig`]  – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! variables:
//!   train_mass: 0.5           # kg
//!   magnet_distance: 4.0      # cm between magnets on a rail
//!   magnet_type: neodymium    # ferrite | alnico | samarium-cobalt, unknown -> neodymium
//!   magnet_count: 10          # per rail, even, 2..=40
//!   rail_separation: 6.0      # cm between the rails
//!   motor_direction: 1        # 1 forward, -1 backward
//!
//! run:
//!   ticks: 60
//! ```
//!
//! Every field of `variables` is optional and falls back to the default
//! track. Values are clamped into range when the scenario is built.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::configuration::error::Result;
use crate::simulation::params::MotorDirection;

/// Physical parameters as written in the scenario file
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct VariablesConfig {
    pub train_mass: Option<f64>,
    pub magnet_distance: Option<f64>,
    pub magnet_type: Option<String>, // resolved leniently when the scenario is built
    pub magnet_count: Option<u32>,
    pub rail_separation: Option<f64>,
    pub motor_direction: Option<MotorDirection>,
}

/// Host loop settings
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    #[serde(default = "default_ticks")]
    pub ticks: usize, // number of update calls after initialize
}

fn default_ticks() -> usize {
    60
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub variables: VariablesConfig,
    #[serde(default)]
    pub run: RunConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
