pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::magnets::{MagnetType, MagnetProperties, ForceRange, DEFAULT_NOMINAL_FORCE};
pub use simulation::params::{PhysicsVariables, MotorDirection};
pub use simulation::states::{SimulationState, NVec2};
pub use simulation::forces::{ForceLaw, AxialDipole, force_from_one_magnet, total_magnetic_force, total_magnetic_force_at};
pub use simulation::stability::stability_factor;
pub use simulation::dynamics::{Dynamics, net_force, is_levitating, levitation_height, load_factor, actual_speed, velocity, GRAVITY};
pub use simulation::engine::{update, initialize};
pub use simulation::analysis::{MagnetContribution, ForceBreakdown, Rail, magnet_contributions, force_distance_curve};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, VariablesConfig, RunConfig};
pub use configuration::error::ConfigError;

pub use benchmark::benchmark::{bench_update, bench_mass_sweep};
