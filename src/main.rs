use maglevsim::{ScenarioConfig, Scenario};
use maglevsim::{bench_update, bench_mass_sweep};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up in `scenarios/` unless it is an existing path
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Print every simulated state as YAML
    #[arg(long)]
    dump: bool,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    info!("loaded scenario from {}", config_path.display());

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_update();
        bench_mass_sweep();
        return Ok(());
    }

    let scenario = Scenario::build_scenario(load_scenario_from_yaml(&args.file_name)?);
    let v = &scenario.variables;
    info!(
        "{} x2 {} magnets, {} cm apart, rails {} cm, cart {} kg",
        v.magnet_count, v.magnet_type, v.magnet_distance, v.rail_separation, v.train_mass
    );

    let states = scenario.run();

    let d = scenario.dynamics();
    let breakdown = scenario.breakdown(3);
    info!(
        "magnetic force {:.3} N, weight {:.3} N, net {:.3} N, efficiency {:.1}%, {} active magnets",
        d.magnetic_force, d.weight, d.net_force, breakdown.efficiency, breakdown.active_magnets
    );

    if let Some(last) = states.last() {
        println!(
            "levitating: {}, height: {:.3} cm, velocity: {:.3} cm/s, net force: {:.3} N",
            last.is_levitating, last.levitation_height, last.velocity, last.net_force
        );
    }

    if args.dump {
        serde_yaml::to_writer(io::stdout().lock(), &states)?;
    }

    Ok(())
}
