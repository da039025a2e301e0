use dodsim::{LayoutConfig, Scenario, ScenarioConfig};
use dodsim::{bench_layouts, bench_layouts_curve, run_scenario};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Brute-force N-body simulator comparing struct-of-arrays and array-of-structs layouts")]
struct Args {
    /// Scenario file under `scenarios/`, defaults built in when omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Override the scenario's layout
    #[arg(long, value_enum)]
    layout: Option<LayoutConfig>,

    /// Override the seed, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Override the random body count
    #[arg(long)]
    bodies: Option<usize>,

    /// Override the step count
    #[arg(long)]
    steps: Option<usize>,

    /// Run both layouts and print a timing comparison
    #[arg(long)]
    bench: bool,

    /// Print per-step timings of both layouts over a range of N as CSV
    #[arg(long)]
    curve: bool,
}

// load here to keep main clean
fn load_scenario_config(args: &Args) -> Result<ScenarioConfig> {
    let mut cfg = match &args.file_name {
        Some(file_name) => {
            let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
            ScenarioConfig::from_file(&config_path)
                .with_context(|| format!("failed to load scenario {}", config_path.display()))?
        }
        None => ScenarioConfig::default(),
    };

    if let Some(layout) = args.layout {
        cfg.engine.layout = layout;
    }
    if let Some(seed) = args.seed {
        cfg.parameters.seed = Some(seed);
    }
    if let Some(n) = args.bodies {
        cfg.parameters.n_bodies = n;
    }
    if let Some(steps) = args.steps {
        cfg.parameters.steps = steps;
    }

    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_config(&args)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("failed to build scenario")?;

    if args.curve {
        bench_layouts_curve(&scenario)?;
    } else if args.bench {
        bench_layouts(&scenario)?;
    } else {
        let report = run_scenario(&scenario)?;
        info!("{:?} layout finished in {:.6} s", report.layout, report.elapsed.as_secs_f64());
        println!("{}", report.checksum);
    }

    Ok(())
}
