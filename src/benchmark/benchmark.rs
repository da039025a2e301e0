use std::time::Instant;

use crate::configuration::config::LayoutConfig;
use crate::error::SimError;
use crate::simulation::engine::{run, run_scenario_as, RunReport};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::{spawn_bodies, Scenario};
use crate::simulation::states::{BodyStore, FlatSystem, ObjectSystem};

/// Timings and checksums of both layouts run from the same initial bodies
#[derive(Debug, Clone, Copy)]
pub struct LayoutComparison {
    pub flat: RunReport,
    pub object: RunReport,
}

impl LayoutComparison {
    /// |flat - object| / max(|flat|, |object|), 0 when both are 0
    pub fn relative_difference(&self) -> f64 {
        relative_difference(self.flat.checksum, self.object.checksum)
    }

    /// object time / flat time
    pub fn speedup(&self) -> f64 {
        self.object.elapsed.as_secs_f64() / self.flat.elapsed.as_secs_f64()
    }
}

pub fn relative_difference(a: f64, b: f64) -> f64 {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 {
        return 0.0;
    }
    (a - b).abs() / scale
}

/// Run `scenario` once per layout and print a summary line
pub fn bench_layouts(scenario: &Scenario) -> Result<LayoutComparison, SimError> {
    let flat = run_scenario_as(scenario, LayoutConfig::Flat)?;
    let object = run_scenario_as(scenario, LayoutConfig::Object)?;
    let cmp = LayoutComparison { flat, object };

    println!(
        "N = {:5}, steps = {:5}, flat = {:8.6} s, object = {:8.6} s, speedup = {:5.2}x, checksum = {}, rel diff = {:e}",
        scenario.parameters.n_bodies,
        scenario.parameters.steps,
        flat.elapsed.as_secs_f64(),
        object.elapsed.as_secs_f64(),
        cmp.speedup(),
        flat.checksum,
        cmp.relative_difference(),
    );

    Ok(cmp)
}

/// Per-step time of both layouts over a range of N
/// Paste output directly into a spreadsheet to graph
pub fn bench_layouts_curve(base: &Scenario) -> Result<(), SimError> {
    println!("N,flat_ms,object_ms");

    for n in (200..=4000).step_by(200) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 1000 { 5 } else { 1 };

        let bodies = spawn_bodies(n, base.parameters.max_spawn, base.parameters.seed)?;
        let params = Parameters {
            n_bodies: n,
            steps,
            ..base.parameters.clone()
        };

        let mut flat = FlatSystem::from_bodies(&bodies)?;
        let t0 = Instant::now();
        run(&mut flat, &base.engine, &params);
        let ms_flat = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut object = ObjectSystem::from_bodies(&bodies)?;
        let t1 = Instant::now();
        run(&mut object, &base.engine, &params);
        let ms_object = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_flat, ms_object);
    }
    Ok(())
}
