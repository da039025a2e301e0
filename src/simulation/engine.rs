//! High-level runtime engine settings and the run driver
//!
//! `Engine` selects the layout, update mode, force law and acceleration
//! rule. `run_scenario` loads the scenario's bodies into the chosen layout,
//! steps it and reduces the result to a checksum.

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::configuration::config::{AccelRuleConfig, EngineConfig, ForceLawConfig, LayoutConfig, UpdateConfig};
use crate::error::SimError;
use crate::simulation::checksum::checksum;
use crate::simulation::forces::AxisGravity;
use crate::simulation::integrator::Stepper;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodyStore, FlatSystem, ObjectSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engine {
    pub layout: LayoutConfig, // flat or object
    pub update: UpdateConfig, // sequential or snapshot
    pub force_law: ForceLawConfig,
    pub accel_rule: AccelRuleConfig,
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            layout: cfg.layout,
            update: cfg.update,
            force_law: cfg.force_law,
            accel_rule: cfg.accel_rule,
        }
    }
}

/// Outcome of one run
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub layout: LayoutConfig,
    pub checksum: f64,
    pub elapsed: Duration, // stepping only, excludes loading the store
}

/// Step `sys` `params.steps` times in place
pub fn run<S: BodyStore + ?Sized>(sys: &mut S, engine: &Engine, params: &Parameters) {
    let gravity = AxisGravity {
        G: params.G,
        law: engine.force_law,
    };
    let mut stepper = Stepper::new(gravity, engine.update, engine.accel_rule);

    for step in 0..params.steps {
        stepper.update_step(sys);
        trace!("step {} done", step + 1);
    }
}

/// Load the scenario into its configured layout, run it and return the checksum
pub fn run_scenario(scenario: &Scenario) -> Result<RunReport, SimError> {
    run_scenario_as(scenario, scenario.engine.layout)
}

/// Same as [`run_scenario`] with the layout overridden
pub fn run_scenario_as(scenario: &Scenario, layout: LayoutConfig) -> Result<RunReport, SimError> {
    let (checksum, elapsed) = match layout {
        LayoutConfig::Flat => timed_run(FlatSystem::from_bodies(&scenario.bodies)?, scenario),
        LayoutConfig::Object => timed_run(ObjectSystem::from_bodies(&scenario.bodies)?, scenario),
    };

    debug!("{:?} layout: checksum {} in {:.6} s", layout, checksum, elapsed.as_secs_f64());

    Ok(RunReport {
        layout,
        checksum,
        elapsed,
    })
}

fn timed_run<S: BodyStore>(mut sys: S, scenario: &Scenario) -> (f64, Duration) {
    let t0 = Instant::now();
    run(&mut sys, &scenario.engine, &scenario.parameters);
    let elapsed = t0.elapsed();
    (checksum(&sys), elapsed)
}
