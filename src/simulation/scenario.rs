//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`) with the seed resolved
//! - the initial bodies at t = 0, layout-neutral
//!
//! The bodies are loaded into a `FlatSystem` or `ObjectSystem` only when a
//! run starts, so both layouts can be fed the exact same initial state.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{AccelRuleConfig, BodyConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyStore, NVec2};

/// Initial state plus everything needed to run it
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub bodies: Vec<Body>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let p_cfg = cfg.parameters;
        let seed = p_cfg.seed.unwrap_or_else(rand::random);

        check_spawn_bound(p_cfg.max_spawn_distance)?;
        if !p_cfg.G.is_finite() {
            return Err(SimError::InvalidConfig(format!("G must be finite, got {}", p_cfg.G)));
        }

        // Explicit bodies win over random spawn
        let bodies = if cfg.bodies.is_empty() {
            spawn_bodies(p_cfg.n_bodies, p_cfg.max_spawn_distance, seed)?
        } else {
            cfg.bodies
                .iter()
                .enumerate()
                .map(|(i, bc)| body_from_config(i, bc, cfg.engine.accel_rule))
                .collect::<Result<Vec<_>, _>>()?
        };

        let parameters = Parameters {
            n_bodies: bodies.len(),
            steps: p_cfg.steps,
            max_spawn: p_cfg.max_spawn_distance,
            G: p_cfg.G,
            seed,
        };

        let engine = Engine::from(&cfg.engine);

        info!(
            "scenario: {} bodies, {} steps, spawn [1, {}), seed {}, {:?}",
            parameters.n_bodies, parameters.steps, parameters.max_spawn, parameters.seed, engine
        );

        Ok(Self {
            engine,
            parameters,
            bodies,
        })
    }
}

/// Spawn `n` bodies at rest. Each axis of the position and the mass are drawn
/// uniformly from `[1, max_spawn)`, in that order per body.
pub fn spawn_bodies(n: usize, max_spawn: f64, seed: u64) -> Result<Vec<Body>, SimError> {
    check_spawn_bound(max_spawn)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut bodies = Vec::new();
    bodies
        .try_reserve_exact(n)
        .map_err(|source| SimError::Allocation { bodies: n, source })?;

    for _ in 0..n {
        let x = rng.gen_range(1.0..max_spawn);
        let y = rng.gen_range(1.0..max_spawn);
        let m = rng.gen_range(1.0..max_spawn);
        bodies.push(Body::at_rest(NVec2::new(x, y), m));
    }
    Ok(bodies)
}

/// Allocate and seed a store of `n` bodies in layout `S`
pub fn init<S: BodyStore>(n: usize, max_spawn: f64, seed: u64) -> Result<S, SimError> {
    S::from_bodies(&spawn_bodies(n, max_spawn, seed)?)
}

fn check_spawn_bound(max_spawn: f64) -> Result<(), SimError> {
    if max_spawn.is_finite() && max_spawn > 1.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "max_spawn_distance must be finite and greater than 1, got {max_spawn}"
        )))
    }
}

fn body_from_config(i: usize, bc: &BodyConfig, rule: AccelRuleConfig) -> Result<Body, SimError> {
    let finite = bc.x.iter().chain(bc.v.iter()).all(|c| c.is_finite());
    if !finite || !bc.m.is_finite() || bc.m < 0.0 {
        return Err(SimError::InvalidConfig(format!("body {i} has non-finite values or negative mass")));
    }
    if bc.m == 0.0 && rule == AccelRuleConfig::Divide {
        return Err(SimError::InvalidConfig(format!("body {i} has zero mass, acceleration would divide by zero")));
    }

    Ok(Body {
        x: NVec2::new(bc.x[0], bc.x[1]),
        v: NVec2::new(bc.v[0], bc.v[1]),
        m: bc.m,
    })
}
