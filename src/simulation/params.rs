//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - body count and number of unit time steps,
//! - spawn range upper bound,
//! - gravitational constant `G`,
//! - the resolved random seed

pub const NUM_BODIES: usize = 1000;
pub const NUM_STEPS: usize = 1000;
pub const MAX_SPAWN_DISTANCE: f64 = 10_000.0;
pub const G: f64 = 6.67430e-11;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub n_bodies: usize, // body count
    pub steps: usize, // unit time steps per run
    pub max_spawn: f64, // spawn range is [1, max_spawn) on each axis
    pub G: f64, // gravitational constant
    pub seed: u64, // seed the initial bodies were drawn with
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            n_bodies: NUM_BODIES,
            steps: NUM_STEPS,
            max_spawn: MAX_SPAWN_DISTANCE,
            G,
            seed: 0,
        }
    }
}
