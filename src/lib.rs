pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodyStore, FlatSystem, ObjectSystem, NVec2};
pub use simulation::forces::{axis_force, AxisGravity};
pub use simulation::integrator::{integrate_body, sequential_step, snapshot_step, Stepper};
pub use simulation::checksum::checksum;
pub use simulation::engine::{run, run_scenario, run_scenario_as, Engine, RunReport};
pub use simulation::scenario::{init, spawn_bodies, Scenario};
pub use simulation::params::Parameters;

pub use configuration::config::{
    AccelRuleConfig, BodyConfig, EngineConfig, ForceLawConfig, LayoutConfig, ParametersConfig, ScenarioConfig,
    UpdateConfig,
};

pub use benchmark::benchmark::{bench_layouts, bench_layouts_curve, LayoutComparison};

pub use error::SimError;
