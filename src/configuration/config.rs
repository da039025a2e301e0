//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – layout, update mode, force law and acceleration rule
//! - [`ParametersConfig`] – body count, step count, spawn bound, `G`, seed
//! - [`BodyConfig`]       – optional explicit initial bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document is the canonical run:
//! 1000 bodies, 1000 steps, spawn bound 10000, flat layout.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   layout: "object"        # "flat" (struct-of-arrays) or "object" (array-of-structs)
//!   update: "sequential"    # or "snapshot"
//!   force_law: "axis"       # or "attractive"
//!   accel_rule: "divide"    # or "legacy_multiply"
//!
//! parameters:
//!   n_bodies: 1000
//!   steps: 100
//!   max_spawn_distance: 100.0
//!   G: 6.67430e-11
//!   seed: 42                # omit for a random seed
//!
//! bodies:                   # optional, replaces the random spawn
//!   - x: [ 1.0, 0.0 ]
//!     m: 1.0
//!   - x: [ 0.0, 1.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.0
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::params::{G, MAX_SPAWN_DISTANCE, NUM_BODIES, NUM_STEPS};

/// Physical layout of the state store
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LayoutConfig {
    #[default]
    #[serde(rename = "flat")] // struct-of-arrays
    Flat,

    #[serde(rename = "object")] // array-of-structs
    Object,
}

/// How force sums read the state while bodies are being updated
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateConfig {
    #[default]
    #[serde(rename = "sequential")] // read-while-write, later bodies see earlier updates
    Sequential,

    #[serde(rename = "snapshot")] // all forces from the pre-step state, then integrate
    Snapshot,
}

/// Per-axis force formula
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceLawConfig {
    #[default]
    #[serde(rename = "axis")] // G m_i m_j / d^2 per axis, always non-negative
    Axis,

    #[serde(rename = "attractive")] // same magnitude, pointing toward the other body
    Attractive,
}

/// Force to velocity-delta rule
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccelRuleConfig {
    #[default]
    #[serde(rename = "divide")] // a = F / m
    Divide,

    #[serde(rename = "legacy_multiply")] // a = F * m, kept to reproduce old object-layout output
    LegacyMultiply,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub layout: LayoutConfig,
    pub update: UpdateConfig,
    pub force_law: ForceLawConfig,
    pub accel_rule: AccelRuleConfig,
}

#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub n_bodies: usize, // ignored when explicit bodies are given
    pub steps: usize,
    pub max_spawn_distance: f64, // exclusive upper bound of the spawn range [1, max)
    pub G: f64, // gravitational constant
    pub seed: Option<u64>, // None draws a fresh seed per run
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            n_bodies: NUM_BODIES,
            steps: NUM_STEPS,
            max_spawn_distance: MAX_SPAWN_DISTANCE,
            G,
            seed: None,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position
    #[serde(default)]
    pub v: [f64; 2], // initial velocity, zero when omitted
    pub m: f64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Parse a scenario document. Blank input is the default scenario.
    pub fn from_yaml_str(doc: &str) -> Result<Self, SimError> {
        if doc.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(doc)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SimError> {
        let doc = fs::read_to_string(path)?;
        Self::from_yaml_str(&doc)
    }
}
