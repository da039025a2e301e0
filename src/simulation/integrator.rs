//! Fixed unit-step integrator for the N-body system
//!
//! Each body is advanced by one unit of time from its accumulated force:
//! velocity first, then position from the already-updated velocity.
//! `update_step` picks how force sums see the bodies processed earlier in
//! the same step (see [`UpdateConfig`]).

use super::forces::AxisGravity;
use super::states::{BodyStore, NVec2};
use crate::configuration::config::{AccelRuleConfig, UpdateConfig};

/// Apply `force` to body `i` for one unit of time
/// - `v += a`
/// - `x += v` (new velocity)
#[inline]
pub fn integrate_body<S: BodyStore + ?Sized>(sys: &mut S, i: usize, force: NVec2, rule: AccelRuleConfig) {
    let m = sys.mass(i);
    let a = match rule {
        AccelRuleConfig::Divide => force / m,
        AccelRuleConfig::LegacyMultiply => force * m,
    };

    let v = sys.velocity(i) + a;
    let x = sys.position(i) + v;
    sys.set_velocity(i, v);
    sys.set_position(i, x);
}

/// Advance the whole system by one step, updating each body in place right
/// after its own force sum. Bodies later in index order read positions of
/// earlier bodies that have already moved this step.
pub fn sequential_step<S: BodyStore + ?Sized>(sys: &mut S, gravity: &AxisGravity, rule: AccelRuleConfig) {
    for i in 0..sys.len() {
        let f = gravity.force_on(&*sys, i);
        integrate_body(sys, i, f, rule);
    }
}

/// Advance the whole system by one step with every force taken from the
/// pre-step state. `forces` is scratch space of at least `sys.len()` entries.
pub fn snapshot_step<S: BodyStore + ?Sized>(sys: &mut S, gravity: &AxisGravity, rule: AccelRuleConfig, forces: &mut [NVec2]) {
    let n = sys.len();
    gravity.accumulate_forces(&*sys, &mut forces[..n]);
    for (i, f) in forces[..n].iter().enumerate() {
        integrate_body(sys, i, *f, rule);
    }
}

/// Reusable per-run integrator state
#[derive(Debug, Clone)]
pub struct Stepper {
    pub gravity: AxisGravity,
    pub update: UpdateConfig,
    pub rule: AccelRuleConfig,
    scratch: Vec<NVec2>,
}

impl Stepper {
    pub fn new(gravity: AxisGravity, update: UpdateConfig, rule: AccelRuleConfig) -> Self {
        Self {
            gravity,
            update,
            rule,
            scratch: Vec::new(),
        }
    }

    /// Advance `sys` by one unit time step
    pub fn update_step<S: BodyStore + ?Sized>(&mut self, sys: &mut S) {
        match self.update {
            UpdateConfig::Sequential => sequential_step(sys, &self.gravity, self.rule),
            UpdateConfig::Snapshot => {
                if self.scratch.len() < sys.len() {
                    self.scratch.resize(sys.len(), NVec2::zeros());
                }
                snapshot_step(sys, &self.gravity, self.rule, &mut self.scratch);
            }
        }
    }
}
