//! Pairwise force accumulation for the n-body engine
//!
//! The force on body `i` is summed over every other body `j` in index order,
//! one axis at a time. Each axis uses its own signed displacement as the
//! distance:
//!
//! ```text
//! dx = x_i - x_j
//! fx += G * m_i * m_j / dx^2
//! ```
//!
//! This is not 2D Newtonian gravity (there is no Euclidean distance and no
//! unit-vector decomposition). It is reproduced as-is so checksums match the
//! legacy benchmark programs. [`ForceLawConfig::Attractive`] keeps the same
//! magnitude but signs it toward the other body.

use crate::configuration::config::ForceLawConfig;
use crate::simulation::states::{BodyStore, NVec2};

/// Force along one axis between masses `m1` and `m2` separated by `d`.
///
/// Returns 0 when `d * d` is 0 (coincident coordinates) and when the
/// quotient overflows (`d * d` subnormal), so the result is always finite.
#[allow(non_snake_case)]
#[inline]
pub fn axis_force(G: f64, m1: f64, m2: f64, d: f64) -> f64 {
    let d2 = d * d;
    if d2 == 0.0 {
        return 0.0;
    }
    let f = (G * m1 * m2) / d2;
    if f.is_finite() { f } else { 0.0 }
}

/// Per-axis gravity between every ordered pair of bodies
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct AxisGravity {
    pub G: f64, // gravitional constant
    pub law: ForceLawConfig,
}

impl AxisGravity {
    #[inline]
    fn pair(&self, mi: f64, mj: f64, d: f64) -> f64 {
        let f = axis_force(self.G, mi, mj, d);
        match self.law {
            ForceLawConfig::Axis => f,
            // d > 0 means j sits on the negative side of i
            ForceLawConfig::Attractive => if d > 0.0 { -f } else { f },
        }
    }

    /// Net force on body `i` from all other bodies, reading `sys` as it is now
    pub fn force_on<S: BodyStore + ?Sized>(&self, sys: &S, i: usize) -> NVec2 {
        let xi = sys.position(i);
        let mi = sys.mass(i);
        let mut f = NVec2::zeros();

        for j in 0..sys.len() {
            if i == j {
                continue;
            }
            let xj = sys.position(j);
            let mj = sys.mass(j);

            let dx = xi.x - xj.x;
            let dy = xi.y - xj.y;

            f.x += self.pair(mi, mj, dx);
            f.y += self.pair(mi, mj, dy);
        }
        f
    }

    /// Net force on every body from the same state
    /// - `out[i]` is overwritten with the force on body `i`
    pub fn accumulate_forces<S: BodyStore + ?Sized>(&self, sys: &S, out: &mut [NVec2]) {
        for (i, f) in out.iter_mut().enumerate().take(sys.len()) {
            *f = self.force_on(sys, i);
        }
    }
}
