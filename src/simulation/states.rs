//! Core state types for the N-body simulation.
//!
//! The same set of bodies can be held in two physical layouts:
//! - `FlatSystem`   struct-of-arrays, one contiguous `Vec<f64>` per attribute
//! - `ObjectSystem` array-of-structs, one `Vec<Body>` of full records
//!
//! Both implement [`BodyStore`], the indexed get/set capability the force
//! accumulator and integrator are written against. A body's identity is its
//! index into the store.

use nalgebra::Vector2;

use crate::error::SimError;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
}

impl Body {
    /// Body at rest at `x` with mass `m`
    pub fn at_rest(x: NVec2, m: f64) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
            m,
        }
    }
}

/// Indexed access to per-body attributes for a fixed number of bodies.
///
/// Indices must be in `[0, len())`; anything else panics on the underlying
/// slice bounds check.
pub trait BodyStore {
    /// Build a store holding exactly `bodies`, in order
    fn from_bodies(bodies: &[Body]) -> Result<Self, SimError>
    where
        Self: Sized;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn position(&self, i: usize) -> NVec2;
    fn set_position(&mut self, i: usize, x: NVec2);

    fn velocity(&self, i: usize) -> NVec2;
    fn set_velocity(&mut self, i: usize, v: NVec2);

    fn mass(&self, i: usize) -> f64;
    fn set_mass(&mut self, i: usize, m: f64);

    /// Copy every body out as a record, in index order
    fn to_bodies(&self) -> Vec<Body> {
        (0..self.len())
            .map(|i| Body {
                x: self.position(i),
                v: self.velocity(i),
                m: self.mass(i),
            })
            .collect()
    }
}

/// Struct-of-arrays layout: five parallel sequences indexed by body
#[derive(Debug, Clone, Default)]
pub struct FlatSystem {
    pub px: Vec<f64>,
    pub py: Vec<f64>,
    pub vx: Vec<f64>,
    pub vy: Vec<f64>,
    pub m: Vec<f64>,
}

impl BodyStore for FlatSystem {
    fn from_bodies(bodies: &[Body]) -> Result<Self, SimError> {
        let n = bodies.len();
        let mut sys = FlatSystem::default();
        for column in [&mut sys.px, &mut sys.py, &mut sys.vx, &mut sys.vy, &mut sys.m] {
            column
                .try_reserve_exact(n)
                .map_err(|source| SimError::Allocation { bodies: n, source })?;
        }

        for b in bodies {
            sys.px.push(b.x.x);
            sys.py.push(b.x.y);
            sys.vx.push(b.v.x);
            sys.vy.push(b.v.y);
            sys.m.push(b.m);
        }
        Ok(sys)
    }

    #[inline]
    fn len(&self) -> usize {
        self.m.len()
    }

    #[inline]
    fn position(&self, i: usize) -> NVec2 {
        NVec2::new(self.px[i], self.py[i])
    }

    #[inline]
    fn set_position(&mut self, i: usize, x: NVec2) {
        self.px[i] = x.x;
        self.py[i] = x.y;
    }

    #[inline]
    fn velocity(&self, i: usize) -> NVec2 {
        NVec2::new(self.vx[i], self.vy[i])
    }

    #[inline]
    fn set_velocity(&mut self, i: usize, v: NVec2) {
        self.vx[i] = v.x;
        self.vy[i] = v.y;
    }

    #[inline]
    fn mass(&self, i: usize) -> f64 {
        self.m[i]
    }

    #[inline]
    fn set_mass(&mut self, i: usize, m: f64) {
        self.m[i] = m;
    }
}

/// Array-of-structs layout: one record per body
#[derive(Debug, Clone, Default)]
pub struct ObjectSystem {
    pub bodies: Vec<Body>,
}

impl BodyStore for ObjectSystem {
    fn from_bodies(bodies: &[Body]) -> Result<Self, SimError> {
        let mut records = Vec::new();
        records
            .try_reserve_exact(bodies.len())
            .map_err(|source| SimError::Allocation { bodies: bodies.len(), source })?;
        records.extend_from_slice(bodies);
        Ok(Self { bodies: records })
    }

    #[inline]
    fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    fn position(&self, i: usize) -> NVec2 {
        self.bodies[i].x
    }

    #[inline]
    fn set_position(&mut self, i: usize, x: NVec2) {
        self.bodies[i].x = x;
    }

    #[inline]
    fn velocity(&self, i: usize) -> NVec2 {
        self.bodies[i].v
    }

    #[inline]
    fn set_velocity(&mut self, i: usize, v: NVec2) {
        self.bodies[i].v = v;
    }

    #[inline]
    fn mass(&self, i: usize) -> f64 {
        self.bodies[i].m
    }

    #[inline]
    fn set_mass(&mut self, i: usize, m: f64) {
        self.bodies[i].m = m;
    }

    fn to_bodies(&self) -> Vec<Body> {
        self.bodies.clone()
    }
}
