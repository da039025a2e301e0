//! Scalar reduction of the final state, used to compare layouts and runs

use super::states::BodyStore;

/// `sum(px + py + vx + vy)` over bodies in index order with a single
/// running total. Summation order changes the last bits, so only compare
/// values produced the same way.
pub fn checksum<S: BodyStore + ?Sized>(sys: &S) -> f64 {
    let mut ret = 0.0;
    for i in 0..sys.len() {
        let x = sys.position(i);
        let v = sys.velocity(i);
        ret += x.x + x.y + v.x + v.y;
    }
    ret
}
