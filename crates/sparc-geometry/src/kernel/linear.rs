//! Straight segments between consecutive points.

use sparc_math::CurveVector;

use super::next_index;

/// Evaluate the straight segment from `points[segment]` to the next point.
///
/// `points` must hold at least two points. `t` is clamped to `[0, 1]`.
pub fn point<V: CurveVector>(points: &[V], segment: usize, t: f64, looped: bool) -> V {
    let n = points.len();
    debug_assert!(n >= 2, "Linear kernel needs 2 points, got {n}");
    let a = segment.min(n - 1);
    let b = next_index(a, n, looped);
    points[a].lerp(points[b], t.clamp(0.0, 1.0))
}
