//! Curve trait shared by snapshots and the helpers that sample them.

use sparc_math::CurveVector;

/// A curve parameterized by normalized progress over `[0, 1]`.
pub trait Curve<V: CurveVector>: Send + Sync {
    /// Evaluate the curve at `progress`, clamped to the curve's endpoints.
    fn point_at(&self, progress: f64) -> V;

    /// Total arc length.
    fn length(&self) -> f64;

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}
