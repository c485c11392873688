//! Polyline with rounded joins ("cubic-linear").
//!
//! Segment `a` works on the window `p[a], p[a+1], p[a+2]` and rounds the
//! corner at `p[a+1]` with a nested (quadratic) interpolation between the
//! midpoints of the two chords. The first segment of an open curve starts at
//! `p[0]` and the last one ends at `p[n-1]`: at those ends the chord blend
//! factor is the local progress itself instead of one half. Looped curves use
//! one half at every joint, the wrap segments included.

use sparc_math::CurveVector;

use super::linear;

/// Chord blend factor used at interior joints.
pub const JOIN_BLEND: f64 = 0.5;

/// Number of windows for `nodes` points.
pub fn segment_count(nodes: usize, looped: bool) -> usize {
    if looped {
        nodes
    } else {
        nodes.saturating_sub(2)
    }
}

/// Evaluate segment (window) `segment` at local progress `t`.
///
/// With fewer than three points the curve degenerates to a straight line.
pub fn point<V: CurveVector>(points: &[V], segment: usize, t: f64, looped: bool) -> V {
    let n = points.len();
    if n < 3 {
        return linear::point(points, segment, t, false);
    }

    let count = segment_count(n, looped);
    let a = segment.min(count - 1);
    let t = t.clamp(0.0, 1.0);

    let p0 = points[a];
    let p1 = points[(a + 1) % n];
    let p2 = points[(a + 2) % n];

    let (m0, m1) = blend_factors(a, count, t, looped);
    let i0 = p0.lerp(p1, m0);
    let i1 = p1.lerp(p2, m1);

    i0.lerp(p1, t).lerp(p1.lerp(i1, t), t)
}

/// Chord blend factors `(m0, m1)` for the window at `segment`.
fn blend_factors(segment: usize, count: usize, t: f64, looped: bool) -> (f64, f64) {
    if looped {
        return (JOIN_BLEND, JOIN_BLEND);
    }
    let m0 = if segment == 0 { t } else { JOIN_BLEND };
    let m1 = if segment + 1 == count { t } else { JOIN_BLEND };
    (m0, m1)
}
