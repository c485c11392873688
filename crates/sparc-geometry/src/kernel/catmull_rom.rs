//! Centripetal Catmull-Rom segments, evaluated with the Barry-Goldman
//! pyramid of linear blends.
//!
//! Segment `a` runs from `p[a]` to `p[a+1]` and is shaped by the neighbours
//! on either side. On an open curve the missing outer neighbour at each true
//! end is synthesized perpendicular to the end chord: one unit away for a
//! three-point curve, half the chord length away otherwise.

use sparc_math::CurveVector;

use super::next_index;

/// Knot exponent: 0.5 is the centripetal parameterization.
pub const ALPHA: f64 = 0.5;

/// Smallest knot interval, keeps coincident points from collapsing a knot span.
const MIN_KNOT_INTERVAL: f64 = 1e-6;

/// Offset of a synthesized neighbour on a three-point curve.
const THREE_POINT_PHANTOM_OFFSET: f64 = 1.0;

/// Evaluate the segment from `points[segment]` to the next point.
///
/// Local progress `0` and `1` return the bounding points exactly, and a
/// segment between coincident points stays on that point.
pub fn point<V: CurveVector>(points: &[V], segment: usize, t: f64, looped: bool) -> V {
    let n = points.len();
    debug_assert!(n >= 2, "Catmull-Rom kernel needs 2 points, got {n}");
    let a = segment.min(n - 1);
    let b = next_index(a, n, looped);
    let (p1, p2) = (points[a], points[b]);

    if t <= 0.0 {
        return p1;
    }
    if t >= 1.0 || p1 == p2 {
        return p2;
    }

    let [p0, _, _, p3] = window(points, a, looped);
    barry_goldman([p0, p1, p2, p3], t)
}

/// The four points bracketing segment `a`, synthesizing outer neighbours at
/// the ends of an open curve.
pub fn window<V: CurveVector>(points: &[V], a: usize, looped: bool) -> [V; 4] {
    let n = points.len();
    let b = next_index(a, n, looped);
    let (p1, p2) = (points[a], points[b]);

    if looped {
        return [points[(a + n - 1) % n], p1, p2, points[(b + 1) % n]];
    }

    let offset = phantom_offset(p1, p2, n);
    let chord_normal = (p2 - p1).normalize_or_zero().perp();

    let p0 = if a > 0 {
        points[a - 1]
    } else {
        p1 - chord_normal * offset
    };
    let p3 = if b + 1 < n {
        points[b + 1]
    } else {
        p2 + chord_normal * offset
    };
    [p0, p1, p2, p3]
}

fn phantom_offset<V: CurveVector>(p1: V, p2: V, n: usize) -> f64 {
    if n == 3 {
        THREE_POINT_PHANTOM_OFFSET
    } else {
        p1.distance(p2) * 0.5
    }
}

/// Evaluate the middle span `p[1] -> p[2]` of a centripetal Catmull-Rom
/// window at local progress `t`.
pub fn barry_goldman<V: CurveVector>(p: [V; 4], t: f64) -> V {
    let k = knots(&p);
    let u = k[1] + t * (k[2] - k[1]);

    let a1 = blend(p[0], p[1], k[0], k[1], u);
    let a2 = blend(p[1], p[2], k[1], k[2], u);
    let a3 = blend(p[2], p[3], k[2], k[3], u);

    let b1 = blend(a1, a2, k[0], k[2], u);
    let b2 = blend(a2, a3, k[1], k[3], u);

    blend(b1, b2, k[1], k[2], u)
}

/// Knot sequence `t0..t3` with `t(n) = t(n-1) + |P(n) - P(n-1)|^alpha`.
fn knots<V: CurveVector>(p: &[V; 4]) -> [f64; 4] {
    let mut k = [0.0; 4];
    for i in 1..4 {
        let interval = p[i].distance(p[i - 1]).powf(ALPHA).max(MIN_KNOT_INTERVAL);
        k[i] = k[i - 1] + interval;
    }
    k
}

/// Blend `a` (at knot `ta`) and `b` (at knot `tb`) for knot value `u`.
fn blend<V: CurveVector>(a: V, b: V, ta: f64, tb: f64, u: f64) -> V {
    let span = tb - ta;
    a * ((tb - u) / span) + b * ((u - ta) / span)
}
