//! Sampling utilities for turning curves into discrete polylines, mostly for
//! debug visualization.

use rayon::prelude::*;
use sparc_math::CurveVector;

use crate::curve::Curve;
use crate::snapshot::Snapshot;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Evaluate `divisions + 1` evenly spaced progress values in parallel.
///
/// Evaluation of a snapshot is read-only, so the samples are computed on the
/// rayon pool and returned in progress order.
pub fn sample_uniform<V: CurveVector>(curve: &dyn Curve<V>, divisions: usize) -> Vec<V> {
    let divisions = divisions.max(1);
    (0..=divisions)
        .into_par_iter()
        .map(|i| curve.point_at(i as f64 / divisions as f64))
        .collect()
}

/// Evaluate a snapshot at many progress values in parallel.
pub fn evaluate_many<V: CurveVector>(snapshot: &Snapshot<V>, progress: &[f64]) -> Vec<V> {
    progress.par_iter().map(|&p| snapshot.evaluate(p)).collect()
}

/// Positions where consecutive segments meet, start and end included.
pub fn segment_boundaries<V: CurveVector>(snapshot: &Snapshot<V>) -> Vec<V> {
    if !snapshot.spline_type().needs_table() {
        return snapshot.node(0).into_iter().collect();
    }
    std::iter::once(snapshot.start())
        .chain(snapshot.table().iter().map(|&p| snapshot.evaluate(p)))
        .collect()
}

/// Convert a snapshot to a polyline using adaptive subdivision.
///
/// Each segment's progress span is subdivided on its own, recursively
/// halving wherever the curve's midpoint deviates from the chord midpoint
/// by more than `tolerance`.
///
/// # Arguments
/// * `snapshot` - The curve to tessellate
/// * `tolerance` - Maximum allowed deviation from the true curve
///
/// # Returns
/// A vector of points approximating the curve.
pub fn curve_to_polyline<V: CurveVector>(snapshot: &Snapshot<V>, tolerance: f64) -> Vec<V> {
    let mut points = vec![snapshot.start()];
    if !snapshot.spline_type().needs_table() {
        return points;
    }

    let mut p0 = 0.0;
    for &p1 in snapshot.table() {
        if p1 > p0 {
            subdivide(snapshot, p0, p1, tolerance, &mut points, 0);
        }
        p0 = p1;
    }
    points
}

fn subdivide<V: CurveVector>(
    curve: &dyn Curve<V>,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<V>,
    depth: u32,
) {
    if depth >= MAX_DEPTH {
        points.push(curve.point_at(t1));
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let p1 = curve.point_at(t1);
    let p_mid = curve.point_at(t_mid);

    let chord_mid = p0.lerp(p1, 0.5);
    let deviation = p_mid.distance(chord_mid);

    if deviation > tolerance {
        subdivide(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}
