//! Spline-type dispatch: selects the kernel and locator pairing for a curve.

use sparc_math::CurveVector;

use crate::kernel;
use crate::locate::locate;
use crate::spline_type::SplineType;

/// Evaluate a curve at global `progress`.
///
/// `Empty` returns the zero vector and `Single` its lone point without
/// touching the table. For every other type, progress at or beyond the
/// bounds returns the exact start or end point; anything in between is
/// located in `table` and handed to the kernel.
///
/// # Arguments
/// * `spline_type` - Resolved spline type
/// * `points` - Backing points in the layout `spline_type` expects
/// * `table` - Cumulative-length table built for the same points
/// * `looped` - Whether the curve has a wrap segment
/// * `progress` - Global progress along the curve
pub fn evaluate<V: CurveVector>(
    spline_type: SplineType,
    points: &[V],
    table: &[f64],
    looped: bool,
    progress: f64,
) -> V {
    match spline_type {
        SplineType::Empty => V::ZERO,
        SplineType::Single => points.first().copied().unwrap_or(V::ZERO),
        SplineType::Linear
        | SplineType::CubicLinear
        | SplineType::Bezier
        | SplineType::CatmullRom => {
            if progress.is_nan() || progress <= 0.0 {
                return start_point(spline_type, points, looped);
            }
            if progress >= 1.0 {
                return end_point(spline_type, points, looped);
            }
            let location = locate(progress, table);
            kernel::evaluate_segment(spline_type, points, location.index, location.local, looped)
        }
    }
}

/// Position at progress 0.
///
/// Open curves start on their first authored point. Looped curves start
/// wherever their first segment does, which for the rounded-corner kernel is
/// the midpoint of the first chord.
pub fn start_point<V: CurveVector>(spline_type: SplineType, points: &[V], looped: bool) -> V {
    match spline_type {
        SplineType::Empty => V::ZERO,
        SplineType::Single => points.first().copied().unwrap_or(V::ZERO),
        _ if looped => kernel::evaluate_segment(spline_type, points, 0, 0.0, true),
        SplineType::Bezier => points[1],
        _ => points[0],
    }
}

/// Position at progress 1. Looped curves end where they start.
pub fn end_point<V: CurveVector>(spline_type: SplineType, points: &[V], looped: bool) -> V {
    match spline_type {
        SplineType::Empty => V::ZERO,
        SplineType::Single => points.first().copied().unwrap_or(V::ZERO),
        _ if looped => start_point(spline_type, points, looped),
        SplineType::Bezier => points[points.len() - 2],
        _ => points[points.len() - 1],
    }
}
