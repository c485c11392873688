//! Interpolation kernels.
//!
//! Every kernel evaluates one segment of a point sequence at a local progress
//! in `[0, 1]`, already remapped by [`crate::locate::locate`]. The kernels are
//! pure and generic over [`CurveVector`], so 2D and 3D curves share them.

pub mod bezier;
pub mod catmull_rom;
pub mod cubic_linear;
pub mod linear;

use sparc_math::CurveVector;

use crate::spline_type::SplineType;

/// Number of logical control points (nodes) stored in `len` backing entries.
pub fn node_count(spline_type: SplineType, len: usize) -> usize {
    match spline_type {
        SplineType::Bezier => len / bezier::NODE_STRIDE,
        _ => len,
    }
}

/// Number of segments, which is also the length of the cumulative-length table.
pub fn segment_count(spline_type: SplineType, nodes: usize, looped: bool) -> usize {
    match spline_type {
        SplineType::Empty | SplineType::Single => 0,
        SplineType::Linear | SplineType::Bezier | SplineType::CatmullRom => {
            chain_segment_count(nodes, looped)
        }
        SplineType::CubicLinear => cubic_linear::segment_count(nodes, looped),
    }
}

/// Evaluate `segment` of a curve at local progress `t`.
///
/// `points` is laid out as the spline type expects: plain positions, or
/// (pre-handle, point, post-handle) triples for [`SplineType::Bezier`].
pub fn evaluate_segment<V: CurveVector>(
    spline_type: SplineType,
    points: &[V],
    segment: usize,
    t: f64,
    looped: bool,
) -> V {
    match spline_type {
        SplineType::Empty => V::ZERO,
        SplineType::Single => points.first().copied().unwrap_or(V::ZERO),
        SplineType::Linear => linear::point(points, segment, t, looped),
        SplineType::CubicLinear => cubic_linear::point(points, segment, t, looped),
        SplineType::Bezier => bezier::point(points, segment, t, looped),
        SplineType::CatmullRom => catmull_rom::point(points, segment, t, looped),
    }
}

/// Segment count for kernels with one segment per pair of consecutive nodes.
pub(crate) fn chain_segment_count(nodes: usize, looped: bool) -> usize {
    if looped {
        nodes
    } else {
        nodes.saturating_sub(1)
    }
}

/// Index of the node following `index`, wrapping on looped curves.
pub(crate) fn next_index(index: usize, nodes: usize, looped: bool) -> usize {
    if looped {
        (index + 1) % nodes
    } else {
        (index + 1).min(nodes - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparc_math::DVec2;

    #[test]
    fn test_segment_counts() {
        assert_eq!(segment_count(SplineType::Linear, 4, false), 3);
        assert_eq!(segment_count(SplineType::Linear, 4, true), 4);
        assert_eq!(segment_count(SplineType::CatmullRom, 3, false), 2);
        assert_eq!(segment_count(SplineType::CubicLinear, 4, false), 2);
        assert_eq!(segment_count(SplineType::CubicLinear, 4, true), 4);
        assert_eq!(segment_count(SplineType::Single, 1, false), 0);
    }

    #[test]
    fn test_node_count_for_bezier_triples() {
        assert_eq!(node_count(SplineType::Bezier, 9), 3);
        assert_eq!(node_count(SplineType::CatmullRom, 9), 9);
    }

    #[test]
    fn test_terminal_types() {
        let pts = [DVec2::new(3.0, 4.0)];
        assert_eq!(evaluate_segment(SplineType::Empty, &pts, 0, 0.5, false), DVec2::ZERO);
        assert_eq!(
            evaluate_segment(SplineType::Single, &pts, 0, 0.5, false),
            DVec2::new(3.0, 4.0)
        );
    }
}
