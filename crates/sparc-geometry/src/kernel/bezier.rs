//! Cubic Bezier segments between handle triples.
//!
//! Node `i` occupies `flat[3i]` (pre-handle), `flat[3i + 1]` (point) and
//! `flat[3i + 2]` (post-handle).

use sparc_math::CurveVector;

use super::next_index;

/// Backing entries per node.
pub const NODE_STRIDE: usize = 3;

/// Evaluate the segment from node `segment` to the next node.
///
/// The control polygon is `point[a], post[a], pre[b], point[b]`.
pub fn point<V: CurveVector>(flat: &[V], segment: usize, t: f64, looped: bool) -> V {
    let nodes = flat.len() / NODE_STRIDE;
    debug_assert!(nodes >= 2, "Bezier kernel needs 2 nodes, got {nodes}");
    let a = segment.min(nodes - 1);
    let b = next_index(a, nodes, looped);
    cubic(
        flat[NODE_STRIDE * a + 1],
        flat[NODE_STRIDE * a + 2],
        flat[NODE_STRIDE * b],
        flat[NODE_STRIDE * b + 1],
        t,
    )
}

/// Cubic Bernstein polynomial, `t` clamped to `[0, 1]`.
pub fn cubic<V: CurveVector>(p0: V, p1: V, p2: V, p3: V, t: f64) -> V {
    let t = t.clamp(0.0, 1.0);
    let mt = 1.0 - t;
    p0 * (mt * mt * mt) + p1 * (3.0 * mt * mt * t) + p2 * (3.0 * mt * t * t) + p3 * (t * t * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparc_math::DVec2;

    #[test]
    fn test_cubic_endpoints_and_midpoint() {
        let p0 = DVec2::new(0.0, 0.0);
        let p1 = DVec2::new(0.0, 1.0);
        let p2 = DVec2::new(1.0, 1.0);
        let p3 = DVec2::new(1.0, 0.0);
        assert_eq!(cubic(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(cubic(p0, p1, p2, p3, 1.0), p3);
        // 0.125*P0 + 0.375*P1 + 0.375*P2 + 0.125*P3
        let mid = cubic(p0, p1, p2, p3, 0.5);
        assert!((mid - DVec2::new(0.5, 0.75)).length() < 1e-12);
    }

    #[test]
    fn test_segment_reads_post_and_pre_handles() {
        let flat = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 0.0),
        ];
        let mid = point(&flat, 0, 0.5, false);
        assert!((mid - DVec2::new(0.5, 0.75)).length() < 1e-12);
    }

    #[test]
    fn test_clamps_out_of_range_t() {
        let (a, b) = (DVec2::ZERO, DVec2::X);
        assert_eq!(cubic(a, a, b, b, -0.5), a);
        assert_eq!(cubic(a, a, b, b, 1.5), b);
    }
}
