//! Arc-length tables built from chordal sampling.

use sparc_math::CurveVector;

use crate::kernel;
use crate::settings::SampleResolution;
use crate::spline_type::SplineType;

/// Total length of a curve and its normalized cumulative-length table.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    pub length: f64,
    /// Entry `i` is the fraction of `length` covered by segments `0..=i`.
    pub cumulative: Vec<f64>,
}

impl ArcLengthTable {
    /// Table of a curve with a single span (or none): one entry, `1.0`.
    pub fn single(length: f64) -> Self {
        Self {
            length,
            cumulative: vec![1.0],
        }
    }

    /// Accumulate per-segment lengths into a normalized table.
    ///
    /// The running sum is clamped to `1.0` and the final entry is exactly
    /// `1.0`. A curve of zero total length gets evenly spaced entries.
    pub fn from_segment_lengths(lengths: &[f64]) -> Self {
        if lengths.is_empty() {
            return Self::single(0.0);
        }

        let length: f64 = lengths.iter().sum();
        let count = lengths.len();

        let mut cumulative = Vec::with_capacity(count);
        if length > 0.0 && length.is_finite() {
            let mut covered = 0.0;
            for &segment in lengths {
                covered += segment;
                cumulative.push((covered / length).min(1.0));
            }
        } else {
            cumulative.extend((1..=count).map(|i| i as f64 / count as f64));
        }
        cumulative[count - 1] = 1.0;

        Self { length, cumulative }
    }

    pub fn segment_count(&self) -> usize {
        self.cumulative.len()
    }
}

/// Build the arc-length table for `points` evaluated with `spline_type`.
///
/// # Arguments
/// * `points` - Backing points in the layout `spline_type` expects
/// * `spline_type` - Resolved spline type
/// * `looped` - Whether the curve has a wrap segment
/// * `resolution` - Chord sub-segments per curved segment
pub fn build<V: CurveVector>(
    points: &[V],
    spline_type: SplineType,
    looped: bool,
    resolution: SampleResolution,
) -> ArcLengthTable {
    let nodes = kernel::node_count(spline_type, points.len());
    if !spline_type.needs_table() || nodes < 2 {
        return ArcLengthTable::single(0.0);
    }
    if nodes == 2 && spline_type == SplineType::Linear {
        return ArcLengthTable::single(points[0].distance(points[1]));
    }

    let segments = kernel::segment_count(spline_type, nodes, looped);
    let lengths: Vec<f64> = (0..segments)
        .map(|segment| match spline_type {
            SplineType::Linear => {
                let next = kernel::next_index(segment, nodes, looped);
                points[segment].distance(points[next])
            }
            _ => segment_length(resolution.get(), |t| {
                kernel::evaluate_segment(spline_type, points, segment, t, looped)
            }),
        })
        .collect();

    let table = ArcLengthTable::from_segment_lengths(&lengths);
    log::trace!(
        "Arc-length table for {:?}: {} segments, length {}",
        spline_type,
        segments,
        table.length
    );
    table
}

/// Approximate the length of one segment by summing `resolution` chords.
pub fn segment_length<V, F>(resolution: usize, eval: F) -> f64
where
    V: CurveVector,
    F: Fn(f64) -> V,
{
    let resolution = resolution.max(1);
    let mut prev = eval(0.0);
    let mut length = 0.0;
    for k in 1..=resolution {
        let p = eval(k as f64 / resolution as f64);
        length += prev.distance(p);
        prev = p;
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sparc_math::{DVec2, DVec3};

    fn dvec2(x: f64, y: f64) -> DVec2 {
        DVec2::new(x, y)
    }

    #[test]
    fn test_empty_and_single_point() {
        let none: [DVec2; 0] = [];
        let table = build(&none, SplineType::Empty, false, SampleResolution::default());
        assert_eq!(table, ArcLengthTable::single(0.0));

        let one = [dvec2(5.0, 5.0)];
        let table = build(&one, SplineType::Single, false, SampleResolution::default());
        assert_eq!(table.length, 0.0);
        assert_eq!(table.cumulative, vec![1.0]);
    }

    #[test]
    fn test_two_points_direct_distance() {
        let pts = [DVec3::ZERO, DVec3::new(3.0, 4.0, 0.0)];
        let table = build(&pts, SplineType::Linear, false, SampleResolution::default());
        assert_eq!(table.length, 5.0);
        assert_eq!(table.cumulative, vec![1.0]);
    }

    #[test]
    fn test_linear_three_points() {
        let pts = [dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(2.0, 0.0)];
        let table = build(&pts, SplineType::Linear, false, SampleResolution::default());
        assert_eq!(table.length, 2.0);
        assert_eq!(table.cumulative, vec![0.5, 1.0]);
    }

    #[test]
    fn test_linear_looped_adds_wrap_segment() {
        let pts = [dvec2(0.0, 0.0), dvec2(3.0, 0.0), dvec2(3.0, 4.0)];
        let table = build(&pts, SplineType::Linear, true, SampleResolution::default());
        assert_eq!(table.length, 12.0);
        assert_eq!(table.cumulative.len(), 3);
        assert_abs_diff_eq!(table.cumulative[0], 0.25);
        assert_abs_diff_eq!(table.cumulative[1], 7.0 / 12.0);
    }

    #[test]
    fn test_coincident_segment_keeps_table_monotonic() {
        let pts = [
            dvec2(0.0, 0.0),
            dvec2(1.0, 0.0),
            dvec2(1.0, 0.0),
            dvec2(2.0, 0.0),
        ];
        let table = build(&pts, SplineType::CatmullRom, false, SampleResolution::default());
        assert_eq!(table.cumulative.len(), 3);
        assert_abs_diff_eq!(table.cumulative[0], table.cumulative[1]);
        assert!(table.cumulative.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(table.cumulative[2], 1.0);
    }

    #[test]
    fn test_all_coincident_gives_even_table() {
        let table = ArcLengthTable::from_segment_lengths(&[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(table.length, 0.0);
        assert_eq!(table.cumulative, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_curved_segment_is_longer_than_chord() {
        let pts = [dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 0.0)];
        let table = build(&pts, SplineType::CatmullRom, false, SampleResolution::default());
        let chords = 2.0 * 2.0_f64.sqrt();
        assert!(table.length >= chords - 1e-9);
    }

    #[test]
    fn test_segment_length_of_quarter_circle() {
        let length = segment_length(128, |t: f64| {
            let a = t * std::f64::consts::FRAC_PI_2;
            dvec2(a.cos(), a.sin())
        });
        assert_abs_diff_eq!(length, std::f64::consts::FRAC_PI_2, epsilon = 1e-4);
    }

    #[test]
    fn test_build_is_deterministic() {
        let pts = [
            dvec2(0.0, 0.0),
            dvec2(1.0, 3.0),
            dvec2(4.0, 2.0),
            dvec2(6.0, 5.0),
        ];
        let a = build(&pts, SplineType::CubicLinear, false, SampleResolution::new(64));
        let b = build(&pts, SplineType::CubicLinear, false, SampleResolution::new(64));
        assert_eq!(a, b);
    }
}
