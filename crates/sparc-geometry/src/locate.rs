//! Mapping global progress onto a segment of a cumulative-length table.

/// A segment index paired with the progress inside that segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLocation {
    /// Index of the segment (and of its entry in the cumulative-length table).
    pub index: usize,
    /// Progress within the segment, in `[0, 1]`.
    pub local: f64,
}

/// Find the segment containing global `progress` in a cumulative-length table.
///
/// Entry `i` of `table` is the fraction of the total curve length covered by
/// segments `0..=i`. The scan is linear and returns the first entry that is
/// `>= progress`, so ties go to the lower index.
///
/// At the bounds the returned location is exact: `progress <= 0` (or NaN)
/// yields segment 0 at local 0 and `progress >= 1` yields the last segment at
/// local 1. Callers are expected to return the curve's first or last point
/// in those cases instead of evaluating a kernel.
///
/// If floating-point drift leaves `progress` above the final table entry,
/// the last segment is returned rather than failing.
///
/// # Arguments
/// * `progress` - Global progress along the curve
/// * `table` - Cumulative-length table, non-decreasing, last entry `1.0`
pub fn locate(progress: f64, table: &[f64]) -> SegmentLocation {
    let last = table.len().saturating_sub(1);

    if progress.is_nan() || progress <= 0.0 {
        return SegmentLocation {
            index: 0,
            local: 0.0,
        };
    }
    if progress >= 1.0 {
        return SegmentLocation {
            index: last,
            local: 1.0,
        };
    }
    if table.len() <= 1 {
        return SegmentLocation {
            index: 0,
            local: progress,
        };
    }

    let index = table
        .iter()
        .position(|&cumulative| cumulative >= progress)
        .unwrap_or(last);

    SegmentLocation {
        index,
        local: local_progress(progress, table, index),
    }
}

/// Remap global `progress` into the span of table entry `index`.
fn local_progress(progress: f64, table: &[f64], index: usize) -> f64 {
    let start = if index == 0 { 0.0 } else { table[index - 1] };
    let span = table[index] - start;
    if span <= 0.0 {
        // Zero-length segment; only reachable through the drift fallback.
        return 1.0;
    }
    ((progress - start) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_bounds_are_exact() {
        let table = [0.25, 0.5, 1.0];
        assert_eq!(locate(0.0, &table), SegmentLocation { index: 0, local: 0.0 });
        assert_eq!(locate(-3.0, &table), SegmentLocation { index: 0, local: 0.0 });
        assert_eq!(locate(1.0, &table), SegmentLocation { index: 2, local: 1.0 });
        assert_eq!(locate(7.5, &table), SegmentLocation { index: 2, local: 1.0 });
    }

    #[test]
    fn test_locate_nan_maps_to_start() {
        assert_eq!(locate(f64::NAN, &[0.5, 1.0]).index, 0);
    }

    #[test]
    fn test_locate_single_entry_passes_progress_through() {
        let loc = locate(0.3, &[1.0]);
        assert_eq!(loc.index, 0);
        assert_eq!(loc.local, 0.3);
    }

    #[test]
    fn test_locate_first_segment_remap() {
        let loc = locate(0.125, &[0.25, 0.5, 1.0]);
        assert_eq!(loc.index, 0);
        assert!((loc.local - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_locate_inner_segment_remap() {
        let loc = locate(0.75, &[0.25, 0.5, 1.0]);
        assert_eq!(loc.index, 2);
        assert!((loc.local - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_locate_ties_go_to_lower_index() {
        // Exactly on a boundary: the segment ending there wins
        let loc = locate(0.5, &[0.5, 1.0]);
        assert_eq!(loc.index, 0);
        assert_eq!(loc.local, 1.0);

        // A zero-length segment at the same cumulative value is skipped
        let loc = locate(0.5, &[0.5, 0.5, 1.0]);
        assert_eq!(loc.index, 0);
    }

    #[test]
    fn test_locate_drift_clamps_to_last_segment() {
        // Table that never reaches the requested progress
        let loc = locate(0.9999, &[0.5, 0.9998]);
        assert_eq!(loc.index, 1);
        assert_eq!(loc.local, 1.0);
    }
}
