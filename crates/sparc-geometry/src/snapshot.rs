//! Immutable, ready-to-evaluate capture of a curve.

use sparc_core::traits::{BoundingBox, Validate};
use sparc_core::{Result, SparcError, Tolerance};
use sparc_math::CurveVector;

use crate::arc_length;
use crate::ark;
use crate::control_points::ControlPoints;
use crate::curve::Curve;
use crate::dispatch;
use crate::kernel;
use crate::locate::{locate, SegmentLocation};
use crate::settings::{SampleResolution, SplineSettings};
use crate::spline_type::{Kernel, SplineType};

/// A frozen curve: resolved type, points, total length and
/// cumulative-length table.
///
/// Snapshots are never mutated after construction and can be shared across
/// threads behind an `Arc`. A snapshot does not track its source; evaluating
/// one whose control points have since changed is the caller's mistake.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<V> {
    spline_type: SplineType,
    looped: bool,
    length: f64,
    table: Vec<f64>,
    points: Vec<V>,
}

impl<V: CurveVector> Snapshot<V> {
    /// Build a snapshot from points already in the layout `spline_type` expects.
    ///
    /// `looped` is dropped for curves with fewer than three nodes.
    pub fn build(
        points: Vec<V>,
        spline_type: SplineType,
        looped: bool,
        resolution: SampleResolution,
    ) -> Self {
        let nodes = kernel::node_count(spline_type, points.len());
        let looped = looped && nodes >= SplineType::MIN_CURVED_NODES;
        let table = arc_length::build(&points, spline_type, looped, resolution);
        Self {
            spline_type,
            looped,
            length: table.length,
            table: table.cumulative,
            points,
        }
    }

    /// Freeze the current state of an authored control point sequence.
    pub fn freeze(points: &ControlPoints<V>, settings: &SplineSettings) -> Self {
        let spline_type = SplineType::resolve(points.len(), settings.kernel);
        Self::build(
            points.to_layout(spline_type),
            spline_type,
            settings.looped,
            settings.resolution,
        )
    }

    /// Snapshot of an open curve through `positions` with default settings.
    /// Bezier curves get automatic handles.
    pub fn from_positions(positions: impl IntoIterator<Item = V>, kernel: Kernel) -> Self {
        let points = ControlPoints::from_positions(positions);
        Self::freeze(&points, &SplineSettings::new(kernel))
    }

    pub fn evaluate(&self, progress: f64) -> V {
        dispatch::evaluate(
            self.spline_type,
            &self.points,
            &self.table,
            self.looped,
            progress,
        )
    }

    pub fn locate(&self, progress: f64) -> SegmentLocation {
        locate(progress, &self.table)
    }

    pub fn spline_type(&self) -> SplineType {
        self.spline_type
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Cumulative-length table, one entry per segment.
    pub fn table(&self) -> &[f64] {
        &self.table
    }

    /// Backing points (handle triples for Bezier curves).
    pub fn points(&self) -> &[V] {
        &self.points
    }

    pub fn node_count(&self) -> usize {
        kernel::node_count(self.spline_type, self.points.len())
    }

    pub fn segment_count(&self) -> usize {
        kernel::segment_count(self.spline_type, self.node_count(), self.looped)
    }

    /// Position of node `index`, skipping Bezier handles.
    pub fn node(&self, index: usize) -> Option<V> {
        match self.spline_type {
            SplineType::Bezier => self.points.get(kernel::bezier::NODE_STRIDE * index + 1),
            _ => self.points.get(index),
        }
        .copied()
    }

    pub fn start(&self) -> V {
        dispatch::start_point(self.spline_type, &self.points, self.looped)
    }

    pub fn end(&self) -> V {
        dispatch::end_point(self.spline_type, &self.points, self.looped)
    }

    /// Resample this curve every `step_length` units.
    ///
    /// # Errors
    /// Fails when `step_length` is not a finite positive number or the
    /// result would be too dense, see [`ark::resample`].
    pub fn resample(&self, step_length: f64) -> Result<Vec<V>> {
        ark::resample_curve(self, step_length)
    }

    /// Linear snapshot over this curve's ark-parameterized resample.
    ///
    /// # Errors
    /// Same as [`Snapshot::resample`].
    pub fn ark(&self, step_length: f64, resolution: SampleResolution) -> Result<Self> {
        let points = self.resample(step_length)?;
        let spline_type = SplineType::resolve(points.len(), Kernel::Linear);
        Ok(Self::build(points, spline_type, false, resolution))
    }
}

impl<V: CurveVector> Curve<V> for Snapshot<V> {
    fn point_at(&self, progress: f64) -> V {
        self.evaluate(progress)
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn is_closed(&self) -> bool {
        self.looped
    }
}

impl<V: CurveVector> Validate for Snapshot<V> {
    fn validate(&self) -> Result<()> {
        let tol = Tolerance::loose();

        if !self.length.is_finite() || self.length < 0.0 {
            return Err(SparcError::Geometry(format!(
                "Curve length {} is not a finite non-negative number",
                self.length
            )));
        }
        if self.points.iter().any(|p| !p.is_finite()) {
            return Err(SparcError::Geometry("Curve has non-finite points".into()));
        }

        let last = *self
            .table
            .last()
            .ok_or_else(|| SparcError::Geometry("Cumulative-length table is empty".into()))?;
        if let Some(i) = self.table.windows(2).position(|w| w[1].is_nan() || w[1] < w[0]) {
            return Err(SparcError::Geometry(format!(
                "Cumulative-length table decreases at entry {}: {} > {}",
                i + 1,
                self.table[i],
                self.table[i + 1]
            )));
        }
        if !tol.linear_eq(last, 1.0) {
            return Err(SparcError::Geometry(format!(
                "Cumulative-length table ends at {last}, expected 1.0"
            )));
        }

        let expected = self.segment_count();
        if self.spline_type.needs_table() && self.table.len() != expected.max(1) {
            return Err(SparcError::Geometry(format!(
                "Cumulative-length table has {} entries for {} segments",
                self.table.len(),
                expected
            )));
        }

        Ok(())
    }
}

impl<V: CurveVector> BoundingBox for Snapshot<V> {
    type Point = V;

    fn bounding_box(&self) -> Option<(V, V)> {
        let first = self.node(0)?;
        Some(
            (1..self.node_count())
                .filter_map(|i| self.node(i))
                .fold((first, first), |(min, max), p| (min.min(p), max.max(p))),
        )
    }
}
