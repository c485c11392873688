//! Sparc geometry: spline kernels, arc-length tables, and ark parameterization.
//!
//! Data flows one way: authored [`ControlPoints`] are frozen into a
//! [`Snapshot`] (resolved [`SplineType`], points, cumulative-length table),
//! which is then evaluated at normalized progress or resampled at a fixed
//! step length.

pub mod arc_length;
pub mod ark;
pub mod control_points;
pub mod curve;
pub mod dispatch;
pub mod kernel;
pub mod locate;
pub mod settings;
pub mod snapshot;
pub mod spline;
pub mod spline_type;
pub mod tessellate;

pub use arc_length::ArcLengthTable;
pub use ark::{resample, ArkParameters};
pub use control_points::ControlPoints;
pub use curve::Curve;
pub use locate::{locate, SegmentLocation};
pub use settings::{SampleResolution, SplineSettings};
pub use snapshot::Snapshot;
pub use spline::Spline;
pub use spline_type::{Kernel, SplineType};
