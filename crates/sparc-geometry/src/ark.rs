//! Ark parameterization: resampling a curve at a fixed step length so that a
//! linear walk over the result moves at near-constant speed.

use serde::{Deserialize, Serialize};
use sparc_core::{Result, SparcError, Tolerance};
use sparc_math::CurveVector;

use crate::curve::Curve;

/// Hard cap on the number of points a single resample may produce.
pub const MAX_RESAMPLE_POINTS: usize = 1 << 24;

/// Whether a curve is evaluated through its ark-parameterized resample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArkParameters {
    pub enabled: bool,
    /// Distance between consecutive resampled points, in model units.
    pub step_length: f64,
}

impl ArkParameters {
    pub const DEFAULT_STEP_LENGTH: f64 = 1.0;

    pub fn enabled(step_length: f64) -> Self {
        Self {
            enabled: true,
            step_length,
        }
    }
}

impl Default for ArkParameters {
    fn default() -> Self {
        Self {
            enabled: false,
            step_length: Self::DEFAULT_STEP_LENGTH,
        }
    }
}

/// Resample a curve of `total_length` every `step_length` units.
///
/// `evaluate` maps normalized progress to a position. The walk visits
/// progress `i * step_length / total_length` for every whole step, then
/// ends on the exact end of the curve: when a remainder shorter than one
/// step is left, the end point is appended, otherwise the final sample is
/// replaced by it. The output therefore holds `floor(total / step) + 1`
/// points, plus one when a remainder was appended.
///
/// # Errors
/// * [`SparcError::InvalidStep`] if `step_length` is NaN, infinite, zero or negative
/// * [`SparcError::InvalidLength`] if `total_length` is NaN, infinite or negative
/// * [`SparcError::TooManySamples`] if the output would exceed [`MAX_RESAMPLE_POINTS`]
pub fn resample<V, F>(evaluate: F, total_length: f64, step_length: f64) -> Result<Vec<V>>
where
    V: CurveVector,
    F: Fn(f64) -> V,
{
    if !step_length.is_finite() || step_length <= 0.0 {
        return Err(SparcError::InvalidStep(step_length));
    }
    if !total_length.is_finite() || total_length < 0.0 {
        return Err(SparcError::InvalidLength(total_length));
    }
    if total_length == 0.0 {
        return Ok(vec![evaluate(0.0)]);
    }

    let steps = (total_length / step_length).floor();
    if steps + 2.0 > MAX_RESAMPLE_POINTS as f64 {
        return Err(SparcError::TooManySamples {
            requested: steps + 1.0,
            limit: MAX_RESAMPLE_POINTS,
        });
    }
    let steps = steps as usize;

    let mut points = Vec::with_capacity(steps + 2);
    for i in 0..=steps {
        let covered = i as f64 * step_length;
        points.push(evaluate((covered / total_length).min(1.0)));
    }

    let remainder = total_length - steps as f64 * step_length;
    let end = evaluate(1.0);
    if Tolerance::default().is_zero(remainder) {
        if let Some(last) = points.last_mut() {
            *last = end;
        }
    } else {
        points.push(end);
    }

    Ok(points)
}

/// Resample any [`Curve`] at `step_length`.
///
/// # Errors
/// Same preconditions as [`resample`].
pub fn resample_curve<V: CurveVector>(curve: &dyn Curve<V>, step_length: f64) -> Result<Vec<V>> {
    let points = resample(|progress| curve.point_at(progress), curve.length(), step_length)?;
    log::debug!(
        "Ark resample: length {}, step {}, {} points",
        curve.length(),
        step_length,
        points.len()
    );
    Ok(points)
}
