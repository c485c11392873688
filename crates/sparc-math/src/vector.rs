//! Dimension-generic vector operations used by every curve kernel.
//!
//! The spline math is written once over [`CurveVector`] and instantiated for
//! [`DVec2`] and [`DVec3`].

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use glam::{DVec2, DVec3};

/// A position or direction in the working dimension of a curve.
pub trait CurveVector:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<f64, Output = Self>
    + 'static
{
    const ZERO: Self;

    /// Linear interpolation, `self` at `t = 0` and `rhs` at `t = 1`.
    fn lerp(self, rhs: Self, t: f64) -> Self;

    fn distance(self, rhs: Self) -> f64;

    fn length(self) -> f64;

    fn normalize_or_zero(self) -> Self;

    /// Rotates the vector by +90 degrees within the curve plane.
    ///
    /// 2D curves rotate counter-clockwise. 3D curves lie in the horizontal
    /// XZ plane and rotate about the Y (up) axis; the Y component is kept.
    fn perp(self) -> Self;

    /// Component-wise minimum.
    fn min(self, rhs: Self) -> Self;

    /// Component-wise maximum.
    fn max(self, rhs: Self) -> Self;

    fn is_finite(self) -> bool;
}

impl CurveVector for DVec2 {
    const ZERO: Self = DVec2::ZERO;

    fn lerp(self, rhs: Self, t: f64) -> Self {
        DVec2::lerp(self, rhs, t)
    }

    fn distance(self, rhs: Self) -> f64 {
        DVec2::distance(self, rhs)
    }

    fn length(self) -> f64 {
        DVec2::length(self)
    }

    fn normalize_or_zero(self) -> Self {
        DVec2::normalize_or_zero(self)
    }

    fn perp(self) -> Self {
        DVec2::perp(self)
    }

    fn min(self, rhs: Self) -> Self {
        DVec2::min(self, rhs)
    }

    fn max(self, rhs: Self) -> Self {
        DVec2::max(self, rhs)
    }

    fn is_finite(self) -> bool {
        DVec2::is_finite(self)
    }
}

impl CurveVector for DVec3 {
    const ZERO: Self = DVec3::ZERO;

    fn lerp(self, rhs: Self, t: f64) -> Self {
        DVec3::lerp(self, rhs, t)
    }

    fn distance(self, rhs: Self) -> f64 {
        DVec3::distance(self, rhs)
    }

    fn length(self) -> f64 {
        DVec3::length(self)
    }

    fn normalize_or_zero(self) -> Self {
        DVec3::normalize_or_zero(self)
    }

    fn perp(self) -> Self {
        DVec3::new(self.z, self.y, -self.x)
    }

    fn min(self, rhs: Self) -> Self {
        DVec3::min(self, rhs)
    }

    fn max(self, rhs: Self) -> Self {
        DVec3::max(self, rhs)
    }

    fn is_finite(self) -> bool {
        DVec3::is_finite(self)
    }
}
