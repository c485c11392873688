//! Kernel selection: the authored kernel choice and the resolved spline type.

use serde::{Deserialize, Serialize};

/// The interpolation kernel chosen by the author of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Kernel {
    #[default]
    Linear,
    /// Polyline with rounded joins, see [`crate::kernel::cubic_linear`].
    CubicLinear,
    Bezier,
    /// Centripetal Catmull-Rom.
    CatmullRom,
}

impl Kernel {
    /// Decode a stored kernel tag. Unknown tags fall back to `Linear`.
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            1 => Kernel::CubicLinear,
            2 => Kernel::Bezier,
            3 => Kernel::CatmullRom,
            _ => Kernel::Linear,
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            Kernel::Linear => 0,
            Kernel::CubicLinear => 1,
            Kernel::Bezier => 2,
            Kernel::CatmullRom => 3,
        }
    }
}

/// The evaluation strategy for a concrete curve, derived from its point count
/// and authored kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplineType {
    /// No points: evaluates to the zero vector.
    Empty,
    /// One point: evaluates to that point.
    Single,
    Linear,
    CubicLinear,
    Bezier,
    CatmullRom,
}

impl SplineType {
    /// Minimum number of nodes every curved kernel needs.
    pub const MIN_CURVED_NODES: usize = 3;

    /// Resolve the spline type for `node_count` control points.
    ///
    /// Two points always evaluate as a straight line whatever the kernel.
    pub fn resolve(node_count: usize, kernel: Kernel) -> Self {
        match node_count {
            0 => SplineType::Empty,
            1 => SplineType::Single,
            n if n < Self::MIN_CURVED_NODES => SplineType::Linear,
            _ => match kernel {
                Kernel::Linear => SplineType::Linear,
                Kernel::CubicLinear => SplineType::CubicLinear,
                Kernel::Bezier => SplineType::Bezier,
                Kernel::CatmullRom => SplineType::CatmullRom,
            },
        }
    }

    /// Whether evaluation needs a cumulative-length table.
    pub fn needs_table(self) -> bool {
        !matches!(self, SplineType::Empty | SplineType::Single)
    }
}
