use crate::error::Result;

/// Validate structural integrity of a curve or one of its derived tables.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Compute an axis-aligned bounding box.
pub trait BoundingBox {
    type Point;
    /// Returns `None` when there is nothing to bound.
    fn bounding_box(&self) -> Option<(Self::Point, Self::Point)>;
}
