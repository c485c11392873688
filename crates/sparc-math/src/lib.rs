pub mod vector;

pub use glam::{DVec2, DVec3};
pub use vector::CurveVector;
