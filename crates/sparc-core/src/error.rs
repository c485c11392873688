use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SparcError {
    #[error("Invalid step length: {0} (must be finite and positive)")]
    InvalidStep(f64),

    #[error("Invalid curve length: {0} (must be finite and non-negative)")]
    InvalidLength(f64),

    #[error("Resampling would produce {requested} points, limit is {limit}")]
    TooManySamples { requested: f64, limit: usize },

    #[error("Geometry error: {0}")]
    Geometry(String),
}

pub type Result<T> = std::result::Result<T, SparcError>;
