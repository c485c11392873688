pub mod error;
pub mod generation;
pub mod tolerance;
pub mod traits;

pub use error::{Result, SparcError};
pub use generation::Generation;
pub use tolerance::Tolerance;
