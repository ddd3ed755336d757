pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod sampling;
pub mod survey;

pub use error::{ArealisError, Result};
