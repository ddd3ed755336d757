pub mod bounds;
pub mod ring;

pub use bounds::GeoBounds;
pub use ring::{Ring, RingExtremes};
