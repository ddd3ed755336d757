pub mod area;
pub mod contains;
pub mod coordinate;
pub mod distance;

pub use coordinate::Coordinate;

/// Planar point type used for ray casting and bounding boxes,
/// with x = longitude and y = latitude, both in degrees.
pub type Point2 = nalgebra::Point2<f64>;

/// Mean Earth radius in meters (spherical model).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters spanned by one degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;
