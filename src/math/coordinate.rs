use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// A geographic coordinate in decimal degrees.
///
/// Latitude is positive north in [-90, 90], longitude positive east in
/// [-180, 180]. Callers are responsible for supplying values in range;
/// the engine does not validate them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Projects to the planar view used by ray casting and bounds:
    /// x = longitude, y = latitude.
    #[must_use]
    pub fn to_planar(self) -> Point2 {
        Point2::new(self.lng, self.lat)
    }

    /// Returns a copy with both components rounded to `decimals`
    /// decimal places.
    #[must_use]
    pub fn rounded(self, decimals: i32) -> Self {
        let scale = 10_f64.powi(decimals);
        Self {
            lat: (self.lat * scale).round() / scale,
            lng: (self.lng * scale).round() / scale,
        }
    }
}
