use crate::math::{Coordinate, EARTH_RADIUS_M};

/// Area in square meters of an implicitly closed ring on a sphere of
/// mean Earth radius.
///
/// Sweeps the ring edge by edge, accumulating
/// `(lng2 - lng1) * (2 + sin(lat1) + sin(lat2))` in radians and scaling
/// by R^2 / 2. The absolute value is taken, so vertex winding does not
/// affect the magnitude. Rings with fewer than 3 vertices have zero
/// area. Self-intersecting rings produce a well-defined but not
/// meaningful value.
#[must_use]
pub fn ring_area(vertices: &[Coordinate]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut sweep = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        sweep += (b.lng - a.lng).to_radians()
            * (2.0 + a.lat.to_radians().sin() + b.lat.to_radians().sin());
    }
    (sweep * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0).abs()
}

/// Boundary area minus the summed areas of all restriction rings,
/// clamped at zero.
///
/// Restrictions are not validated: overlapping rings subtract twice and
/// rings outside the boundary still subtract their full area. The clamp
/// keeps over-subtraction from producing a negative result.
#[must_use]
pub fn net_area(boundary: &[Coordinate], restrictions: &[&[Coordinate]]) -> f64 {
    let subtracted: f64 = restrictions.iter().map(|ring| ring_area(ring)).sum();
    (ring_area(boundary) - subtracted).max(0.0)
}
