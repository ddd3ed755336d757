use crate::math::{Coordinate, EARTH_RADIUS_M};

/// Great-circle distance in meters between two coordinates, using the
/// haversine formula on a sphere of mean Earth radius.
#[must_use]
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Perimeter in meters of an implicitly closed ring.
///
/// Fewer than 2 vertices give 0. Exactly 2 give the single segment
/// length with no closing edge. 3 or more include the closing edge from
/// the last vertex back to the first.
#[must_use]
pub fn ring_perimeter(vertices: &[Coordinate]) -> f64 {
    if vertices.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for pair in vertices.windows(2) {
        total += haversine_distance(pair[0], pair[1]);
    }
    if vertices.len() >= 3 {
        total += haversine_distance(vertices[vertices.len() - 1], vertices[0]);
    }
    total
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn c(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng)
    }

    #[test]
    fn distance_between_identical_points_is_zero() {
        let d = haversine_distance(c(45.0, 9.0), c(45.0, 9.0));
        assert!(d.abs() < 1e-9, "d={d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = c(48.8566, 2.3522);
        let b = c(41.9028, 12.4964);
        let ab = haversine_distance(a, b);
        let ba = haversine_distance(b, a);
        assert!((ab - ba).abs() < 1e-9, "ab={ab} ba={ba}");
    }

    #[test]
    fn distance_beijing_to_shanghai() {
        let d = haversine_distance(c(39.9042, 116.4074), c(31.2304, 121.4737));
        assert!((d - 1_067_300.0).abs() < 2_000.0, "d={d}");
    }

    #[test]
    fn distance_between_antipodes_is_half_circumference() {
        let d = haversine_distance(c(0.0, 0.0), c(0.0, 180.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_M;
        assert!((d - half).abs() < 1.0, "d={d} half={half}");
    }

    #[test]
    fn perimeter_of_degenerate_rings_is_zero() {
        assert!(ring_perimeter(&[]).abs() < 1e-12);
        assert!(ring_perimeter(&[c(1.0, 2.0)]).abs() < 1e-12);
    }

    #[test]
    fn perimeter_of_two_points_is_the_open_segment() {
        let a = c(0.0, 0.0);
        let b = c(0.0, 0.001);
        let p = ring_perimeter(&[a, b]);
        let d = haversine_distance(a, b);
        assert!((p - d).abs() < 1e-9, "p={p} d={d}");
    }

    #[test]
    fn perimeter_of_triangle_includes_closing_edge() {
        let a = c(0.0, 0.0);
        let b = c(0.0, 0.001);
        let d = c(0.001, 0.0);
        let expected = haversine_distance(a, b)
            + haversine_distance(b, d)
            + haversine_distance(d, a);
        let p = ring_perimeter(&[a, b, d]);
        assert!((p - expected).abs() < 1e-9, "p={p} expected={expected}");
    }

    #[test]
    fn perimeter_of_small_equatorial_square() {
        let p = ring_perimeter(&[
            c(0.0, 0.0),
            c(0.0, 0.001),
            c(0.001, 0.001),
            c(0.001, 0.0),
        ]);
        assert!((p - 444.7797).abs() < 1e-3, "p={p}");
    }
}
