use crate::math::Coordinate;

/// Ray-casting containment test against an implicitly closed ring.
///
/// Coordinates are treated as planar (x = longitude, y = latitude) with
/// no geodesic correction, which keeps a lattice sweep cheap and is
/// accurate at the survey extents the engine targets. A horizontal ray
/// is cast in +x and crossings are counted with half-open edge spans,
/// so a ray through a shared vertex toggles exactly once.
///
/// Points exactly on an edge or vertex get no guaranteed
/// classification. Rings with fewer than 3 vertices contain nothing.
#[must_use]
pub fn point_in_ring(point: Coordinate, ring: &[Coordinate]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let p = point.to_planar();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = ring[i].to_planar();
        let vj = ring[j].to_planar();
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_hit = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_hit {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
