use crate::math::{Coordinate, Point2};

/// Axis-aligned latitude/longitude bounding box in the planar
/// (x = longitude, y = latitude) projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// South-west corner (minimum longitude and latitude).
    pub min: Point2,
    /// North-east corner (maximum longitude and latitude).
    pub max: Point2,
}

impl GeoBounds {
    /// Tight bounds over a vertex list, or `None` when it is empty.
    #[must_use]
    pub fn from_vertices(vertices: &[Coordinate]) -> Option<Self> {
        let mut iter = vertices.iter();
        let first = iter.next()?.to_planar();
        let mut bounds = Self { min: first, max: first };
        for v in iter {
            bounds.extend(v.to_planar());
        }
        Some(bounds)
    }

    /// Grows the box to cover `p`.
    pub fn extend(&mut self, p: Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// `true` if `p` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
