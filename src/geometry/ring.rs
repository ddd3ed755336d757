use crate::geometry::GeoBounds;
use crate::math::{area, contains, distance, Coordinate};

/// An ordered, implicitly closed sequence of coordinates forming a
/// polygon outline.
///
/// The last vertex connects back to the first; no explicit closing
/// vertex is stored. A ring needs at least 3 vertices to enclose area
/// and at least 2 to have a nonzero perimeter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring {
    /// Ordered vertices in degrees.
    pub vertices: Vec<Coordinate>,
}

impl Ring {
    /// Creates a ring from a vertex list.
    #[must_use]
    pub fn new(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }

    /// Creates a ring from `(lat, lng)` degree pairs.
    #[must_use]
    pub fn from_degrees(pairs: &[(f64, f64)]) -> Self {
        Self {
            vertices: pairs
                .iter()
                .map(|&(lat, lng)| Coordinate::new(lat, lng))
                .collect(),
        }
    }

    /// Number of stored vertices. The implicit closing vertex is not
    /// counted.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// `true` if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// `true` if the ring has enough vertices to enclose area.
    #[must_use]
    pub fn is_polygon(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Spherical area in square meters. Zero for fewer than 3 vertices.
    #[must_use]
    pub fn area(&self) -> f64 {
        area::ring_area(&self.vertices)
    }

    /// Perimeter in meters over the implicitly closed outline.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        distance::ring_perimeter(&self.vertices)
    }

    /// Ray-casting containment test for `point`.
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        contains::point_in_ring(point, &self.vertices)
    }

    /// Axis-aligned bounding box, or `None` for an empty ring.
    #[must_use]
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_vertices(&self.vertices)
    }

    /// The northernmost, southernmost, easternmost and westernmost
    /// vertices by plain component comparison, or `None` for an empty
    /// ring.
    ///
    /// Strict comparisons in a left-to-right scan, so exact ties keep
    /// the first vertex encountered.
    #[must_use]
    pub fn extremes(&self) -> Option<RingExtremes> {
        let first = *self.vertices.first()?;
        let mut ex = RingExtremes {
            north: first,
            south: first,
            east: first,
            west: first,
        };
        for &v in &self.vertices[1..] {
            if v.lat > ex.north.lat {
                ex.north = v;
            }
            if v.lat < ex.south.lat {
                ex.south = v;
            }
            if v.lng > ex.east.lng {
                ex.east = v;
            }
            if v.lng < ex.west.lng {
                ex.west = v;
            }
        }
        Some(ex)
    }
}

/// The four compass-extreme vertices of a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingExtremes {
    pub north: Coordinate,
    pub south: Coordinate,
    pub east: Coordinate,
    pub west: Coordinate,
}
