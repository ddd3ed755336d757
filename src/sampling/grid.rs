use crate::error::Result;
use crate::math::{contains, Coordinate, METERS_PER_DEGREE_LAT};
use crate::survey::Survey;

use super::GridParams;

/// Generates the regularly spaced interior sample points of a survey.
///
/// Walks a lattice aligned to the boundary's bounding box at the
/// configured meter step and keeps the points that fall inside the
/// boundary and outside every restriction.
pub struct SampleGrid {
    params: GridParams,
}

impl SampleGrid {
    /// Creates a new `SampleGrid` operation.
    #[must_use]
    pub fn new(params: GridParams) -> Self {
        Self { params }
    }

    /// Runs the sweep, returning kept points in row-major order:
    /// latitude ascending, longitude ascending within each row.
    ///
    /// The latitude step is `step_meters` converted at 111,320 m per
    /// degree; each row's longitude step is widened by the cosine of
    /// that row's latitude so physical spacing stays near the target.
    /// Rows and columns start on the box minimum and include an edge
    /// point exactly on the maximum. A boundary with fewer than 3
    /// vertices yields an empty grid regardless of restrictions.
    ///
    /// Cost is rows x columns x total ring vertices; the step is the
    /// caller's lever for keeping it bounded.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive or non-finite step. The step
    /// is checked before any geometry, so a degenerate boundary never
    /// masks a bad configuration.
    pub fn execute(&self, survey: &Survey) -> Result<Vec<Coordinate>> {
        self.params.validate()?;

        let boundary = survey.boundary();
        if !boundary.is_polygon() {
            return Ok(Vec::new());
        }
        let Some(bounds) = boundary.bounds() else {
            return Ok(Vec::new());
        };
        let restrictions = survey.restriction_slices();

        let lat_step = self.params.step_meters / METERS_PER_DEGREE_LAT;
        let mut points = Vec::new();
        let mut rows: u32 = 0;
        let mut candidates: u64 = 0;

        let mut lat = bounds.min.y;
        while lat <= bounds.max.y {
            rows += 1;
            let lng_step =
                self.params.step_meters / (METERS_PER_DEGREE_LAT * lat.to_radians().cos());
            let mut lng = bounds.min.x;
            while lng <= bounds.max.x {
                candidates += 1;
                let point = Coordinate::new(lat, lng);
                if boundary.contains(point)
                    && !restrictions
                        .iter()
                        .any(|ring| contains::point_in_ring(point, ring))
                {
                    points.push(point);
                }
                lng += lng_step;
            }
            lat += lat_step;
        }

        tracing::debug!(
            rows,
            candidates,
            kept = points.len(),
            step_m = self.params.step_meters,
            "sampled survey interior"
        );
        Ok(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::geometry::Ring;

    use super::*;

    /// Roughly 111 m square sitting on the equator.
    fn square_survey() -> Survey {
        Survey::with_boundary(Ring::from_degrees(&[
            (0.0, 0.0),
            (0.0, 0.001),
            (0.001, 0.001),
            (0.001, 0.0),
        ]))
    }

    fn center_hole() -> Ring {
        Ring::from_degrees(&[
            (0.00025, 0.00025),
            (0.00025, 0.00075),
            (0.00075, 0.00075),
            (0.00075, 0.00025),
        ])
    }

    #[test]
    fn invalid_step_fails_before_geometry() {
        let survey = Survey::new();
        let result = SampleGrid::new(GridParams::new(0.0)).execute(&survey);
        assert!(result.is_err());
    }

    #[test]
    fn degenerate_boundary_yields_empty_grid() {
        let mut survey = Survey::new();
        survey.set_boundary(Ring::from_degrees(&[(0.0, 0.0), (0.0, 0.001)]));
        survey.add_restriction(center_hole());
        let grid = SampleGrid::new(GridParams::default()).execute(&survey).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn fifty_meter_step_covers_the_square() {
        // Rows at lat offsets of 0, ~50 and ~100 m, same for columns.
        let grid = SampleGrid::new(GridParams::new(50.0))
            .execute(&square_survey())
            .unwrap();
        assert_eq!(grid.len(), 9);
        let survey = square_survey();
        for p in &grid {
            assert!(survey.boundary().contains(*p), "p=({}, {})", p.lat, p.lng);
        }
    }

    #[test]
    fn points_come_out_in_row_major_order() {
        let grid = SampleGrid::new(GridParams::new(50.0))
            .execute(&square_survey())
            .unwrap();
        for pair in grid.windows(2) {
            let row_advanced = pair[1].lat > pair[0].lat;
            let col_advanced =
                (pair[1].lat - pair[0].lat).abs() < 1e-12 && pair[1].lng > pair[0].lng;
            assert!(
                row_advanced || col_advanced,
                "out of order: ({}, {}) then ({}, {})",
                pair[0].lat,
                pair[0].lng,
                pair[1].lat,
                pair[1].lng
            );
        }
    }

    #[test]
    fn restrictions_remove_interior_points() {
        let full = SampleGrid::new(GridParams::new(50.0))
            .execute(&square_survey())
            .unwrap();

        let mut survey = square_survey();
        survey.add_restriction(center_hole());
        let filtered = SampleGrid::new(GridParams::new(50.0)).execute(&survey).unwrap();

        assert!(filtered.len() < full.len(), "filtered={}", filtered.len());
        for p in &filtered {
            assert!(
                !contains::point_in_ring(*p, &center_hole().vertices),
                "p=({}, {}) inside restriction",
                p.lat,
                p.lng
            );
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let mut survey = square_survey();
        survey.add_restriction(center_hole());
        let a = SampleGrid::new(GridParams::new(25.0)).execute(&survey).unwrap();
        let b = SampleGrid::new(GridParams::new(25.0)).execute(&survey).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn coarse_step_still_samples_the_origin_corner() {
        // One giant step: only the box minimum corner is generated and
        // the half-open containment test keeps it.
        let grid = SampleGrid::new(GridParams::new(10_000.0))
            .execute(&square_survey())
            .unwrap();
        assert_eq!(grid.len(), 1);
        assert!((grid[0].lat).abs() < 1e-12);
        assert!((grid[0].lng).abs() < 1e-12);
    }
}
