use serde::Serialize;

use crate::error::{ExportError, Result};
use crate::math::Coordinate;
use crate::sampling::{GridParams, SampleGrid};
use crate::survey::Survey;

use super::timestamp::utc_timestamp;

/// Decimal places kept for every exported coordinate.
const EXPORT_DECIMALS: i32 = 6;

/// Summary counters of a survey report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportSummary {
    /// Vertices in the outer boundary ring.
    pub boundary_vertices: usize,
    /// Number of restriction rings.
    pub restrictions: usize,
    /// Total vertices across all restriction rings.
    pub restriction_vertices: usize,
    /// Interior grid points generated at `resolution_m`.
    pub interior_points: usize,
    /// Grid resolution in meters.
    pub resolution_m: f64,
}

/// The outer survey area as exported.
#[derive(Debug, Clone, Serialize)]
pub struct ReportArea {
    /// Boundary vertices rounded to export precision.
    pub vertices: Vec<Coordinate>,
}

/// One exported restriction ring.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRestriction {
    /// 1-based insertion position of the restriction.
    pub id: usize,
    /// Ring vertices rounded to export precision.
    pub vertices: Vec<Coordinate>,
}

/// A machine-readable survey report.
///
/// A derived view over a survey, regenerated fresh on every build; it
/// owns no state of its own.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyReport {
    /// ISO-8601 UTC generation time.
    pub timestamp: String,
    /// Summary counters.
    pub summary: ReportSummary,
    /// The outer boundary.
    pub area: ReportArea,
    /// Restrictions in insertion order.
    pub restrictions: Vec<ReportRestriction>,
    /// Interior sample points in row-major order.
    pub internal_grid_points: Vec<Coordinate>,
}

impl SurveyReport {
    /// Pretty-printed JSON rendering of the report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(ExportError::Json)?)
    }
}

/// Assembles the machine-readable report for a survey.
///
/// Samples the interior grid at the configured resolution, rounds every
/// exported coordinate to 6 decimal degrees and stamps the result with
/// the generation time.
pub struct BuildReport {
    params: GridParams,
}

impl BuildReport {
    /// Creates a new `BuildReport` operation.
    #[must_use]
    pub fn new(params: GridParams) -> Self {
        Self { params }
    }

    /// Builds the report.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid step is non-positive or non-finite.
    pub fn execute(&self, survey: &Survey) -> Result<SurveyReport> {
        let grid = SampleGrid::new(self.params).execute(survey)?;

        let boundary = survey.boundary();
        let restrictions: Vec<ReportRestriction> = survey
            .restrictions()
            .enumerate()
            .map(|(index, (_, ring))| ReportRestriction {
                id: index + 1,
                vertices: rounded_vertices(&ring.vertices),
            })
            .collect();
        let restriction_vertices = restrictions.iter().map(|r| r.vertices.len()).sum();

        Ok(SurveyReport {
            timestamp: utc_timestamp(),
            summary: ReportSummary {
                boundary_vertices: boundary.vertex_count(),
                restrictions: restrictions.len(),
                restriction_vertices,
                interior_points: grid.len(),
                resolution_m: self.params.step_meters,
            },
            area: ReportArea {
                vertices: rounded_vertices(&boundary.vertices),
            },
            restrictions,
            internal_grid_points: grid
                .iter()
                .map(|p| p.rounded(EXPORT_DECIMALS))
                .collect(),
        })
    }
}

fn rounded_vertices(vertices: &[Coordinate]) -> Vec<Coordinate> {
    vertices.iter().map(|v| v.rounded(EXPORT_DECIMALS)).collect()
}
