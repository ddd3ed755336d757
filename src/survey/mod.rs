use slotmap::SlotMap;

use crate::error::SurveyError;
use crate::geometry::Ring;
use crate::math::{area, Coordinate};

slotmap::new_key_type! {
    /// Unique identifier for a restriction ring within a survey.
    pub struct RestrictionId;
}

/// A survey document: one outer boundary ring plus zero or more
/// restriction rings subtracted from it.
///
/// Restrictions live in an arena keyed by [`RestrictionId`]; a side
/// list preserves insertion order so iteration and exports stay
/// deterministic across removals. Every metric is recomputed from the
/// current rings on each call, nothing is cached.
#[derive(Debug, Default)]
pub struct Survey {
    boundary: Ring,
    restrictions: SlotMap<RestrictionId, Ring>,
    order: Vec<RestrictionId>,
}

impl Survey {
    /// Creates an empty survey.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a survey with the given boundary and no restrictions.
    #[must_use]
    pub fn with_boundary(boundary: Ring) -> Self {
        Self {
            boundary,
            ..Self::default()
        }
    }

    /// The outer boundary ring.
    #[must_use]
    pub fn boundary(&self) -> &Ring {
        &self.boundary
    }

    /// Replaces the boundary ring.
    pub fn set_boundary(&mut self, boundary: Ring) {
        self.boundary = boundary;
    }

    /// Removes all boundary vertices, leaving restrictions untouched.
    pub fn clear_boundary(&mut self) {
        self.boundary.vertices.clear();
    }

    /// Adds a restriction ring and returns its id.
    pub fn add_restriction(&mut self, ring: Ring) -> RestrictionId {
        let id = self.restrictions.insert(ring);
        self.order.push(id);
        id
    }

    /// Returns the restriction ring for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not name a live restriction.
    pub fn restriction(&self, id: RestrictionId) -> Result<&Ring, SurveyError> {
        self.restrictions
            .get(id)
            .ok_or(SurveyError::RestrictionNotFound)
    }

    /// Removes the restriction for `id` and returns its ring.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not name a live restriction.
    pub fn remove_restriction(&mut self, id: RestrictionId) -> Result<Ring, SurveyError> {
        let ring = self
            .restrictions
            .remove(id)
            .ok_or(SurveyError::RestrictionNotFound)?;
        self.order.retain(|&kept| kept != id);
        Ok(ring)
    }

    /// Number of live restrictions.
    #[must_use]
    pub fn restriction_count(&self) -> usize {
        self.restrictions.len()
    }

    /// Restrictions in insertion order.
    pub fn restrictions(&self) -> impl Iterator<Item = (RestrictionId, &Ring)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.restrictions.get(id).map(|ring| (id, ring)))
    }

    /// Restriction vertex slices in insertion order, for the math
    /// layer.
    #[must_use]
    pub fn restriction_slices(&self) -> Vec<&[Coordinate]> {
        self.restrictions()
            .map(|(_, ring)| ring.vertices.as_slice())
            .collect()
    }

    /// Gross spherical area of the boundary in square meters.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.boundary.area()
    }

    /// Perimeter of the boundary in meters.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.boundary.perimeter()
    }

    /// Boundary area minus all restriction areas, clamped at zero.
    #[must_use]
    pub fn net_area(&self) -> f64 {
        area::net_area(&self.boundary.vertices, &self.restriction_slices())
    }
}
