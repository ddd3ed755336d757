mod grid;

pub use grid::SampleGrid;

use crate::error::SamplingError;

/// Parameters controlling interior grid sampling.
#[derive(Debug, Clone, Copy)]
pub struct GridParams {
    /// Target spacing between adjacent sample points, in meters.
    pub step_meters: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self { step_meters: 5.0 }
    }
}

impl GridParams {
    /// Creates parameters with the given step in meters.
    #[must_use]
    pub fn new(step_meters: f64) -> Self {
        Self { step_meters }
    }

    /// Rejects unusable steps before any sweep runs. A non-positive
    /// step would never advance the lattice walk and a NaN or infinite
    /// step cannot produce a meaningful lattice.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidStep`] for non-finite or
    /// non-positive steps.
    pub fn validate(&self) -> Result<(), SamplingError> {
        if !self.step_meters.is_finite() || self.step_meters <= 0.0 {
            return Err(SamplingError::InvalidStep {
                step: self.step_meters,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_five_meters() {
        let params = GridParams::default();
        assert!((params.step_meters - 5.0).abs() < 1e-12);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn positive_finite_steps_are_accepted() {
        assert!(GridParams::new(0.5).validate().is_ok());
        assert!(GridParams::new(1000.0).validate().is_ok());
    }

    #[test]
    fn degenerate_steps_are_rejected() {
        assert!(GridParams::new(0.0).validate().is_err());
        assert!(GridParams::new(-5.0).validate().is_err());
        assert!(GridParams::new(f64::NAN).validate().is_err());
        assert!(GridParams::new(f64::INFINITY).validate().is_err());
    }
}
