use crate::bounds::BoundingPolygon;
use crate::error::{Result, VoronoiError};

/// Default relative distance below which consecutive cell vertices are merged.
pub const DEFAULT_MERGE_TOLERANCE: f64 = 1e-9;

/// Settings for a diagram construction.
#[derive(Clone, Debug)]
pub struct DiagramConfig {
    /// Convex clipping region. Without it cells may be unbounded and only
    /// `Diagram::edges` can describe them.
    pub bounds: Option<BoundingPolygon>,
    /// Build bisectors and extract cells on the rayon pool.
    pub parallel: bool,
    /// Consecutive vertices closer than this, times the largest absolute input
    /// coordinate (at least `1.0`), are reported once. `0.0` keeps every clipped
    /// endpoint, including the duplicate at each shared corner.
    pub merge_tolerance: f64,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            bounds: None,
            parallel: true,
            merge_tolerance: DEFAULT_MERGE_TOLERANCE,
        }
    }
}

impl DiagramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, bounds: impl Into<BoundingPolygon>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_merge_tolerance(mut self, tolerance: f64) -> Self {
        self.merge_tolerance = tolerance;
        self
    }

    pub fn is_bounded(&self) -> bool {
        self.bounds.is_some()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.merge_tolerance.is_finite() || self.merge_tolerance < 0.0 {
            return Err(VoronoiError::InvalidConfig(format!(
                "merge tolerance must be finite and non-negative, got {}",
                self.merge_tolerance
            )));
        }
        Ok(())
    }
}
