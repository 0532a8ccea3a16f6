use serde::{Deserialize, Serialize};

use scan_core::{ErrorInfo, ScanError, TypedRecord};

use crate::Region;

/// Description of an axis-aligned elliptical keep-region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseConfig {
    /// Centre of the ellipse.
    pub centre: [f64; 2],
    /// Semi-axis extents along the first and second axis.
    pub semi_axes: [f64; 2],
}

/// Axis-aligned elliptical keep-region; the boundary is inclusive.
#[derive(Debug, Clone)]
pub struct EllipticalRegion {
    config: EllipseConfig,
}

impl EllipticalRegion {
    /// Type discriminator used at the serialization boundary.
    pub const TYPEID: &'static str = "scan:region/ellipse:1.0";

    /// Validates the description and creates the region.
    pub fn new(config: EllipseConfig) -> Result<Self, ScanError> {
        if !(config.semi_axes[0] > 0.0) || !(config.semi_axes[1] > 0.0) {
            return Err(ScanError::Generator(
                ErrorInfo::new("ellipse-degenerate", "ellipse semi-axes must be positive")
                    .with_context("semi_x", config.semi_axes[0].to_string())
                    .with_context("semi_y", config.semi_axes[1].to_string()),
            ));
        }
        Ok(Self { config })
    }

    /// Returns the validated description.
    pub fn config(&self) -> &EllipseConfig {
        &self.config
    }
}

impl Region for EllipticalRegion {
    fn contains(&self, x: f64, y: f64) -> bool {
        let dx = (x - self.config.centre[0]) / self.config.semi_axes[0];
        let dy = (y - self.config.centre[1]) / self.config.semi_axes[1];
        dx * dx + dy * dy <= 1.0
    }

    fn to_record(&self) -> Result<TypedRecord, ScanError> {
        TypedRecord::from_payload(Self::TYPEID, &self.config)
    }
}
