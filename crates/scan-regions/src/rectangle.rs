use serde::{Deserialize, Serialize};

use scan_core::{ErrorInfo, ScanError, TypedRecord};

use crate::Region;

/// Description of an axis-aligned rectangular keep-region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleConfig {
    /// Lowest corner of the rectangle.
    pub origin: [f64; 2],
    /// Extent along the first axis.
    pub width: f64,
    /// Extent along the second axis.
    pub height: f64,
}

/// Axis-aligned rectangular keep-region; edges are inclusive.
#[derive(Debug, Clone)]
pub struct RectangularRegion {
    config: RectangleConfig,
}

impl RectangularRegion {
    /// Type discriminator used at the serialization boundary.
    pub const TYPEID: &'static str = "scan:region/rectangle:1.0";

    /// Validates the description and creates the region.
    pub fn new(config: RectangleConfig) -> Result<Self, ScanError> {
        if !(config.width > 0.0) || !(config.height > 0.0) {
            return Err(ScanError::Generator(
                ErrorInfo::new("rectangle-degenerate", "rectangle extents must be positive")
                    .with_context("width", config.width.to_string())
                    .with_context("height", config.height.to_string()),
            ));
        }
        Ok(Self { config })
    }

    /// Returns the validated description.
    pub fn config(&self) -> &RectangleConfig {
        &self.config
    }
}

impl Region for RectangularRegion {
    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.config.origin[0]
            && x <= self.config.origin[0] + self.config.width
            && y >= self.config.origin[1]
            && y <= self.config.origin[1] + self.config.height
    }

    fn to_record(&self) -> Result<TypedRecord, ScanError> {
        TypedRecord::from_payload(Self::TYPEID, &self.config)
    }
}
