use serde::{Deserialize, Serialize};

use scan_core::{ErrorInfo, ScanError, TypedRecord};

use crate::Region;

/// Description of a circular keep-region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleConfig {
    /// Centre of the circle.
    pub centre: [f64; 2],
    /// Radius of the circle.
    pub radius: f64,
}

/// Circular keep-region; the boundary is inclusive.
#[derive(Debug, Clone)]
pub struct CircularRegion {
    config: CircleConfig,
}

impl CircularRegion {
    /// Type discriminator used at the serialization boundary.
    pub const TYPEID: &'static str = "scan:region/circle:1.0";

    /// Validates the description and creates the region.
    pub fn new(config: CircleConfig) -> Result<Self, ScanError> {
        if !(config.radius > 0.0) {
            return Err(ScanError::Generator(
                ErrorInfo::new("circle-degenerate", "circle radius must be positive")
                    .with_context("radius", config.radius.to_string()),
            ));
        }
        Ok(Self { config })
    }

    /// Returns the validated description.
    pub fn config(&self) -> &CircleConfig {
        &self.config
    }
}

impl Region for CircularRegion {
    fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.config.centre[0];
        let dy = y - self.config.centre[1];
        dx * dx + dy * dy <= self.config.radius * self.config.radius
    }

    fn to_record(&self) -> Result<TypedRecord, ScanError> {
        TypedRecord::from_payload(Self::TYPEID, &self.config)
    }
}
