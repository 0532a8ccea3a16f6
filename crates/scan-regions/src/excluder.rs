use serde::{Deserialize, Serialize};

use scan_core::{ErrorInfo, Excluder, ScanError, TypedRecord};

use crate::Region;

/// Serialized shape of a [`RegionExcluder`]: an axis pair plus the nested
/// region record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionExcluderRecord {
    /// Ordered pair of constrained axis names.
    pub axes: [String; 2],
    /// Self-description of the wrapped region.
    pub region: TypedRecord,
}

/// The standard [`Excluder`]: keeps the points whose coordinate pair lies
/// inside a [`Region`].
pub struct RegionExcluder {
    region: Box<dyn Region>,
    axes: [String; 2],
}

impl RegionExcluder {
    /// Type discriminator used at the serialization boundary.
    pub const TYPEID: &'static str = "scan:excluder/region:1.0";

    /// Creates an excluder constraining the given ordered axis pair.
    pub fn new(region: Box<dyn Region>, axes: [String; 2]) -> Result<Self, ScanError> {
        if axes[0] == axes[1] {
            return Err(ScanError::Generator(
                ErrorInfo::new("excluder-duplicate-axis", "excluder axes must be distinct")
                    .with_context("axis", axes[0].clone()),
            ));
        }
        Ok(Self { region, axes })
    }
}

impl Excluder for RegionExcluder {
    fn scannables(&self) -> [String; 2] {
        self.axes.clone()
    }

    fn create_mask(&self, coords_a: &[f64], coords_b: &[f64]) -> Result<Vec<bool>, ScanError> {
        if coords_a.len() != coords_b.len() {
            return Err(ScanError::Generator(
                ErrorInfo::new("mask-input-mismatch", "coordinate arrays must share one length")
                    .with_context("a", coords_a.len().to_string())
                    .with_context("b", coords_b.len().to_string()),
            ));
        }
        Ok(coords_a
            .iter()
            .zip(coords_b)
            .map(|(&x, &y)| self.region.contains(x, y))
            .collect())
    }

    fn to_record(&self) -> Result<TypedRecord, ScanError> {
        let record = RegionExcluderRecord {
            axes: self.axes.clone(),
            region: self.region.to_record()?,
        };
        TypedRecord::from_payload(Self::TYPEID, &record)
    }
}
