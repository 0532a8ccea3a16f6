use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scan_core::{AxisGenerator, AxisTable, ErrorInfo, ScanError, TypedRecord};

/// Description of a single-axis trajectory over explicit positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayConfig {
    /// Name of the scanned axis.
    pub axis: String,
    /// Engineering unit of the axis.
    pub units: String,
    /// Ordered explicit positions, at least one.
    pub positions: Vec<f64>,
    /// Whether consecutive cycles traverse the array in alternating order.
    #[serde(default)]
    pub alternate_direction: bool,
}

/// Explicit, possibly unevenly spaced positions along one axis.
///
/// Capture bounds sit at the midpoints between consecutive positions; the
/// outermost bounds are extrapolated from the first and last spacing.
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    config: ArrayConfig,
}

impl ArrayGenerator {
    /// Type discriminator used at the serialization boundary.
    pub const TYPEID: &'static str = "scan:generator/array:1.0";

    /// Validates the description and creates the generator.
    pub fn new(config: ArrayConfig) -> Result<Self, ScanError> {
        if config.positions.is_empty() {
            return Err(ScanError::Generator(
                ErrorInfo::new("array-empty", "array generators require at least one position")
                    .with_context("axis", config.axis),
            ));
        }
        Ok(Self { config })
    }

    /// Returns the validated description.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }
}

impl AxisGenerator for ArrayGenerator {
    fn axes(&self) -> Vec<String> {
        vec![self.config.axis.clone()]
    }

    fn position_units(&self) -> BTreeMap<String, String> {
        [(self.config.axis.clone(), self.config.units.clone())]
            .into_iter()
            .collect()
    }

    fn num(&self) -> usize {
        self.config.positions.len()
    }

    fn alternate_direction(&self) -> bool {
        self.config.alternate_direction
    }

    fn produce_points(&self) -> Result<AxisTable, ScanError> {
        let positions = self.config.positions.clone();
        let num = positions.len();
        let mut lower = Vec::with_capacity(num);
        let mut upper = Vec::with_capacity(num);
        if num == 1 {
            lower.push(positions[0]);
            upper.push(positions[0]);
        } else {
            lower.push(positions[0] - (positions[1] - positions[0]) / 2.0);
            for j in 1..num {
                lower.push((positions[j - 1] + positions[j]) / 2.0);
            }
            for j in 0..num - 1 {
                upper.push((positions[j] + positions[j + 1]) / 2.0);
            }
            upper.push(positions[num - 1] + (positions[num - 1] - positions[num - 2]) / 2.0);
        }
        let mut table = AxisTable::new(num);
        table.insert_axis(self.config.axis.clone(), positions, lower, upper)?;
        Ok(table)
    }

    fn to_record(&self) -> Result<TypedRecord, ScanError> {
        TypedRecord::from_payload(Self::TYPEID, &self.config)
    }
}
