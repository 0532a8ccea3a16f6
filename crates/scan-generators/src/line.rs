use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scan_core::{AxisGenerator, AxisTable, ErrorInfo, ScanError, TypedRecord};

/// Description of an evenly spaced straight-line trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    /// Ordered unique axis names moved along the line.
    pub axes: Vec<String>,
    /// Engineering unit shared by all axes.
    pub units: String,
    /// Per-axis start position.
    pub start: Vec<f64>,
    /// Per-axis stop position (inclusive).
    pub stop: Vec<f64>,
    /// Number of points along the line.
    pub num: usize,
    /// Whether consecutive cycles traverse the line in alternating order.
    #[serde(default)]
    pub alternate_direction: bool,
}

/// Evenly spaced points between per-axis start and stop positions.
///
/// Each point's capture bounds sit half a step either side of its position.
/// A single-point line sits at `start` with bounds spanning half the full
/// start-to-stop span either side.
#[derive(Debug, Clone)]
pub struct LineGenerator {
    config: LineConfig,
}

impl LineGenerator {
    /// Type discriminator used at the serialization boundary.
    pub const TYPEID: &'static str = "scan:generator/line:1.0";

    /// Validates the description and creates the generator.
    pub fn new(config: LineConfig) -> Result<Self, ScanError> {
        if config.axes.is_empty() {
            return Err(ScanError::Generator(ErrorInfo::new(
                "line-no-axes",
                "line generators require at least one axis",
            )));
        }
        let mut seen = config.axes.clone();
        seen.sort();
        seen.dedup();
        if seen.len() != config.axes.len() {
            return Err(ScanError::Generator(ErrorInfo::new(
                "line-duplicate-axis",
                "line generator axes must be unique",
            )));
        }
        for (kind, array) in [("start", &config.start), ("stop", &config.stop)] {
            if array.len() != config.axes.len() {
                return Err(ScanError::Generator(
                    ErrorInfo::new("line-shape-mismatch", "start/stop must match the axis count")
                        .with_context("kind", kind)
                        .with_context("axes", config.axes.len().to_string())
                        .with_context("actual", array.len().to_string()),
                ));
            }
        }
        if config.num == 0 {
            return Err(ScanError::Generator(ErrorInfo::new(
                "line-empty",
                "line generators require at least one point",
            )));
        }
        Ok(Self { config })
    }

    /// Convenience constructor for a single-axis line.
    pub fn single(
        axis: impl Into<String>,
        units: impl Into<String>,
        start: f64,
        stop: f64,
        num: usize,
    ) -> Result<Self, ScanError> {
        Self::new(LineConfig {
            axes: vec![axis.into()],
            units: units.into(),
            start: vec![start],
            stop: vec![stop],
            num,
            alternate_direction: false,
        })
    }

    /// Returns the validated description.
    pub fn config(&self) -> &LineConfig {
        &self.config
    }

    /// Switches the alternating-direction flag on a validated line.
    pub fn with_alternating(mut self, alternate: bool) -> Self {
        self.config.alternate_direction = alternate;
        self
    }
}

impl AxisGenerator for LineGenerator {
    fn axes(&self) -> Vec<String> {
        self.config.axes.clone()
    }

    fn position_units(&self) -> BTreeMap<String, String> {
        self.config
            .axes
            .iter()
            .map(|axis| (axis.clone(), self.config.units.clone()))
            .collect()
    }

    fn num(&self) -> usize {
        self.config.num
    }

    fn alternate_direction(&self) -> bool {
        self.config.alternate_direction
    }

    fn produce_points(&self) -> Result<AxisTable, ScanError> {
        let num = self.config.num;
        let mut table = AxisTable::new(num);
        for (idx, axis) in self.config.axes.iter().enumerate() {
            let start = self.config.start[idx];
            let stop = self.config.stop[idx];
            let step = if num > 1 {
                (stop - start) / (num - 1) as f64
            } else {
                stop - start
            };
            let positions: Vec<f64> = (0..num).map(|j| start + step * j as f64).collect();
            let lower = positions.iter().map(|p| p - step / 2.0).collect();
            let upper = positions.iter().map(|p| p + step / 2.0).collect();
            table.insert_axis(axis.clone(), positions, lower, upper)?;
        }
        Ok(table)
    }

    fn to_record(&self) -> Result<TypedRecord, ScanError> {
        TypedRecord::from_payload(Self::TYPEID, &self.config)
    }
}
