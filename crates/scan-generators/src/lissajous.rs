use std::collections::BTreeMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use scan_core::{AxisGenerator, AxisTable, ErrorInfo, ScanError, TypedRecord};

/// Description of a closed Lissajous figure over two axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LissajousConfig {
    /// Ordered pair of axis names.
    pub axes: [String; 2],
    /// Engineering unit shared by both axes.
    pub units: String,
    /// Centre of the bounding box.
    pub centre: [f64; 2],
    /// Width and height of the bounding box.
    pub span: [f64; 2],
    /// Number of lobes; the frequency ratio is `lobes : lobes + 1`.
    pub lobes: usize,
    /// Number of points sampled over one closed period.
    pub num: usize,
    /// Whether consecutive cycles traverse the figure in alternating order.
    #[serde(default)]
    pub alternate_direction: bool,
}

/// Points along a closed Lissajous curve inside a bounding box.
#[derive(Debug, Clone)]
pub struct LissajousGenerator {
    config: LissajousConfig,
}

impl LissajousGenerator {
    /// Type discriminator used at the serialization boundary.
    pub const TYPEID: &'static str = "scan:generator/lissajous:1.0";

    /// Validates the description and creates the generator.
    pub fn new(config: LissajousConfig) -> Result<Self, ScanError> {
        if config.axes[0] == config.axes[1] {
            return Err(ScanError::Generator(
                ErrorInfo::new("lissajous-duplicate-axis", "lissajous axes must be distinct")
                    .with_context("axis", config.axes[0].clone()),
            ));
        }
        if config.lobes == 0 || config.num == 0 {
            return Err(ScanError::Generator(ErrorInfo::new(
                "lissajous-empty",
                "lissajous generators require at least one lobe and one point",
            )));
        }
        if !(config.span[0] > 0.0) || !(config.span[1] > 0.0) {
            return Err(ScanError::Generator(
                ErrorInfo::new("lissajous-degenerate", "bounding box spans must be positive")
                    .with_context("width", config.span[0].to_string())
                    .with_context("height", config.span[1].to_string()),
            ));
        }
        Ok(Self { config })
    }

    /// Returns the validated description.
    pub fn config(&self) -> &LissajousConfig {
        &self.config
    }

    fn coordinates(&self, t: f64) -> (f64, f64) {
        let x_freq = self.config.lobes as f64;
        let y_freq = x_freq + 1.0;
        (
            self.config.centre[0] + self.config.span[0] / 2.0 * (x_freq * t).sin(),
            self.config.centre[1] + self.config.span[1] / 2.0 * (y_freq * t + PI / 2.0).sin(),
        )
    }
}

impl AxisGenerator for LissajousGenerator {
    fn axes(&self) -> Vec<String> {
        self.config.axes.to_vec()
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
        let dt = 2.0 * PI / num as f64;
        let mut columns = [
            (Vec::with_capacity(num), Vec::new(), Vec::new()),
            (Vec::with_capacity(num), Vec::new(), Vec::new()),
        ];
        for j in 0..num {
            let t = j as f64 * dt;
            let (x, y) = self.coordinates(t);
            let (x_lo, y_lo) = self.coordinates(t - dt / 2.0);
            let (x_hi, y_hi) = self.coordinates(t + dt / 2.0);
            columns[0].0.push(x);
            columns[0].1.push(x_lo);
            columns[0].2.push(x_hi);
            columns[1].0.push(y);
            columns[1].1.push(y_lo);
            columns[1].2.push(y_hi);
        }
        let mut table = AxisTable::new(num);
        for (axis, (positions, lower, upper)) in self.config.axes.iter().zip(columns) {
            table.insert_axis(axis.clone(), positions, lower, upper)?;
        }
        Ok(table)
    }

    fn to_record(&self) -> Result<TypedRecord, ScanError> {
        TypedRecord::from_payload(Self::TYPEID, &self.config)
    }
}
