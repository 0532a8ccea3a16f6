use std::collections::BTreeMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use scan_core::{AxisGenerator, AxisTable, ErrorInfo, ScanError, TypedRecord};

/// Description of an outward Archimedean spiral over two axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiralConfig {
    /// Ordered pair of axis names, fast axis first.
    pub axes: [String; 2],
    /// Engineering unit shared by both axes.
    pub units: String,
    /// Centre of the spiral.
    pub centre: [f64; 2],
    /// Maximum radius swept by the spiral.
    pub radius: f64,
    /// Radial distance between consecutive spiral arms.
    pub scale: f64,
    /// Whether consecutive cycles traverse the spiral in alternating order.
    #[serde(default)]
    pub alternate_direction: bool,
}

/// Equal-arc-length points along an outward Archimedean spiral.
///
/// The spiral is parameterized by `phi(t) = alpha * sqrt(t)` with
/// `alpha = sqrt(4 * pi)`, giving near-uniform point density over the swept
/// disc. Positions sample the parameter at `t = i + 0.5`; capture bounds
/// sample it at `t = i` and `t = i + 1`.
#[derive(Debug, Clone)]
pub struct SpiralGenerator {
    config: SpiralConfig,
    num: usize,
}

impl SpiralGenerator {
    /// Type discriminator used at the serialization boundary.
    pub const TYPEID: &'static str = "scan:generator/spiral:1.0";

    const ALPHA: f64 = 3.544907701811032; // sqrt(4 * pi)

    /// Validates the description and creates the generator.
    pub fn new(config: SpiralConfig) -> Result<Self, ScanError> {
        if config.axes[0] == config.axes[1] {
            return Err(ScanError::Generator(
                ErrorInfo::new("spiral-duplicate-axis", "spiral axes must be distinct")
                    .with_context("axis", config.axes[0].clone()),
            ));
        }
        if !(config.radius > 0.0) || !(config.scale > 0.0) {
            return Err(ScanError::Generator(
                ErrorInfo::new("spiral-degenerate", "spiral radius and scale must be positive")
                    .with_context("radius", config.radius.to_string())
                    .with_context("scale", config.scale.to_string()),
            ));
        }
        // Largest n with the n-th position still inside the radius.
        let beta = config.scale / (2.0 * PI);
        let swept = (config.radius / (Self::ALPHA * beta)).powi(2);
        let num = ((swept + 0.5).floor() as usize).max(1);
        Ok(Self { config, num })
    }

    /// Returns the validated description.
    pub fn config(&self) -> &SpiralConfig {
        &self.config
    }

    fn coordinates(&self, t: f64) -> (f64, f64) {
        let beta = self.config.scale / (2.0 * PI);
        let phi = Self::ALPHA * t.sqrt();
        let radius = beta * phi;
        (
            self.config.centre[0] + radius * phi.sin(),
            self.config.centre[1] + radius * phi.cos(),
        )
    }
}

impl AxisGenerator for SpiralGenerator {
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
        self.num
    }

    fn alternate_direction(&self) -> bool {
        self.config.alternate_direction
    }

    fn produce_points(&self) -> Result<AxisTable, ScanError> {
        let mut columns = [
            (Vec::with_capacity(self.num), Vec::new(), Vec::new()),
            (Vec::with_capacity(self.num), Vec::new(), Vec::new()),
        ];
        for i in 0..self.num {
            let (x, y) = self.coordinates(i as f64 + 0.5);
            let (x_lo, y_lo) = self.coordinates(i as f64);
            let (x_hi, y_hi) = self.coordinates(i as f64 + 1.0);
            columns[0].0.push(x);
            columns[0].1.push(x_lo);
            columns[0].2.push(x_hi);
            columns[1].0.push(y);
            columns[1].1.push(y_lo);
            columns[1].2.push(y_hi);
        }
        let mut table = AxisTable::new(self.num);
        for (axis, (positions, lower, upper)) in self.config.axes.iter().zip(columns) {
            table.insert_axis(axis.clone(), positions, lower, upper)?;
        }
        Ok(table)
    }

    fn to_record(&self) -> Result<TypedRecord, ScanError> {
        TypedRecord::from_payload(Self::TYPEID, &self.config)
    }
}
