//! Scan point and realized per-axis position tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, ScanError};

/// A single scan coordinate produced by decoding a linear index.
///
/// Points are plain data: they are produced fresh per decoded index and carry
/// no identity beyond their values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    /// Centre position per axis.
    pub positions: BTreeMap<String, f64>,
    /// Lower capture bound per axis.
    pub lower: BTreeMap<String, f64>,
    /// Upper capture bound per axis.
    pub upper: BTreeMap<String, f64>,
    /// Per-dimension index of the point, ordered outer to inner.
    pub indexes: Vec<usize>,
}

impl Point {
    /// Creates an empty point.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ordered per-axis position and bound arrays realized by an axis generator.
///
/// Every axis holds three arrays of identical length: centre positions plus
/// lower and upper capture bounds. The shared length is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTable {
    num: usize,
    positions: BTreeMap<String, Vec<f64>>,
    lower: BTreeMap<String, Vec<f64>>,
    upper: BTreeMap<String, Vec<f64>>,
}

impl AxisTable {
    /// Creates an empty table whose axes must all carry `num` entries.
    pub fn new(num: usize) -> Self {
        Self {
            num,
            positions: BTreeMap::new(),
            lower: BTreeMap::new(),
            upper: BTreeMap::new(),
        }
    }

    /// Number of entries every axis array carries.
    pub fn num(&self) -> usize {
        self.num
    }

    /// Adds the arrays for one axis, rejecting duplicates and length mismatches.
    pub fn insert_axis(
        &mut self,
        axis: impl Into<String>,
        positions: Vec<f64>,
        lower: Vec<f64>,
        upper: Vec<f64>,
    ) -> Result<(), ScanError> {
        let axis = axis.into();
        if self.positions.contains_key(&axis) {
            return Err(ScanError::Generator(
                ErrorInfo::new("duplicate-axis-arrays", "axis arrays inserted twice")
                    .with_context("axis", axis),
            ));
        }
        for (kind, array) in [
            ("positions", &positions),
            ("lower", &lower),
            ("upper", &upper),
        ] {
            if array.len() != self.num {
                return Err(ScanError::Generator(
                    ErrorInfo::new("axis-length-mismatch", "axis arrays must share one length")
                        .with_context("axis", axis)
                        .with_context("kind", kind)
                        .with_context("expected", self.num.to_string())
                        .with_context("actual", array.len().to_string()),
                ));
            }
        }
        self.lower.insert(axis.clone(), lower);
        self.upper.insert(axis.clone(), upper);
        self.positions.insert(axis, positions);
        Ok(())
    }

    /// Centre positions for an axis.
    pub fn positions(&self, axis: &str) -> Option<&[f64]> {
        self.positions.get(axis).map(Vec::as_slice)
    }

    /// Lower bounds for an axis.
    pub fn lower(&self, axis: &str) -> Option<&[f64]> {
        self.lower.get(axis).map(Vec::as_slice)
    }

    /// Upper bounds for an axis.
    pub fn upper(&self, axis: &str) -> Option<&[f64]> {
        self.upper.get(axis).map(Vec::as_slice)
    }

    /// Axis names present in the table.
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }
}
