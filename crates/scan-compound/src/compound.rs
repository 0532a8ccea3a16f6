//! The compound generator orchestrator.

use std::collections::BTreeMap;

use scan_core::{
    AxisGenerator, ErrorInfo, Excluder, Mutator, Point, PointIter, ScanError,
};

use crate::decoder::{decode_point, AxisColumns};
use crate::dimension::{
    apply_masks, generator_scaling, merge_dimensions, scale_dimensions, Dimension, GenScaling,
    GeneratorMeta,
};

/// Read-only summary of one prepared dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionView {
    /// Ordered axes across the dimension's constituent generators.
    pub axes: Vec<String>,
    /// Pre-mask size (product of constituent generator counts).
    pub size: usize,
    /// Number of points surviving the combined exclusion mask.
    pub valid: usize,
    /// Whether the dimension alternates on consecutive cycles.
    pub alternate: bool,
}

struct PreparedScan {
    num: usize,
    dimensions: Vec<Dimension>,
    meta: Vec<GeneratorMeta>,
    scaling: Vec<GenScaling>,
    columns: Vec<Vec<AxisColumns>>,
}

impl PreparedScan {
    fn decode(&self, n: usize) -> Point {
        decode_point(n, &self.dimensions, &self.meta, &self.scaling, &self.columns)
    }
}

/// Nests leaf generators, applies exclusions across axis pairs and streams
/// the surviving points through the registered mutators.
///
/// Construction validates the configuration; [`prepare`](Self::prepare)
/// realizes per-axis arrays and folds generators into dimensions. Reads
/// (`get_point`, `iter_points`) take `&self` and are safe to share across
/// threads once preparation has completed; `prepare` takes `&mut self`, so
/// callers serialize it through ordinary exclusive access.
///
/// Compound generators cannot nest: this type deliberately does not
/// implement [`AxisGenerator`], so a compound scan is always assembled from
/// its constituent leaves.
pub struct CompoundGenerator {
    generators: Vec<Box<dyn AxisGenerator>>,
    excluders: Vec<Box<dyn Excluder>>,
    mutators: Vec<Box<dyn Mutator>>,
    axes: Vec<String>,
    position_units: BTreeMap<String, String>,
    prepared: Option<PreparedScan>,
}

impl CompoundGenerator {
    /// Validates the configuration and creates an unprepared compound scan.
    ///
    /// Axis names must be globally unique across all generators.
    pub fn new(
        generators: Vec<Box<dyn AxisGenerator>>,
        excluders: Vec<Box<dyn Excluder>>,
        mutators: Vec<Box<dyn Mutator>>,
    ) -> Result<Self, ScanError> {
        let mut axes = Vec::new();
        let mut position_units = BTreeMap::new();
        for generator in &generators {
            axes.extend(generator.axes());
            position_units.extend(generator.position_units());
        }
        let mut sorted = axes.clone();
        sorted.sort();
        if let Some(duplicate) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ScanError::Config(
                ErrorInfo::new("duplicate-axis", "axis names cannot be duplicated")
                    .with_context("axis", duplicate[0].clone())
                    .with_hint("rename the clashing axis on one of the generators"),
            ));
        }
        Ok(Self {
            generators,
            excluders,
            mutators,
            axes,
            position_units,
            prepared: None,
        })
    }

    /// Ordered axis names across all generators, outer to inner.
    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    /// Engineering unit per axis.
    pub fn position_units(&self) -> &BTreeMap<String, String> {
        &self.position_units
    }

    /// The constituent generators, in nesting order.
    pub fn generators(&self) -> &[Box<dyn AxisGenerator>] {
        &self.generators
    }

    /// The registered excluders, in application order.
    pub fn excluders(&self) -> &[Box<dyn Excluder>] {
        &self.excluders
    }

    /// The registered mutators, in application order.
    pub fn mutators(&self) -> &[Box<dyn Mutator>] {
        &self.mutators
    }

    /// Whether [`prepare`](Self::prepare) has completed.
    pub fn is_prepared(&self) -> bool {
        self.prepared.is_some()
    }

    /// Realizes per-axis arrays, folds generators into dimensions, applies
    /// exclusion masks and computes all scaling factors.
    ///
    /// Must run before any read. Idempotent but not incremental: re-running
    /// recomputes everything from the leaf generators.
    pub fn prepare(&mut self) -> Result<(), ScanError> {
        self.prepared = None;
        let mut meta = Vec::with_capacity(self.generators.len());
        let mut tables = Vec::with_capacity(self.generators.len());
        let mut columns = Vec::with_capacity(self.generators.len());
        for (idx, generator) in self.generators.iter().enumerate() {
            let num = generator.num();
            if num == 0 {
                return Err(ScanError::Generator(
                    ErrorInfo::new("generator-empty", "generators must produce at least one point")
                        .with_context("generator", idx.to_string()),
                ));
            }
            let table = generator.produce_points()?;
            if table.num() != num {
                return Err(ScanError::Generator(
                    ErrorInfo::new("table-num-mismatch", "realized table disagrees with num()")
                        .with_context("generator", idx.to_string())
                        .with_context("num", num.to_string())
                        .with_context("table", table.num().to_string()),
                ));
            }
            let gen_axes = generator.axes();
            let mut gen_columns = Vec::with_capacity(gen_axes.len());
            for axis in &gen_axes {
                let (positions, lower, upper) = match (
                    table.positions(axis),
                    table.lower(axis),
                    table.upper(axis),
                ) {
                    (Some(p), Some(l), Some(u)) => (p.to_vec(), l.to_vec(), u.to_vec()),
                    _ => {
                        return Err(ScanError::Generator(
                            ErrorInfo::new(
                                "missing-axis-arrays",
                                "realized table lacks arrays for a declared axis",
                            )
                            .with_context("generator", idx.to_string())
                            .with_context("axis", axis.clone()),
                        ))
                    }
                };
                gen_columns.push(AxisColumns {
                    axis: axis.clone(),
                    positions,
                    lower,
                    upper,
                });
            }
            tracing::debug!(
                generator = idx,
                num,
                alternate = generator.alternate_direction(),
                "realized axis table"
            );
            meta.push(GeneratorMeta {
                num,
                alternate: generator.alternate_direction(),
                axes: gen_axes,
            });
            tables.push(table);
            columns.push(gen_columns);
        }

        let mut dimensions = merge_dimensions(&meta, &tables, &self.excluders)?;
        apply_masks(&mut dimensions)?;
        let num = scale_dimensions(&mut dimensions);
        let scaling = generator_scaling(&meta, &dimensions);
        tracing::debug!(num, dimensions = dimensions.len(), "prepared compound scan");

        self.prepared = Some(PreparedScan {
            num,
            dimensions,
            meta,
            scaling,
            columns,
        });
        Ok(())
    }

    fn prepared(&self) -> Result<&PreparedScan, ScanError> {
        self.prepared.as_ref().ok_or_else(|| {
            ScanError::Config(
                ErrorInfo::new("not-prepared", "prepare() must complete before reading points")
                    .with_hint("call prepare() once after construction"),
            )
        })
    }

    /// Total number of points in the prepared scan.
    pub fn num(&self) -> Result<usize, ScanError> {
        Ok(self.prepared()?.num)
    }

    /// Read-only summaries of the prepared dimensions, outer to inner.
    pub fn dimensions(&self) -> Result<Vec<DimensionView>, ScanError> {
        Ok(self
            .prepared()?
            .dimensions
            .iter()
            .map(|dim| DimensionView {
                axes: dim.axes.clone(),
                size: dim.size,
                valid: dim.indices.len(),
                alternate: dim.alternate,
            })
            .collect())
    }

    /// Decodes the `n`-th point of the scan.
    ///
    /// Pure and side-effect-free given prepared state; safe for repeated and
    /// concurrent calls.
    pub fn get_point(&self, n: usize) -> Result<Point, ScanError> {
        let prepared = self.prepared()?;
        if n >= prepared.num {
            return Err(ScanError::Range(
                ErrorInfo::new("point-out-of-range", "requested point is out of range")
                    .with_context("index", n.to_string())
                    .with_context("num", prepared.num.to_string()),
            ));
        }
        Ok(prepared.decode(n))
    }

    /// Returns a fresh lazy traversal over the whole scan, threaded through
    /// every registered mutator in order.
    ///
    /// Each call starts over from the first point; the underlying generators
    /// are not consumed.
    pub fn iter_points(&self) -> Result<PointIter<'_>, ScanError> {
        let prepared = self.prepared()?;
        let mut iter: PointIter<'_> = Box::new((0..prepared.num).map(move |n| prepared.decode(n)));
        for mutator in &self.mutators {
            iter = mutator.mutate(iter);
        }
        Ok(iter)
    }
}
