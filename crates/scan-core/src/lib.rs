#![deny(missing_docs)]
#![doc = "Capability contracts and core data types for compound scan-point generation."]

use std::collections::BTreeMap;

pub mod errors;
pub mod point;
pub mod record;
pub mod rng;

pub use errors::{ErrorInfo, ScanError};
pub use point::{AxisTable, Point};
pub use record::TypedRecord;
pub use rng::{derive_substream_seed, RngHandle};

/// Boxed lazy point sequence threaded through mutators.
///
/// Sequences are finite, single-pass and pull-based; a fresh one is created
/// for every traversal, so consuming one never exhausts the scan itself.
pub type PointIter<'a> = Box<dyn Iterator<Item = Point> + 'a>;

/// Contract for leaf generators producing ordered per-axis point arrays.
///
/// A generator owns one or more uniquely named axes and realizes, on demand,
/// position and bound arrays of a fixed shared length. `produce_points` may be
/// called repeatedly to regenerate the arrays from the generator's immutable
/// description.
pub trait AxisGenerator: Send + Sync {
    /// Ordered unique axis names owned by this generator.
    fn axes(&self) -> Vec<String>;

    /// Engineering unit per axis.
    fn position_units(&self) -> BTreeMap<String, String>;

    /// Number of points the generator produces per cycle.
    fn num(&self) -> usize;

    /// Whether consecutive cycles traverse the points in alternating order.
    fn alternate_direction(&self) -> bool;

    /// Realizes position and bound arrays for every owned axis.
    ///
    /// Postcondition: the returned table carries arrays of length
    /// [`num`](AxisGenerator::num) for every axis in
    /// [`axes`](AxisGenerator::axes).
    fn produce_points(&self) -> Result<AxisTable, ScanError>;

    /// Typed self-description for the serialization boundary.
    fn to_record(&self) -> Result<TypedRecord, ScanError>;
}

/// Contract for exclusions constraining a pair of axes.
pub trait Excluder: Send + Sync {
    /// The ordered pair of axis names this exclusion constrains.
    fn scannables(&self) -> [String; 2];

    /// Builds a keep-mask over paired coordinates, `true` = retained.
    ///
    /// Both inputs have equal length and the mask must match it; coordinates
    /// arrive in the order declared by [`scannables`](Excluder::scannables).
    fn create_mask(&self, coords_a: &[f64], coords_b: &[f64]) -> Result<Vec<bool>, ScanError>;

    /// Typed self-description for the serialization boundary.
    fn to_record(&self) -> Result<TypedRecord, ScanError>;
}

/// Contract for transforms applied to the produced point sequence.
///
/// Mutators are lazy sequence-to-sequence transforms preserving cardinality
/// and order. They execute synchronously in the consumer's thread as the
/// sequence is pulled.
pub trait Mutator: Send + Sync {
    /// Wraps a point sequence in the mutated sequence.
    fn mutate<'a>(&'a self, points: PointIter<'a>) -> PointIter<'a>;

    /// Typed self-description for the serialization boundary.
    fn to_record(&self) -> Result<TypedRecord, ScanError>;
}
