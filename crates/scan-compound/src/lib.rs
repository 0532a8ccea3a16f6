#![deny(missing_docs)]
//! Compound scan-point generation.
//!
//! A compound scan nests independent per-axis generators, folds generators
//! tied together by exclusion regions into shared dimensions, and decodes
//! linear scan indices into concrete coordinate tuples on demand — the full
//! Cartesian product is never materialized. See
//! [`CompoundGenerator`] for the lifecycle (`new` → `prepare` → reads).

mod compound;
mod decoder;
mod dimension;

pub use compound::{CompoundGenerator, DimensionView};
