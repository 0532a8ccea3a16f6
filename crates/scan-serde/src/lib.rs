//! Declarative round-trip of compound scans.
//!
//! A scan serializes to nested [`TypedRecord`](scan_core::TypedRecord)s: one
//! record per generator, excluder, mutator and region, each carrying a
//! `typeid` discriminator. A
//! [`ScanRegistry`] instance owns the discriminator-to-factory maps used to
//! rebuild the parts; it is created explicitly by the caller, never ambient
//! global state.

mod registry;
mod round_trip;

pub use registry::{
    ExcluderFactory, GeneratorFactory, MutatorFactory, RegionFactory, ScanRegistry,
};
pub use round_trip::{
    compound_from_record, compound_to_record, from_json, to_json, COMPOUND_TYPEID,
};
