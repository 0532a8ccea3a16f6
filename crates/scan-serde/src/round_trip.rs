use serde::{Deserialize, Serialize};

use scan_compound::CompoundGenerator;
use scan_core::{ErrorInfo, ScanError, TypedRecord};

use crate::registry::ScanRegistry;

/// Type discriminator of a serialized compound scan.
pub const COMPOUND_TYPEID: &str = "scan:generator/compound:1.0";

#[derive(Debug, Serialize, Deserialize)]
struct CompoundRecord {
    generators: Vec<TypedRecord>,
    excluders: Vec<TypedRecord>,
    mutators: Vec<TypedRecord>,
}

/// Describes a compound scan as one nested typed record.
pub fn compound_to_record(compound: &CompoundGenerator) -> Result<TypedRecord, ScanError> {
    let payload = CompoundRecord {
        generators: compound
            .generators()
            .iter()
            .map(|generator| generator.to_record())
            .collect::<Result<_, _>>()?,
        excluders: compound
            .excluders()
            .iter()
            .map(|excluder| excluder.to_record())
            .collect::<Result<_, _>>()?,
        mutators: compound
            .mutators()
            .iter()
            .map(|mutator| mutator.to_record())
            .collect::<Result<_, _>>()?,
    };
    TypedRecord::from_payload(COMPOUND_TYPEID, &payload)
}

/// Rebuilds an unprepared compound scan from its typed record.
pub fn compound_from_record(
    registry: &ScanRegistry,
    record: &TypedRecord,
) -> Result<CompoundGenerator, ScanError> {
    if record.typeid != COMPOUND_TYPEID {
        return Err(ScanError::Serde(
            ErrorInfo::new("unexpected-typeid", "record does not describe a compound scan")
                .with_context("expected", COMPOUND_TYPEID)
                .with_context("actual", record.typeid.clone()),
        ));
    }
    let payload: CompoundRecord = record.parse_payload()?;
    let generators = payload
        .generators
        .iter()
        .map(|record| registry.build_generator(record))
        .collect::<Result<Vec<_>, _>>()?;
    let excluders = payload
        .excluders
        .iter()
        .map(|record| registry.build_excluder(record))
        .collect::<Result<Vec<_>, _>>()?;
    let mutators = payload
        .mutators
        .iter()
        .map(|record| registry.build_mutator(record))
        .collect::<Result<Vec<_>, _>>()?;
    CompoundGenerator::new(generators, excluders, mutators)
}

/// Serializes a compound scan to a JSON string.
pub fn to_json(compound: &CompoundGenerator) -> Result<String, ScanError> {
    let record = compound_to_record(compound)?;
    serde_json::to_string_pretty(&record)
        .map_err(|err| ScanError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Rebuilds an unprepared compound scan from a JSON string.
pub fn from_json(registry: &ScanRegistry, json: &str) -> Result<CompoundGenerator, ScanError> {
    let record: TypedRecord = serde_json::from_str(json)
        .map_err(|err| ScanError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    compound_from_record(registry, &record)
}
