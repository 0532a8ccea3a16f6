use std::collections::BTreeMap;

use scan_core::{AxisGenerator, ErrorInfo, Excluder, Mutator, ScanError, TypedRecord};
use scan_generators::{ArrayGenerator, LineGenerator, LissajousGenerator, SpiralGenerator};
use scan_mutators::RandomOffsetMutator;
use scan_regions::{
    CircularRegion, EllipticalRegion, RectangularRegion, Region, RegionExcluder,
    RegionExcluderRecord,
};

/// Builds an axis generator from its typed record.
pub type GeneratorFactory =
    fn(&ScanRegistry, &TypedRecord) -> Result<Box<dyn AxisGenerator>, ScanError>;
/// Builds an excluder from its typed record.
pub type ExcluderFactory = fn(&ScanRegistry, &TypedRecord) -> Result<Box<dyn Excluder>, ScanError>;
/// Builds a mutator from its typed record.
pub type MutatorFactory = fn(&ScanRegistry, &TypedRecord) -> Result<Box<dyn Mutator>, ScanError>;
/// Builds a region from its typed record.
pub type RegionFactory = fn(&ScanRegistry, &TypedRecord) -> Result<Box<dyn Region>, ScanError>;

/// Discriminator-to-factory maps for reconstructing serialized scans.
///
/// Factories receive the registry itself so that composite records (such as a
/// region excluder embedding its region) can resolve their nested parts.
pub struct ScanRegistry {
    generators: BTreeMap<String, GeneratorFactory>,
    excluders: BTreeMap<String, ExcluderFactory>,
    mutators: BTreeMap<String, MutatorFactory>,
    regions: BTreeMap<String, RegionFactory>,
}

impl ScanRegistry {
    /// Creates a registry with no factories at all.
    pub fn empty() -> Self {
        Self {
            generators: BTreeMap::new(),
            excluders: BTreeMap::new(),
            mutators: BTreeMap::new(),
            regions: BTreeMap::new(),
        }
    }

    /// Creates a registry knowing every concrete type in this workspace.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry
            .generators
            .insert(LineGenerator::TYPEID.to_string(), |_, record| {
                Ok(Box::new(LineGenerator::new(record.parse_payload()?)?))
            });
        registry
            .generators
            .insert(ArrayGenerator::TYPEID.to_string(), |_, record| {
                Ok(Box::new(ArrayGenerator::new(record.parse_payload()?)?))
            });
        registry
            .generators
            .insert(SpiralGenerator::TYPEID.to_string(), |_, record| {
                Ok(Box::new(SpiralGenerator::new(record.parse_payload()?)?))
            });
        registry
            .generators
            .insert(LissajousGenerator::TYPEID.to_string(), |_, record| {
                Ok(Box::new(LissajousGenerator::new(record.parse_payload()?)?))
            });
        registry
            .excluders
            .insert(RegionExcluder::TYPEID.to_string(), |registry, record| {
                let payload: RegionExcluderRecord = record.parse_payload()?;
                let region = registry.build_region(&payload.region)?;
                Ok(Box::new(RegionExcluder::new(region, payload.axes)?))
            });
        registry
            .mutators
            .insert(RandomOffsetMutator::TYPEID.to_string(), |_, record| {
                Ok(Box::new(RandomOffsetMutator::new(record.parse_payload()?)?))
            });
        registry
            .regions
            .insert(CircularRegion::TYPEID.to_string(), |_, record| {
                Ok(Box::new(CircularRegion::new(record.parse_payload()?)?))
            });
        registry
            .regions
            .insert(RectangularRegion::TYPEID.to_string(), |_, record| {
                Ok(Box::new(RectangularRegion::new(record.parse_payload()?)?))
            });
        registry
            .regions
            .insert(EllipticalRegion::TYPEID.to_string(), |_, record| {
                Ok(Box::new(EllipticalRegion::new(record.parse_payload()?)?))
            });
        registry
    }

    /// Registers a generator factory for a new discriminator.
    pub fn register_generator(
        &mut self,
        typeid: &str,
        factory: GeneratorFactory,
    ) -> Result<(), ScanError> {
        if self.generators.contains_key(typeid) {
            return Err(duplicate(typeid));
        }
        self.generators.insert(typeid.to_string(), factory);
        Ok(())
    }

    /// Registers an excluder factory for a new discriminator.
    pub fn register_excluder(
        &mut self,
        typeid: &str,
        factory: ExcluderFactory,
    ) -> Result<(), ScanError> {
        if self.excluders.contains_key(typeid) {
            return Err(duplicate(typeid));
        }
        self.excluders.insert(typeid.to_string(), factory);
        Ok(())
    }

    /// Registers a mutator factory for a new discriminator.
    pub fn register_mutator(
        &mut self,
        typeid: &str,
        factory: MutatorFactory,
    ) -> Result<(), ScanError> {
        if self.mutators.contains_key(typeid) {
            return Err(duplicate(typeid));
        }
        self.mutators.insert(typeid.to_string(), factory);
        Ok(())
    }

    /// Registers a region factory for a new discriminator.
    pub fn register_region(
        &mut self,
        typeid: &str,
        factory: RegionFactory,
    ) -> Result<(), ScanError> {
        if self.regions.contains_key(typeid) {
            return Err(duplicate(typeid));
        }
        self.regions.insert(typeid.to_string(), factory);
        Ok(())
    }

    /// Rebuilds a generator from its record.
    pub fn build_generator(&self, record: &TypedRecord) -> Result<Box<dyn AxisGenerator>, ScanError> {
        let factory = self
            .generators
            .get(&record.typeid)
            .ok_or_else(|| unknown("generator", &record.typeid))?;
        factory(self, record)
    }

    /// Rebuilds an excluder from its record.
    pub fn build_excluder(&self, record: &TypedRecord) -> Result<Box<dyn Excluder>, ScanError> {
        let factory = self
            .excluders
            .get(&record.typeid)
            .ok_or_else(|| unknown("excluder", &record.typeid))?;
        factory(self, record)
    }

    /// Rebuilds a mutator from its record.
    pub fn build_mutator(&self, record: &TypedRecord) -> Result<Box<dyn Mutator>, ScanError> {
        let factory = self
            .mutators
            .get(&record.typeid)
            .ok_or_else(|| unknown("mutator", &record.typeid))?;
        factory(self, record)
    }

    /// Rebuilds a region from its record.
    pub fn build_region(&self, record: &TypedRecord) -> Result<Box<dyn Region>, ScanError> {
        let factory = self
            .regions
            .get(&record.typeid)
            .ok_or_else(|| unknown("region", &record.typeid))?;
        factory(self, record)
    }
}

fn duplicate(typeid: &str) -> ScanError {
    ScanError::Serde(
        ErrorInfo::new("duplicate-typeid", "a factory is already registered for this typeid")
            .with_context("typeid", typeid),
    )
}

fn unknown(kind: &str, typeid: &str) -> ScanError {
    ScanError::Serde(
        ErrorInfo::new("unknown-typeid", "no factory registered for this typeid")
            .with_context("kind", kind)
            .with_context("typeid", typeid)
            .with_hint("register a factory for it before deserializing"),
    )
}
