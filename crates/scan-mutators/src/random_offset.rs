use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use scan_core::{ErrorInfo, Mutator, PointIter, RngHandle, ScanError, TypedRecord};

/// Description of a deterministic random position jitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomOffsetConfig {
    /// Master seed for the offset streams.
    pub seed: u64,
    /// Maximum absolute offset per axis; axes not listed are left untouched.
    pub max_offset: BTreeMap<String, f64>,
}

/// Offsets each point's position by a seed-derived value in `[-max, +max]`.
///
/// One RNG substream is derived per point ordinal, so restarting the iterator
/// replays identical offsets. Bounds and indexes are left untouched.
#[derive(Debug, Clone)]
pub struct RandomOffsetMutator {
    config: RandomOffsetConfig,
}

impl RandomOffsetMutator {
    /// Type discriminator used at the serialization boundary.
    pub const TYPEID: &'static str = "scan:mutator/random_offset:1.0";

    /// Validates the description and creates the mutator.
    pub fn new(config: RandomOffsetConfig) -> Result<Self, ScanError> {
        for (axis, max) in &config.max_offset {
            if *max < 0.0 || !max.is_finite() {
                return Err(ScanError::Generator(
                    ErrorInfo::new("offset-negative", "maximum offsets must be finite and >= 0")
                        .with_context("axis", axis.clone())
                        .with_context("max", max.to_string()),
                ));
            }
        }
        Ok(Self { config })
    }

    /// Returns the validated description.
    pub fn config(&self) -> &RandomOffsetConfig {
        &self.config
    }
}

impl Mutator for RandomOffsetMutator {
    fn mutate<'a>(&'a self, points: PointIter<'a>) -> PointIter<'a> {
        Box::new(points.enumerate().map(move |(ordinal, mut point)| {
            let mut rng = RngHandle::for_point(self.config.seed, ordinal as u64);
            // BTreeMap iteration is sorted, so the draw order is stable.
            for (axis, max) in &self.config.max_offset {
                let offset = rng.gen_range(-*max..=*max);
                if let Some(position) = point.positions.get_mut(axis) {
                    *position += offset;
                }
            }
            point
        }))
    }

    fn to_record(&self) -> Result<TypedRecord, ScanError> {
        TypedRecord::from_payload(Self::TYPEID, &self.config)
    }
}
