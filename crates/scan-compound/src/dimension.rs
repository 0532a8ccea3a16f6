//! Dimension records, mask construction and the merge arena.
//!
//! Generators tied together by excluders fold into shared [`Dimension`]
//! records. The arena is a plain vector: dimensions are addressed by index
//! and generator membership is tracked as indices into the compound's
//! generator list, since merges remove records.

use scan_core::{AxisTable, ErrorInfo, Excluder, ScanError};

/// Leaf metadata cached once per generator at prepare time.
#[derive(Debug, Clone)]
pub(crate) struct GeneratorMeta {
    /// Points per cycle.
    pub num: usize,
    /// Alternating-direction flag.
    pub alternate: bool,
    /// Ordered axis names owned by the generator.
    pub axes: Vec<String>,
}

/// One exclusion mask recorded against a dimension.
///
/// The mask spans the excluded axis pair at the resolution it was built at;
/// `repeat` and `tile` broadcast it across the full dimension. A half-cycle
/// mask was built over a doubled (forward plus return) sweep, so its
/// effective tile factor is `tile / 2`; the flag keeps that exact instead of
/// introducing fractional arithmetic.
#[derive(Debug, Clone)]
pub(crate) struct MaskRecord {
    mask: Vec<bool>,
    tile: usize,
    repeat: usize,
    half_cycle: bool,
}

impl MaskRecord {
    /// Broadcasts the mask to `expected` elements: each element is repeated
    /// `repeat` times, then the whole is tiled `tile` times. Half-cycle masks
    /// tile `tile / 2` whole times and, when `tile` is odd, append the
    /// forward half of the expanded sweep to reconstruct the final lap
    /// exactly.
    fn expand(&self, expected: usize) -> Result<Vec<bool>, ScanError> {
        let mut repeated = Vec::with_capacity(self.mask.len() * self.repeat);
        for &keep in &self.mask {
            repeated.extend(std::iter::repeat(keep).take(self.repeat));
        }
        let expanded = if self.half_cycle {
            if repeated.len() % 2 != 0 {
                return Err(ScanError::Internal(ErrorInfo::new(
                    "half-cycle-odd",
                    "half-cycle masks must span an even number of points",
                )));
            }
            let mut out = Vec::with_capacity(expected);
            for _ in 0..self.tile / 2 {
                out.extend_from_slice(&repeated);
            }
            if self.tile % 2 == 1 {
                out.extend_from_slice(&repeated[..repeated.len() / 2]);
            }
            out
        } else {
            let mut out = Vec::with_capacity(expected);
            for _ in 0..self.tile {
                out.extend_from_slice(&repeated);
            }
            out
        };
        if expanded.len() != expected {
            return Err(ScanError::Internal(
                ErrorInfo::new(
                    "mask-length-mismatch",
                    "expanded mask does not span its dimension",
                )
                .with_context("expanded", expanded.len().to_string())
                .with_context("dimension", expected.to_string()),
            ));
        }
        Ok(expanded)
    }
}

/// A merged grouping of generators sharing exclusion relationships.
#[derive(Debug, Clone)]
pub(crate) struct Dimension {
    /// Product of constituent generator counts, pre-mask.
    pub size: usize,
    /// Ordered axes across all constituent generators.
    pub axes: Vec<String>,
    /// Constituent generators, as indices into the compound generator list.
    pub generators: Vec<usize>,
    /// Whether the dimension traverses alternately on consecutive cycles.
    pub alternate: bool,
    /// Masks recorded by excluders, combined by [`apply_masks`].
    pub masks: Vec<MaskRecord>,
    /// Raw in-dimension indices that survive the combined mask.
    pub indices: Vec<usize>,
    /// Product of valid-index counts of all earlier dimensions.
    pub tile: usize,
    /// Product of valid-index counts of all later dimensions.
    pub repeat: usize,
}

/// Mixed-radix factors locating one generator's index inside its dimension.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GenScaling {
    /// Product of sizes of generators after this one in the dimension.
    pub repeat: usize,
    /// Product of sizes of generators before this one in the dimension.
    #[allow(dead_code)]
    pub tile: usize,
}

fn repeat_each(values: &[f64], count: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len() * count);
    for &value in values {
        out.extend(std::iter::repeat(value).take(count));
    }
    out
}

fn tile_times(values: &[f64], count: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len() * count);
    for _ in 0..count {
        out.extend_from_slice(values);
    }
    out
}

/// A forward sweep followed by its reverse: one full alternating cycle.
fn double_reflected(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len() * 2);
    out.extend_from_slice(values);
    out.extend(values.iter().rev());
    out
}

fn owning_generator(meta: &[GeneratorMeta], axis: &str) -> Option<usize> {
    meta.iter().position(|m| m.axes.iter().any(|a| a == axis))
}

fn dimension_holding(dims: &[Dimension], axis: &str) -> Option<usize> {
    dims.iter().position(|d| d.axes.iter().any(|a| a == axis))
}

/// Seeds one dimension per generator, then folds dimensions together per
/// excluder and records each excluder's keep-mask against its dimension.
pub(crate) fn merge_dimensions(
    meta: &[GeneratorMeta],
    tables: &[AxisTable],
    excluders: &[Box<dyn Excluder>],
) -> Result<Vec<Dimension>, ScanError> {
    let mut dims: Vec<Dimension> = meta
        .iter()
        .enumerate()
        .map(|(idx, m)| Dimension {
            size: m.num,
            axes: m.axes.clone(),
            generators: vec![idx],
            alternate: m.alternate,
            masks: Vec::new(),
            indices: Vec::new(),
            tile: 1,
            repeat: 1,
        })
        .collect();

    for excluder in excluders {
        let [first_axis, second_axis] = excluder.scannables();
        let gen_a = owning_generator(meta, &first_axis).ok_or_else(|| {
            ScanError::Config(
                ErrorInfo::new("unknown-axis", "excluder references an axis no generator owns")
                    .with_context("axis", first_axis.clone()),
            )
        })?;
        let gen_b = owning_generator(meta, &second_axis).ok_or_else(|| {
            ScanError::Config(
                ErrorInfo::new("unknown-axis", "excluder references an axis no generator owns")
                    .with_context("axis", second_axis.clone()),
            )
        })?;
        let gen_diff = gen_a as isize - gen_b as isize;
        if !(-1..=1).contains(&gen_diff) {
            return Err(ScanError::Config(
                ErrorInfo::new(
                    "non-adjacent-generators",
                    "excluders must tie axes of generators adjacent in nesting order",
                )
                .with_context("axes", format!("{first_axis},{second_axis}")),
            ));
        }
        // Canonicalize so the earlier-nesting (outer) generator comes first.
        let (outer_gen, inner_gen, outer_axis, inner_axis) = if gen_diff == 1 {
            (gen_b, gen_a, second_axis.clone(), first_axis.clone())
        } else {
            (gen_a, gen_b, first_axis.clone(), second_axis.clone())
        };

        let dim_a = dimension_holding(&dims, &outer_axis).ok_or_else(|| missing_dim(&outer_axis))?;
        let dim_b = dimension_holding(&dims, &inner_axis).ok_or_else(|| missing_dim(&inner_axis))?;
        if dims[dim_a].alternate != dims[dim_b].alternate {
            return Err(ScanError::Config(
                ErrorInfo::new(
                    "alternate-mismatch",
                    "generators tied by an excluder must share one alternating setting",
                )
                .with_context("axes", format!("{outer_axis},{inner_axis}")),
            ));
        }
        let dim_diff = dim_a as isize - dim_b as isize;
        if !(-1..=1).contains(&dim_diff) {
            return Err(ScanError::Config(
                ErrorInfo::new(
                    "non-adjacent-dimensions",
                    "excluders must tie axes of adjacent dimensions",
                )
                .with_context("axes", format!("{outer_axis},{inner_axis}")),
            ));
        }
        let (outer_dim, inner_dim) = if dim_diff == 1 {
            (dim_b, dim_a)
        } else {
            (dim_a, dim_b)
        };
        if outer_dim != inner_dim {
            // Merge the inner (later) dimension into the outer one. Existing
            // masks are rescaled so each still spans the enlarged dimension:
            // outer masks gain repeats, inner masks gain tiles.
            let inner = dims.remove(inner_dim);
            let outer = &mut dims[outer_dim];
            for mask in &mut outer.masks {
                mask.repeat *= inner.size;
            }
            let outer_size = outer.size;
            let mut inner_masks = inner.masks;
            for mask in &mut inner_masks {
                mask.tile *= outer_size;
            }
            tracing::debug!(
                outer = ?outer.axes,
                inner = ?inner.axes,
                size = outer.size * inner.size,
                "merged dimensions"
            );
            outer.masks.extend(inner_masks);
            outer.axes.extend(inner.axes);
            outer.generators.extend(inner.generators);
            outer.size *= inner.size;
        }
        let dim_idx = outer_dim;
        let dim_alternate = dims[dim_idx].alternate;
        let dim_generators = dims[dim_idx].generators.clone();

        let outer_points = tables[outer_gen]
            .positions(&outer_axis)
            .ok_or_else(|| missing_dim(&outer_axis))?;
        let inner_points = tables[inner_gen]
            .positions(&inner_axis)
            .ok_or_else(|| missing_dim(&inner_axis))?;

        // Build the pairwise coordinates at the dimension's resolution. Under
        // alternation the sweep is doubled (forward plus return) and the mask
        // becomes a half-cycle mask; across two generators the arrays expand
        // by the outer-product rule.
        let mut half_cycle = false;
        let (outer_coords, inner_coords) = if outer_gen == inner_gen && dim_alternate {
            half_cycle = true;
            (double_reflected(outer_points), double_reflected(inner_points))
        } else if dim_alternate {
            half_cycle = true;
            (
                repeat_each(&double_reflected(outer_points), meta[inner_gen].num),
                tile_times(&double_reflected(inner_points), meta[outer_gen].num),
            )
        } else if outer_gen != inner_gen {
            (
                repeat_each(outer_points, meta[inner_gen].num),
                tile_times(inner_points, meta[outer_gen].num),
            )
        } else {
            // Same generator, no alternation: already paired one-to-one.
            (outer_points.to_vec(), inner_points.to_vec())
        };

        // The excluder sees coordinates in its own declared axis order.
        let mask = if outer_axis == first_axis {
            excluder.create_mask(&outer_coords, &inner_coords)?
        } else {
            excluder.create_mask(&inner_coords, &outer_coords)?
        };
        if mask.len() != outer_coords.len() {
            return Err(ScanError::Generator(
                ErrorInfo::new("mask-contract", "excluder returned a mask of the wrong length")
                    .with_context("expected", outer_coords.len().to_string())
                    .with_context("actual", mask.len().to_string()),
            ));
        }

        // Tile by generators nested outside the excluded pair, repeat by
        // generators nested inside it.
        let mut tile = 1usize;
        let mut repeat = 1usize;
        let mut seen_axis = false;
        for &g in &dim_generators {
            let owns = meta[g]
                .axes
                .iter()
                .any(|a| *a == outer_axis || *a == inner_axis);
            if owns {
                seen_axis = true;
            } else if seen_axis {
                repeat *= meta[g].num;
            } else {
                tile *= meta[g].num;
            }
        }
        dims[dim_idx].masks.push(MaskRecord {
            mask,
            tile,
            repeat,
            half_cycle,
        });
    }

    Ok(dims)
}

fn missing_dim(axis: &str) -> ScanError {
    ScanError::Internal(
        ErrorInfo::new("axis-not-tracked", "axis vanished from the dimension arena")
            .with_context("axis", axis),
    )
}

/// Combines each dimension's recorded masks into its valid-index list.
pub(crate) fn apply_masks(dims: &mut [Dimension]) -> Result<(), ScanError> {
    for dim in dims.iter_mut() {
        let mut combined = vec![true; dim.size];
        for record in &dim.masks {
            let expanded = record.expand(dim.size)?;
            for (slot, keep) in combined.iter_mut().zip(&expanded) {
                *slot &= *keep;
            }
        }
        dim.indices = combined
            .iter()
            .enumerate()
            .filter_map(|(idx, &keep)| keep.then_some(idx))
            .collect();
        if dim.indices.is_empty() {
            return Err(ScanError::Mask(
                ErrorInfo::new("mask-empty", "regions would exclude entire scan")
                    .with_context("axes", dim.axes.join(",")),
            ));
        }
    }
    Ok(())
}

/// Computes cross-dimension tile/repeat factors; returns the total scan size.
pub(crate) fn scale_dimensions(dims: &mut [Dimension]) -> usize {
    let mut tile = 1usize;
    for idx in 0..dims.len() {
        dims[idx].repeat = dims[idx + 1..].iter().map(|d| d.indices.len()).product();
        dims[idx].tile = tile;
        tile *= dims[idx].indices.len();
    }
    tile
}

/// Computes per-generator mixed-radix factors within each dimension.
pub(crate) fn generator_scaling(meta: &[GeneratorMeta], dims: &[Dimension]) -> Vec<GenScaling> {
    let mut scaling = vec![GenScaling { repeat: 1, tile: 1 }; meta.len()];
    for dim in dims {
        let mut tile = 1usize;
        let mut repeat: usize = dim.generators.iter().map(|&g| meta[g].num).product();
        for &g in &dim.generators {
            repeat /= meta[g].num;
            scaling[g] = GenScaling { repeat, tile };
            tile *= meta[g].num;
        }
    }
    scaling
}
