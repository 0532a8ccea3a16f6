//! Linear-index decoding into concrete scan points.

use scan_core::Point;

use crate::dimension::{Dimension, GenScaling, GeneratorMeta};

/// Realized position and bound arrays for one axis of one generator.
#[derive(Debug, Clone)]
pub(crate) struct AxisColumns {
    pub axis: String,
    pub positions: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

/// Maps a linear scan index to a concrete point.
///
/// Walks the dimensions in nesting order, selecting one valid index per
/// dimension. A cumulative counter over the chosen raw indices drives the
/// zig-zag reversals: when a dimension alternates and the counter is odd its
/// selector runs backwards, and inside an alternating dimension every
/// non-leading generator reverses whenever its supercycle count is odd, so
/// inner axes snake in lockstep with the outer sweep.
///
/// Pure given prepared state; `n` must already be range-checked.
pub(crate) fn decode_point(
    n: usize,
    dims: &[Dimension],
    meta: &[GeneratorMeta],
    scaling: &[GenScaling],
    columns: &[Vec<AxisColumns>],
) -> Point {
    let mut point = Point::new();
    let mut cumulative = 0usize;
    for dim in dims {
        let count = dim.indices.len();
        let mut i = (n / dim.repeat) % count;
        // The counter folds the raw index of the unreversed selector; the
        // reversed selector then picks the actual pre-mask position.
        let raw = dim.indices[i];
        if dim.alternate && cumulative % 2 == 1 {
            i = count - 1 - i;
        }
        cumulative = cumulative * count + raw;
        let k = dim.indices[i];
        point.indexes.push(i);

        let first = dim.generators[0];
        for &g in &dim.generators {
            let gen_num = meta[g].num;
            let mut j = k / scaling[g].repeat;
            let supercycle = j / gen_num;
            j %= gen_num;
            if dim.alternate && g != first && supercycle % 2 == 1 {
                j = gen_num - 1 - j;
            }
            for column in &columns[g] {
                point
                    .positions
                    .insert(column.axis.clone(), column.positions[j]);
                point.lower.insert(column.axis.clone(), column.lower[j]);
                point.upper.insert(column.axis.clone(), column.upper[j]);
            }
        }
    }
    point
}
