#![deny(missing_docs)]
//! Concrete leaf generators producing ordered per-axis point arrays.
//!
//! Every generator here implements the [`scan_core::AxisGenerator`] contract:
//! an immutable description realizing, on demand, position and bound arrays
//! of a fixed length for each of its axes.

mod array;
mod lissajous;
mod line;
mod spiral;

pub use array::{ArrayConfig, ArrayGenerator};
pub use line::{LineConfig, LineGenerator};
pub use lissajous::{LissajousConfig, LissajousGenerator};
pub use spiral::{SpiralConfig, SpiralGenerator};
