//! Extremal quadrilateral selection from noisy corner candidates.
//!
//! Purpose
//! - Pick `k` (default 4) points from a detector's candidate set that
//!   approximate the corners of a convex quadrilateral.
//! - Greedy farthest-from-anchor search with a fixed exclusion radius that
//!   discards near-duplicate detections of an already selected corner.
//!
//! Model
//! - The anchor is the first candidate in scan order; it is not verified to be
//!   a corner itself. Every farthest-point search is measured from the anchor.
//! - Exclusion radius `T = dist(anchor, first extremal) / 4`, fixed for the run.
//! - Pure functions over owned inputs: no logging, no shared state.
//!
//! Code cross-refs: `PointSet`, `CornerQuad`, `SelectCfg`, `select_corners`

pub(crate) mod cfg;
mod order;
mod select;
mod types;
mod util;

pub use cfg::{DEFAULT_K, EXCLUSION_DIVISOR};
pub use select::{select_corners, select_extremal, Selection};
pub use types::{CornerQuad, PixelCoord, PointSet, SelectCfg, SelectError};
pub use util::distance;
