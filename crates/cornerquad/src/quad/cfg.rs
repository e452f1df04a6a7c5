//! Fixed constants for corner selection.
//!
//! Policy
//! - Only `k` is exposed through `SelectCfg`; the exclusion divisor stays a
//!   constant so results are comparable across runs.

/// Number of corners selected by default (anchor plus three extremals).
pub const DEFAULT_K: usize = 4;
/// `T = dist(anchor, first extremal) / EXCLUSION_DIVISOR`.
pub const EXCLUSION_DIVISOR: f64 = 4.0;
/// Smallest `k` accepted by the generalized selector.
pub(crate) const MIN_K: usize = 2;
