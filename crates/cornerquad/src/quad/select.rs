//! Greedy farthest-point selection with a fixed exclusion radius.

use super::cfg::EXCLUSION_DIVISOR;
use super::types::{CornerQuad, PointSet, SelectCfg, SelectError};
use super::util::{distance, exclude_within, farthest_from};
use nalgebra::Vector2;

/// Detailed outcome of one selection run.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Selected points, anchor first, in selection order.
    pub points: Vec<Vector2<f64>>,
    /// Index of each selected point in the input `PointSet`.
    pub indices: Vec<usize>,
    /// Exclusion radius `T`, fixed after the first extremal.
    pub exclusion_radius: f64,
}

/// Select `cfg.k` points: the anchor followed by `k - 1` extremals.
///
/// Pre: `points.len() >= cfg.k + 1`, otherwise `InsufficientPoints`.
/// Post: exactly `k` points, each drawn from `points`; `indices[0] == 0`.
///
/// Notes
/// - The first extremal is searched among every point except index 0; later
///   searches run over the filtered pool, which still holds the anchor unless
///   an exclusion disc covered it.
/// - If the pool runs dry the search falls back to the anchor, so the result
///   length never shrinks.
pub fn select_extremal(points: &PointSet, cfg: SelectCfg) -> Result<Selection, SelectError> {
    cfg.validate()?;
    let need = cfg.min_points();
    if points.len() < need {
        return Err(SelectError::InsufficientPoints {
            got: points.len(),
            need,
        });
    }
    let pts = points.as_slice();
    let z0 = pts[0];

    let mut indices = Vec::with_capacity(cfg.k);
    indices.push(0);

    let rest: Vec<usize> = (1..pts.len()).collect();
    let first = farthest_from(z0, pts, &rest).unwrap_or(0);
    indices.push(first);
    let t = distance(z0, pts[first]) / EXCLUSION_DIVISOR;

    let mut pool: Vec<usize> = (0..pts.len()).collect();
    let mut last = first;
    while indices.len() < cfg.k {
        pool = exclude_within(pts[last], t, pts, &pool);
        last = farthest_from(z0, pts, &pool).unwrap_or(0);
        indices.push(last);
    }

    Ok(Selection {
        points: indices.iter().map(|&i| pts[i]).collect(),
        indices,
        exclusion_radius: t,
    })
}

/// Select four corners `[anchor, far1, far2, far3]` from detector candidates.
///
/// Fails with `InsufficientPoints` for fewer than 5 candidates. Degenerate
/// inputs (collinear, coincident) still yield four points; see
/// `CornerQuad::is_degenerate` for a post-check.
pub fn select_corners(points: &PointSet) -> Result<CornerQuad, SelectError> {
    let sel = select_extremal(points, SelectCfg::default())?;
    match sel.points.as_slice() {
        &[a, b, c, d] => Ok(CornerQuad::new([a, b, c, d])),
        other => Err(SelectError::invalid(format!(
            "default config produced {} points",
            other.len()
        ))),
    }
}
