//! Candidate extraction from a thresholded corner-response map.
//!
//! Purpose
//! - Turn an already computed response grid (e.g. Harris) into the ordered
//!   `PointSet` the selector consumes. Computing the response is out of scope.
//!
//! Order
//! - Row-major scan: `y` outer, `x` inner. Points are `(x, y) = (col, row)`.
//!   The first flagged pixel becomes the selector's anchor.

use crate::quad::{select_corners, CornerQuad, PointSet, SelectError};

/// Response threshold used for Harris maps in the capture pipeline.
pub const HARRIS_THRESHOLD: f32 = 1e-5;

/// Row-major grid of corner-response values.
///
/// Built only through `new`, so `data.len() == w * h` always holds.
#[derive(Clone, Debug)]
pub struct ResponseMap {
    w: usize,
    h: usize,
    data: Vec<f32>,
}

impl ResponseMap {
    pub fn new(w: usize, h: usize, data: Vec<f32>) -> Result<Self, SelectError> {
        check_shape(w, h, data.len())?;
        Ok(Self { w, h, data })
    }

    #[inline]
    pub fn w(&self) -> usize {
        self.w
    }
    #[inline]
    pub fn h(&self) -> usize {
        self.h
    }
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.w + x]
    }
}

fn check_shape(w: usize, h: usize, got: usize) -> Result<(), SelectError> {
    let expected = w
        .checked_mul(h)
        .ok_or_else(|| SelectError::invalid(format!("grid {w}x{h} overflows usize")))?;
    if got != expected {
        return Err(SelectError::ShapeMismatch { expected, got });
    }
    Ok(())
}

/// Every cell with `value > threshold`, in row-major order.
///
/// Non-finite responses are skipped.
pub fn candidates_from_response(resp: &ResponseMap, threshold: f32) -> PointSet {
    let w = resp.w.max(1);
    PointSet::from_pixels(
        resp.data
            .iter()
            .enumerate()
            .filter(|(_, &v)| v.is_finite() && v > threshold)
            .map(|(i, _)| (i % w, i / w)),
    )
}

/// Every `true` cell of a binary mask, in row-major order.
pub fn candidates_from_mask(w: usize, h: usize, mask: &[bool]) -> Result<PointSet, SelectError> {
    check_shape(w, h, mask.len())?;
    let w = w.max(1);
    Ok(PointSet::from_pixels(
        mask.iter()
            .enumerate()
            .filter(|(_, &on)| on)
            .map(|(i, _)| (i % w, i / w)),
    ))
}

/// Threshold a response map and select four corners from the candidates.
pub fn detect_quad(resp: &ResponseMap, threshold: f32) -> Result<CornerQuad, SelectError> {
    let pts = candidates_from_response(resp, threshold);
    select_corners(&pts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn map_with(w: usize, h: usize, hits: &[(usize, usize, f32)]) -> ResponseMap {
        let mut data = vec![0.0f32; w * h];
        for &(x, y, v) in hits {
            data[y * w + x] = v;
        }
        ResponseMap::new(w, h, data).unwrap()
    }

    #[test]
    fn scan_is_row_major_col_row() {
        let resp = map_with(4, 3, &[(3, 0, 1.0), (0, 2, 1.0), (1, 0, 1.0), (2, 1, 1.0)]);
        let pts = candidates_from_response(&resp, HARRIS_THRESHOLD);
        assert_eq!(
            pts.as_slice(),
            &[
                vector![1.0, 0.0],
                vector![3.0, 0.0],
                vector![2.0, 1.0],
                vector![0.0, 2.0]
            ]
        );
        assert_eq!(pts.anchor(), Some(vector![1.0, 0.0]));
    }

    #[test]
    fn threshold_is_strict_and_skips_nan() {
        let resp = map_with(
            3,
            1,
            &[(0, 0, HARRIS_THRESHOLD), (1, 0, f32::NAN), (2, 0, 2e-5)],
        );
        let pts = candidates_from_response(&resp, HARRIS_THRESHOLD);
        assert_eq!(pts.as_slice(), &[vector![2.0, 0.0]]);
    }

    #[test]
    fn shape_mismatch_is_reported() {
        assert_eq!(
            ResponseMap::new(3, 3, vec![0.0; 8]).unwrap_err(),
            SelectError::ShapeMismatch {
                expected: 9,
                got: 8
            }
        );
        assert!(candidates_from_mask(2, 2, &[true; 3]).is_err());
    }

    #[test]
    fn oversized_grid_is_rejected_not_overflowed() {
        assert!(matches!(
            ResponseMap::new(usize::MAX, 2, Vec::new()),
            Err(SelectError::InvalidConfig { .. })
        ));
        assert!(matches!(
            candidates_from_mask(2, usize::MAX, &[]),
            Err(SelectError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn short_buffer_never_becomes_a_map() {
        let err = ResponseMap::new(4, 4, vec![1.0; 3]).unwrap_err();
        assert_eq!(
            err,
            SelectError::ShapeMismatch {
                expected: 16,
                got: 3
            }
        );
        let resp = ResponseMap::new(4, 4, vec![1.0; 16]).unwrap();
        assert_eq!((resp.w(), resp.h(), resp.data().len()), (4, 4, 16));
        assert_eq!(candidates_from_response(&resp, HARRIS_THRESHOLD).len(), 16);
    }

    #[test]
    fn mask_matches_response_scan() {
        let mask = [false, true, false, true, true, false];
        let pts = candidates_from_mask(3, 2, &mask).unwrap();
        assert_eq!(
            pts.as_slice(),
            &[vector![1.0, 0.0], vector![0.0, 1.0], vector![1.0, 1.0]]
        );
    }

    #[test]
    fn detect_quad_on_square_response() {
        let mut hits = Vec::new();
        for &(cx, cy) in &[(2usize, 2usize), (40, 2), (2, 30), (40, 30)] {
            hits.push((cx, cy, 1.0));
            hits.push((cx + 1, cy, 0.5));
            hits.push((cx, cy + 1, 0.5));
        }
        let resp = map_with(48, 36, &hits);
        let quad = detect_quad(&resp, HARRIS_THRESHOLD).unwrap();
        assert_eq!(quad.anchor(), vector![2.0, 2.0]);
        assert_eq!(
            quad.extremals(),
            [vector![41.0, 30.0], vector![41.0, 2.0], vector![2.0, 31.0]]
        );
    }

    #[test]
    fn sparse_response_is_insufficient() {
        let resp = map_with(8, 8, &[(1, 1, 1.0), (6, 6, 1.0)]);
        assert!(matches!(
            detect_quad(&resp, HARRIS_THRESHOLD),
            Err(SelectError::InsufficientPoints { got: 2, need: 5 })
        ));
    }
}
