//! Point containers, selector configuration and errors.
//!
//! - `PointSet`: validated, ordered candidate points (element 0 is the anchor).
//! - `CornerQuad`: exactly four selected points `[anchor, far1, far2, far3]`.
//! - `SelectCfg`: number of points to select; the cardinality guard is `k + 1`.

use super::cfg::{DEFAULT_K, MIN_K};
use nalgebra::Vector2;
use std::fmt;

/// Error type shared by the selector and candidate extraction.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectError {
    /// Fewer candidates than the guard `k + 1` requires.
    InsufficientPoints { got: usize, need: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
    /// Selector or sampler parameters out of range.
    InvalidConfig { reason: String },
    /// Response buffer length does not match `w * h`.
    ShapeMismatch { expected: usize, got: usize },
}

impl SelectError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints { got, need } => {
                write!(f, "insufficient candidate points: got {got}, need at least {need}")
            }
            Self::NonFinite { index } => write!(f, "non-finite coordinate at index {index}"),
            Self::InvalidConfig { reason } => write!(f, "invalid selector config: {reason}"),
            Self::ShapeMismatch { expected, got } => {
                write!(f, "response buffer has {got} values, expected {expected}")
            }
        }
    }
}

impl std::error::Error for SelectError {}

/// Selector configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectCfg {
    /// Number of points to return, anchor included.
    pub k: usize,
}

impl Default for SelectCfg {
    fn default() -> Self {
        Self { k: DEFAULT_K }
    }
}

impl SelectCfg {
    /// Minimum candidate count accepted by the guard.
    #[inline]
    pub fn min_points(&self) -> usize {
        self.k + 1
    }

    pub(crate) fn validate(&self) -> Result<(), SelectError> {
        if self.k < MIN_K {
            return Err(SelectError::invalid(format!(
                "k must be >= {MIN_K}, got {}",
                self.k
            )));
        }
        Ok(())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Integer pixel coordinate accepted by `PointSet::from_pixels`.
pub trait PixelCoord: Copy + sealed::Sealed {
    fn to_f64(self) -> f64;
}

macro_rules! pixel_coord {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl PixelCoord for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

pixel_coord!(u8, u16, u32, usize, i16, i32, i64);

/// Ordered candidate points in detector scan order.
///
/// Duplicates are allowed. Construction through `new` guarantees every
/// coordinate is finite, so the selector never sees NaN mid-run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    pts: Vec<Vector2<f64>>,
}

impl PointSet {
    /// Validate and wrap real-valued points. Fails on the first non-finite coordinate.
    pub fn new(points: impl IntoIterator<Item = Vector2<f64>>) -> Result<Self, SelectError> {
        let pts: Vec<Vector2<f64>> = points.into_iter().collect();
        if let Some(index) = pts.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(SelectError::NonFinite { index });
        }
        Ok(Self { pts })
    }

    /// Integer pixel coordinates `(x, y)`, promoted to `f64`.
    ///
    /// Only integer types are accepted, so no coordinate can be NaN; real-valued
    /// points go through `new`.
    ///
    /// ```compile_fail
    /// use cornerquad::PointSet;
    /// let _ = PointSet::from_pixels([(f64::NAN, 0.0), (1.0, 1.0)]);
    /// ```
    pub fn from_pixels<T: PixelCoord>(pixels: impl IntoIterator<Item = (T, T)>) -> Self {
        Self {
            pts: pixels
                .into_iter()
                .map(|(x, y)| Vector2::new(x.to_f64(), y.to_f64()))
                .collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// First point in scan order, if any.
    #[inline]
    pub fn anchor(&self) -> Option<Vector2<f64>> {
        self.pts.first().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vector2<f64>] {
        &self.pts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector2<f64>> {
        self.pts.iter()
    }

    pub fn into_vec(self) -> Vec<Vector2<f64>> {
        self.pts
    }
}

impl TryFrom<Vec<(f64, f64)>> for PointSet {
    type Error = SelectError;

    fn try_from(value: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        PointSet::new(value.into_iter().map(|(x, y)| Vector2::new(x, y)))
    }
}

/// Four selected corners: `[anchor, far1, far2, far3]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerQuad {
    pub(crate) pts: [Vector2<f64>; 4],
}

impl CornerQuad {
    #[inline]
    pub fn new(pts: [Vector2<f64>; 4]) -> Self {
        Self { pts }
    }
    #[inline]
    pub fn anchor(&self) -> Vector2<f64> {
        self.pts[0]
    }
    /// The three extremal points in selection order.
    #[inline]
    pub fn extremals(&self) -> [Vector2<f64>; 3] {
        [self.pts[1], self.pts[2], self.pts[3]]
    }
    #[inline]
    pub fn points(&self) -> &[Vector2<f64>; 4] {
        &self.pts
    }
    #[inline]
    pub fn into_array(self) -> [Vector2<f64>; 4] {
        self.pts
    }
}
