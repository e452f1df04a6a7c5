//! Corner selection from noisy feature-detector candidates.
//!
//! A detector (e.g. a thresholded Harris response) yields an unordered cloud
//! of "cornerish" pixels. This crate reduces that cloud to four points that
//! approximate the corners of a convex quadrilateral, or reports that the
//! input is too sparse.
//!
//! Modules
//! - `quad`: point containers and the extremal quadrilateral selector.
//! - `candidates`: threshold + row-major scan of a response map.
//! - `rand`: seeded synthetic candidate clouds for tests and benches.
//!
//! API Policy
//! - Everything here is a pure function over caller-owned data: no I/O, no
//!   logging, no global state. Callers own coordinate transforms to display
//!   or world space.

pub mod candidates;
pub mod quad;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use quad::{select_corners, select_extremal, CornerQuad, PointSet, SelectCfg, SelectError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::candidates::{
        candidates_from_mask, candidates_from_response, detect_quad, ResponseMap, HARRIS_THRESHOLD,
    };
    pub use crate::quad::{
        distance, select_corners, select_extremal, CornerQuad, PointSet, SelectCfg, SelectError,
        Selection,
    };
    pub use crate::rand::{draw_clusters, ClusterCfg};
    pub use nalgebra::Vector2 as Vec2;
}
