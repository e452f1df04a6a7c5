//! Synthetic corner-candidate clouds (four noisy clusters + interior noise).
//!
//! Purpose
//! - Reproducible detector-like inputs for tests, benches and the CLI.
//!
//! Model
//! - Four clusters of `per_cluster` points jittered uniformly around the
//!   corners of an axis-aligned square, plus `noise_points` uniform points in
//!   the middle of the square (`[0.35, 0.65]` of the side on both axes).
//! - Coordinates are rounded to whole pixels, sorted row-major and
//!   deduplicated, like a thresholded detector scan.

use crate::quad::{PointSet, SelectError};
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cluster sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ClusterCfg {
    /// Top-left corner of the square (image coordinates, y down).
    pub origin: Vector2<f64>,
    pub side: f64,
    /// Per-axis jitter amplitude around each corner. Must be below `side / 20`.
    pub jitter: f64,
    pub per_cluster: usize,
    pub noise_points: usize,
}

impl Default for ClusterCfg {
    fn default() -> Self {
        Self {
            origin: Vector2::new(40.0, 30.0),
            side: 200.0,
            jitter: 2.0,
            per_cluster: 3,
            noise_points: 0,
        }
    }
}

impl ClusterCfg {
    fn validate(&self) -> Result<(), SelectError> {
        if !(self.side.is_finite() && self.side > 0.0) {
            return Err(SelectError::invalid("side must be finite and positive"));
        }
        if !(self.origin.x.is_finite() && self.origin.y.is_finite()) {
            return Err(SelectError::invalid("origin must be finite"));
        }
        if !(self.jitter >= 0.0 && self.jitter < self.side / 20.0) {
            return Err(SelectError::invalid("jitter must be in [0, side/20)"));
        }
        if self.per_cluster == 0 {
            return Err(SelectError::invalid("per_cluster must be > 0"));
        }
        Ok(())
    }

    /// Corner centres in row-major order: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        let o = self.origin;
        let s = self.side;
        [
            o,
            o + Vector2::new(s, 0.0),
            o + Vector2::new(0.0, s),
            o + Vector2::new(s, s),
        ]
    }
}

/// Draw a synthetic candidate cloud. Deterministic in `seed`.
pub fn draw_clusters(cfg: ClusterCfg, seed: u64) -> Result<PointSet, SelectError> {
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pts: Vec<Vector2<f64>> =
        Vec::with_capacity(4 * cfg.per_cluster + cfg.noise_points);
    for c in cfg.corners() {
        for _ in 0..cfg.per_cluster {
            let dx = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.jitter;
            let dy = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.jitter;
            pts.push(Vector2::new((c.x + dx).round(), (c.y + dy).round()));
        }
    }
    for _ in 0..cfg.noise_points {
        let u = rng.gen_range(0.35..0.65);
        let v = rng.gen_range(0.35..0.65);
        let p = cfg.origin + Vector2::new(u, v) * cfg.side;
        pts.push(Vector2::new(p.x.round(), p.y.round()));
    }
    pts.sort_by(|a, b| match a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal) {
        std::cmp::Ordering::Equal => a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal),
        o => o,
    });
    pts.dedup();
    PointSet::new(pts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quad::{distance, select_corners};
    use proptest::prelude::*;

    #[test]
    fn same_seed_same_cloud() {
        let cfg = ClusterCfg {
            noise_points: 7,
            ..ClusterCfg::default()
        };
        let a = draw_clusters(cfg, 42).unwrap();
        let b = draw_clusters(cfg, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cloud_is_row_major_and_unique() {
        let cfg = ClusterCfg {
            per_cluster: 12,
            noise_points: 20,
            ..ClusterCfg::default()
        };
        let pts = draw_clusters(cfg, 7).unwrap();
        for w in pts.as_slice().windows(2) {
            assert!((w[0].y, w[0].x) < (w[1].y, w[1].x));
        }
    }

    #[test]
    fn invalid_cfg_rejected() {
        let bad_jitter = ClusterCfg {
            jitter: 50.0,
            ..ClusterCfg::default()
        };
        assert!(matches!(
            draw_clusters(bad_jitter, 0),
            Err(SelectError::InvalidConfig { .. })
        ));
        let no_points = ClusterCfg {
            per_cluster: 0,
            ..ClusterCfg::default()
        };
        assert!(draw_clusters(no_points, 0).is_err());
    }

    proptest! {
        #[test]
        fn prop_each_corner_lands_in_its_own_cluster(
            seed in any::<u64>(),
            per_cluster in 2usize..8,
            noise in 0usize..30,
        ) {
            let cfg = ClusterCfg { per_cluster, noise_points: noise, ..ClusterCfg::default() };
            let pts = draw_clusters(cfg, seed).unwrap();
            prop_assume!(pts.len() >= 5);
            let quad = select_corners(&pts).unwrap();
            // Rounding adds at most half a pixel per axis.
            let reach = (cfg.jitter + 0.5) * 2f64.sqrt() + 1e-9;
            let mut hit = [false; 4];
            for p in quad.points() {
                let owner = cfg.corners().iter().position(|c| distance(*p, *c) <= reach);
                prop_assert!(owner.is_some(), "corner {:?} is not near any cluster", p);
                hit[owner.unwrap()] = true;
            }
            prop_assert!(hit.iter().all(|h| *h));
            prop_assert!(!quad.is_degenerate(1e-3));
        }
    }
}
