//! Post-selection helpers on `CornerQuad` (ordering, degeneracy check).
//!
//! The selector itself never rejects degenerate geometry; callers that need a
//! proper quadrilateral use these before placing anything.

use super::types::CornerQuad;
use super::util::distance;
use nalgebra::Vector2;

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

impl CornerQuad {
    /// Centroid of the four corners.
    pub fn centroid(&self) -> Vector2<f64> {
        self.pts.iter().fold(Vector2::zeros(), |acc, p| acc + p) / 4.0
    }

    /// Largest pairwise corner distance.
    pub fn diameter(&self) -> f64 {
        let mut d: f64 = 0.0;
        for i in 0..4 {
            for j in (i + 1)..4 {
                d = d.max(distance(self.pts[i], self.pts[j]));
            }
        }
        d
    }

    /// Corners sorted by angle around the centroid, starting at the anchor.
    ///
    /// Angles increase counterclockwise in a y-up frame; in image coordinates
    /// (y down) the same order runs clockwise on screen.
    pub fn convex_order(&self) -> [Vector2<f64>; 4] {
        let c = self.centroid();
        let angle = |p: Vector2<f64>| (p.y - c.y).atan2(p.x - c.x);
        let mut idx = [0usize, 1, 2, 3];
        idx.sort_by(|&a, &b| {
            angle(self.pts[a])
                .partial_cmp(&angle(self.pts[b]))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let start = idx.iter().position(|&i| i == 0).unwrap_or(0);
        idx.rotate_left(start);
        idx.map(|i| self.pts[i])
    }

    /// True if two corners coincide or three are collinear.
    ///
    /// `eps` is relative to the diameter: pairs closer than `eps * diameter`
    /// and triples with `|cross| <= eps * diameter²` count as degenerate.
    pub fn is_degenerate(&self, eps: f64) -> bool {
        let scale = self.diameter();
        if scale <= 0.0 {
            return true;
        }
        let p = &self.pts;
        for i in 0..4 {
            for j in (i + 1)..4 {
                if distance(p[i], p[j]) <= eps * scale {
                    return true;
                }
            }
        }
        let area_eps = eps * scale * scale;
        for (a, b, c) in [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)] {
            if cross(p[a], p[b], p[c]).abs() <= area_eps {
                return true;
            }
        }
        false
    }
}
