use nalgebra::Vector2;

/// Euclidean distance in `f64`.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Index (into `pts`) of the pool entry farthest from `from`.
///
/// Ties keep the first entry in pool order. `None` only for an empty pool.
pub(crate) fn farthest_from(from: Vector2<f64>, pts: &[Vector2<f64>], pool: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &i in pool {
        let d = distance(from, pts[i]);
        match best {
            Some((_, bd)) if d <= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Fresh pool without the entries strictly closer than `radius` to `center`.
///
/// With `radius == 0` nothing is removed.
pub(crate) fn exclude_within(
    center: Vector2<f64>,
    radius: f64,
    pts: &[Vector2<f64>],
    pool: &[usize],
) -> Vec<usize> {
    pool.iter()
        .copied()
        .filter(|&i| distance(pts[i], center) >= radius)
        .collect()
}
