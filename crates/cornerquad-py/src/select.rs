//! Corner selection bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_select_err, point_set_from_py, to_py_points};
use cornerquad::{select_corners as select_corners_rs, select_extremal as select_extremal_rs, SelectCfg};
use pyo3::prelude::*;

/// Select four corners `[anchor, far1, far2, far3]`; raises `ValueError` below 5 points.
#[pyfunction]
pub fn select_corners(points: Vec<(f64, f64)>) -> PyResult<Vec<(f64, f64)>> {
    let pts = point_set_from_py(points)?;
    let quad = select_corners_rs(&pts).map_err(map_select_err)?;
    Ok(to_py_points(quad.points()))
}

/// Select `k` points; returns `(points, indices, exclusion_radius)`.
#[pyfunction]
#[pyo3(signature = (points, k = 4))]
pub fn select_extremal(
    points: Vec<(f64, f64)>,
    k: usize,
) -> PyResult<(Vec<(f64, f64)>, Vec<usize>, f64)> {
    let pts = point_set_from_py(points)?;
    let sel = select_extremal_rs(&pts, SelectCfg { k }).map_err(map_select_err)?;
    Ok((to_py_points(&sel.points), sel.indices, sel.exclusion_radius))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(select_corners, m)?)?;
    m.add_function(wrap_pyfunction!(select_extremal, m)?)?;
    Ok(())
}
