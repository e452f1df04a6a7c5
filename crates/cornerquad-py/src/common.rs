use cornerquad::{PointSet, SelectError, Vec2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn point_set_from_py(points: Vec<(f64, f64)>) -> PyResult<PointSet> {
    PointSet::try_from(points).map_err(map_select_err)
}

pub fn to_py_points<'a>(points: impl IntoIterator<Item = &'a Vec2<f64>>) -> Vec<(f64, f64)> {
    points.into_iter().map(|p| (p.x, p.y)).collect()
}

pub fn map_select_err(err: SelectError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
