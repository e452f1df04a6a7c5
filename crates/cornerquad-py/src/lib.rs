//! PyO3 bindings for selected `cornerquad` functions.
//!
//! Notes
//! - Keep bindings thin and predictable; points cross the boundary as
//!   `(x, y)` tuples in scan order.

use pyo3::prelude::*;

mod common;
mod select;

#[pymodule]
fn cornerquad_native(_py: Python, m: &PyModule) -> PyResult<()> {
    select::register(m)?;
    Ok(())
}
