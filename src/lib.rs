use pyo3::prelude::*;

pub mod cache {
    pub mod cached_matrix;
    pub mod cached_matrix_frac;
}
pub mod matrix {
    pub mod matrix;
    pub mod matrix_gen;
}
pub mod rings {
    pub mod fraction;
}

/// A Python module implemented in Rust.
#[pymodule]
fn matrix_cache(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<cache::cached_matrix_frac::CachedMatrixFrac>()?;
    Ok(())
}
