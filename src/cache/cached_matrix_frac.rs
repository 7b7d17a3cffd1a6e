use crate::cache::cached_matrix::{inverse_cached, CachedMatrix};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::rings::fraction::Fraction;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

/// Python-facing cell over exact rationals. Entries cross the boundary as
/// strings (`"-7/3"`) so nothing is lost to floats.
#[derive(Debug, Clone)]
#[pyclass]
pub struct CachedMatrixFrac {
    cell: CachedMatrix<Fraction>,
}

fn parse_matrix(lines: Vec<Vec<String>>) -> Result<MatrixGen<Fraction>, String> {
    let lines = lines
        .iter()
        .map(|l| l.iter().map(|x| Fraction::from_str(x)).collect())
        .collect::<Result<Vec<Vec<Fraction>>, String>>()?;
    Ok(Matrix::from_list(lines))
}

fn format_matrix(m: &MatrixGen<Fraction>) -> Vec<Vec<String>> {
    m.to_list()
        .iter()
        .map(|l| l.iter().map(|x| x.to_string()).collect())
        .collect()
}

#[pymethods]
impl CachedMatrixFrac {
    #[new]
    pub fn new() -> Self {
        CachedMatrixFrac {
            cell: CachedMatrix::default(),
        }
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<String>>) -> PyResult<Self> {
        match parse_matrix(lines) {
            Ok(value) => Ok(CachedMatrixFrac {
                cell: CachedMatrix::new(value),
            }),
            Err(error) => Err(PyValueError::new_err(error)),
        }
    }

    pub fn set_value(&mut self, lines: Vec<Vec<String>>) -> PyResult<()> {
        match parse_matrix(lines) {
            Ok(value) => {
                self.cell.set_value(value);
                Ok(())
            }
            Err(error) => Err(PyValueError::new_err(error)),
        }
    }

    pub fn get_value(&self) -> Vec<Vec<String>> {
        format_matrix(self.cell.value())
    }

    /// Memoized inverse of the current value.
    pub fn inverse(&mut self) -> PyResult<Vec<Vec<String>>> {
        match inverse_cached(&mut self.cell) {
            Ok(inverse) => Ok(format_matrix(&inverse)),
            Err(error) => Err(PyValueError::new_err(error)),
        }
    }

    #[getter]
    pub fn cached(&self) -> Option<Vec<Vec<String>>> {
        self.cell.cached_inverse().map(format_matrix)
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.cell.value().rows
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.cell.value().cols
    }
}

impl Default for CachedMatrixFrac {
    fn default() -> Self {
        CachedMatrixFrac::new()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
