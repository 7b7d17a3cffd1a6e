use num_traits::{One, Zero};
use rayon::prelude::*;

use crate::matrix::matrix::Matrix;
use std::ops;
use std::ops::{Add, Div, Mul, Sub};

pub trait GenElement:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::cmp::Ord
    + std::fmt::Debug
    + Send
    + Sync
{
}

impl<T> GenElement for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::cmp::Ord
        + std::fmt::Debug
        + Send
        + Sync
{
}

#[derive(Debug, Clone)]
pub struct MatrixGen<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: GenElement> Matrix<T> for MatrixGen<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Self {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        MatrixGen {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let pad = cols - l.len();
                    l.into_iter().chain(std::iter::repeat_n(T::zero(), pad))
                })
                .collect(),
        }
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn identity(n: usize) -> MatrixGen<T> {
        MatrixGen {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    /// Gauss-Jordan elimination on the matrix augmented with the identity.
    /// The element type must form a field for the pivot division to be exact
    /// (e.g. `Fraction`); integer types truncate and give wrong results.
    fn inverse(&self) -> Result<MatrixGen<T>, String> {
        if self.rows != self.cols {
            return Err("Matrix is not square".into());
        }

        let n = self.rows;
        let mut aug = self.clone();
        let mut inv = MatrixGen::identity(n);

        for col in 0..n {
            let mut pivot_row = None;
            for row in col..n {
                if aug.at(row, col) != T::zero() {
                    pivot_row = Some(row);
                    break;
                }
            }

            let pivot = pivot_row.ok_or("Matrix is singular")?;
            if pivot != col {
                for k in 0..n {
                    aug.cells.swap(col * n + k, pivot * n + k);
                    inv.cells.swap(col * n + k, pivot * n + k);
                }
            }

            let pivot_val = aug.at(col, col);
            for k in 0..n {
                aug.cells[col * n + k] = aug.at(col, k) / pivot_val.clone();
                inv.cells[col * n + k] = inv.at(col, k) / pivot_val.clone();
            }

            for row in 0..n {
                if row == col {
                    continue;
                }

                let factor = aug.at(row, col);
                if factor == T::zero() {
                    continue;
                }

                for k in 0..n {
                    let a = aug.at(row, k) - factor.clone() * aug.at(col, k);
                    aug.cells[row * n + k] = a;
                    let b = inv.at(row, k) - factor.clone() * inv.at(col, k);
                    inv.cells[row * n + k] = b;
                }
            }
        }

        Ok(inv)
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }
}

impl<T: GenElement> MatrixGen<T> {
    pub fn new(rows: usize, cols: usize) -> MatrixGen<T> {
        MatrixGen {
            rows,
            cols,
            cells: (0..(rows * cols)).map(|_| T::zero()).collect(),
        }
    }
}

impl<T: GenElement> ops::Mul<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>, String>;

    fn mul(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>, String> {
        if self.cols != rhs.rows {
            return Err("Dimensions not compatible".into());
        }

        let mut result = MatrixGen::new(self.rows, rhs.cols);

        result
            .cells
            .par_chunks_mut(rhs.cols.max(1))
            .enumerate()
            .for_each(|(r, row)| {
                for (c, slot) in row.iter_mut().enumerate() {
                    *slot = (0..self.cols).map(|k| self.at(r, k) * rhs.at(k, c)).sum();
                }
            });

        Ok(result)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
