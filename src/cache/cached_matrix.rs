use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};
use num_traits::Zero;

/// A matrix value together with a memoized inverse.
///
/// The cached inverse is cleared every time the value is replaced, so it is
/// either absent or belongs to the current value. Nothing here verifies that
/// a stored inverse is correct: `set_cached_inverse` trusts its caller and is
/// meant to be reached only through [`inverse_cached_with`].
#[derive(Debug, Clone)]
pub struct CachedMatrix<T> {
    value: MatrixGen<T>,
    inverse: Option<MatrixGen<T>>,
}

impl<T: GenElement> CachedMatrix<T> {
    pub fn new(initial: MatrixGen<T>) -> Self {
        CachedMatrix {
            value: initial,
            inverse: None,
        }
    }

    /// Replaces the value and drops any cached inverse. This is the only
    /// invalidation rule; the new matrix is not inspected in any way.
    pub fn set_value(&mut self, value: MatrixGen<T>) {
        self.value = value;
        self.inverse = None;
    }

    pub fn value(&self) -> &MatrixGen<T> {
        &self.value
    }

    /// Unconditional overwrite, no verification against the current value.
    pub fn set_cached_inverse(&mut self, inverse: MatrixGen<T>) {
        self.inverse = Some(inverse);
    }

    pub fn cached_inverse(&self) -> Option<&MatrixGen<T>> {
        self.inverse.as_ref()
    }
}

impl<T: GenElement> Default for CachedMatrix<T> {
    /// A 1x1 matrix holding a single zero, the closest total stand-in for
    /// "no value yet". Inverting it fails until a real value is set.
    fn default() -> Self {
        CachedMatrix::new(MatrixGen::from_list(vec![vec![T::zero()]]))
    }
}

/// Returns the inverse of the cell's current value, memoized.
///
/// On a hit the cached matrix is returned untouched. On a miss `invert` runs
/// on the current value and its result is stored before being returned; when
/// it fails the error propagates unchanged and the cache stays empty, so the
/// next call retries. The matrix is assumed to be invertible: there is no
/// recovery, the `invert` failure is the caller's to handle.
///
/// Not atomic. A cell shared across threads needs external mutual exclusion
/// around this whole call.
pub fn inverse_cached_with<T, F>(
    cell: &mut CachedMatrix<T>,
    invert: F,
) -> Result<MatrixGen<T>, String>
where
    T: GenElement,
    F: FnOnce(&MatrixGen<T>) -> Result<MatrixGen<T>, String>,
{
    if let Some(inverse) = cell.cached_inverse() {
        return Ok(inverse.clone());
    }

    let inverse = invert(cell.value())?;
    cell.set_cached_inverse(inverse.clone());
    Ok(inverse)
}

/// [`inverse_cached_with`] using the matrix's own Gauss-Jordan inversion.
pub fn inverse_cached<T: GenElement>(cell: &mut CachedMatrix<T>) -> Result<MatrixGen<T>, String> {
    inverse_cached_with(cell, |m| m.inverse())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::fraction::Fraction;

    fn frac_matrix(lines: Vec<Vec<i64>>) -> MatrixGen<Fraction> {
        MatrixGen::from_list(
            lines
                .into_iter()
                .map(|l| l.into_iter().map(Fraction::from).collect())
                .collect(),
        )
    }

    fn example_cell() -> CachedMatrix<Fraction> {
        CachedMatrix::new(frac_matrix(vec![
            vec![0, 0, 1],
            vec![2, -1, 3],
            vec![1, 1, 4],
        ]))
    }

    #[test]
    fn test_round_trip() {
        let f = |s: &str| Fraction::from_str(s).unwrap();

        let mut cell = example_cell();
        let inv = inverse_cached(&mut cell).unwrap();
        assert_eq!(
            inv.to_list(),
            vec![
                vec![f("-7/3"), f("1/3"), f("1/3")],
                vec![f("-5/3"), f("-1/3"), f("2/3")],
                vec![f("1"), f("0"), f("0")],
            ]
        );

        let product = (cell.value() * &inv).unwrap();
        assert_eq!(
            product.to_list(),
            MatrixGen::<Fraction>::identity(3).to_list()
        );
    }

    #[test]
    fn test_invert_runs_once() {
        let mut cell = example_cell();
        let mut calls = 0;

        let first = inverse_cached_with(&mut cell, |m| {
            calls += 1;
            m.inverse()
        })
        .unwrap();

        for _ in 0..3 {
            let again = inverse_cached_with(&mut cell, |m| {
                calls += 1;
                m.inverse()
            })
            .unwrap();
            assert_eq!(again.to_list(), first.to_list());
        }

        assert_eq!(calls, 1);
    }

    #[test]
    fn test_set_value_invalidates() {
        let mut cell = example_cell();
        inverse_cached(&mut cell).unwrap();
        assert!(cell.cached_inverse().is_some());

        cell.set_value(frac_matrix(vec![vec![2, 0], vec![0, 2]]));
        assert!(cell.cached_inverse().is_none());

        let mut calls = 0;
        let inv = inverse_cached_with(&mut cell, |m| {
            calls += 1;
            m.inverse()
        })
        .unwrap();
        assert_eq!(calls, 1);

        let f = |s: &str| Fraction::from_str(s).unwrap();
        assert_eq!(
            inv.to_list(),
            vec![vec![f("1/2"), f("0")], vec![f("0"), f("1/2")]]
        );
    }

    #[test]
    fn test_default_cell() {
        let cell = CachedMatrix::<Fraction>::default();
        assert_eq!(cell.value().rows, 1);
        assert_eq!(cell.value().cols, 1);
        assert_eq!(cell.value().to_list(), vec![vec![0]]);
        assert!(cell.cached_inverse().is_none());

        // A 1x1 zero is singular, so the default cell cannot be inverted
        let mut cell = cell;
        assert_eq!(inverse_cached(&mut cell).unwrap_err(), "Matrix is singular");
    }

    #[test]
    fn test_cached_inverse_is_not_verified() {
        let mut cell = example_cell();
        let bogus = frac_matrix(vec![vec![42]]);

        cell.set_cached_inverse(bogus.clone());
        assert_eq!(cell.cached_inverse().unwrap().to_list(), bogus.to_list());

        // The cached computation returns it as-is, trusting the caller
        let inv = inverse_cached(&mut cell).unwrap();
        assert_eq!(inv.to_list(), bogus.to_list());
    }

    #[test]
    fn test_singular_value_fails_and_caches_nothing() {
        let mut cell = example_cell();
        inverse_cached(&mut cell).unwrap();

        cell.set_value(frac_matrix(vec![
            vec![0, 0, 0],
            vec![0, 0, 0],
            vec![0, 0, 0],
        ]));
        assert_eq!(inverse_cached(&mut cell).unwrap_err(), "Matrix is singular");
        assert!(cell.cached_inverse().is_none());

        // Same failure again on retry, nothing was memoized
        assert_eq!(inverse_cached(&mut cell).unwrap_err(), "Matrix is singular");
        assert!(cell.cached_inverse().is_none());
    }

    #[test]
    fn test_not_square_value_fails() {
        let mut cell = CachedMatrix::new(frac_matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]));
        assert_eq!(
            inverse_cached(&mut cell).unwrap_err(),
            "Matrix is not square"
        );
        assert!(cell.cached_inverse().is_none());
    }
}
