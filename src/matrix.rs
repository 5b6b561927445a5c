//! Dense matrices of fractions and exact Gauss-Jordan inversion.

use tracing::{debug, trace};

use crate::error::{FitError, Result};
use crate::fraction::Fraction;
use crate::options::Pivoting;
use crate::parser::parse_decimal;

/// Row-major matrix of [`Fraction`]s.
#[derive(Debug, Clone)]
pub struct FractionMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Fraction>,
}

impl FractionMatrix {
    pub fn from_rows(rows: Vec<Vec<Fraction>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(FitError::RaggedRow {
                    row: idx,
                    len: row.len(),
                    expected: cols,
                });
            }
            data.extend(row);
        }
        Ok(FractionMatrix {
            rows: n_rows,
            cols,
            data,
        })
    }

    pub fn from_decimal_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let parsed = rows
            .iter()
            .map(|row| row.iter().map(|v| parse_decimal(v.as_ref())).collect())
            .collect::<Result<Vec<Vec<Fraction>>>>()?;
        FractionMatrix::from_rows(parsed)
    }

    pub fn identity(n: usize) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for r in 0..n {
            for c in 0..n {
                data.push(if r == c {
                    Fraction::one()
                } else {
                    Fraction::zero()
                });
            }
        }
        FractionMatrix {
            rows: n,
            cols: n,
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> &Fraction {
        &self.data[self.idx(row, col)]
    }

    pub fn row(&self, row: usize) -> &[Fraction] {
        let start = self.idx(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn to_rows(&self) -> Vec<Vec<Fraction>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks_exact(self.cols).map(<[Fraction]>::to_vec).collect()
    }

    /// Entries as `"num/den"` tokens, row by row.
    pub fn tokens(&self) -> Vec<Vec<String>> {
        self.to_rows()
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }

    pub fn simplified(&self) -> Self {
        FractionMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(Fraction::simplify).collect(),
        }
    }

    /// Matrix-vector product; each running sum is simplified after every addition.
    pub fn mul_vec_simplified(&self, vector: &[Fraction]) -> Result<Vec<Fraction>> {
        if vector.len() != self.cols {
            return Err(FitError::DimensionMismatch {
                left: self.cols,
                right: vector.len(),
            });
        }
        Ok((0..self.rows)
            .map(|r| {
                self.row(r)
                    .iter()
                    .zip(vector)
                    .fold(Fraction::zero(), |acc, (a, y)| (&acc + &(a * y)).simplify())
            })
            .collect())
    }

    pub fn product(&self, other: &FractionMatrix) -> Result<FractionMatrix> {
        if self.cols != other.rows {
            return Err(FitError::DimensionMismatch {
                left: self.cols,
                right: other.rows,
            });
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for r in 0..self.rows {
            for c in 0..other.cols {
                let sum = (0..self.cols).fold(Fraction::zero(), |acc, k| {
                    (&acc + &(self.get(r, k) * other.get(k, c))).simplify()
                });
                data.push(sum);
            }
        }
        Ok(FractionMatrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Gauss-Jordan inversion in exact arithmetic.
    ///
    /// Each pivot row is divided through by its diagonal entry, then the pivot column is
    /// cleared from every other row. The same row operations are replayed on an identity
    /// matrix, which ends up holding the inverse. Intermediate entries are not reduced.
    ///
    /// With [`Pivoting::Diagonal`] a zero on the diagonal fails with
    /// [`FitError::SingularMatrix`] even when some row interchange would have worked.
    pub fn inverse(&self, pivoting: Pivoting) -> Result<FractionMatrix> {
        if !self.is_square() {
            return Err(FitError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let n = self.rows;
        let mut work = self.clone();
        let mut inverse = FractionMatrix::identity(n);

        for i in 0..n {
            if pivoting == Pivoting::Partial && work.get(i, i).is_zero() {
                if let Some(k) = (i + 1..n).find(|&k| !work.get(k, i).is_zero()) {
                    trace!(pivot = i, swap_with = k, "row interchange");
                    work.swap_rows(i, k);
                    inverse.swap_rows(i, k);
                }
            }

            let pivot = work.get(i, i).clone();
            if pivot.is_zero() {
                debug!(pivot = i, "zero pivot, aborting elimination");
                return Err(FitError::SingularMatrix { pivot: i });
            }
            trace!(pivot = i, value = %pivot, "normalizing pivot row");

            work.divide_row(i, &pivot)?;
            inverse.divide_row(i, &pivot)?;

            let factors: Vec<Fraction> = (0..n)
                .filter(|&k| k != i)
                .map(|k| work.get(k, i).clone())
                .collect();
            work.eliminate(i, &factors);
            inverse.eliminate(i, &factors);
        }

        Ok(inverse)
    }

    fn divide_row(&mut self, row: usize, divisor: &Fraction) -> Result<()> {
        let start = self.idx(row, 0);
        for cell in &mut self.data[start..start + self.cols] {
            *cell = cell.divide(divisor)?;
        }
        Ok(())
    }

    /// Subtracts `factors[j] × pivot row` from the j-th non-pivot row, rows taken in order.
    fn eliminate(&mut self, pivot: usize, factors: &[Fraction]) {
        let cols = self.cols;
        let (before, rest) = self.data.split_at_mut(pivot * cols);
        let (pivot_row, after) = rest.split_at_mut(cols);
        let pivot_row: &[Fraction] = pivot_row;

        let others = before
            .chunks_exact_mut(cols)
            .chain(after.chunks_exact_mut(cols));
        for (row, factor) in others.zip(factors) {
            if factor.is_zero() {
                continue;
            }
            for (cell, p) in row.iter_mut().zip(pivot_row) {
                *cell = &*cell - &(factor * p);
            }
        }
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let start_a = a * cols;
        let start_b = b * cols;
        for offset in 0..cols {
            self.data.swap(start_a + offset, start_b + offset);
        }
    }
}

/// Entrywise value equality.
impl PartialEq for FractionMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl Eq for FractionMatrix {}

/// Parses decimal entries and inverts the resulting square matrix without row
/// interchange.
pub fn invert_matrix<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<FractionMatrix> {
    FractionMatrix::from_decimal_rows(rows)?.inverse(Pivoting::Diagonal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[i64]]) -> FractionMatrix {
        FractionMatrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| Fraction::from(v)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn inverts_two_by_two() {
        let inv = m(&[&[1, 1], &[2, 4]]).inverse(Pivoting::Diagonal).unwrap();
        let expected = FractionMatrix::from_rows(vec![
            vec![Fraction::from(2), Fraction::new(-1, 2).unwrap()],
            vec![Fraction::from(-1), Fraction::new(1, 2).unwrap()],
        ])
        .unwrap();
        assert_eq!(inv, expected);
    }

    #[test]
    fn zero_diagonal_without_interchange_is_singular() {
        let swapped = m(&[&[0, 1], &[1, 0]]);
        assert_eq!(
            swapped.inverse(Pivoting::Diagonal),
            Err(FitError::SingularMatrix { pivot: 0 })
        );
        assert_eq!(swapped.inverse(Pivoting::Partial).unwrap(), swapped);
    }

    #[test]
    fn partial_pivoting_still_detects_rank_deficiency() {
        let deficient = m(&[&[1, 2], &[2, 4]]);
        assert_eq!(
            deficient.inverse(Pivoting::Partial),
            Err(FitError::SingularMatrix { pivot: 1 })
        );
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = FractionMatrix::from_rows(vec![vec![Fraction::one()], vec![]]).unwrap_err();
        assert_eq!(
            err,
            FitError::RaggedRow {
                row: 1,
                len: 0,
                expected: 1
            }
        );
    }

    #[test]
    fn not_square_rejected() {
        let wide = m(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(
            wide.inverse(Pivoting::Diagonal),
            Err(FitError::NotSquare { rows: 2, cols: 3 })
        );
    }
}
