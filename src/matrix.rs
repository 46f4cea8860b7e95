//! Dense byte matrices with field-parameterised multiply and invert
//!
//! A [`Matrix`] is a plain rectangular array of field elements; it carries
//! no field handle of its own. The arithmetic that depends on a field —
//! multiplication, Gauss-Jordan elimination, inversion, and the RAID-6
//! encoder matrix builder — lives on [`GF`] and takes matrices as operands.

use crate::galois::{FieldError, GF};
use thiserror::Error;

/// Errors raised by matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A matrix must have at least one row, and row indices must be in range
    #[error("invalid row size")]
    InvalidRowSize,

    /// A matrix must have at least one column
    #[error("invalid column size")]
    InvalidColSize,

    /// A caller-supplied jagged array is not rectangular
    #[error("column size is not the same for all rows")]
    ColSizeMismatch,

    /// The operand shapes of a multiplication do not line up
    #[error("columns on left ({left_cols}) is different than rows on right ({right_rows})")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    /// The operand shapes of an augmentation do not line up
    #[error("matrix sizes do not match")]
    SizeMismatch,

    /// Elimination could not find a nonzero pivot
    #[error("matrix is singular")]
    Singular,

    /// Inversion requires a square matrix
    #[error("only square matrices can be inverted")]
    NotSquare,

    /// Field arithmetic failed during elimination
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// A mutable `R x C` array of field elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<u8>>,
}

impl Matrix {
    /// A zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        if rows == 0 {
            return Err(MatrixError::InvalidRowSize);
        }
        if cols == 0 {
            return Err(MatrixError::InvalidColSize);
        }
        Ok(Matrix {
            rows: vec![vec![0u8; cols]; rows],
        })
    }

    /// Wrap caller-supplied rows, validating rectangularity.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Matrix, MatrixError> {
        let m = Matrix { rows };
        m.check()?;
        Ok(m)
    }

    /// The `size x size` identity matrix.
    pub fn identity(size: usize) -> Result<Matrix, MatrixError> {
        let mut m = Matrix::new(size, size)?;
        for i in 0..size {
            m.rows[i][i] = 1;
        }
        Ok(m)
    }

    fn check(&self) -> Result<(), MatrixError> {
        if self.rows.is_empty() {
            return Err(MatrixError::InvalidRowSize);
        }
        let cols = self.rows[0].len();
        if cols == 0 {
            return Err(MatrixError::InvalidColSize);
        }
        if self.rows.iter().any(|row| row.len() != cols) {
            return Err(MatrixError::ColSizeMismatch);
        }
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows[0].len()
    }

    pub fn get(&self, r: usize, c: usize) -> u8 {
        self.rows[r][c]
    }

    pub fn set(&mut self, r: usize, c: usize, value: u8) {
        self.rows[r][c] = value;
    }

    /// A borrowed view of row `r`.
    pub fn row(&self, r: usize) -> &[u8] {
        &self.rows[r]
    }

    pub fn is_square(&self) -> bool {
        self.rows.len() == self.rows[0].len()
    }

    /// Exchange rows `r1` and `r2` in place.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<(), MatrixError> {
        if r1 >= self.rows.len() || r2 >= self.rows.len() {
            return Err(MatrixError::InvalidRowSize);
        }
        self.rows.swap(r1, r2);
        Ok(())
    }

    /// A freshly-allocated copy of the half-open rectangle
    /// `[rmin, rmax) x [cmin, cmax)`.
    pub fn sub_matrix(
        &self,
        rmin: usize,
        cmin: usize,
        rmax: usize,
        cmax: usize,
    ) -> Result<Matrix, MatrixError> {
        if rmax <= rmin || rmax > self.row_count() {
            return Err(MatrixError::InvalidRowSize);
        }
        if cmax <= cmin || cmax > self.col_count() {
            return Err(MatrixError::InvalidColSize);
        }
        let rows = self.rows[rmin..rmax]
            .iter()
            .map(|row| row[cmin..cmax].to_vec())
            .collect();
        Ok(Matrix { rows })
    }

    /// Concatenate the columns of `right` onto this matrix.
    pub fn augment(&self, right: &Matrix) -> Result<Matrix, MatrixError> {
        if self.row_count() != right.row_count() {
            return Err(MatrixError::SizeMismatch);
        }
        let rows = self
            .rows
            .iter()
            .zip(&right.rows)
            .map(|(left, right)| {
                let mut row = left.clone();
                row.extend_from_slice(right);
                row
            })
            .collect();
        Ok(Matrix { rows })
    }
}

impl GF {
    /// Matrix product `left x right` under this field.
    pub fn matrix_multiply(&self, left: &Matrix, right: &Matrix) -> Result<Matrix, MatrixError> {
        if left.col_count() != right.row_count() {
            return Err(MatrixError::DimensionMismatch {
                left_cols: left.col_count(),
                right_rows: right.row_count(),
            });
        }
        let mut result = Matrix::new(left.row_count(), right.col_count())?;
        for r in 0..left.row_count() {
            for c in 0..right.col_count() {
                let mut value = 0u8;
                for i in 0..left.col_count() {
                    value ^= self.mul(left.rows[r][i], right.rows[i][c]);
                }
                result.rows[r][c] = value;
            }
        }
        Ok(result)
    }

    /// In-place Gauss-Jordan elimination under this field.
    ///
    /// Forward pass: for each diagonal position, swap a nonzero pivot into
    /// place (failing with [`MatrixError::Singular`] when none exists below),
    /// scale the pivot row to 1, and clear the column below. Backward pass:
    /// clear the column above each diagonal. Subtraction and addition are
    /// both exclusive-or in the field.
    pub fn gaussian_elimination(&self, work: &mut Matrix) -> Result<(), MatrixError> {
        let rows = work.row_count();
        let columns = work.col_count();
        for r in 0..rows {
            if work.rows[r][r] == 0 {
                for row_below in r + 1..rows {
                    if work.rows[row_below][r] != 0 {
                        work.swap_rows(r, row_below)?;
                        break;
                    }
                }
            }
            if work.rows[r][r] == 0 {
                return Err(MatrixError::Singular);
            }
            if work.rows[r][r] != 1 {
                let scale = self.inv(work.rows[r][r])?;
                for c in 0..columns {
                    work.rows[r][c] = self.mul(work.rows[r][c], scale);
                }
            }
            for row_below in r + 1..rows {
                if work.rows[row_below][r] != 0 {
                    let scale = work.rows[row_below][r];
                    for c in 0..columns {
                        let sub = self.mul(scale, work.rows[r][c]);
                        work.rows[row_below][c] ^= sub;
                    }
                }
            }
        }
        for d in 0..rows {
            for row_above in 0..d {
                if work.rows[row_above][d] != 0 {
                    let scale = work.rows[row_above][d];
                    for c in 0..columns {
                        let sub = self.mul(scale, work.rows[d][c]);
                        work.rows[row_above][c] ^= sub;
                    }
                }
            }
        }
        Ok(())
    }

    /// The inverse of `m` under this field, by Gauss-Jordan elimination of
    /// the augmented matrix `[m | I]`.
    pub fn matrix_invert(&self, m: &Matrix) -> Result<Matrix, MatrixError> {
        if !m.is_square() {
            return Err(MatrixError::NotSquare);
        }
        let size = m.row_count();
        let mut work = m.augment(&Matrix::identity(size)?)?;
        self.gaussian_elimination(&mut work)?;
        work.sub_matrix(0, size, size, 2 * size)
    }

    /// The `(cols + 2) x cols` RAID-6 encoder matrix: identity on top, an
    /// all-ones P row, and a Q row weighting column `c` by `(c+1)^2`.
    pub fn raid6_encoder_matrix(&self, rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        if rows != cols + 2 {
            return Err(MatrixError::SizeMismatch);
        }
        let mut m = Matrix::new(rows, cols)?;
        for c in 0..cols {
            m.rows[c][c] = 1;
        }
        for c in 0..cols {
            m.rows[rows - 2][c] = 1;
        }
        for c in 0..cols {
            m.rows[rows - 1][c] = self.pow((c + 1) as u8, 2);
        }
        Ok(m)
    }
}
