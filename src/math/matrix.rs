use std::ops::Range;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{ensure_len, NnError, Result};

/// Dense row-major matrix of `f64`.
///
/// Weights are stored as `output_size × input_size`. Datasets store one
/// sample per column, so `rows` is the feature dimension and `cols` the
/// sample count.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Every entry drawn independently from N(0, 1).
    pub fn standard_normal<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let data = (0..rows)
            .map(|_| (0..cols).map(|_| rng.sample::<f64, _>(StandardNormal)).collect())
            .collect();
        Matrix { rows, cols, data }
    }

    /// Builds a matrix from row vectors. All rows must share one length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        for row in &data {
            ensure_len("matrix row", cols, row.len())?;
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Builds a matrix whose `j`-th column is `columns[j]`.
    ///
    /// `rows` is needed so an empty column list still has a defined height.
    pub fn from_columns(rows: usize, columns: &[Vec<f64>]) -> Result<Matrix> {
        let mut res = Matrix::zeros(rows, columns.len());
        for (j, column) in columns.iter().enumerate() {
            ensure_len("matrix column", rows, column.len())?;
            for (i, &x) in column.iter().enumerate() {
                res.data[i][j] = x;
            }
        }
        Ok(res)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Copies out column `j`. Panics if `j` is out of range, like slice indexing.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.data.iter().map(|row| row[j]).collect()
    }

    pub fn swap_columns(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for row in &mut self.data {
            row.swap(a, b);
        }
    }

    /// New matrix holding the columns in `range`, row count unchanged.
    pub fn select_columns(&self, range: Range<usize>) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: range.len(),
            data: self.data.iter().map(|row| row[range.clone()].to_vec()).collect(),
        }
    }

    /// `self · v`
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        ensure_len("matrix-vector product", self.cols, v.len())?;
        Ok(self
            .data
            .iter()
            .map(|row| row.iter().zip(v).map(|(w, x)| w * x).sum())
            .collect())
    }

    /// `selfᵀ · v`, without materialising the transpose.
    pub fn transpose_mul_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        ensure_len("transposed matrix-vector product", self.rows, v.len())?;
        let mut res = vec![0.0; self.cols];
        for (row, &g) in self.data.iter().zip(v) {
            for (acc, &w) in res.iter_mut().zip(row) {
                *acc += w * g;
            }
        }
        Ok(res)
    }

    /// Outer product `a ⊗ bᵀ`, shape `a.len() × b.len()`.
    pub fn outer(a: &[f64], b: &[f64]) -> Matrix {
        Matrix {
            rows: a.len(),
            cols: b.len(),
            data: a.iter().map(|&x| b.iter().map(|&y| x * y).collect()).collect(),
        }
    }

    /// `self ← self − scale · rhs`
    pub fn scaled_sub_assign(&mut self, rhs: &Matrix, scale: f64) -> Result<()> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(NnError::DimensionMismatch {
                context: "matrix update",
                expected: self.rows * self.cols,
                got: rhs.rows * rhs.cols,
            });
        }
        for (row, rhs_row) in self.data.iter_mut().zip(&rhs.data) {
            for (w, g) in row.iter_mut().zip(rhs_row) {
                *w -= scale * g;
            }
        }
        Ok(())
    }
}
