use crate::error::{NnError, Result};
use crate::math::matrix::Matrix;

/// Paired samples and labels, stored one sample per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    data: Matrix,
    labels: Matrix,
}

impl Set {
    /// Builds a set from per-sample vectors. `data[j]` and `labels[j]` become
    /// column `j` of the sample and label matrices.
    pub fn new(data: Vec<Vec<f64>>, labels: Vec<Vec<f64>>) -> Result<Set> {
        if data.len() != labels.len() {
            return Err(NnError::DimensionMismatch {
                context: "set sample count",
                expected: data.len(),
                got: labels.len(),
            });
        }
        let feature_size = data.first().map_or(0, Vec::len);
        let label_size = labels.first().map_or(0, Vec::len);
        let data = Matrix::from_columns(feature_size, &data)?;
        let labels = Matrix::from_columns(label_size, &labels)?;
        Ok(Set { data, labels })
    }

    /// Wraps matrices already laid out one sample per column.
    pub fn from_matrices(data: Matrix, labels: Matrix) -> Result<Set> {
        if data.cols != labels.cols {
            return Err(NnError::DimensionMismatch {
                context: "set sample count",
                expected: data.cols,
                got: labels.cols,
            });
        }
        Ok(Set { data, labels })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn feature_size(&self) -> usize {
        self.data.rows
    }

    pub fn label_size(&self) -> usize {
        self.labels.rows
    }

    pub fn data(&self) -> &Matrix {
        &self.data
    }

    pub fn labels(&self) -> &Matrix {
        &self.labels
    }

    /// Sample column `j`. Panics if `j >= len()`.
    pub fn sample(&self, j: usize) -> Vec<f64> {
        self.data.column(j)
    }

    /// Label column `j`. Panics if `j >= len()`.
    pub fn label(&self, j: usize) -> Vec<f64> {
        self.labels.column(j)
    }

    /// Iterates `(sample, label)` column pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (Vec<f64>, Vec<f64>)> + '_ {
        (0..self.len()).map(move |j| (self.sample(j), self.label(j)))
    }

    pub(crate) fn swap_samples(&mut self, a: usize, b: usize) {
        self.data.swap_columns(a, b);
        self.labels.swap_columns(a, b);
    }

    pub(crate) fn into_parts(self) -> (Matrix, Matrix) {
        (self.data, self.labels)
    }
}
