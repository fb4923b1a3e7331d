use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{ensure_len, NnError, Result};
use crate::layers::Base;
use crate::math::matrix::Matrix;

/// Fully-connected affine layer: `output = weights · input + bias`.
///
/// No nonlinearity is applied here; pair it with an
/// [`Activation`](crate::layers::activation::Activation) layer.
#[derive(Debug, Clone)]
pub struct Dense {
    base: Base,
    /// Shape `output_size × input_size`.
    weights: Matrix,
    bias: Vec<f64>,
}

impl Dense {
    /// Creates a layer with weights and bias drawn from N(0, 1).
    pub fn new(input_size: usize, output_size: usize) -> Result<Dense> {
        Dense::with_rng(input_size, output_size, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        input_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> Result<Dense> {
        if input_size == 0 || output_size == 0 {
            return Err(NnError::InvalidDimension(format!(
                "dense layer {input_size} -> {output_size}: sizes must be greater than 0"
            )));
        }

        let weights = Matrix::standard_normal(output_size, input_size, &mut *rng);
        let bias = (0..output_size).map(|_| rng.sample::<f64, _>(StandardNormal)).collect();
        tracing::debug!(input_size, output_size, "created dense layer");

        Ok(Dense {
            base: Base::new(input_size, output_size),
            weights,
            bias,
        })
    }

    /// Builds a layer from explicit parameters. `bias` must have one entry per
    /// row of `weights`.
    pub fn from_parameters(weights: Matrix, bias: Vec<f64>) -> Result<Dense> {
        if weights.rows == 0 || weights.cols == 0 {
            return Err(NnError::InvalidDimension(format!(
                "dense layer {} -> {}: sizes must be greater than 0",
                weights.cols, weights.rows
            )));
        }
        if weights.data.len() != weights.rows
            || weights.data.iter().any(|row| row.len() != weights.cols)
        {
            return Err(NnError::InvalidDimension(format!(
                "weights claim {}x{} but their rows do not match",
                weights.rows, weights.cols
            )));
        }
        ensure_len("dense bias", weights.rows, bias.len())?;
        Ok(Dense {
            base: Base::new(weights.cols, weights.rows),
            weights,
            bias,
        })
    }

    pub fn input_size(&self) -> usize {
        self.weights.cols
    }

    pub fn output_size(&self) -> usize {
        self.weights.rows
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn bias(&self) -> &[f64] {
        &self.bias
    }

    pub fn base(&self) -> &Base {
        &self.base
    }

    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        ensure_len("dense forward", self.input_size(), input.len())?;
        let mut output = self.weights.mul_vec(input)?;
        for (o, b) in output.iter_mut().zip(&self.bias) {
            *o += b;
        }
        self.base.record(input, &output);
        Ok(output)
    }

    /// Updates weights and bias from `output_gradient` (∂L/∂output) and
    /// returns ∂L/∂input, computed from the weights as they were before the
    /// update.
    pub fn backward(&mut self, output_gradient: &[f64], learning_rate: f64) -> Result<Vec<f64>> {
        ensure_len("dense backward", self.output_size(), output_gradient.len())?;

        let input_gradient = self.weights.transpose_mul_vec(output_gradient)?;

        let weights_gradient = Matrix::outer(output_gradient, &self.base.input);
        self.weights.scaled_sub_assign(&weights_gradient, learning_rate)?;
        for (b, g) in self.bias.iter_mut().zip(output_gradient) {
            *b -= learning_rate * g;
        }

        Ok(input_gradient)
    }
}
