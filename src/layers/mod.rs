pub mod activation;
pub mod dense;

use crate::error::Result;

pub use activation::Activation;
pub use dense::Dense;

/// Input and output recorded by the most recent forward call, reused by
/// the backward pass.
#[derive(Debug, Clone, Default)]
pub struct Base {
    pub input: Vec<f64>,
    pub output: Vec<f64>,
}

impl Base {
    pub(crate) fn new(input_size: usize, output_size: usize) -> Base {
        Base {
            input: vec![0.0; input_size],
            output: vec![0.0; output_size],
        }
    }

    pub(crate) fn record(&mut self, input: &[f64], output: &[f64]) {
        self.input.copy_from_slice(input);
        self.output.copy_from_slice(output);
    }
}

/// One stage of a network. The orchestrator drives every variant through
/// the same `forward`/`backward` pair.
#[derive(Debug, Clone)]
pub enum Layer {
    Dense(Dense),
    Activation(Activation),
}

impl Layer {
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        match self {
            Layer::Dense(dense) => dense.forward(input),
            Layer::Activation(act) => act.forward(input),
        }
    }

    /// Consumes ∂L/∂output, updates any parameters, and returns ∂L/∂input.
    pub fn backward(&mut self, output_gradient: &[f64], learning_rate: f64) -> Result<Vec<f64>> {
        match self {
            Layer::Dense(dense) => dense.backward(output_gradient, learning_rate),
            Layer::Activation(act) => act.backward(output_gradient, learning_rate),
        }
    }

    pub fn input_size(&self) -> usize {
        match self {
            Layer::Dense(dense) => dense.input_size(),
            Layer::Activation(act) => act.size(),
        }
    }

    pub fn output_size(&self) -> usize {
        match self {
            Layer::Dense(dense) => dense.output_size(),
            Layer::Activation(act) => act.size(),
        }
    }
}

impl From<Dense> for Layer {
    fn from(dense: Dense) -> Self {
        Layer::Dense(dense)
    }
}

impl From<Activation> for Layer {
    fn from(act: Activation) -> Self {
        Layer::Activation(act)
    }
}
