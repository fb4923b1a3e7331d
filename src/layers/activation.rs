use crate::activation::activation::ActivationFunction;
use crate::error::{ensure_len, NnError, Result};
use crate::layers::Base;

/// Stateless element-wise nonlinearity. Has no learnable parameters.
#[derive(Debug, Clone)]
pub struct Activation {
    base: Base,
    activator: ActivationFunction,
}

impl Activation {
    pub fn new(size: usize, activator: ActivationFunction) -> Result<Activation> {
        if size == 0 {
            return Err(NnError::InvalidDimension(
                "activation layer size must be greater than 0".to_string(),
            ));
        }
        tracing::debug!(size, ?activator, "created activation layer");
        Ok(Activation {
            base: Base::new(size, size),
            activator,
        })
    }

    /// Like [`Activation::new`], selecting the function by numeric id
    /// (`0` sigmoid, `1` ReLU, `2` tanh).
    pub fn from_id(size: usize, activation_id: usize) -> Result<Activation> {
        let activator = ActivationFunction::from_id(activation_id)?;
        Activation::new(size, activator)
    }

    pub fn activator(&self) -> ActivationFunction {
        self.activator
    }

    pub fn size(&self) -> usize {
        self.base.input.len()
    }

    pub fn base(&self) -> &Base {
        &self.base
    }

    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        ensure_len("activation forward", self.size(), input.len())?;
        let output: Vec<f64> = input.iter().map(|&x| self.activator.function(x)).collect();
        self.base.record(input, &output);
        Ok(output)
    }

    /// Chain rule: `output_gradient ⊙ f'(cached input)`. `_learning_rate` is
    /// unused.
    pub fn backward(&mut self, output_gradient: &[f64], _learning_rate: f64) -> Result<Vec<f64>> {
        ensure_len("activation backward", self.base.input.len(), output_gradient.len())?;
        Ok(output_gradient
            .iter()
            .zip(&self.base.input)
            .map(|(g, &z)| g * self.activator.derivative(z))
            .collect())
    }
}
