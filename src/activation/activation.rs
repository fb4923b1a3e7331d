use serde::{Deserialize, Serialize};
use std::f64::consts::E;

use crate::error::{NnError, Result};

/// Element-wise nonlinearity applied by an activation layer.
///
/// The numeric selectors used by `from_id` are `0 = Sigmoid`, `1 = ReLU`,
/// `2 = Tanh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
    #[serde(rename = "relu")]
    ReLU,
    Tanh,
}

impl ActivationFunction {
    pub const ALL: [ActivationFunction; 3] = [
        ActivationFunction::Sigmoid,
        ActivationFunction::ReLU,
        ActivationFunction::Tanh,
    ];

    /// Looks up an activation by its numeric selector.
    pub fn from_id(id: usize) -> Result<ActivationFunction> {
        Self::ALL
            .get(id)
            .copied()
            .ok_or(NnError::InvalidSelector { kind: "activation", id })
    }

    pub fn id(&self) -> usize {
        match self {
            ActivationFunction::Sigmoid => 0,
            ActivationFunction::ReLU => 1,
            ActivationFunction::Tanh => 2,
        }
    }

    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// Slope of the activation at the pre-activation value `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::ReLU => if x < 0.0 { 0.0 } else { 1.0 },
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
        }
    }
}

impl TryFrom<usize> for ActivationFunction {
    type Error = NnError;

    fn try_from(id: usize) -> Result<Self> {
        ActivationFunction::from_id(id)
    }
}
