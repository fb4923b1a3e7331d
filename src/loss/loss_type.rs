use serde::{Serialize, Deserialize};

use crate::error::{NnError, Result};
use crate::loss::{mae::MaeLoss, mse::MseLoss};

/// Selects which loss function the network trains against.
///
/// - `Mse` — mean-squared error (selector `0`).
/// - `Mae` — mean absolute error (selector `1`).
///
/// Both report the mean over output components, and their derivatives carry
/// the matching `1/n` factor so value and gradient stay consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    Mse,
    Mae,
}

impl LossType {
    pub fn from_id(id: usize) -> Result<LossType> {
        match id {
            0 => Ok(LossType::Mse),
            1 => Ok(LossType::Mae),
            _ => Err(NnError::InvalidSelector { kind: "loss", id }),
        }
    }

    pub fn id(&self) -> usize {
        match self {
            LossType::Mse => 0,
            LossType::Mae => 1,
        }
    }

    /// Scalar loss for one sample.
    pub fn loss(&self, expected: &[f64], predicted: &[f64]) -> Result<f64> {
        match self {
            LossType::Mse => MseLoss::loss(expected, predicted),
            LossType::Mae => MaeLoss::loss(expected, predicted),
        }
    }

    /// Gradient of `loss` with respect to `predicted`.
    pub fn derivative(&self, expected: &[f64], predicted: &[f64]) -> Result<Vec<f64>> {
        match self {
            LossType::Mse => MseLoss::derivative(expected, predicted),
            LossType::Mae => MaeLoss::derivative(expected, predicted),
        }
    }
}

impl TryFrom<usize> for LossType {
    type Error = NnError;

    fn try_from(id: usize) -> Result<Self> {
        LossType::from_id(id)
    }
}
