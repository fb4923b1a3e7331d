use serde::{Serialize, Deserialize};

/// How the learning rate changes from one epoch to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LearningRateDecay {
    /// Same rate every epoch.
    Constant,
    /// `learning_rate / epoch`, with epochs counted from 1.
    #[default]
    InverseEpoch,
}

/// Plain stochastic gradient descent; layers apply the step themselves
/// during `backward`, this only decides the step size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sgd {
    pub learning_rate: f64,
    #[serde(default)]
    pub decay: LearningRateDecay,
}

impl Sgd {
    /// Optimizer with the default `InverseEpoch` decay.
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate, decay: LearningRateDecay::default() }
    }

    pub fn constant(learning_rate: f64) -> Sgd {
        Sgd { learning_rate, decay: LearningRateDecay::Constant }
    }

    /// Effective rate for the 1-based `epoch`.
    pub fn rate_for_epoch(&self, epoch: usize) -> f64 {
        match self.decay {
            LearningRateDecay::Constant => self.learning_rate,
            LearningRateDecay::InverseEpoch => self.learning_rate / epoch.max(1) as f64,
        }
    }
}
