pub mod sgd;

pub use sgd::{LearningRateDecay, Sgd};
