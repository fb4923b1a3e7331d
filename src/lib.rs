//! A from-scratch feed-forward neural network engine.
//!
//! Networks are stacks of [`Dense`] and [`Activation`] layers trained by
//! per-sample gradient descent against an MSE or MAE loss. Datasets are
//! stored one sample per column and can be shuffled into train/test
//! partitions with [`Set::split_data_set`].

pub mod math;
pub mod error;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use error::{NnError, Result};
pub use activation::activation::ActivationFunction;
pub use layers::{Activation, Dense, Layer};
pub use network::network::Network;
pub use network::spec::{LayerSpec, NetworkSpec};
pub use loss::loss_type::LossType;
pub use optim::sgd::{LearningRateDecay, Sgd};
pub use train::{EpochStats, TrainConfig};
pub use data::{Set, SplitSet};
