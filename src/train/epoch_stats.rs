use serde::{Serialize, Deserialize};

/// Per-epoch training statistics produced by `train_loop`.
///
/// One value is returned per completed epoch, and also sent through
/// `TrainConfig::progress_tx` when a channel is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Learning rate handed to every layer during this epoch.
    pub learning_rate: f64,
    /// Mean training loss over all samples in this epoch.
    pub train_loss: f64,
    /// Mean validation loss, if a validation set was provided.
    pub val_loss: Option<f64>,
    /// One-hot validation accuracy in [0, 1], if a validation set was provided.
    pub val_accuracy: Option<f64>,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
