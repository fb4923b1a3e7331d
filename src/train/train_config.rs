use std::sync::mpsc;
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`      — total number of full passes over the training data
/// - `log_every`   — emit an `info` event every this many epochs (and after
///                   the last one); `0` silences per-epoch logging
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch. A dropped receiver is ignored.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub log_every: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` that logs every epoch and has no progress channel.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            log_every: 1,
            progress_tx: None,
        }
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub(crate) fn should_log(&self, epoch: usize) -> bool {
        self.log_every > 0 && (epoch % self.log_every == 0 || epoch == self.epochs)
    }
}
