use std::time::Instant;

use crate::data::set::Set;
use crate::error::Result;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs of per-sample SGD and returns
/// the statistics of every completed epoch.
///
/// # Arguments
/// - `network`    — mutable reference to the network; modified in place
/// - `train_set`  — every column is visited once per epoch, in stored order
/// - `validation` — optional held-out set scored after each epoch
/// - `optimizer`  — base learning rate and its per-epoch decay
/// - `config`     — epoch count, logging cadence, optional progress channel
///
/// # Errors
/// The first error raised by a forward pass or the loss function aborts the
/// run. Weights keep the values from the last sample that completed.
pub fn train_loop(
    network: &mut Network,
    train_set: &Set,
    validation: Option<&Set>,
    optimizer: &Sgd,
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    if train_set.is_empty() {
        tracing::warn!("training set is empty; epochs will not update the network");
    }

    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let learning_rate = optimizer.rate_for_epoch(epoch);

        // ── One full pass over the training data ───────────────────────────
        let train_loss = run_one_epoch(network, train_set, learning_rate)?;

        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        // ── Validation ────────────────────────────────────────────────────
        let (val_loss, val_accuracy) = match validation {
            Some(set) => (
                Some(network.evaluate_loss(set)?),
                Some(network.evaluate_one_hot(set)?),
            ),
            None => (None, None),
        };

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            learning_rate,
            train_loss,
            val_loss,
            val_accuracy,
            elapsed_ms,
        };

        if config.should_log(epoch) {
            tracing::info!(
                epoch,
                total_epochs = config.epochs,
                learning_rate,
                train_loss,
                val_loss = ?val_loss,
                val_accuracy = ?val_accuracy,
                "epoch complete"
            );
        }

        if let Some(ref tx) = config.progress_tx {
            // Training does not depend on anyone listening.
            let _ = tx.send(stats.clone());
        }

        history.push(stats);
    }

    Ok(history)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Runs one epoch of per-sample SGD over every column of `set`.
/// Returns the mean loss over all samples.
fn run_one_epoch(network: &mut Network, set: &Set, learning_rate: f64) -> Result<f64> {
    let mut total_loss = 0.0;

    for (input, expected) in set.iter() {
        total_loss += network.train_sample(&input, &expected, learning_rate)?;
    }

    if set.is_empty() {
        Ok(0.0)
    } else {
        Ok(total_loss / set.len() as f64)
    }
}
