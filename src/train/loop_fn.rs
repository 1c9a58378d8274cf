use std::time::Instant;

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::network::network::Network;
use crate::train::dataset::Sample;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_network;

/// Summary of a finished `train_loop` run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainReport {
    /// Epochs completed, always `config.epochs`.
    pub epochs_run: usize,
    /// Mean training loss of the last completed epoch (0 if none ran).
    pub final_loss: f64,
}

/// Trains `network` for `config.epochs` epochs over `samples`, presenting the
/// samples in the same fixed order every epoch.
///
/// Every requested epoch runs. `progress_tx` only observes: once its
/// receiver is gone the sender is discarded and training carries on.
///
/// # Errors
/// Returns `ConfigError` if `config` fails validation; the network is left
/// untouched in that case.
pub fn train_loop(
    network: &mut Network,
    samples: &[Sample],
    config: &TrainConfig,
) -> Result<TrainReport, ConfigError> {
    config.validate()?;
    let optimizer = config.optimizer();

    let mut report = TrainReport { epochs_run: 0, final_loss: 0.0 };
    let mut progress = config.progress_tx.clone();

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let train_loss = train_network(network, samples, &optimizer);
        let elapsed_us = t_start.elapsed().as_micros() as u64;

        report.epochs_run = epoch;
        report.final_loss = train_loss;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            elapsed_us,
        };

        if let Some(every) = config.log_every {
            if epoch % every == 0 || epoch == config.epochs {
                debug!(
                    epoch = stats.epoch,
                    total_epochs = stats.total_epochs,
                    train_loss = stats.train_loss,
                    elapsed_us = stats.elapsed_us,
                    "epoch complete"
                );
            }
        }

        let receiver_gone = progress.as_ref().is_some_and(|tx| tx.send(stats).is_err());
        if receiver_gone {
            debug!(epoch, "progress receiver gone, no further stats sent");
            progress = None;
        }
    }

    info!(
        epochs = report.epochs_run,
        learning_rate = config.learning_rate,
        final_loss = report.final_loss,
        "training finished"
    );
    Ok(report)
}
