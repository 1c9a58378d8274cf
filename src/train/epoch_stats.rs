use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// Logged at debug level every `TrainConfig::log_every` epochs, and sent on
/// `TrainConfig::progress_tx` after every epoch when a channel is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean squared error of the pre-update outputs over this epoch's samples.
    pub train_loss: f64,
    /// Wall-clock duration of this single epoch in microseconds.
    pub elapsed_us: u64,
}
