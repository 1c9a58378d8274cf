use std::sync::mpsc;

use crate::error::ConfigError;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;

/// Step size for every weight update.
pub const LEARNING_RATE: f64 = 0.5;
/// Passes over the sample set.
pub const MAX_EPOCHS: usize = 2500;
/// Epochs between `EpochStats` log lines.
pub const LOG_EVERY: usize = 500;

/// Hyperparameters and observers for `train_loop`. The epoch count is the
/// only thing that ends training.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    /// Debug-log an `EpochStats` every N epochs and after the last; `None` is silent.
    pub log_every: Option<usize>,
    /// Receives one `EpochStats` per epoch. A hung-up receiver is ignored.
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel and default logging.
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            learning_rate,
            epochs,
            log_every: Some(LOG_EVERY),
            progress_tx: None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }
        if self.log_every == Some(0) {
            return Err(ConfigError::ZeroLogInterval);
        }
        Ok(())
    }

    pub fn optimizer(&self) -> Sgd {
        Sgd::new(self.learning_rate)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(MAX_EPOCHS, LEARNING_RATE)
    }
}
