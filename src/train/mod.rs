pub mod dataset;
pub mod epoch_stats;
pub mod loop_fn;
pub mod train_config;
pub mod trainer;

pub use dataset::{Sample, XOR_SAMPLES};
pub use epoch_stats::EpochStats;
pub use loop_fn::{train_loop, TrainReport};
pub use train_config::TrainConfig;
pub use trainer::train_network;
