pub mod activation;
pub mod error;
pub mod loss;
pub mod network;
pub mod optim;
pub mod sweep;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid;
pub use error::{ConfigError, TopologyError};
pub use loss::mse::MseLoss;
pub use network::network::{Network, Neuron};
pub use network::topology::Topology;
pub use optim::sgd::Sgd;
pub use sweep::grid::{write_sweep, SweepConfig};
pub use train::dataset::{Sample, XOR_SAMPLES};
pub use train::loop_fn::{train_loop, TrainReport};
pub use train::train_config::TrainConfig;
pub use train::trainer::train_network;
