//! Error types for configuration and network wiring.

use thiserror::Error;

use crate::network::topology::Source;

/// Rejected training or sweep settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Learning rate must be finite and positive, got {0}")]
    InvalidLearningRate(f64),

    #[error("Logging interval must be at least one epoch")]
    ZeroLogInterval,

    #[error("Sweep needs at least one step per axis")]
    ZeroSweepSteps,

    #[error("Sweep step must be finite and positive, got {0}")]
    InvalidSweepStep(f64),
}

/// Wiring that does not describe a 2-2-2 feed-forward network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    #[error("Neuron {neuron} reads external input {index}, but only 2 inputs exist")]
    InputOutOfRange { neuron: usize, index: usize },

    #[error("Neuron {neuron} reads {reads:?}, which is not evaluated before it")]
    ForwardReference { neuron: usize, reads: Source },

    #[error("Neuron {neuron} reads {reads:?}, which is an output neuron")]
    ReadsOutput { neuron: usize, reads: Source },

    #[error("Expected 2 hidden and 2 output neurons, found {hidden} hidden and {output} output")]
    RoleCount { hidden: usize, output: usize },
}
