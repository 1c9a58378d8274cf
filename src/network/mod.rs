pub mod network;
pub mod topology;

pub use network::{ForwardPass, Gradients, Network, Neuron};
pub use topology::{NeuronSpec, Role, Source, Topology};
