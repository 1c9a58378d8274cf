use crate::network::network::{Gradients, Network};

/// Plain stochastic gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD weight update to every neuron given pre-computed gradients.
    pub fn step(&self, network: &mut Network, gradients: &Gradients) {
        network.apply_gradients(gradients, self.learning_rate);
    }
}
