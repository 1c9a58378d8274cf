use rand::distributions::Open01;
use rand::Rng;

use crate::activation::{sigmoid, sigmoid_derivative_from_output};
use crate::error::TopologyError;
use crate::network::topology::{
    Role, Source, Topology, INPUT_COUNT, NEURON_COUNT, OUTPUT_COUNT, SOURCE_COUNT, WEIGHT_COUNT,
};
use crate::optim::sgd::Sgd;
use crate::train::dataset::Sample;

/// One sigmoid unit: `weights[0]` is the bias weight, `weights[1..]` pair with
/// the neuron's two sources in `NeuronSpec::sources` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neuron {
    pub weights: [f64; WEIGHT_COUNT],
}

impl Neuron {
    pub fn new(weights: [f64; WEIGHT_COUNT]) -> Neuron {
        Neuron { weights }
    }

    /// Every weight drawn independently and uniformly from the open interval (-1, 1).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Neuron {
        let mut weights = [0.0; WEIGHT_COUNT];
        for w in &mut weights {
            let u: f64 = rng.sample(Open01);
            *w = u * 2.0 - 1.0;
        }
        Neuron { weights }
    }

    /// `sigmoid(w · [1, a, b])`, the bias input being the constant 1.
    pub fn activate(&self, inputs: [f64; SOURCE_COUNT]) -> f64 {
        let z = self.weights[0] + inputs[0] * self.weights[1] + inputs[1] * self.weights[2];
        sigmoid(z)
    }
}

/// Every value produced by one forward pass, kept for the backward pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardPass {
    pub inputs: [f64; INPUT_COUNT],
    /// Activation of each neuron, indexed like the topology.
    pub activations: [f64; NEURON_COUNT],
    pub outputs: (f64, f64),
}

impl ForwardPass {
    fn value_of(&self, source: Source) -> f64 {
        match source {
            Source::Input(i) => self.inputs[i],
            Source::Neuron(j) => self.activations[j],
        }
    }

    fn source_values(&self, sources: &[Source; SOURCE_COUNT]) -> [f64; SOURCE_COUNT] {
        [self.value_of(sources[0]), self.value_of(sources[1])]
    }
}

/// Squared-error gradient for every weight, laid out like the weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradients {
    pub neurons: [[f64; WEIGHT_COUNT]; NEURON_COUNT],
}

/// Four sigmoid neurons wired by a `Topology`.
///
/// The weight shape (4 neurons × 3 weights) is fixed by the array types and
/// cannot change after construction. Only `train` (through `Sgd::step`)
/// mutates weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    topology: Topology,
    neurons: [Neuron; NEURON_COUNT],
}

impl Network {
    /// Builds the 2-2-2 XOR network with weights drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Network {
        Network {
            topology: Topology::xor(),
            neurons: std::array::from_fn(|_| Neuron::random(&mut *rng)),
        }
    }

    /// Builds the XOR network seeded from the thread-local generator.
    pub fn random() -> Network {
        Network::new(&mut rand::thread_rng())
    }

    /// Builds a network over custom wiring, rejecting anything that is not a
    /// feed-forward 2-2-2 layout.
    pub fn with_topology<R: Rng + ?Sized>(
        topology: Topology,
        rng: &mut R,
    ) -> Result<Network, TopologyError> {
        topology.validate()?;
        Ok(Network {
            topology,
            neurons: std::array::from_fn(|_| Neuron::random(&mut *rng)),
        })
    }

    /// Builds the XOR network from explicit weights.
    pub fn from_neurons(neurons: [Neuron; NEURON_COUNT]) -> Network {
        Network { topology: Topology::xor(), neurons }
    }

    pub fn neurons(&self) -> &[Neuron; NEURON_COUNT] {
        &self.neurons
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Evaluates every neuron in topology order.
    pub fn forward(&self, x1: f64, x2: f64) -> ForwardPass {
        let mut pass = ForwardPass {
            inputs: [x1, x2],
            activations: [0.0; NEURON_COUNT],
            outputs: (0.0, 0.0),
        };
        for (i, (spec, neuron)) in self.topology.neurons.iter().zip(&self.neurons).enumerate() {
            let inputs = pass.source_values(&spec.sources);
            pass.activations[i] = neuron.activate(inputs);
        }
        let [first, second] = self.topology.output_indices();
        pass.outputs = (pass.activations[first], pass.activations[second]);
        pass
    }

    /// Returns `(output1, output2)` for the given inputs without touching the weights.
    pub fn predict(&self, x1: f64, x2: f64) -> (f64, f64) {
        self.forward(x1, x2).outputs
    }

    /// Per-neuron error signals for one pass against `targets`.
    ///
    /// Output neurons use `a(1-a)(target-a)`; hidden neurons sum the deltas of
    /// every neuron they feed, weighted by the connecting weight.
    pub fn deltas(&self, pass: &ForwardPass, targets: [f64; OUTPUT_COUNT]) -> [f64; NEURON_COUNT] {
        let mut deltas = [0.0; NEURON_COUNT];

        for (target, &n) in targets.iter().zip(self.topology.output_indices().iter()) {
            let a = pass.activations[n];
            deltas[n] = sigmoid_derivative_from_output(a) * (target - a);
        }

        // Back to front, so every downstream delta exists before it is read.
        for n in (0..NEURON_COUNT).rev() {
            if self.topology.neurons[n].role != Role::Hidden {
                continue;
            }
            let mut downstream = 0.0;
            for (m, spec) in self.topology.neurons.iter().enumerate().skip(n + 1) {
                for (k, &source) in spec.sources.iter().enumerate() {
                    if source == Source::Neuron(n) {
                        downstream += self.neurons[m].weights[k + 1] * deltas[m];
                    }
                }
            }
            deltas[n] = sigmoid_derivative_from_output(pass.activations[n]) * downstream;
        }

        deltas
    }

    /// Computes gradient adjustments for every weight from the current weights.
    /// The gradient of a weight is `-input · delta`, the bias input being 1.
    pub fn compute_gradients(&self, pass: &ForwardPass, targets: [f64; OUTPUT_COUNT]) -> Gradients {
        let deltas = self.deltas(pass, targets);
        let mut neurons = [[0.0; WEIGHT_COUNT]; NEURON_COUNT];
        for (n, spec) in self.topology.neurons.iter().enumerate() {
            let [a, b] = pass.source_values(&spec.sources);
            neurons[n] = [-deltas[n], -(a * deltas[n]), -(b * deltas[n])];
        }
        Gradients { neurons }
    }

    /// Applies pre-computed gradients scaled by lr.
    pub fn apply_gradients(&mut self, gradients: &Gradients, lr: f64) {
        for (neuron, grads) in self.neurons.iter_mut().zip(gradients.neurons.iter()) {
            for (w, g) in neuron.weights.iter_mut().zip(grads.iter()) {
                *w -= lr * g;
            }
        }
    }

    /// One online backpropagation step on `sample`.
    ///
    /// Every delta and gradient comes from the weights as they were on entry;
    /// all twelve weights are then updated together. Returns the outputs of
    /// the pre-update forward pass.
    pub fn train(&mut self, sample: &Sample, optimizer: &Sgd) -> (f64, f64) {
        let pass = self.forward(sample.inputs[0], sample.inputs[1]);
        let gradients = self.compute_gradients(&pass, sample.targets);
        optimizer.step(self, &gradients);
        pass.outputs
    }
}
