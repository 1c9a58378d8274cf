use serde::{Deserialize, Serialize};

use crate::error::TopologyError;

/// Number of external inputs fed to the hidden layer.
pub const INPUT_COUNT: usize = 2;
/// Number of predictions produced per forward pass.
pub const OUTPUT_COUNT: usize = 2;
/// Neurons in the network, hidden and output together.
pub const NEURON_COUNT: usize = 4;
/// Weights per neuron: one bias plus one per source.
pub const WEIGHT_COUNT: usize = 3;
/// Sources feeding each neuron.
pub const SOURCE_COUNT: usize = WEIGHT_COUNT - 1;

/// Which layer a neuron belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Hidden,
    Output,
}

/// Where a neuron reads one of its non-bias inputs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// External input by position (0 is `x1`, 1 is `x2`).
    Input(usize),
    /// Activation of another neuron by index.
    Neuron(usize),
}

/// Describes one neuron in the wiring.
///
/// Fields:
/// - `role`    — hidden or output
/// - `sources` — what feeds weight 1 and weight 2; weight 0 always multiplies
///               the constant bias input `1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeuronSpec {
    pub role: Role,
    pub sources: [Source; SOURCE_COUNT],
}

impl NeuronSpec {
    pub const fn hidden(sources: [Source; SOURCE_COUNT]) -> NeuronSpec {
        NeuronSpec { role: Role::Hidden, sources }
    }

    pub const fn output(sources: [Source; SOURCE_COUNT]) -> NeuronSpec {
        NeuronSpec { role: Role::Output, sources }
    }
}

/// Ordered neuron records (evaluation order, input → output).
///
/// A neuron may only read external inputs or hidden neurons listed before it,
/// so evaluating `neurons` front to back is a valid forward pass and walking
/// it back to front is a valid backward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub neurons: [NeuronSpec; NEURON_COUNT],
}

impl Topology {
    /// The fully connected 2-2-2 wiring: two hidden neurons over both inputs,
    /// two output neurons over both hidden activations.
    pub const fn xor() -> Topology {
        const HIDDEN: [Source; SOURCE_COUNT] = [Source::Input(0), Source::Input(1)];
        const OUTPUT: [Source; SOURCE_COUNT] = [Source::Neuron(0), Source::Neuron(1)];
        Topology {
            neurons: [
                NeuronSpec::hidden(HIDDEN),
                NeuronSpec::hidden(HIDDEN),
                NeuronSpec::output(OUTPUT),
                NeuronSpec::output(OUTPUT),
            ],
        }
    }

    /// Checks that the wiring is a feed-forward 2-2-2 network.
    pub fn validate(&self) -> Result<(), TopologyError> {
        let hidden = self.neurons.iter().filter(|n| n.role == Role::Hidden).count();
        let output = NEURON_COUNT - hidden;
        if hidden != NEURON_COUNT - OUTPUT_COUNT || output != OUTPUT_COUNT {
            return Err(TopologyError::RoleCount { hidden, output });
        }

        for (neuron, spec) in self.neurons.iter().enumerate() {
            for &reads in &spec.sources {
                match reads {
                    Source::Input(index) if index >= INPUT_COUNT => {
                        return Err(TopologyError::InputOutOfRange { neuron, index });
                    }
                    Source::Input(_) => {}
                    Source::Neuron(other) if other >= neuron => {
                        return Err(TopologyError::ForwardReference { neuron, reads });
                    }
                    Source::Neuron(other) if self.neurons[other].role == Role::Output => {
                        return Err(TopologyError::ReadsOutput { neuron, reads });
                    }
                    Source::Neuron(_) => {}
                }
            }
        }
        Ok(())
    }

    /// Indices of the output neurons in order: the first produces `output1`.
    pub fn output_indices(&self) -> [usize; OUTPUT_COUNT] {
        let mut indices = [0; OUTPUT_COUNT];
        let outputs = self.neurons.iter()
            .enumerate()
            .filter(|(_, spec)| spec.role == Role::Output)
            .map(|(i, _)| i);
        for (slot, index) in indices.iter_mut().zip(outputs) {
            *slot = index;
        }
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_topology_is_valid() {
        assert_eq!(Topology::xor().validate(), Ok(()));
        assert_eq!(Topology::xor().output_indices(), [2, 3]);
    }

    #[test]
    fn test_hidden_neurons_read_both_inputs() {
        let topology = Topology::xor();
        for spec in &topology.neurons[..2] {
            assert_eq!(spec.role, Role::Hidden);
            assert_eq!(spec.sources, [Source::Input(0), Source::Input(1)]);
        }
        for spec in &topology.neurons[2..] {
            assert_eq!(spec.role, Role::Output);
            assert_eq!(spec.sources, [Source::Neuron(0), Source::Neuron(1)]);
        }
    }

    #[test]
    fn test_rejects_input_out_of_range() {
        let mut topology = Topology::xor();
        topology.neurons[1].sources[1] = Source::Input(2);
        assert_eq!(
            topology.validate(),
            Err(TopologyError::InputOutOfRange { neuron: 1, index: 2 })
        );
    }

    #[test]
    fn test_rejects_forward_reference() {
        let mut topology = Topology::xor();
        topology.neurons[0].sources[0] = Source::Neuron(1);
        assert_eq!(
            topology.validate(),
            Err(TopologyError::ForwardReference { neuron: 0, reads: Source::Neuron(1) })
        );
    }

    #[test]
    fn test_rejects_reading_an_output_neuron() {
        let mut topology = Topology::xor();
        topology.neurons[3].sources[0] = Source::Neuron(2);
        assert_eq!(
            topology.validate(),
            Err(TopologyError::ReadsOutput { neuron: 3, reads: Source::Neuron(2) })
        );
    }

    #[test]
    fn test_rejects_wrong_role_split() {
        let mut topology = Topology::xor();
        topology.neurons[2].role = Role::Hidden;
        assert_eq!(
            topology.validate(),
            Err(TopologyError::RoleCount { hidden: 3, output: 1 })
        );
    }

    #[test]
    fn test_wiring_serializes_as_readable_records() {
        let json = serde_json::to_value(Topology::xor()).unwrap();
        assert_eq!(json["neurons"][0]["role"], "hidden");
        assert_eq!(json["neurons"][2]["sources"][1]["neuron"], 1);

        let back: Topology = serde_json::from_value(json).unwrap();
        assert_eq!(back, Topology::xor());
    }
}
