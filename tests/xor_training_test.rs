//! End-to-end checks of the training protocol and the prediction sweep
//! through the public API, using seeded generators.

use backprop_xor::network::topology::{NEURON_COUNT, WEIGHT_COUNT};
use backprop_xor::sweep::grid;
use backprop_xor::{
    train_loop, train_network, write_sweep, Network, Sample, Sgd, SweepConfig, TrainConfig,
    XOR_SAMPLES,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f64 = 0.1;

fn quiet_config() -> TrainConfig {
    TrainConfig { log_every: None, ..TrainConfig::default() }
}

fn trained(seed: u64) -> Network {
    let mut network = Network::new(&mut StdRng::seed_from_u64(seed));
    train_loop(&mut network, &XOR_SAMPLES, &quiet_config()).expect("default config is valid");
    network
}

fn solves_xor(network: &Network) -> bool {
    XOR_SAMPLES.iter().all(|sample| {
        let (o1, o2) = network.predict(sample.inputs[0], sample.inputs[1]);
        (o1 - sample.targets[0]).abs() < TOLERANCE && (o2 - sample.targets[1]).abs() < TOLERANCE
    })
}

#[test]
fn test_most_initializations_converge() {
    // Some starting points settle in a local minimum, so only a majority of
    // seeds is required to reach the targets.
    let converged = (0..32u64).filter(|&seed| solves_xor(&trained(seed))).count();
    assert!(converged >= 12, "only {converged} of 32 seeds converged");
}

#[test]
fn test_converged_network_separates_xor() {
    let network = (0..32u64)
        .map(trained)
        .find(solves_xor)
        .expect("at least one seed converges");

    let (a, b) = network.predict(0.0, 0.0);
    assert!(a > 0.8 && b < 0.2);
    let (a, b) = network.predict(0.0, 1.0);
    assert!(a < 0.2 && b > 0.8);
    let (a, b) = network.predict(1.0, 0.0);
    assert!(a < 0.2 && b > 0.8);
    let (a, b) = network.predict(1.0, 1.0);
    assert!(a > 0.8 && b < 0.2);
}

#[test]
fn test_outputs_stay_in_open_unit_interval() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut network = Network::new(&mut rng);
    let optimizer = Sgd::new(0.5);

    for _ in 0..200 {
        let sample = Sample::new(
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
            rng.gen_range(0.0..1.0),
            rng.gen_range(0.0..1.0),
        );
        let (t1, t2) = network.train(&sample, &optimizer);
        let (p1, p2) = network.predict(sample.inputs[0], sample.inputs[1]);
        for v in [t1, t2, p1, p2] {
            assert!(v > 0.0 && v < 1.0, "output {v} left (0, 1)");
        }
    }
}

#[test]
fn test_predict_is_deterministic_and_pure() {
    let network = trained(2);
    let snapshot = network.clone();

    let first = network.predict(0.37, 0.81);
    let second = network.predict(0.37, 0.81);
    assert_eq!(first.0.to_bits(), second.0.to_bits());
    assert_eq!(first.1.to_bits(), second.1.to_bits());
    assert_eq!(network, snapshot);
}

#[test]
fn test_train_returns_outputs_of_pre_update_weights() {
    let mut network = Network::new(&mut StdRng::seed_from_u64(13));
    let optimizer = Sgd::new(0.5);

    for sample in XOR_SAMPLES.iter().cycle().take(40) {
        let snapshot = network.clone();
        let returned = network.train(sample, &optimizer);
        assert_eq!(returned, snapshot.predict(sample.inputs[0], sample.inputs[1]));
        assert_ne!(network, snapshot);
    }
}

#[test]
fn test_weight_shape_never_changes() {
    let mut network = Network::new(&mut StdRng::seed_from_u64(17));
    let optimizer = Sgd::new(0.5);
    for _ in 0..10 {
        train_network(&mut network, &XOR_SAMPLES, &optimizer);
        assert_eq!(network.neurons().len(), NEURON_COUNT);
        assert!(network.neurons().iter().all(|n| n.weights.len() == WEIGHT_COUNT));
        assert!(network.neurons().iter().flat_map(|n| n.weights).all(f64::is_finite));
    }
}

#[test]
fn test_epoch_loss_falls_with_training() {
    let mut network = Network::new(&mut StdRng::seed_from_u64(0));
    let optimizer = Sgd::new(0.5);
    let first = train_network(&mut network, &XOR_SAMPLES, &optimizer);
    let mut last = first;
    for _ in 1..2500 {
        last = train_network(&mut network, &XOR_SAMPLES, &optimizer);
    }
    assert!(last < first, "loss went from {first} to {last}");
}

#[test]
fn test_sweep_prints_full_grid() {
    let network = trained(4);
    let config = SweepConfig::default();
    let mut out = Vec::new();

    let written = write_sweep(&network, &config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(written, 2601);
    assert_eq!(text.lines().count(), 2601);

    for (line, point) in text.lines().zip(grid::grid(&config)) {
        let (coords, outputs) = line.split_once(" = ").expect("line has '='");
        assert!(coords.starts_with('(') && coords.ends_with(')'));
        let values: Vec<f64> = outputs.split(' ').map(|v| v.parse().unwrap()).collect();
        let (o1, o2) = network.predict(point.column, point.row);
        assert_eq!(values.len(), 2);
        assert!((values[0] - o1).abs() < 1e-5);
        assert!((values[1] - o2).abs() < 1e-5);
    }
}
