use crate::{
    loss::mse::MseLoss,
    network::network::Network,
    optim::sgd::Sgd,
    train::dataset::Sample,
};

/// Runs one epoch of online training: one `train` call per sample, in the
/// order given. Returns the mean loss of the pre-update outputs.
pub fn train_network(network: &mut Network, samples: &[Sample], optimizer: &Sgd) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut total_loss = 0.0;
    for sample in samples {
        let output = network.train(sample, optimizer);
        total_loss += MseLoss::loss(output, sample.targets);
    }

    total_loss / samples.len() as f64
}
