// Trains the 2-2-2 network on XOR / NOT XOR, then prints its outputs over a
// 51 × 51 grid of inputs in [0, 1]², one `(x, y) = out1 out2` line per point.
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use tracing::info;

use backprop_xor::{train_loop, write_sweep, Network, SweepConfig, TrainConfig, XOR_SAMPLES};

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only the sweep.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let train_config = TrainConfig::default();
    let sweep_config = SweepConfig::default();
    sweep_config.validate()?;

    let mut network = Network::random();
    train_loop(&mut network, &XOR_SAMPLES, &train_config)?;

    let stdout = io::stdout();
    let lines = write_sweep(&network, &sweep_config, BufWriter::new(stdout.lock()))
        .context("failed to write prediction sweep")?;
    info!(lines, "prediction sweep written");

    Ok(())
}
