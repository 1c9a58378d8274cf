use std::fmt;
use std::io::{self, Write};

use crate::error::ConfigError;
use crate::network::network::Network;
use crate::sweep::short_float::ShortFloat;

/// Intervals per axis; the grid has `SWEEP_STEPS + 1` points on each.
pub const SWEEP_STEPS: usize = 50;
/// Distance between neighbouring grid coordinates.
pub const SWEEP_STEP: f64 = 0.02;

/// Shape of the prediction grid. Coordinates are `index as f64 * step` for
/// `index` in `0..=steps`, so the endpoint count never depends on
/// floating-point accumulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    pub steps: usize,
    pub step: f64,
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::ZeroSweepSteps);
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidSweepStep(self.step));
        }
        Ok(())
    }

    /// Points along one axis, both endpoints included.
    pub fn points_per_axis(&self) -> usize {
        self.steps + 1
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig { steps: SWEEP_STEPS, step: SWEEP_STEP }
    }
}

/// One grid location. `column` is fed to the network as the first input and
/// printed first; `row` is the second input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub column: f64,
    pub row: f64,
}

impl GridPoint {
    pub fn predict(&self, network: &Network) -> (f64, f64) {
        network.predict(self.column, self.row)
    }
}

/// A grid point together with the network's outputs there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub point: GridPoint,
    pub output: (f64, f64),
}

impl fmt::Display for Prediction {
    /// `(<column>, <row>) = <output1> <output2>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) = {} {}",
            ShortFloat(self.point.column),
            ShortFloat(self.point.row),
            ShortFloat(self.output.0),
            ShortFloat(self.output.1),
        )
    }
}

/// Grid points in row-major order: outer loop over `row`, inner over `column`.
pub fn grid(config: &SweepConfig) -> impl Iterator<Item = GridPoint> {
    let (points, step) = (config.points_per_axis(), config.step);
    (0..points).flat_map(move |r| {
        (0..points).map(move |c| GridPoint {
            column: c as f64 * step,
            row: r as f64 * step,
        })
    })
}

/// Evaluates `network` at every grid point. Never mutates the network.
pub fn sweep<'a>(network: &'a Network, config: &SweepConfig) -> impl Iterator<Item = Prediction> + 'a {
    grid(config).map(move |point| Prediction {
        point,
        output: point.predict(network),
    })
}

/// Writes one line per grid point and returns how many were written.
pub fn write_sweep<W: Write>(network: &Network, config: &SweepConfig, mut out: W) -> io::Result<usize> {
    let mut lines = 0;
    for prediction in sweep(network, config) {
        writeln!(out, "{prediction}")?;
        lines += 1;
    }
    out.flush()?;
    Ok(lines)
}
