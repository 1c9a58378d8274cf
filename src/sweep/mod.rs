pub mod grid;
pub mod short_float;

pub use grid::{grid, sweep, write_sweep, GridPoint, Prediction, SweepConfig};
pub use short_float::ShortFloat;
