use crate::network::topology::{INPUT_COUNT, OUTPUT_COUNT};

/// One training example: two inputs and the two outputs expected for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub inputs: [f64; INPUT_COUNT],
    pub targets: [f64; OUTPUT_COUNT],
}

impl Sample {
    pub const fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Sample {
        Sample { inputs: [x1, x2], targets: [y1, y2] }
    }
}

/// The XOR truth table with targets `(NOT XOR, XOR)`, in the order every
/// epoch presents them.
pub const XOR_SAMPLES: [Sample; 4] = [
    Sample::new(0.0, 0.0, 1.0, 0.0),
    Sample::new(0.0, 1.0, 0.0, 1.0),
    Sample::new(1.0, 0.0, 0.0, 1.0),
    Sample::new(1.0, 1.0, 1.0, 0.0),
];
