/// Squared error, used only to report how training is going; the update rule
/// itself lives in `Network::compute_gradients`.
pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE over the output pair: mean((predicted - expected)²)
    pub fn loss(predicted: (f64, f64), expected: [f64; 2]) -> f64 {
        let (p1, p2) = predicted;
        ((p1 - expected[0]).powi(2) + (p2 - expected[1]).powi(2)) / 2.0
    }
}
