/// Logistic sigmoid, `1 / (1 + e^-x)`. Maps every finite real into (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed through its output `a = sigmoid(z)`.
///
/// Backprop already holds the activation, so `a · (1 - a)` avoids a second
/// exponential per neuron.
pub fn sigmoid_derivative_from_output(a: f64) -> f64 {
    a * (1.0 - a)
}
