/// Logistic sigmoid, squashing any real into the open interval (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid derivative expressed in terms of the activated value.
///
/// `y` must already be `sigmoid(x)`; passing a pre-activation sum gives a
/// meaningless result.
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}
