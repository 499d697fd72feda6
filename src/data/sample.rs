/// One labeled training example.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Sample {
    pub fn new(inputs: Vec<f64>, targets: Vec<f64>) -> Sample {
        Sample { inputs, targets }
    }
}

/// The four XOR truth-table rows, in `(0,0), (0,1), (1,0), (1,1)` order.
pub fn xor() -> Vec<Sample> {
    vec![
        Sample::new(vec![0.0, 0.0], vec![0.0]),
        Sample::new(vec![0.0, 1.0], vec![1.0]),
        Sample::new(vec![1.0, 0.0], vec![1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_truth_table() {
        for s in xor() {
            let a = s.inputs[0] != 0.0;
            let b = s.inputs[1] != 0.0;
            assert_eq!(s.targets, vec![if a ^ b { 1.0 } else { 0.0 }]);
        }
    }
}
