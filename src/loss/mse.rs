use crate::data::Sample;
use crate::error::Result;
use crate::network::network::Network;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }
}

/// Mean per-sample MSE of `network` over `samples`. Read-only.
pub fn mean_loss(network: &Network, samples: &[Sample]) -> Result<f64> {
    if samples.is_empty() {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for sample in samples {
        let output = network.predict(&sample.inputs)?;
        total += MseLoss::loss(&output, &sample.targets);
    }
    Ok(total / samples.len() as f64)
}
