use std::sync::atomic::Ordering;

use rand::Rng;
use tracing::info;

use crate::data::Sample;
use crate::error::{NetworkError, Result};
use crate::loss::mse::mean_loss;
use crate::network::network::Network;
use crate::train::report::TrainReport;
use crate::train::train_config::TrainConfig;

/// Trains `network` by repeatedly picking one sample uniformly at random
/// (with replacement) and applying a single stochastic update.
///
/// Every sample is shape-checked up front, so a malformed set fails before
/// any weight changes.
pub fn train_stochastic<R: Rng>(
    network: &mut Network,
    samples: &[Sample],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainReport> {
    if samples.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }
    for sample in samples {
        if sample.inputs.len() != network.input_size() {
            return Err(NetworkError::InputLength {
                expected: network.input_size(),
                actual: sample.inputs.len(),
            });
        }
        if sample.targets.len() != network.output_size() {
            return Err(NetworkError::TargetLength {
                expected: network.output_size(),
                actual: sample.targets.len(),
            });
        }
    }
    let initial_loss = mean_loss(network, samples)?;

    let mut completed = 0;
    for iteration in 1..=config.iterations {
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }

        let sample = &samples[rng.gen_range(0..samples.len())];
        network.train(&sample.inputs, &sample.targets)?;
        completed = iteration;

        if config.log_interval > 0 && iteration % config.log_interval == 0 {
            info!(
                "Iteration {}/{}: loss={:.6}",
                iteration,
                config.iterations,
                mean_loss(network, samples)?
            );
        }
    }

    Ok(TrainReport {
        iterations: completed,
        initial_loss,
        final_loss: mean_loss(network, samples)?,
    })
}
