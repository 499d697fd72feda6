use std::sync::{Arc, atomic::AtomicBool};
use serde::{Serialize, Deserialize};

/// Configuration for a `train_stochastic` run.
///
/// # Fields
/// - `iterations`   — number of single-example updates to perform
/// - `log_interval` — emit the mean loss every this many iterations; `0`
///                    disables progress logging
/// - `seed`         — optional seed for sample selection (and, in the
///                    binary, weight initialization); entropy when absent
/// - `stop_flag`    — optional atomic flag; when set to `true` from another
///                    thread the run ends before the next update
///
/// Fields missing from a JSON config fall back to `TrainConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub iterations: usize,
    pub log_interval: usize,
    pub seed: Option<u64>,
    #[serde(skip)]
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no logging, no seed and no stop flag.
    pub fn new(iterations: usize) -> Self {
        TrainConfig {
            iterations,
            log_interval: 0,
            seed: None,
            stop_flag: None,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: 10_000,
            log_interval: 1_000,
            seed: None,
            stop_flag: None,
        }
    }
}
