use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::network::network::Network;
use crate::train::train_config::TrainConfig;

/// A serializable description of a network's dimensions, learning rate and
/// training schedule. Holds no weights.
///
/// Fields:
/// - `input_size`    — length of every input vector
/// - `hidden_size`   — neurons in the single hidden layer
/// - `output_size`   — length of every target/output vector
/// - `learning_rate` — step size applied to every weight update
/// - `train`         — iteration count, log interval and optional seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub train: TrainConfig,
}

impl NetworkSpec {
    /// 2-2-1 network at learning rate 0.1, trained for 10,000 iterations.
    pub fn xor() -> NetworkSpec {
        NetworkSpec {
            input_size: 2,
            hidden_size: 2,
            output_size: 1,
            learning_rate: 0.1,
            train: TrainConfig::default(),
        }
    }

    /// Validates the dimensions and draws initial weights from `rng`.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Result<Network> {
        Network::with_rng(
            self.input_size,
            self.hidden_size,
            self.output_size,
            self.learning_rate,
            rng,
        )
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec::xor()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn test_json_file_round_trip() {
        let mut spec = NetworkSpec::xor();
        spec.hidden_size = 4;
        spec.train.seed = Some(17);
        let path = std::env::temp_dir().join(format!("ferrite-mlp-spec-{}.json", std::process::id()));
        let path = path.to_str().unwrap();

        spec.save_json(path).unwrap();
        let loaded = NetworkSpec::load_json(path).unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(loaded.hidden_size, 4);
        assert_eq!(loaded.train.seed, Some(17));
        assert_eq!(loaded.train.iterations, 10_000);
    }

    #[test]
    fn test_train_section_is_optional() {
        let spec: NetworkSpec = serde_json::from_str(
            r#"{"input_size": 3, "hidden_size": 5, "output_size": 2, "learning_rate": 0.2}"#,
        )
        .unwrap();
        assert_eq!(spec.train.iterations, 10_000);
        assert_eq!(spec.train.seed, None);

        let net = spec.build(&mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(net.input_size(), 3);
        assert_eq!(net.weights_hidden_output().cols(), 2);
    }

    #[test]
    fn test_partial_train_section_keeps_defaults() {
        let spec: NetworkSpec = serde_json::from_str(
            r#"{"input_size": 2, "hidden_size": 2, "output_size": 1, "learning_rate": 0.1,
                "train": {"iterations": 500}}"#,
        )
        .unwrap();
        assert_eq!(spec.train.iterations, 500);
        assert_eq!(spec.train.log_interval, 1_000);
        assert_eq!(spec.train.seed, None);

        let spec: NetworkSpec = serde_json::from_str(
            r#"{"input_size": 2, "hidden_size": 2, "output_size": 1, "learning_rate": 0.1,
                "train": {"seed": 9}}"#,
        )
        .unwrap();
        assert_eq!(spec.train.iterations, 10_000);
        assert_eq!(spec.train.log_interval, 1_000);
        assert_eq!(spec.train.seed, Some(9));
    }

    #[test]
    fn test_build_validates() {
        let mut spec = NetworkSpec::xor();
        spec.hidden_size = 0;
        let err = spec.build(&mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, NetworkError::ZeroSize { layer: "hidden" }));
    }

    #[test]
    fn test_missing_file() {
        let err = NetworkSpec::load_json("/nonexistent/ferrite-mlp.json").unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
