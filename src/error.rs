use thiserror::Error;

/// Errors raised by network construction, training and prediction.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("{layer} layer size must be at least 1")]
    ZeroSize { layer: &'static str },

    #[error("learning rate must be finite and positive, got {0}")]
    InvalidLearningRate(f64),

    #[error("input length mismatch: expected {expected}, got {actual}")]
    InputLength { expected: usize, actual: usize },

    #[error("target length mismatch: expected {expected}, got {actual}")]
    TargetLength { expected: usize, actual: usize },

    #[error("training set is empty")]
    EmptyDataset,

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NetworkError {
    /// True for the argument-validation kinds. These never leave the
    /// network partially updated.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            NetworkError::ZeroSize { .. }
                | NetworkError::InvalidLearningRate(_)
                | NetworkError::InputLength { .. }
                | NetworkError::TargetLength { .. }
                | NetworkError::EmptyDataset
        )
    }
}

pub type Result<T> = std::result::Result<T, NetworkError>;
