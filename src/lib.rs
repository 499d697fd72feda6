pub mod math;
pub mod activation;
pub mod error;
pub mod network;
pub mod data;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::{sigmoid, sigmoid_derivative};
pub use error::{NetworkError, Result};
pub use network::{Network, NetworkSpec};
pub use data::Sample;
pub use loss::MseLoss;
pub use train::{train_stochastic, TrainConfig, TrainReport};
