pub mod mse;

pub use mse::{mean_loss, MseLoss};
