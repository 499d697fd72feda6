pub mod trainer;
pub mod report;
pub mod train_config;

pub use trainer::train_stochastic;
pub use report::TrainReport;
pub use train_config::TrainConfig;
