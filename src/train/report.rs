/// Summary of a completed `train_stochastic` run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    /// Updates actually performed; less than requested if stopped early.
    pub iterations: usize,
    /// Mean MSE over the training set before the first update.
    pub initial_loss: f64,
    /// Mean MSE over the training set after the last update.
    pub final_loss: f64,
}
