pub mod levels;
pub mod metrics;
pub mod record;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("weight vector does not match metric set: {0}")]
    WeightMismatch(String),
    #[error("negative weight for metric {metric}: {weight}")]
    NegativeWeight { metric: String, weight: f64 },
}
