pub mod stage1_normalize;
pub mod stage2_score;
pub mod stage3_classify;
pub mod stage4_report;

use thiserror::Error;

use crate::input::InputError;
use crate::model::ModelError;
use crate::model::metrics::{MetricSet, WeightVector};
use crate::model::record::{Dataset, DatasetRole};
use crate::pipeline::stage1_normalize::{ScaleBounds, fit_bounds, transform};
use crate::pipeline::stage2_score::score_dataset;
use crate::pipeline::stage3_classify::{CutPoints, classify_dataset, fit_cutpoints};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("reference dataset has no records; bounds and cut points are undefined")]
    EmptyReference,
}

/// Everything one run derives. Bounds and cut points are fit once here and
/// never refit by later queries.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub metrics: MetricSet,
    pub weights: Vec<f64>,
    pub bounds: ScaleBounds,
    pub cutpoints: CutPoints,
    pub reference: Dataset,
    pub target: Dataset,
    pub target_normalized: Vec<Vec<f64>>,
}

pub fn run_pipeline(
    mut reference: Dataset,
    mut target: Dataset,
    metrics: &MetricSet,
    weights: &WeightVector,
) -> Result<PipelineOutput, PipelineError> {
    debug_assert_eq!(reference.role, DatasetRole::Reference);
    debug_assert_eq!(target.role, DatasetRole::Target);

    let aligned = weights.align(metrics)?;
    let weight_sum = weights.sum();
    if (weight_sum - 1.0).abs() > 1e-9 {
        tracing::warn!(
            weight_sum,
            "weights do not sum to 1.0; scores are not bounded to [0, 1]"
        );
    }

    let bounds = fit_bounds(&reference, metrics)?;
    let reference_normalized = transform(&reference, &bounds);
    let target_normalized = transform(&target, &bounds);

    score_dataset(&mut reference, &reference_normalized, &aligned);
    score_dataset(&mut target, &target_normalized, &aligned);

    let cutpoints = fit_cutpoints(&reference.scores())?;
    tracing::info!(
        q1 = cutpoints.q1,
        q2 = cutpoints.q2,
        q3 = cutpoints.q3,
        "fitted cut points from reference scores"
    );
    classify_dataset(&mut target, &cutpoints);

    Ok(PipelineOutput {
        metrics: metrics.clone(),
        weights: aligned,
        bounds,
        cutpoints,
        reference,
        target,
        target_normalized,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
