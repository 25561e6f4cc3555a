use serde::Serialize;

use crate::model::metrics::MetricSet;
use crate::model::record::Dataset;
use crate::pipeline::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricBounds {
    pub metric: &'static str,
    pub min: f64,
    pub max: f64,
}

impl MetricBounds {
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Min-max rescale without clamping. A zero-range metric maps to 0.0.
    pub fn scale(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (value - self.min) / (self.max - self.min)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleBounds {
    pub metrics: Vec<MetricBounds>,
}

pub fn fit_bounds(
    reference: &Dataset,
    metrics: &MetricSet,
) -> Result<ScaleBounds, PipelineError> {
    if reference.is_empty() {
        return Err(PipelineError::EmptyReference);
    }

    let mut out = Vec::with_capacity(metrics.len());
    for (idx, metric) in metrics.ids().enumerate() {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in &reference.records {
            let v = record.values[idx];
            min = min.min(v);
            max = max.max(v);
        }
        let bounds = MetricBounds { metric, min, max };
        if bounds.is_degenerate() {
            tracing::warn!(
                metric,
                value = min,
                "metric is constant across the reference dataset; normalizing to 0.0"
            );
        }
        tracing::debug!(metric, min, max, "fitted metric bounds");
        out.push(bounds);
    }

    Ok(ScaleBounds { metrics: out })
}

pub fn transform_values(values: &[f64], bounds: &ScaleBounds) -> Vec<f64> {
    values
        .iter()
        .zip(&bounds.metrics)
        .map(|(&v, b)| b.scale(v))
        .collect()
}

pub fn transform(dataset: &Dataset, bounds: &ScaleBounds) -> Vec<Vec<f64>> {
    dataset
        .records
        .iter()
        .map(|r| transform_values(&r.values, bounds))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
