use serde::Serialize;

use crate::model::levels::RiskLevel;
use crate::model::record::Dataset;
use crate::pipeline::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CutPoints {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

/// Linear-interpolation quantile over an ascending slice. Interpolates from
/// the upper neighbour once past the midpoint, matching numpy's lerp.
pub fn quantile_linear(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let pos = (sorted.len() - 1) as f64 * p;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let a = sorted[lo];
    let b = sorted[hi];
    let frac = pos - lo as f64;
    let v = if frac >= 0.5 {
        b - (b - a) * (1.0 - frac)
    } else {
        a + (b - a) * frac
    };
    // keeps successive quantiles monotone across segment boundaries
    v.max(a).min(b)
}

pub fn fit_cutpoints(reference_scores: &[f64]) -> Result<CutPoints, PipelineError> {
    if reference_scores.is_empty() {
        return Err(PipelineError::EmptyReference);
    }
    let mut sorted = reference_scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(CutPoints {
        q1: quantile_linear(&sorted, 0.25),
        q2: quantile_linear(&sorted, 0.50),
        q3: quantile_linear(&sorted, 0.75),
    })
}

pub fn classify(score: f64, cuts: &CutPoints) -> RiskLevel {
    if score < cuts.q1 {
        RiskLevel::LowRisk
    } else if score < cuts.q2 {
        RiskLevel::MediumRisk
    } else if score < cuts.q3 {
        RiskLevel::HighRisk
    } else {
        RiskLevel::CriticalRisk
    }
}

pub fn classify_dataset(dataset: &mut Dataset, cuts: &CutPoints) {
    for record in &mut dataset.records {
        record.risk_level = record.risk_score.map(|s| classify(s, cuts));
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
