use crate::model::record::{Dataset, Record};

/// Weighted sum in metric-set order, accumulated from zero.
pub fn score_values(normalized: &[f64], weights: &[f64]) -> f64 {
    let mut score = 0.0;
    for (&v, &w) in normalized.iter().zip(weights) {
        score += v * w;
    }
    score
}

pub fn score_record(record: &mut Record, normalized: &[f64], weights: &[f64]) -> f64 {
    let score = score_values(normalized, weights);
    record.risk_score = Some(score);
    score
}

pub fn score_dataset(dataset: &mut Dataset, normalized: &[Vec<f64>], weights: &[f64]) {
    for (record, values) in dataset.records.iter_mut().zip(normalized) {
        score_record(record, values, weights);
    }
    tracing::info!(
        role = %dataset.role,
        records = dataset.len(),
        "scored dataset"
    );
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
