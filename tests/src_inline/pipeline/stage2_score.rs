use super::*;
use crate::model::metrics::{MetricSet, WeightVector};
use crate::model::record::DatasetRole;

fn weights() -> Vec<f64> {
    WeightVector::default_v1()
        .align(&MetricSet::builtin())
        .unwrap()
}

#[test]
fn test_all_ones_scores_exactly_one() {
    assert_eq!(score_values(&[1.0; 5], &weights()), 1.0);
}

#[test]
fn test_all_zeros_scores_zero() {
    assert_eq!(score_values(&[0.0; 5], &weights()), 0.0);
}

#[test]
fn test_weighted_sum() {
    let score = score_values(&[1.0, 0.0, 0.5, 0.0, 1.0], &weights());
    assert!((score - (0.30 + 0.10 + 0.10)).abs() < 1e-12);
}

#[test]
fn test_score_record_sets_field() {
    let mut record = Record::new("Gangnam", "Cafe", vec![0.0; 5]);
    let score = score_record(&mut record, &[0.0, 1.0, 0.0, 0.0, 0.0], &weights());
    assert_eq!(record.risk_score, Some(score));
    assert!((score - 0.25).abs() < 1e-12);
}

#[test]
fn test_score_dataset_within_unit_interval() {
    let w = weights();
    let normalized: Vec<Vec<f64>> = (0..20)
        .map(|i| {
            let x = i as f64 / 19.0;
            vec![x, 1.0 - x, x * x, 0.5, (x * 3.0) % 1.0]
        })
        .collect();
    let records = (0..20)
        .map(|i| Record::new(format!("D{i}"), "Cafe", vec![0.0; 5]))
        .collect();
    let mut ds = Dataset::new(DatasetRole::Reference, records);
    score_dataset(&mut ds, &normalized, &w);
    for r in &ds.records {
        let s = r.risk_score.unwrap();
        assert!((0.0..=1.0).contains(&s));
        assert!(r.risk_level.is_none());
    }
}
