pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::levels::{RiskLevel, level_order};
use crate::model::record::Dataset;
use crate::pipeline::stage1_normalize::MetricBounds;
use crate::pipeline::stage3_classify::CutPoints;

#[derive(Debug, Clone, Serialize)]
pub struct TierStat {
    pub level: RiskLevel,
    pub count: usize,
    pub fraction: f64,
}

/// Count of target records per tier, always listing all four tiers.
#[derive(Debug, Clone, Serialize)]
pub struct TierSummary {
    pub total: usize,
    pub tiers: Vec<TierStat>,
}

impl TierSummary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let total = dataset.len();
        let mut tiers = Vec::with_capacity(level_order().len());
        for &level in level_order() {
            let count = dataset
                .records
                .iter()
                .filter(|r| r.risk_level == Some(level))
                .count();
            let fraction = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            };
            tiers.push(TierStat {
                level,
                count,
                fraction,
            });
        }
        Self { total, tiers }
    }

    pub fn count(&self, level: RiskLevel) -> usize {
        self.tiers
            .iter()
            .find(|t| t.level == level)
            .map(|t| t.count)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub weight: f64,
    pub bounds: MetricBounds,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub n_reference: usize,
    pub n_target: usize,
    pub n_districts: usize,
    pub metrics: Vec<MetricSummary>,
    pub cutpoints: CutPoints,
    pub tiers: TierSummary,
}

pub fn format_f64_4(v: f64) -> String {
    format!("{:.4}", v)
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
