use std::collections::{BTreeMap, BTreeSet};

use crate::model::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDef {
    pub id: &'static str,
    pub name: &'static str,
}

const BUILTIN_METRICS: &[MetricDef] = &[
    MetricDef {
        id: "closure_rate",
        name: "Closure Rate",
    },
    MetricDef {
        id: "sales_per_store_inv",
        name: "Sales per Store (inverted)",
    },
    MetricDef {
        id: "traffic_conversion_rate",
        name: "Traffic Conversion Rate",
    },
    MetricDef {
        id: "store_density",
        name: "Store Density",
    },
    MetricDef {
        id: "franchise_ratio_change",
        name: "Franchise Ratio Change",
    },
];

const BUILTIN_WEIGHTS: &[(&str, f64)] = &[
    ("closure_rate", 0.30),
    ("sales_per_store_inv", 0.25),
    ("traffic_conversion_rate", 0.20),
    ("store_density", 0.15),
    ("franchise_ratio_change", 0.10),
];

pub fn builtin_metrics() -> &'static [MetricDef] {
    BUILTIN_METRICS
}

/// Ordered metric identities. Record values, bounds and aligned weights all
/// follow this order.
#[derive(Debug, Clone)]
pub struct MetricSet {
    pub metrics: Vec<MetricDef>,
}

impl MetricSet {
    pub fn builtin() -> Self {
        Self {
            metrics: builtin_metrics().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.metrics.iter().map(|m| m.id)
    }
}

#[derive(Debug, Clone)]
pub struct WeightVector {
    pub weights: BTreeMap<String, f64>,
}

impl WeightVector {
    pub fn default_v1() -> Self {
        Self::from_pairs(BUILTIN_WEIGHTS)
    }

    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self {
            weights: pairs.iter().map(|&(k, w)| (k.to_string(), w)).collect(),
        }
    }

    pub fn sum(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Weights laid out in metric-set order. Key sets must match exactly.
    pub fn align(&self, metrics: &MetricSet) -> Result<Vec<f64>, ModelError> {
        let metric_keys: BTreeSet<&str> = metrics.ids().collect();
        let weight_keys: BTreeSet<&str> = self.weights.keys().map(String::as_str).collect();
        if metric_keys != weight_keys {
            let missing: Vec<&str> = metric_keys.difference(&weight_keys).copied().collect();
            let extra: Vec<&str> = weight_keys.difference(&metric_keys).copied().collect();
            return Err(ModelError::WeightMismatch(format!(
                "missing weights [{}], unknown weights [{}]",
                missing.join(", "),
                extra.join(", ")
            )));
        }

        let mut out = Vec::with_capacity(metrics.len());
        for id in metrics.ids() {
            let weight = self.weights[id];
            if weight < 0.0 {
                return Err(ModelError::NegativeWeight {
                    metric: id.to_string(),
                    weight,
                });
            }
            out.push(weight);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/metrics.rs"]
mod tests;
