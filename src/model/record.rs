use crate::model::levels::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetRole {
    Reference,
    Target,
}

impl std::fmt::Display for DatasetRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetRole::Reference => f.write_str("reference"),
            DatasetRole::Target => f.write_str("target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub district: String,
    pub market: String,
    /// Raw metric values in metric-set order.
    pub values: Vec<f64>,
    pub risk_score: Option<f64>,
    pub risk_level: Option<RiskLevel>,
}

impl Record {
    pub fn new(district: impl Into<String>, market: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            district: district.into(),
            market: market.into(),
            values,
            risk_score: None,
            risk_level: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub role: DatasetRole,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(role: DatasetRole, records: Vec<Record>) -> Self {
        Self { role, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.risk_score).collect()
    }
}
