use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    LowRisk,
    #[serde(rename = "Medium Risk")]
    MediumRisk,
    #[serde(rename = "High Risk")]
    HighRisk,
    #[serde(rename = "Critical Risk")]
    CriticalRisk,
}

pub fn level_order() -> &'static [RiskLevel] {
    &[
        RiskLevel::LowRisk,
        RiskLevel::MediumRisk,
        RiskLevel::HighRisk,
        RiskLevel::CriticalRisk,
    ]
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::LowRisk => "Low Risk",
            RiskLevel::MediumRisk => "Medium Risk",
            RiskLevel::HighRisk => "High Risk",
            RiskLevel::CriticalRisk => "Critical Risk",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            RiskLevel::LowRisk => "[LOW]",
            RiskLevel::MediumRisk => "[MEDIUM]",
            RiskLevel::HighRisk => "[HIGH]",
            RiskLevel::CriticalRisk => "[CRITICAL]",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            RiskLevel::LowRisk => "Risk is low for this market. Stable operation is expected.",
            RiskLevel::MediumRisk => "This market carries moderate risk. Monitor it closely.",
            RiskLevel::HighRisk => "This market carries high risk. Consider a strategic response.",
            RiskLevel::CriticalRisk => {
                "This market is at critical risk. Proceed with great caution."
            }
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
