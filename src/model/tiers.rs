use serde::Serialize;

pub const MODERATE_SCORE_THRESHOLD: f64 = 0.30;
pub const CRITICAL_SCORE_THRESHOLD: f64 = 0.60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn from_score(score: f64) -> Self {
        if score < MODERATE_SCORE_THRESHOLD {
            RiskTier::Low
        } else if score < CRITICAL_SCORE_THRESHOLD {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "LOW RISK",
            RiskTier::Moderate => "MODERATE RISK",
            RiskTier::High => "HIGH RISK",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            RiskTier::Low => "Annual screening",
            RiskTier::Moderate => "Lifestyle and blood pressure monitoring",
            RiskTier::High => "Urgent cardiology consult",
        }
    }
}
