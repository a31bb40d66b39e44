use serde::Serialize;

use crate::model::biomarker::{BiomarkerKey, N_BIOMARKERS};

pub const GLUCOSE_ZERO: f64 = 70.0;
pub const GLUCOSE_SPAN: f64 = 200.0;
pub const ANEMIA_REFERENCE: f64 = 14.0;
pub const ANEMIA_SPAN: f64 = 6.0;
pub const NTPROBNP_LOG_SPAN: f64 = 6.0;
pub const LPA_SPAN: f64 = 100.0;
pub const TROPONIN_SPAN: f64 = 0.5;

/// SENSE-CRS weights in canonical biomarker order.
pub const FUSION_WEIGHTS: [f64; N_BIOMARKERS] = [0.30, 0.25, 0.20, 0.15, 0.10];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BiomarkerReading {
    pub key: BiomarkerKey,
    pub value: f64,
}

/// Clamped per-biomarker stress terms, each in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct StressComponents {
    pub glucose: f64,
    pub anemia: f64,
    pub heart_failure: f64,
    pub lipid: f64,
    pub troponin: f64,
}

impl StressComponents {
    pub fn as_array(&self) -> [f64; N_BIOMARKERS] {
        [
            self.glucose,
            self.anemia,
            self.heart_failure,
            self.lipid,
            self.troponin,
        ]
    }

    /// Weighted contribution of each term to the composite score.
    pub fn contributions(&self) -> [f64; N_BIOMARKERS] {
        let mut out = self.as_array();
        for (c, w) in out.iter_mut().zip(FUSION_WEIGHTS) {
            *c *= w;
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskScore {
    pub score: f64,
    pub components: StressComponents,
}

pub fn clip01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
