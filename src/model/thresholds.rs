use std::sync::OnceLock;

use serde::Serialize;

use crate::model::biomarker::{BIOMARKER_ORDER, BiomarkerKey, N_BIOMARKERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Pad saturation rises with concentration.
    Increasing,
    /// Pad saturation rises as concentration falls (hemoglobin).
    Inverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BiomarkerThreshold {
    pub key: BiomarkerKey,
    pub normal: f64,
    pub elevated: f64,
    pub high: f64,
    pub direction: Direction,
}

/// Read-only calibration table, one entry per biomarker in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdProfile {
    pub revision: &'static str,
    entries: [BiomarkerThreshold; N_BIOMARKERS],
}

impl ThresholdProfile {
    pub fn sense_v1() -> Self {
        Self {
            revision: "sense-v1",
            entries: [
                BiomarkerThreshold {
                    key: BiomarkerKey::Glucose,
                    normal: 100.0,
                    elevated: 126.0,
                    high: 200.0,
                    direction: Direction::Increasing,
                },
                BiomarkerThreshold {
                    key: BiomarkerKey::Hemoglobin,
                    normal: 13.0,
                    elevated: 12.0,
                    high: 8.0,
                    direction: Direction::Inverse,
                },
                BiomarkerThreshold {
                    key: BiomarkerKey::NtProbnp,
                    normal: 120.0,
                    elevated: 140.0,
                    high: 500.0,
                    direction: Direction::Increasing,
                },
                BiomarkerThreshold {
                    key: BiomarkerKey::LipoproteinA,
                    normal: 30.0,
                    elevated: 50.0,
                    high: 100.0,
                    direction: Direction::Increasing,
                },
                BiomarkerThreshold {
                    key: BiomarkerKey::Troponin,
                    normal: 0.04,
                    elevated: 0.1,
                    high: 1.0,
                    direction: Direction::Increasing,
                },
            ],
        }
    }

    /// Process-wide table, built on first use and never mutated.
    pub fn canonical() -> &'static ThresholdProfile {
        static PROFILE: OnceLock<ThresholdProfile> = OnceLock::new();
        PROFILE.get_or_init(Self::sense_v1)
    }

    pub fn get(&self, key: BiomarkerKey) -> &BiomarkerThreshold {
        &self.entries[key.index()]
    }

    pub fn entries(&self) -> &[BiomarkerThreshold; N_BIOMARKERS] {
        &self.entries
    }
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        Self::sense_v1()
    }
}
