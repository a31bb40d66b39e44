use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SenseError;

pub const N_BIOMARKERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BiomarkerKey {
    Glucose,
    Hemoglobin,
    NtProbnp,
    LipoproteinA,
    Troponin,
}

/// Canonical pad order on the strip, left to right.
pub const BIOMARKER_ORDER: [BiomarkerKey; N_BIOMARKERS] = [
    BiomarkerKey::Glucose,
    BiomarkerKey::Hemoglobin,
    BiomarkerKey::NtProbnp,
    BiomarkerKey::LipoproteinA,
    BiomarkerKey::Troponin,
];

impl BiomarkerKey {
    /// Position in `BIOMARKER_ORDER`; indexes every per-biomarker table.
    pub fn index(self) -> usize {
        match self {
            BiomarkerKey::Glucose => 0,
            BiomarkerKey::Hemoglobin => 1,
            BiomarkerKey::NtProbnp => 2,
            BiomarkerKey::LipoproteinA => 3,
            BiomarkerKey::Troponin => 4,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            BiomarkerKey::Glucose => "glucose",
            BiomarkerKey::Hemoglobin => "hemoglobin",
            BiomarkerKey::NtProbnp => "nt-probnp",
            BiomarkerKey::LipoproteinA => "lipoprotein-a",
            BiomarkerKey::Troponin => "troponin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BiomarkerKey::Glucose => "Blood Glucose",
            BiomarkerKey::Hemoglobin => "Hemoglobin",
            BiomarkerKey::NtProbnp => "NT-proBNP",
            BiomarkerKey::LipoproteinA => "Lipoprotein(a)",
            BiomarkerKey::Troponin => "Troponin I",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            BiomarkerKey::Glucose => "mg/dL",
            BiomarkerKey::Hemoglobin => "g/dL",
            BiomarkerKey::NtProbnp => "pg/mL",
            BiomarkerKey::LipoproteinA => "mg/dL",
            BiomarkerKey::Troponin => "ng/mL",
        }
    }
}

impl fmt::Display for BiomarkerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BiomarkerKey {
    type Err = SenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glucose" => Ok(BiomarkerKey::Glucose),
            "hemoglobin" | "hb" => Ok(BiomarkerKey::Hemoglobin),
            "nt-probnp" | "ntprobnp" => Ok(BiomarkerKey::NtProbnp),
            "lipoprotein-a" | "lpa" => Ok(BiomarkerKey::LipoproteinA),
            "troponin" => Ok(BiomarkerKey::Troponin),
            _ => Err(SenseError::UnknownBiomarkerKey(s.to_string())),
        }
    }
}

/// Validates a caller-supplied pad order: all five keys, each exactly once.
pub fn validate_order(order: &[BiomarkerKey]) -> Result<[BiomarkerKey; N_BIOMARKERS], SenseError> {
    if order.len() != N_BIOMARKERS {
        return Err(SenseError::InvalidBiomarkerOrder(format!(
            "expected {N_BIOMARKERS} keys, got {}",
            order.len()
        )));
    }
    let mut seen = [false; N_BIOMARKERS];
    let mut out = BIOMARKER_ORDER;
    for (slot, &key) in order.iter().enumerate() {
        if seen[key.index()] {
            return Err(SenseError::InvalidBiomarkerOrder(format!(
                "duplicate key {key}"
            )));
        }
        seen[key.index()] = true;
        out[slot] = key;
    }
    Ok(out)
}

/// Parses a comma-separated order such as `glucose,hb,ntprobnp,lpa,troponin`.
pub fn parse_order(text: &str) -> Result<[BiomarkerKey; N_BIOMARKERS], SenseError> {
    let keys = text
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(BiomarkerKey::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    validate_order(&keys)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/biomarker.rs"]
mod tests;
