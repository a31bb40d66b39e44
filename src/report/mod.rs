pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::biomarker::BiomarkerKey;
use crate::model::flags::Alert;
use crate::model::roi::{ColorStat, Roi};
use crate::model::scores::StressComponents;
use crate::model::status::ReadingStatus;
use crate::model::tiers::RiskTier;

#[derive(Debug, Clone, Serialize)]
pub struct ReadingRow {
    pub biomarker: BiomarkerKey,
    pub label: &'static str,
    pub unit: &'static str,
    pub value: f64,
    pub status: ReadingStatus,
    pub pad_index: usize,
    pub roi: Roi,
    pub color: ColorStat,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub tool: ToolMeta,
    pub image: Option<String>,
    pub width: u32,
    pub height: u32,
    pub calibration_revision: &'static str,
    pub readings: Vec<ReadingRow>,
    pub components: StressComponents,
    pub contributions: [f64; 5],
    pub score: f64,
    pub tier: RiskTier,
    pub tier_label: &'static str,
    pub recommendation: &'static str,
    pub alerts: Vec<Alert>,
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn format_color(stat: &ColorStat) -> [String; 3] {
    match stat {
        ColorStat::Mean(m) => [
            format_f64_3(m.h),
            format_f64_3(m.s),
            format_f64_3(m.v),
        ],
        ColorStat::Empty => ["NA".to_string(), "NA".to_string(), "NA".to_string()],
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
