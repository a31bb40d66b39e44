use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SenseError};
use crate::model::roi::PadGeometry;
use crate::pipeline::stage5_report::ReportOptions;

/// Optional JSON overrides; the calibration revision is not configurable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub geometry: PadGeometry,
    pub report: ReportOptions,
}

impl ScanConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: ScanConfig =
            serde_json::from_str(text).map_err(|e| SenseError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::info!("loaded scan config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let g = &self.geometry;
        let fields = [
            ("pad_width", g.pad_width),
            ("pad_height", g.pad_height),
            ("y_offset", g.y_offset),
            ("x_start", g.x_start),
            ("x_spacing", g.x_spacing),
        ];
        for (name, value) in fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SenseError::Config(format!(
                    "geometry.{name} must be a fraction in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}
