use std::str::FromStr;

use crate::error::SenseError;
use crate::model::biomarker::BiomarkerKey;
use crate::model::roi::ColorStat;
use crate::model::scores::{BiomarkerReading, round3};
use crate::model::thresholds::{Direction, ThresholdProfile};
use crate::pipeline::stage1_roi::PadSample;

/// Saturation-driven linear interpolation between normal and high levels.
#[derive(Debug, Clone, Copy)]
pub struct ColorimetricMapper<'a> {
    profile: &'a ThresholdProfile,
}

impl<'a> ColorimetricMapper<'a> {
    pub fn new(profile: &'a ThresholdProfile) -> Self {
        Self { profile }
    }

    pub fn map_to_value(&self, stat: &ColorStat, key: BiomarkerKey) -> f64 {
        let t = self.profile.get(key);
        let mean = match stat {
            ColorStat::Empty => return t.normal,
            ColorStat::Mean(m) => m,
        };
        // NaN saturation degrades to s = 0 (baseline).
        let s = if mean.s.is_finite() {
            (mean.s / 255.0).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let value = match t.direction {
            Direction::Increasing => t.normal + s * (t.high - t.normal),
            Direction::Inverse => t.normal - s * (t.normal - t.high),
        };
        round3(value.max(0.0))
    }

    /// Boundary entry point for callers holding textual keys.
    pub fn map_named(&self, stat: &ColorStat, key: &str) -> Result<f64, SenseError> {
        let key = BiomarkerKey::from_str(key)?;
        Ok(self.map_to_value(stat, key))
    }

    pub fn map_samples(&self, samples: &[PadSample]) -> Vec<BiomarkerReading> {
        samples
            .iter()
            .map(|sample| BiomarkerReading {
                key: sample.key,
                value: self.map_to_value(&sample.stat, sample.key),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_map.rs"]
mod tests;
