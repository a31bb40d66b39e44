pub mod stage1_roi;
pub mod stage2_map;
pub mod stage3_fuse;
pub mod stage4_classify;
pub mod stage5_report;

use crate::error::Result;
use crate::input::StripImage;
use crate::model::biomarker::{BiomarkerKey, N_BIOMARKERS, validate_order};
use crate::model::roi::PadGeometry;
use crate::model::scores::{BiomarkerReading, RiskScore};
use crate::model::thresholds::ThresholdProfile;

use stage1_roi::{PadSample, extract};
use stage2_map::ColorimetricMapper;
use stage3_fuse::fuse_readings;

#[derive(Debug, Clone)]
pub struct ScanOutput {
    /// One sample per pad, in strip order.
    pub samples: Vec<PadSample>,
    /// One reading per biomarker, in canonical key order.
    pub readings: Vec<BiomarkerReading>,
    pub risk: RiskScore,
}

/// Stateless scan pipeline over an injected calibration table and pad layout.
#[derive(Debug, Clone, Copy)]
pub struct ScanEngine<'a> {
    pub profile: &'a ThresholdProfile,
    pub geometry: PadGeometry,
}

impl<'a> ScanEngine<'a> {
    pub fn new(profile: &'a ThresholdProfile, geometry: PadGeometry) -> Self {
        Self { profile, geometry }
    }

    pub fn compute_readings_and_score(
        &self,
        image: &StripImage<'_>,
        order: &[BiomarkerKey],
    ) -> Result<ScanOutput> {
        let order = validate_order(order)?;
        let samples = extract(image, &order, &self.geometry);
        debug_assert_eq!(samples.len(), N_BIOMARKERS);

        let mapper = ColorimetricMapper::new(self.profile);
        let mut readings = mapper.map_samples(&samples);
        readings.sort_by_key(|r| r.key.index());

        let risk = fuse_readings(&readings)?;
        tracing::info!(
            revision = self.profile.revision,
            "scan {}x{}: SENSE-CRS {:.3}",
            image.width(),
            image.height(),
            risk.score
        );

        Ok(ScanOutput {
            samples,
            readings,
            risk,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
