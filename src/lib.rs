//! Colorimetric reader for SENSE 5-plex cardiac strips.
//!
//! A scan samples five fixed reagent pads, maps mean pad saturation to a
//! concentration per biomarker, and fuses the five values into the SENSE-CRS
//! composite risk score in [0, 1].

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::{Result, SenseError};
pub use input::StripImage;
pub use model::biomarker::{BIOMARKER_ORDER, BiomarkerKey};
pub use model::flags::{Alert, CRITICAL_TROPONIN_THRESHOLD};
pub use model::roi::{ColorStat, HsvMean, PadGeometry, Roi};
pub use model::scores::{BiomarkerReading, RiskScore, StressComponents};
pub use model::thresholds::ThresholdProfile;
pub use model::tiers::{CRITICAL_SCORE_THRESHOLD, RiskTier};
pub use pipeline::{ScanEngine, ScanOutput};

/// Runs one scan with the canonical calibration and default pad layout.
pub fn compute_readings_and_score(
    image: &StripImage<'_>,
    order: &[BiomarkerKey],
) -> Result<ScanOutput> {
    ScanEngine::new(ThresholdProfile::canonical(), PadGeometry::default())
        .compute_readings_and_score(image, order)
}
