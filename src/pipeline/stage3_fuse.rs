use crate::error::SenseError;
use crate::model::biomarker::{BIOMARKER_ORDER, N_BIOMARKERS};
use crate::model::scores::{
    ANEMIA_REFERENCE, ANEMIA_SPAN, BiomarkerReading, FUSION_WEIGHTS, GLUCOSE_SPAN, GLUCOSE_ZERO,
    LPA_SPAN, NTPROBNP_LOG_SPAN, RiskScore, StressComponents, TROPONIN_SPAN, clip01,
};

/// SENSE-CRS fusion over values in canonical biomarker order.
pub fn fuse(values: &[f64; N_BIOMARKERS]) -> Result<RiskScore, SenseError> {
    for (&value, key) in values.iter().zip(BIOMARKER_ORDER) {
        if !value.is_finite() {
            return Err(SenseError::InvalidNumericInput { key, value });
        }
    }
    let [glucose, hemoglobin, ntprobnp, lpa, troponin] = *values;

    let components = StressComponents {
        glucose: clip01((glucose - GLUCOSE_ZERO) / GLUCOSE_SPAN),
        anemia: clip01((ANEMIA_REFERENCE - hemoglobin) / ANEMIA_SPAN),
        heart_failure: clip01((ntprobnp.max(0.0) + 1.0).ln() / NTPROBNP_LOG_SPAN),
        lipid: clip01(lpa / LPA_SPAN),
        troponin: clip01(troponin / TROPONIN_SPAN),
    };

    let score = components.contributions().iter().sum::<f64>();
    Ok(RiskScore {
        score: clip01(score),
        components,
    })
}

/// Reorders readings by key before fusing; each key must appear exactly once.
pub fn fuse_readings(readings: &[BiomarkerReading]) -> Result<RiskScore, SenseError> {
    let mut values = [f64::NAN; N_BIOMARKERS];
    let mut seen = [false; N_BIOMARKERS];
    for reading in readings {
        let idx = reading.key.index();
        if seen[idx] {
            return Err(SenseError::InvalidBiomarkerOrder(format!(
                "duplicate reading for {}",
                reading.key
            )));
        }
        seen[idx] = true;
        values[idx] = reading.value;
    }
    if let Some(missing) = BIOMARKER_ORDER.iter().find(|k| !seen[k.index()]) {
        return Err(SenseError::InvalidBiomarkerOrder(format!(
            "missing reading for {missing}"
        )));
    }
    let risk = fuse(&values)?;
    tracing::debug!(
        "fusion contributions: {:?}, weights sum {:.3}",
        risk.components.contributions(),
        FUSION_WEIGHTS.iter().sum::<f64>()
    );
    Ok(risk)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_fuse.rs"]
mod tests;
