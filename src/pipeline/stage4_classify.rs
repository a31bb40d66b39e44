use crate::model::biomarker::BiomarkerKey;
use crate::model::flags::{Alert, CRITICAL_TROPONIN_THRESHOLD, sort_alerts};
use crate::model::scores::{BiomarkerReading, RiskScore};
use crate::model::status::ReadingStatus;
use crate::model::thresholds::ThresholdProfile;
use crate::model::tiers::{CRITICAL_SCORE_THRESHOLD, RiskTier};
use crate::pipeline::stage1_roi::PadSample;

#[derive(Debug, Clone)]
pub struct Classification {
    pub tier: RiskTier,
    pub statuses: Vec<(BiomarkerKey, ReadingStatus)>,
    pub alerts: Vec<Alert>,
}

pub fn classify_reading(reading: &BiomarkerReading, profile: &ThresholdProfile) -> ReadingStatus {
    let t = profile.get(reading.key);
    if reading.key == BiomarkerKey::Hemoglobin {
        return if reading.value > t.normal {
            ReadingStatus::Normal
        } else {
            ReadingStatus::AnemiaRisk
        };
    }
    if reading.value > t.high {
        ReadingStatus::High
    } else if reading.value > t.elevated {
        ReadingStatus::Elevated
    } else {
        ReadingStatus::Normal
    }
}

pub fn collect_alerts(
    readings: &[BiomarkerReading],
    risk: &RiskScore,
    samples: &[PadSample],
) -> Vec<Alert> {
    let mut alerts = Vec::new();
    if risk.score >= CRITICAL_SCORE_THRESHOLD {
        alerts.push(Alert::CriticalScore);
    }
    if readings
        .iter()
        .any(|r| r.key == BiomarkerKey::Troponin && r.value >= CRITICAL_TROPONIN_THRESHOLD)
    {
        alerts.push(Alert::CriticalTroponin);
    }
    for sample in samples {
        if sample.stat.is_empty() {
            alerts.push(Alert::EmptyPad(sample.key));
        }
    }
    sort_alerts(&mut alerts);
    alerts
}

pub fn classify(
    readings: &[BiomarkerReading],
    risk: &RiskScore,
    samples: &[PadSample],
    profile: &ThresholdProfile,
) -> Classification {
    let mut statuses = readings
        .iter()
        .map(|r| (r.key, classify_reading(r, profile)))
        .collect::<Vec<_>>();
    statuses.sort_by_key(|(key, _)| key.index());
    Classification {
        tier: RiskTier::from_score(risk.score),
        statuses,
        alerts: collect_alerts(readings, risk, samples),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_classify.rs"]
mod tests;
