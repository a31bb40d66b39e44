use serde::Serialize;

use crate::model::biomarker::BiomarkerKey;

/// Troponin I level (ng/mL) at which collaborators raise an acute-injury alert.
pub const CRITICAL_TROPONIN_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "alert", content = "biomarker", rename_all = "snake_case")]
pub enum Alert {
    CriticalScore,
    CriticalTroponin,
    EmptyPad(BiomarkerKey),
}

impl Alert {
    pub fn code(&self) -> String {
        match self {
            Alert::CriticalScore => "CRITICAL_SCORE".to_string(),
            Alert::CriticalTroponin => "CRITICAL_TROPONIN".to_string(),
            Alert::EmptyPad(key) => format!("EMPTY_PAD:{key}"),
        }
    }

    fn rank(&self) -> (u8, usize) {
        match self {
            Alert::CriticalScore => (0, 0),
            Alert::CriticalTroponin => (1, 0),
            Alert::EmptyPad(key) => (2, key.index()),
        }
    }
}

/// Stable report ordering: score, troponin, then empty pads by canonical key.
pub fn sort_alerts(alerts: &mut [Alert]) {
    alerts.sort_by_key(|a| a.rank());
}
