use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    Normal,
    Elevated,
    High,
    AnemiaRisk,
}

impl ReadingStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReadingStatus::Normal => "Normal",
            ReadingStatus::Elevated => "Elevated",
            ReadingStatus::High => "High",
            ReadingStatus::AnemiaRisk => "Risk of Anemia",
        }
    }
}
