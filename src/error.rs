use thiserror::Error;

use crate::model::biomarker::BiomarkerKey;

#[derive(Debug, Error)]
pub enum SenseError {
    #[error("unknown biomarker key: {0:?}")]
    UnknownBiomarkerKey(String),
    #[error("invalid biomarker order: {0}")]
    InvalidBiomarkerOrder(String),
    #[error("invalid numeric input for {key}: {value}")]
    InvalidNumericInput { key: BiomarkerKey, value: f64 },
    #[error("invalid image: {0}")]
    InvalidImage(String),
    #[error("image has zero area ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SenseError>;
