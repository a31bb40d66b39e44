pub mod biomarker;
pub mod flags;
pub mod roi;
pub mod scores;
pub mod status;
pub mod thresholds;
pub mod tiers;

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
