use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle, half-open on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Roi {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Roi {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Fixed fractional pad layout, relative to image width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PadGeometry {
    pub pad_width: f64,
    pub pad_height: f64,
    pub y_offset: f64,
    pub x_start: f64,
    pub x_spacing: f64,
}

impl Default for PadGeometry {
    fn default() -> Self {
        Self {
            pad_width: 0.12,
            pad_height: 0.40,
            y_offset: 0.30,
            x_start: 0.05,
            x_spacing: 0.18,
        }
    }
}

/// Mean hue/saturation/value over a region, 8-bit HSV scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HsvMean {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColorStat {
    Mean(HsvMean),
    /// Region clipped to zero area; maps to the baseline value.
    Empty,
}

impl ColorStat {
    pub fn is_empty(&self) -> bool {
        matches!(self, ColorStat::Empty)
    }
}
