use crate::input::StripImage;
use crate::input::color::rgb_to_hsv8;
use crate::model::biomarker::BiomarkerKey;
use crate::model::roi::{ColorStat, HsvMean, PadGeometry, Roi};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadSample {
    pub key: BiomarkerKey,
    pub roi: Roi,
    pub stat: ColorStat,
}

/// Pixel rectangle for pad `index`, clipped to the image.
pub fn pad_roi(geometry: &PadGeometry, width: u32, height: u32, index: usize) -> Roi {
    let w = width as f64;
    let h = height as f64;
    let start = (w * geometry.x_start).floor() as u64;
    let spacing = (w * geometry.x_spacing).floor() as u64;
    let pad_w = (w * geometry.pad_width).floor() as u64;
    let pad_h = (h * geometry.pad_height).floor() as u64;
    let y0 = (h * geometry.y_offset).floor() as u64;

    let x0 = start + index as u64 * spacing;
    let x1 = (x0 + pad_w).min(width as u64);
    let y1 = (y0 + pad_h).min(height as u64);
    let x0 = x0.min(width as u64);
    let y0 = y0.min(height as u64);

    Roi {
        x: x0 as u32,
        y: y0 as u32,
        width: (x1 - x0) as u32,
        height: (y1 - y0) as u32,
    }
}

/// Mean 8-bit HSV over `roi`, or `Empty` when the region has no pixels.
pub fn mean_hsv(image: &StripImage<'_>, roi: &Roi) -> ColorStat {
    if roi.is_empty() {
        return ColorStat::Empty;
    }
    let mut sums = [0u64; 3];
    for y in roi.y..roi.y + roi.height {
        for px in image.row_span(y, roi.x, roi.x + roi.width).chunks_exact(3) {
            let hsv = rgb_to_hsv8(px[0], px[1], px[2]);
            sums[0] += hsv[0] as u64;
            sums[1] += hsv[1] as u64;
            sums[2] += hsv[2] as u64;
        }
    }
    let n = roi.area() as f64;
    ColorStat::Mean(HsvMean {
        h: sums[0] as f64 / n,
        s: sums[1] as f64 / n,
        v: sums[2] as f64 / n,
    })
}

/// Samples one pad per key, left to right in the given order.
pub fn extract(
    image: &StripImage<'_>,
    keys: &[BiomarkerKey],
    geometry: &PadGeometry,
) -> Vec<PadSample> {
    let mut out = Vec::with_capacity(keys.len());
    for (index, &key) in keys.iter().enumerate() {
        let roi = pad_roi(geometry, image.width(), image.height(), index);
        let stat = mean_hsv(image, &roi);
        match stat {
            ColorStat::Mean(m) => tracing::debug!(
                pad = index,
                biomarker = %key,
                x = roi.x,
                y = roi.y,
                w = roi.width,
                h = roi.height,
                "mean hsv = ({:.2}, {:.2}, {:.2})",
                m.h,
                m.s,
                m.v
            ),
            ColorStat::Empty => tracing::warn!(
                pad = index,
                biomarker = %key,
                "pad region clipped to zero area; using baseline value"
            ),
        }
        out.push(PadSample { key, roi, stat });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_roi.rs"]
mod tests;
