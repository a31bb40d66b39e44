use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{Rgb, RgbImage};
use serde::Deserialize;

use crate::error::Result;
use crate::model::roi::Roi;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::ScanOutput;
use crate::pipeline::stage4_classify::Classification;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{ReadingRow, ScanSummary, ToolMeta, format_color, format_f64_3};

const OVERLAY_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const OVERLAY_THICKNESS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportOptions {
    pub overlay: bool,
    pub tsv: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            overlay: false,
            tsv: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub image_name: Option<String>,
    pub image: &'a RgbImage,
    pub scan: &'a ScanOutput,
    pub classification: &'a Classification,
    pub profile: &'a ThresholdProfile,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn build_summary(input: &Stage5Input<'_>) -> ScanSummary {
    // readings and statuses are both in canonical key order.
    let mut readings = Vec::with_capacity(input.scan.samples.len());
    for (pad_index, sample) in input.scan.samples.iter().enumerate() {
        let idx = sample.key.index();
        readings.push(ReadingRow {
            biomarker: sample.key,
            label: sample.key.label(),
            unit: sample.key.unit(),
            value: input.scan.readings[idx].value,
            status: input.classification.statuses[idx].1,
            pad_index,
            roi: sample.roi,
            color: sample.stat,
        });
    }
    readings.sort_by_key(|row| row.biomarker.index());

    let tier = input.classification.tier;
    ScanSummary {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        image: input.image_name.clone(),
        width: input.image.width(),
        height: input.image.height(),
        calibration_revision: input.profile.revision,
        readings,
        components: input.scan.risk.components,
        contributions: input.scan.risk.components.contributions(),
        score: input.scan.risk.score,
        tier,
        tier_label: tier.label(),
        recommendation: tier.recommendation(),
        alerts: input.classification.alerts.clone(),
    }
}

pub fn write_reports(
    input: &Stage5Input<'_>,
    out_dir: &Path,
    options: ReportOptions,
) -> Result<ScanSummary> {
    fs::create_dir_all(out_dir)?;
    let summary = build_summary(input);

    if options.tsv {
        write_readings_tsv(&summary, &out_dir.join("readings.tsv"))?;
    }

    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    write_text(&out_dir.join("report.txt"), &render_report_text(&summary))?;

    if options.overlay {
        let rois = input.scan.samples.iter().map(|s| s.roi).collect::<Vec<_>>();
        let overlay = draw_overlay(input.image, &rois);
        let path = out_dir.join("overlay.png");
        overlay.save(&path)?;
        tracing::info!("overlay written to {}", path.display());
    }

    tracing::info!("reports written to {}", out_dir.display());
    Ok(summary)
}

fn write_readings_tsv(summary: &ScanSummary, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    writeln!(
        w,
        "biomarker\tlabel\tunit\tvalue\tstatus\tpad\tx\ty\twidth\theight\tmean_h\tmean_s\tmean_v"
    )?;
    for row in &summary.readings {
        let [h, s, v] = format_color(&row.color);
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.biomarker,
            row.label,
            row.unit,
            format_f64_3(row.value),
            row.status.label(),
            row.pad_index,
            row.roi.x,
            row.roi.y,
            row.roi.width,
            row.roi.height,
            h,
            s,
            v
        )?;
    }
    w.flush()
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())
}

/// Copy of `image` with each non-empty ROI outlined.
pub fn draw_overlay(image: &RgbImage, rois: &[Roi]) -> RgbImage {
    let mut out = image.clone();
    let (w, h) = out.dimensions();
    for roi in rois.iter().filter(|r| !r.is_empty()) {
        let x1 = roi.x + roi.width;
        let y1 = roi.y + roi.height;
        for y in roi.y..y1 {
            for x in roi.x..x1 {
                let on_edge = x < roi.x + OVERLAY_THICKNESS
                    || x + OVERLAY_THICKNESS >= x1
                    || y < roi.y + OVERLAY_THICKNESS
                    || y + OVERLAY_THICKNESS >= y1;
                if on_edge && x < w && y < h {
                    out.put_pixel(x, y, OVERLAY_COLOR);
                }
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
